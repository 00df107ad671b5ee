//! Login service seam standing in for the network call

mod simulated;
mod traits;

pub use simulated::{SimulatedOutcome, SimulatedService};
pub use traits::{Credentials, LoginService, ServiceError};

#[cfg(test)]
pub use traits::MockLoginService;
