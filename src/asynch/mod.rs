pub mod at;
pub mod control;
mod network;
pub mod passthrough;
pub mod state;

pub use at::{AtTransport, ResponseLine};
pub use control::Control;
pub use passthrough::Passthrough;
pub use state::{OperationState, State};
