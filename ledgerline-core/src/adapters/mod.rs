//! Concrete implementations of the ports

pub mod demo;
mod memory;
mod session_file;

pub use demo::{DemoAuthBackend, DemoLedger, SimulatedDelay};
pub use memory::InMemoryTokenStore;
pub use session_file::FileTokenStore;
