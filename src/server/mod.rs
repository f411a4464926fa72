//! Accepting connections and stopping on request.

pub mod listener;
pub mod shutdown;

pub use listener::Listener;
pub use shutdown::{Shutdown, ShutdownSignal};
