//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Initialize subsystems → Start listener
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight calls → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
