//! Lifecycle management subsystem.
//!
//! Startup ordering lives in `main` (config → stores → listener → serve);
//! shutdown coordination lives here.

pub mod shutdown;

pub use shutdown::Shutdown;
