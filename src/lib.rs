pub mod builtins;
pub mod config;
pub mod console;
pub mod error;
#[cfg(feature = "jit")]
pub mod execution;
pub mod library;
pub mod logger;
pub mod runtime;
pub mod scan;

pub use builtins::{Builtin, CruxType};
pub use config::{ConsoleConfig, ReadPolicy};
pub use console::Console;
pub use error::{IoFailure, Result, RuntimeError};
pub use runtime::DEFAULT_RUNTIME;
