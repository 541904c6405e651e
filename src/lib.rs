#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{bar, baz, emit, foo, GREETING, SUCCESS_STATUS};
pub use utils::error::{CakeError, Result};
