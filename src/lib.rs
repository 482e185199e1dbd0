pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, RunOptions};
pub use crate::core::git::{BranchInfo, GitRepository, LargeObject};
pub use utils::{Result, TidyError};
