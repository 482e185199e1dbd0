pub mod all;
pub mod common;
pub mod completion;
pub mod config;
pub mod gone;
pub mod large;
pub mod merged;
pub mod prune;
pub mod stale;
