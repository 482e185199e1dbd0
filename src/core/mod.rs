pub mod git;
pub mod probe;
pub mod stale;

pub use probe::Probe;
