pub mod branch;
pub mod command;
pub mod objects;
pub mod repository;

pub use branch::{BranchInfo, BranchManager, DeletionReport, Exclusions};
pub use command::{GitExecutor, OnFailure, SystemGit};
pub use objects::{largest_blobs, LargeObject};
pub use repository::{current_branch, default_branch, remotes, GitRepository};
