// src/core/scanner.rs
pub mod processor;
pub mod utils;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

pub use processor::RepoProcessor;
pub use utils::{relative_path, to_forward_slashes};
pub use walker::{Walk, Walker, scan};
