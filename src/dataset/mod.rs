//! Dataset loading
//!
//! Reads the analyzed-message CSV into memory once per render pass.

pub mod loader;

pub use loader::{Dataset, load_dataset, load_from_reader};
