//! Persistence layer: learner profiles behind the `ProfileStore` trait.

pub mod json_file;
pub mod memory;
pub mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::ProfileStore;
