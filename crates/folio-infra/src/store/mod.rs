//! Blog document stores - JSON file and in-memory.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryDocumentStore;
