mod document;
mod memory;

pub use document::DocumentStore;
pub use memory::MemoryStore;
