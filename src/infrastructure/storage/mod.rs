//! Document store implementations

pub mod memory;
pub mod rest;

pub use memory::MemoryDocumentStore;
pub use rest::RestDocumentStore;
