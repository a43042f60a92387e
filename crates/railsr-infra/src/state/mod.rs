//! Node-state store implementations.

pub mod memory;

pub use memory::InMemoryNodeStateStore;
