//! SQLite storage layer.
//!
//! Node-state persistence backed by SQLite with WAL mode and split
//! read/write connection pools.

pub mod node_state;
pub mod pool;

pub use node_state::SqliteNodeStateStore;
pub use pool::DatabasePool;
