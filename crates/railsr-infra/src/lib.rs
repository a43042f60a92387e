//! Infrastructure layer for the Railsr connector.
//!
//! Contains implementations of the traits defined in `railsr-core`: the
//! reqwest-based Railsr API client and the node-state stores (SQLite and
//! in-memory). Also loads configuration and resolves credentials.

pub mod config;
pub mod credential;
pub mod http;
pub mod paths;
pub mod sqlite;
pub mod state;
