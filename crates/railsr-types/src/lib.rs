//! Shared domain types for the Railsr connector.
//!
//! Credentials, the resource catalog, outbound request shapes, work items,
//! webhook trigger records, configuration, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod credential;
pub mod error;
pub mod item;
pub mod request;
pub mod resource;
pub mod webhook;
