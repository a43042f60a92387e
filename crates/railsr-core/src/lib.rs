//! Connector logic and port traits for the Railsr adapter.
//!
//! This crate defines the traits (`ApiClient`, `NodeStateStore`) that the
//! infrastructure layer implements. It depends only on `railsr-types` --
//! never on `railsr-infra` or any HTTP/database crate.

pub mod client;
pub mod dispatch;
pub mod executor;
pub mod storage;
pub mod webhook;
