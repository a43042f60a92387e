//! Storage abstractions for the Railsr connector.
//!
//! Implementations live in railsr-infra.

pub mod node_state;
