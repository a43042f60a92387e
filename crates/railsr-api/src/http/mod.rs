//! HTTP layer for the Railsr webhook receiver.
//!
//! Axum-based endpoint accepting platform deliveries, with the envelope
//! response format.

pub mod handlers;
pub mod response;
pub mod router;
