//! HTTP request handlers for the webhook receiver.

pub mod webhook;
