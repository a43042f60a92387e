//! HTTP transport for the Railsr REST API.

pub mod client;

pub use client::RailsrHttpClient;
