//! Observability setup for the Railsr connector: tracing subscriber and
//! optional OpenTelemetry export.

pub mod tracing_setup;
