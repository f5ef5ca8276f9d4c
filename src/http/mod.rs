//! HTTP transport layer — `MeridianHttp` with per-call retry policies.

pub mod client;
pub mod graphql;
pub mod retry;

pub use client::MeridianHttp;
pub use graphql::{GraphQlError, GraphQlRequest, GraphQlResponse};
pub use retry::{RetryConfig, RetryPolicy};
