//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching the GraphQL surface
//! - `client.rs` — Sub-client with transport methods

pub mod token;
