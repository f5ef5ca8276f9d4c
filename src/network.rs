//! Network URL constants for the Meridian SDK.

/// Default Meridian node service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://node.meridian.network";
