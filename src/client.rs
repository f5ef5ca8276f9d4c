//! High-level client — `MeridianClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, routing config, and accessor methods.

use std::sync::Arc;

use crate::domain::token::client::Tokens;
use crate::error::SdkError;
use crate::http::MeridianHttp;
use crate::shared::{ApplicationId, ChainId};
use crate::signer::RequestSigner;

// Re-export sub-client types for convenience.
pub use crate::domain::token::client::Tokens as TokensClient;

/// The primary entry point for the Meridian SDK.
///
/// Every call is routed to one application on one microchain, fixed at
/// build time. Routing config and the signer handle never change after
/// build, so the client is freely shareable across tasks.
#[derive(Clone)]
pub struct MeridianClient {
    pub(crate) http: MeridianHttp,
    pub(crate) chain_id: ChainId,
    pub(crate) application_id: ApplicationId,
    /// Injected signing collaborator, if any.
    pub(crate) signer: Option<Arc<dyn RequestSigner>>,
}

impl MeridianClient {
    pub fn builder() -> MeridianClientBuilder {
        MeridianClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn tokens(&self) -> Tokens<'_> {
        Tokens { client: self }
    }

    // ── Routing ──────────────────────────────────────────────────────────

    /// The GraphQL URL this client submits to.
    pub fn application_url(&self) -> String {
        self.http
            .application_url(&self.chain_id, &self.application_id)
    }

    pub fn chain_id(&self) -> &ChainId {
        &self.chain_id
    }

    pub fn application_id(&self) -> &ApplicationId {
        &self.application_id
    }

    /// Whether a signing collaborator was injected at build time.
    pub fn has_signer(&self) -> bool {
        self.signer.is_some()
    }
}

impl std::fmt::Debug for MeridianClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeridianClient")
            .field("endpoint", &self.http.endpoint())
            .field("chain_id", &self.chain_id)
            .field("application_id", &self.application_id)
            .field("has_signer", &self.signer.is_some())
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MeridianClientBuilder {
    endpoint: String,
    chain_id: Option<ChainId>,
    application_id: Option<ApplicationId>,
    signer: Option<Arc<dyn RequestSigner>>,
}

impl Default for MeridianClientBuilder {
    fn default() -> Self {
        Self {
            endpoint: crate::network::DEFAULT_ENDPOINT.to_string(),
            chain_id: None,
            application_id: None,
            signer: None,
        }
    }
}

impl MeridianClientBuilder {
    pub fn endpoint(mut self, url: &str) -> Self {
        self.endpoint = url.to_string();
        self
    }

    pub fn chain_id(mut self, id: impl Into<ChainId>) -> Self {
        self.chain_id = Some(id.into());
        self
    }

    pub fn application_id(mut self, id: impl Into<ApplicationId>) -> Self {
        self.application_id = Some(id.into());
        self
    }

    /// Inject the signing collaborator used by `tokens().create()`.
    pub fn signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn build(self) -> Result<MeridianClient, SdkError> {
        let chain_id = self
            .chain_id
            .ok_or_else(|| SdkError::Config("chain_id is required".to_string()))?;
        let application_id = self
            .application_id
            .ok_or_else(|| SdkError::Config("application_id is required".to_string()))?;

        Ok(MeridianClient {
            http: MeridianHttp::new(&self.endpoint),
            chain_id,
            application_id,
            signer: self.signer,
        })
    }
}
