//! Tokens sub-client — prepare, sign, and submit create-token requests.

use tracing;

use crate::client::MeridianClient;
use crate::codec::{AccountOwner, SignatureEnvelope};
use crate::domain::token::wire::{
    BalanceVariables, CreateTokenVariables, BALANCE_QUERY, CREATE_TOKEN_MUTATION,
};
use crate::domain::token::{CreateTokenDraft, CreateTokenParams};
use crate::error::{SdkError, SignerError};
use crate::http::graphql::GraphQlRequest;
use crate::http::RetryPolicy;

/// Sub-client for token application operations.
pub struct Tokens<'a> {
    pub(crate) client: &'a MeridianClient,
}

impl<'a> Tokens<'a> {
    /// Validate and encode the raw fields without signing or submitting.
    ///
    /// Useful for showing the digest to a user, or for flows where the
    /// signature is collected out of band and fed to [`submit_signed`].
    ///
    /// [`submit_signed`]: Tokens::submit_signed
    pub fn prepare(&self, params: &CreateTokenParams) -> Result<CreateTokenDraft, SdkError> {
        Ok(CreateTokenDraft::prepare(params)?)
    }

    /// Run the full pipeline: validate, hash, sign with the configured
    /// signer, and submit.
    ///
    /// Fails with [`SignerError::Unavailable`] before any I/O when the
    /// client was built without a signer. A declined signature surfaces as
    /// [`SignerError::Rejected`] and is not retried.
    pub async fn create(&self, params: &CreateTokenParams) -> Result<serde_json::Value, SdkError> {
        let draft = CreateTokenDraft::prepare(params)?;
        let signer = self
            .client
            .signer
            .as_ref()
            .ok_or(SignerError::Unavailable)?;

        let signature = signer.sign(&draft.message).await?;
        let envelope = SignatureEnvelope::evm(*signature.as_bytes(), signer.address());
        self.submit(&draft, &envelope).await
    }

    /// Submit a draft with a signature produced elsewhere (typically a
    /// browser wallet that signed [`CreateTokenDraft::message`]).
    pub async fn submit_signed(
        &self,
        draft: &CreateTokenDraft,
        signature_hex: &str,
        address_hex: &str,
    ) -> Result<serde_json::Value, SdkError> {
        let envelope = SignatureEnvelope::from_hex(signature_hex, address_hex)?;
        self.submit(draft, &envelope).await
    }

    /// Query an account's token balance.
    ///
    /// The owner string goes through the same validation and normalization
    /// as the create-token pipeline, so the application always sees the
    /// canonical hex form. Idempotent: transient failures are retried.
    pub async fn balance(&self, owner: &str) -> Result<serde_json::Value, SdkError> {
        let owner: AccountOwner = owner.parse()?;
        let variables = BalanceVariables {
            owner: owner.to_hex(),
        };
        let request = GraphQlRequest::new(BALANCE_QUERY, &variables)?;
        let url = self.client.application_url();

        Ok(self
            .client
            .http
            .graphql(&url, &request, RetryPolicy::Idempotent)
            .await?)
    }

    async fn submit(
        &self,
        draft: &CreateTokenDraft,
        envelope: &SignatureEnvelope,
    ) -> Result<serde_json::Value, SdkError> {
        let variables = CreateTokenVariables::from_draft(draft, envelope.to_hex());
        let request = GraphQlRequest::new(CREATE_TOKEN_MUTATION, &variables)?;
        let url = self.client.application_url();

        tracing::debug!(
            url = %url,
            owner = %variables.owner,
            symbol = %variables.symbol,
            "Submitting create-token mutation"
        );

        // Mutations go out exactly once; failures are reported, not retried
        Ok(self
            .client
            .http
            .graphql(&url, &request, RetryPolicy::None)
            .await?)
    }
}
