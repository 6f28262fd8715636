//! Completion capability contract implemented by every provider adapter.

use acommon::BoxFuture;

use crate::{ModelRequest, ModelResponse, ProviderError, ProviderId};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

/// A single-shot text completion backend.
///
/// Implementations resolve to either a response carrying zero or more
/// candidates or a classified [`ProviderError`]. No retries happen at this
/// layer.
pub trait ModelProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>>;
}
