use crate::requests::ApiRequest;
use crate::responses::RawOutcome;

use async_trait::async_trait;
use std::sync::Arc;

/// Issues a request and reports what came back.
///
/// Implementations never fail outright: network errors, unexpected statuses
/// and undecodable bodies are all reported as [`RawOutcome::Failed`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> RawOutcome;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send(&self, request: ApiRequest) -> RawOutcome {
        (**self).send(request).await
    }
}
