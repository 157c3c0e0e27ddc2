use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use rewrap_core::SourceText;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// The suggestion computation was cancelled by the host.
///
/// Cancellation always propagates; it is never converted into a default or
/// partial answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("wrap suggestion computation was cancelled")]
pub struct Cancelled;

/// Read-only access to the document under the caret.
///
/// The single awaited fetch in a wrap request goes through this seam. A
/// provider must observe `cancel` cooperatively while producing the snapshot
/// and answer `Err(Cancelled)` once the token fires.
pub trait TextProvider: Send + Sync {
    fn text<'a>(
        &'a self,
        cancel: &'a CancellationToken,
    ) -> BoxFuture<'a, Result<Arc<SourceText>, Cancelled>>;
}

/// A [`TextProvider`] over an already-materialized snapshot.
///
/// Hosts that keep documents in memory can hand these out directly; it is
/// also the standard test double.
#[derive(Debug, Clone)]
pub struct InMemoryDocument {
    text: Arc<SourceText>,
}

impl InMemoryDocument {
    pub fn new(text: impl Into<SourceText>) -> Self {
        Self {
            text: Arc::new(text.into()),
        }
    }

    pub fn source_text(&self) -> &Arc<SourceText> {
        &self.text
    }
}

impl TextProvider for InMemoryDocument {
    fn text<'a>(
        &'a self,
        cancel: &'a CancellationToken,
    ) -> BoxFuture<'a, Result<Arc<SourceText>, Cancelled>> {
        let result = if cancel.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(Arc::clone(&self.text))
        };
        futures::future::ready(result).boxed()
    }
}
