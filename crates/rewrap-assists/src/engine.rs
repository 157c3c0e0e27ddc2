use std::sync::Arc;

use futures::future::LocalBoxFuture;
use rewrap_core::TextSize;
use rowan::Language;
use tokio_util::sync::CancellationToken;

use crate::{rank_actions, Cancelled, SyntaxElement, TextProvider, UsageHistory, WrapAction};

/// One syntax-specific wrapping strategy.
///
/// Implementations decide, per syntactic shape, whether wrapping applies at
/// the caret and how the alternatives look. They are expected to gate on
/// [`crate::has_unformattable_content`] before producing a computer.
///
/// The returned future is `!Send`: syntax elements are `Rc`-backed cursors,
/// and a wrap request runs to completion on the thread that received the
/// gesture.
pub trait SyntaxWrapper<L: Language>: Send + Sync {
    /// Returns a computer when this strategy applies to `element` at
    /// `position`, `None` when it does not.
    fn try_create_computer<'a>(
        &'a self,
        document: &'a dyn TextProvider,
        position: TextSize,
        element: SyntaxElement<L>,
        cancel: &'a CancellationToken,
    ) -> LocalBoxFuture<'a, Result<Option<Box<dyn ActionComputer>>, Cancelled>>;
}

/// Produces the candidate actions for one applicable strategy.
pub trait ActionComputer {
    fn compute_actions(&self) -> Vec<WrapAction>;
}

/// Entry point a host calls once per user gesture.
///
/// The engine owns no syntax knowledge: it walks its registered strategies in
/// order, lets the first applicable one compute candidate actions, and ranks
/// the result against the invocation history before handing it back.
pub struct WrapEngine<L: Language> {
    wrappers: Vec<Arc<dyn SyntaxWrapper<L>>>,
    history: Arc<UsageHistory>,
}

impl<L: Language> WrapEngine<L> {
    pub fn new(wrappers: Vec<Arc<dyn SyntaxWrapper<L>>>) -> Self {
        Self::with_history(wrappers, Arc::new(UsageHistory::new()))
    }

    /// Build an engine around an existing history store, letting hosts share
    /// one store across engines or pre-seed it in tests.
    pub fn with_history(
        wrappers: Vec<Arc<dyn SyntaxWrapper<L>>>,
        history: Arc<UsageHistory>,
    ) -> Self {
        Self { wrappers, history }
    }

    pub fn history(&self) -> &Arc<UsageHistory> {
        &self.history
    }

    /// Compute the ranked wrap actions available at `position`.
    ///
    /// Strategies are consulted in registration order and the first one that
    /// applies wins. Returns an empty vec when none applies; a cancelled text
    /// fetch propagates as `Err(Cancelled)`.
    pub async fn wrap_actions(
        &self,
        document: &dyn TextProvider,
        position: TextSize,
        element: SyntaxElement<L>,
        cancel: &CancellationToken,
    ) -> Result<Vec<WrapAction>, Cancelled> {
        for wrapper in &self.wrappers {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let computer = wrapper
                .try_create_computer(document, position, element.clone(), cancel)
                .await?;

            if let Some(computer) = computer {
                let actions = computer.compute_actions();
                let history = self.history.snapshot();
                tracing::debug!(
                    target: "rewrap.assists",
                    actions = actions.len(),
                    history = history.len(),
                    "ranking wrap actions"
                );
                return Ok(rank_actions(actions, &history));
            }
        }

        Ok(Vec::new())
    }

    /// Notification hook: the host reports the ranking title of the action
    /// the user executed (see [`WrapAction::ranking_title`]).
    pub fn record_invoked(&self, title: &str) {
        self.history.record(title);
    }
}
