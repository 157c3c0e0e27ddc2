//! The single-line safety check every wrapping strategy runs before offering
//! actions.
//!
//! Wrapping only moves content between the lines it inserts; it never
//! re-indents. Any item that already crosses a line boundary (or is too
//! degenerate to inspect) therefore makes the whole rewrite unsafe.

use rowan::{Language, NodeOrToken};
use tokio_util::sync::CancellationToken;

use crate::{Cancelled, SourceText, SyntaxElement, TextProvider};

/// Whether any of `items` disqualifies the rewrite, given an already-fetched
/// text snapshot.
///
/// Evaluation short-circuits on the first disqualifying item. An item
/// disqualifies when it is:
/// - absent, or covers an empty span;
/// - a node with no leaf tokens;
/// - an element whose first and last boundary tokens sit on different lines.
///
/// An empty `items` slice is vacuously safe.
pub fn contains_unformattable<L: Language>(
    items: &[Option<SyntaxElement<L>>],
    text: &SourceText,
) -> bool {
    items.iter().any(|item| item_is_unformattable(item, text))
}

fn item_is_unformattable<L: Language>(
    item: &Option<SyntaxElement<L>>,
    text: &SourceText,
) -> bool {
    let Some(element) = item else {
        return true;
    };

    let span = match element {
        NodeOrToken::Node(node) => node.text_range(),
        NodeOrToken::Token(token) => token.text_range(),
    };
    if span.is_empty() {
        return true;
    }

    let (first, last) = match element {
        NodeOrToken::Token(token) => (token.clone(), token.clone()),
        NodeOrToken::Node(node) => match (node.first_token(), node.last_token()) {
            (Some(first), Some(last)) => (first, last),
            _ => return true,
        },
    };

    !text.are_on_same_line(first.text_range().end(), last.text_range().start())
}

/// Async entry point for strategies: fetch the document text once, then run
/// [`contains_unformattable`] against that snapshot.
///
/// The fetch is the only suspension point; cancellation is observed there and
/// propagates as `Err(Cancelled)` rather than a partial answer.
pub async fn has_unformattable_content<L: Language>(
    document: &dyn TextProvider,
    items: &[Option<SyntaxElement<L>>],
    cancel: &CancellationToken,
) -> Result<bool, Cancelled> {
    let text = document.text(cancel).await?;
    Ok(contains_unformattable(items, &text))
}
