//! Shared core for interactive "wrap this across lines" refactorings.
//!
//! Syntax-specific wrapping strategies live with their host's language
//! support; this crate supplies the pieces every strategy shares:
//!
//! - most-recently-used ranking of the offered actions ([`rank_actions`]),
//!   backed by an injectable invocation-history store ([`UsageHistory`])
//! - the single-line eligibility check gating every strategy
//!   ([`has_unformattable_content`])
//! - the engine that wires strategies, history, and ranking together
//!   ([`WrapEngine`])
//!
//! The crate never parses, mutates text, or talks to a UI. Documents are
//! reached through the [`TextProvider`] seam and syntax through rowan's
//! generic [`SyntaxElement`], so any rowan-based language plugs in.

#![forbid(unsafe_code)]

mod action;
mod document;
mod eligibility;
mod engine;
mod history;
mod rank;

pub use action::WrapAction;
pub use document::{Cancelled, InMemoryDocument, TextProvider};
pub use eligibility::{contains_unformattable, has_unformattable_content};
pub use engine::{ActionComputer, SyntaxWrapper, WrapEngine};
pub use history::UsageHistory;
pub use rank::rank_actions;

pub use rewrap_core::{SourceText, TextRange, TextSize};
pub use tokio_util::sync::CancellationToken;

/// A node or token handed to the eligibility check.
pub type SyntaxElement<L> = rowan::SyntaxElement<L>;
