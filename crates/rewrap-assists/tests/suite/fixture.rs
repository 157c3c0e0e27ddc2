//! Shared fixtures: a minimal rowan language and action builders.

use rewrap_assists::WrapAction;
use rowan::{GreenNodeBuilder, Language, SyntaxNode};

/// A tiny list-shaped language; trees are built directly, never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TestKind {
    Atom = 0,
    Trivia,
    List,
    Root,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestLang {}

impl Language for TestLang {
    type Kind = TestKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> TestKind {
        match raw.0 {
            0 => TestKind::Atom,
            1 => TestKind::Trivia,
            2 => TestKind::List,
            3 => TestKind::Root,
            other => panic!("unknown syntax kind {other}"),
        }
    }

    fn kind_to_raw(kind: TestKind) -> rowan::SyntaxKind {
        rowan::SyntaxKind(kind as u16)
    }
}

pub type Element = rewrap_assists::SyntaxElement<TestLang>;

/// Build `Root(List(...))` from `pieces`; whitespace-only and punctuation
/// pieces become `Trivia` tokens, everything else `Atom`.
pub fn list_tree(pieces: &[&str]) -> SyntaxNode<TestLang> {
    let mut builder = GreenNodeBuilder::new();
    builder.start_node(TestLang::kind_to_raw(TestKind::Root));
    builder.start_node(TestLang::kind_to_raw(TestKind::List));
    for piece in pieces {
        let kind = if piece.chars().all(|c| c.is_whitespace() || c == ',') {
            TestKind::Trivia
        } else {
            TestKind::Atom
        };
        builder.token(TestLang::kind_to_raw(kind), piece);
    }
    builder.finish_node();
    builder.finish_node();
    SyntaxNode::new_root(builder.finish())
}

/// The `List` node of a [`list_tree`] as a syntax element.
pub fn list_element(root: &SyntaxNode<TestLang>) -> Element {
    root.first_child().expect("tree has a List child").into()
}

/// The `Atom` tokens of a [`list_tree`], as eligibility-check items.
pub fn atom_items(root: &SyntaxNode<TestLang>) -> Vec<Option<Element>> {
    root.first_child()
        .expect("tree has a List child")
        .children_with_tokens()
        .filter(|el| el.as_token().is_some_and(|t| t.kind() == TestKind::Atom))
        .map(Some)
        .collect()
}

pub fn wrap_action(title: &str) -> WrapAction {
    WrapAction::new(
        title,
        lsp_types::Command {
            title: title.to_owned(),
            command: "rewrap.apply".to_owned(),
            arguments: Some(vec![serde_json::json!({ "title": title })]),
        },
    )
}
