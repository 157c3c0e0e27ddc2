//! Text-model primitives shared by the rewrap crates.

#![forbid(unsafe_code)]

mod text;

pub use text::{LineCol, LineIndex, SourceText};
pub use text_size::{TextRange, TextSize};
