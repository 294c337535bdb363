//! Fixed-width text primitives for the generated document.
//!
//! Everything here is pure string construction: hash banners of exact width
//! and comment paragraphs word-wrapped behind a `#   ` prefix. Every emitted
//! line is newline-terminated and no wider than [`MAX_WIDTH`] columns
//! (unbreakable over-long words excepted).

pub mod banner;
pub mod wrap;

pub use banner::{end_banner, hash_line, section_banner};
pub use wrap::{paragraphs, wrap_paragraph};

/// Total width of every banner and the column budget for wrapped lines.
pub const MAX_WIDTH: usize = 80;

/// Prefix for wrapped comment lines: a hash and three spaces.
pub const COMMENT_PREFIX: &str = "#   ";

/// A blank comment line, used as a separator between text blocks.
pub const BLANK_LINE: &str = "#\n";
