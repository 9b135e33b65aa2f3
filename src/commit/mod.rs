//! Conventional commit message formatting.

pub mod answers;
pub mod build;
pub mod footer;
pub mod wrap;

pub use answers::Answers;
pub use build::{build_commit, unescape_special_chars};
pub use footer::FooterMode;
pub use wrap::{MAX_LINE_WIDTH, wrap};
