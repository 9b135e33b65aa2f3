//! Word wrapping for commit message sections.

use textwrap::{Options, WordSeparator, WordSplitter};

/// Line width used for the header cap and every wrapped section.
pub const MAX_LINE_WIDTH: usize = 70;

/// Wrap `text` so that lines break at spaces within `width` characters.
///
/// - a word longer than `width` is never cut; it gets a line of its own
/// - existing line breaks are kept
/// - trailing spaces are trimmed from every line
///
/// Empty input produces an empty string.
pub fn wrap(text: &str, width: usize) -> String {
    let options = Options::new(width)
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation);

    textwrap::wrap(text, options).join("\n")
}
