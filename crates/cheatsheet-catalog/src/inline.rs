//! Inline text elements
//!
//! Catalog prose is stored as short runs of inline elements so each
//! renderer can decide how emphasis and command spans look in its format.

/// Inline-level content element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inline {
    /// Plain text content
    Text(&'static str),
    /// Emphasized text (rendered bold)
    Strong(&'static str),
    /// A command, flag or path span (rendered monospace)
    Code(&'static str),
}

/// A run of inline elements
pub type Rich = &'static [Inline];

impl Inline {
    /// The raw text of this element, without formatting
    pub fn text(&self) -> &'static str {
        match self {
            Inline::Text(s) | Inline::Strong(s) | Inline::Code(s) => s,
        }
    }
}

/// Flatten a run of inlines to unformatted text
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_drops_formatting() {
        let rich = [
            Inline::Strong("company"),
            Inline::Text(" - run "),
            Inline::Code("/set-role"),
        ];
        assert_eq!(plain_text(&rich), "company - run /set-role");
    }

    #[test]
    fn test_plain_text_empty() {
        assert_eq!(plain_text(&[]), "");
    }
}
