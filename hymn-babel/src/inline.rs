//! Inline sequences produced by preview formatting.
//!
//! A preview is a flat list of styled runs separated by explicit line breaks,
//! which a UI can render directly and which [`to_plain_text`] flattens for the
//! clipboard.

/// Emphasis applied to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStyle {
    Plain,
    Bold,
    Italic,
}

/// One element of an inline sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Run { text: String, style: RunStyle },
    LineBreak,
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Inline::Run {
            text: text.into(),
            style: RunStyle::Plain,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Inline::Run {
            text: text.into(),
            style: RunStyle::Bold,
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Inline::Run {
            text: text.into(),
            style: RunStyle::Italic,
        }
    }
}

/// Concatenates run text, turning each line break into `\n`, and trims the
/// result.
pub fn to_plain_text(inlines: &[Inline]) -> String {
    let mut text = String::new();
    for inline in inlines {
        match inline {
            Inline::Run { text: run, .. } => text.push_str(run),
            Inline::LineBreak => text.push('\n'),
        }
    }
    text.trim().to_string()
}
