use serde::{Deserialize, Serialize};

/// One rich text fragment.
///
/// Only the parts the service reads are kept: the rendered `plain_text`,
/// an optional link and the styling flags used by the markdown renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RichText {
    pub plain_text: String,
    pub href: Option<String>,
    pub annotations: Annotations,
}

impl RichText {
    /// Create an unstyled fragment.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            ..Self::default()
        }
    }

    /// Concatenates the plain text of every fragment, in order, no separator.
    pub fn concat_plain(fragments: &[RichText]) -> String {
        fragments
            .iter()
            .map(|fragment| fragment.plain_text.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
}

impl Annotations {
    pub fn is_plain(&self) -> bool {
        !(self.bold || self.italic || self.strikethrough || self.underline || self.code)
    }
}
