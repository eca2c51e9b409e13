//! Scanner configuration.

/// Controls how raw text is split into lines and sections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanConfig {
    /// Line prefixes that mark a comment in the preamble.
    pub comment_prefixes: Vec<String>,
    /// Strip a leading byte-order mark before line 1.
    pub strip_bom: bool,
    /// Name reported in error contexts.
    pub source_name: Option<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            comment_prefixes: vec!["#".to_string(), "//".to_string()],
            strip_bom: true,
            source_name: None,
        }
    }
}

impl ScanConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to replace the comment prefixes.
    #[must_use]
    pub fn with_comment_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comment_prefixes = prefixes.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method to set BOM stripping.
    #[must_use]
    pub fn with_strip_bom(mut self, strip: bool) -> Self {
        self.strip_bom = strip;
        self
    }

    /// Builder method to set the source name.
    #[must_use]
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = Some(name.into());
        self
    }

    /// Returns true if `text`, after leading whitespace, starts a comment.
    #[must_use]
    pub fn is_comment(&self, text: &str) -> bool {
        let text = text.trim_start();
        self.comment_prefixes
            .iter()
            .any(|prefix| !prefix.is_empty() && text.starts_with(prefix.as_str()))
    }
}
