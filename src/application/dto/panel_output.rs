//! Renderable panel output.

/// Severity of a notice block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Positive outcome.
    Success,
    /// Neutral information.
    Info,
    /// Needs attention.
    Warning,
    /// Failure.
    Error,
}

/// One renderable element of a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    /// Colored banner.
    Notice { level: NoticeLevel, text: String },
    /// Plain paragraph.
    Text(String),
    /// List entry.
    Bullet(String),
    /// Preformatted diagnostic text.
    Code(String),
    /// Sound clip reference.
    Audio { url: String },
    /// Picture reference, either a URL or a local file name.
    Image { source: String, caption: String },
    /// Checkbox with its current state.
    Checkbox { label: String, checked: bool },
    /// Clickable button label.
    Button { label: String },
}

impl OutputBlock {
    /// Returns the main text of the block.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Notice { text, .. } | Self::Text(text) | Self::Bullet(text) | Self::Code(text) => {
                text
            }
            Self::Audio { url } => url,
            Self::Image { caption, .. } => caption,
            Self::Checkbox { label, .. } | Self::Button { label } => label,
        }
    }

    /// Returns a link that can be handed to a browser, if any.
    #[must_use]
    pub fn media_link(&self) -> Option<&str> {
        match self {
            Self::Audio { url } => Some(url),
            Self::Image { source, .. } if is_remote(source) => Some(source),
            _ => None,
        }
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("https://") || source.starts_with("http://")
}

/// Ordered output of one panel evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelOutput {
    blocks: Vec<OutputBlock>,
}

impl PanelOutput {
    /// Creates empty output.
    #[must_use]
    pub const fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Appends a block.
    #[must_use]
    pub fn push(mut self, block: OutputBlock) -> Self {
        self.blocks.push(block);
        self
    }

    #[must_use]
    pub fn notice(self, level: NoticeLevel, text: impl Into<String>) -> Self {
        self.push(OutputBlock::Notice {
            level,
            text: text.into(),
        })
    }

    #[must_use]
    pub fn success(self, text: impl Into<String>) -> Self {
        self.notice(NoticeLevel::Success, text)
    }

    #[must_use]
    pub fn info(self, text: impl Into<String>) -> Self {
        self.notice(NoticeLevel::Info, text)
    }

    #[must_use]
    pub fn warning(self, text: impl Into<String>) -> Self {
        self.notice(NoticeLevel::Warning, text)
    }

    #[must_use]
    pub fn error(self, text: impl Into<String>) -> Self {
        self.notice(NoticeLevel::Error, text)
    }

    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.push(OutputBlock::Text(text.into()))
    }

    #[must_use]
    pub fn bullet(self, text: impl Into<String>) -> Self {
        self.push(OutputBlock::Bullet(text.into()))
    }

    #[must_use]
    pub fn code(self, text: impl Into<String>) -> Self {
        self.push(OutputBlock::Code(text.into()))
    }

    #[must_use]
    pub fn audio(self, url: impl Into<String>) -> Self {
        self.push(OutputBlock::Audio { url: url.into() })
    }

    #[must_use]
    pub fn image(self, source: impl Into<String>, caption: impl Into<String>) -> Self {
        self.push(OutputBlock::Image {
            source: source.into(),
            caption: caption.into(),
        })
    }

    #[must_use]
    pub fn checkbox(self, label: impl Into<String>, checked: bool) -> Self {
        self.push(OutputBlock::Checkbox {
            label: label.into(),
            checked,
        })
    }

    #[must_use]
    pub fn button(self, label: impl Into<String>) -> Self {
        self.push(OutputBlock::Button {
            label: label.into(),
        })
    }

    /// Returns all blocks in render order.
    #[must_use]
    pub fn blocks(&self) -> &[OutputBlock] {
        &self.blocks
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Returns whether any block text contains `needle`.
    #[must_use]
    pub fn mentions(&self, needle: &str) -> bool {
        self.blocks.iter().any(|b| b.text().contains(needle))
    }

    /// Returns whether a notice of `level` is present.
    #[must_use]
    pub fn has_notice(&self, level: NoticeLevel) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, OutputBlock::Notice { level: l, .. } if *l == level))
    }

    /// Returns browser-openable links in render order.
    #[must_use]
    pub fn media_links(&self) -> Vec<&str> {
        self.blocks.iter().filter_map(OutputBlock::media_link).collect()
    }

    /// Returns button labels in render order.
    #[must_use]
    pub fn buttons(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                OutputBlock::Button { label } => Some(label.as_str()),
                _ => None,
            })
            .collect()
    }
}
