// Render elements - what a page cycle draws, independent of the output format
use super::dashboard::DashboardDescriptor;

/// Inline text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Strong(String),
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Span::Plain(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Span::Strong(text.into())
    }
}

/// Transient corner notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub icon: String,
    pub text: String,
}

impl Toast {
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
}

/// Output that renders the same whether or not it is animated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header(String),
    Text(String),
    Paragraph(Vec<Span>),
    List(Vec<Vec<Span>>),
    Callout { tone: Tone, text: String },
    /// Static progress bar
    Progress { percent: u8, text: String },
    Embed(DashboardDescriptor),
}

/// One step of a page cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Block(Block),
    /// Animated 0..=100 sequence; the label gets the percentage appended
    LoadingSequence { label: String },
    /// Spinner shown for a fixed pause before the embed appears
    Finalizing { text: String },
    Toast(Toast),
}

impl Element {
    pub fn header(text: impl Into<String>) -> Self {
        Element::Block(Block::Header(text.into()))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Element::Block(Block::Text(text.into()))
    }

    pub fn callout(tone: Tone, text: impl Into<String>) -> Self {
        Element::Block(Block::Callout {
            tone,
            text: text.into(),
        })
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::callout(Tone::Info, text)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::callout(Tone::Success, text)
    }

    pub fn toast(icon: &str, text: impl Into<String>) -> Self {
        Element::Toast(Toast::new(icon, text))
    }
}

impl From<Block> for Element {
    fn from(block: Block) -> Self {
        Element::Block(block)
    }
}
