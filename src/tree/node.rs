//! Node types and kinds.

#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a node within a [`Tree`](super::Tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The root node ID (always 0).
    pub const ROOT: NodeId = NodeId(0);
}

/// Horizontal alignment of a table cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", serde(from = "String", into = "String"))]
pub enum Alignment {
    Left,
    Center,
    Right,
    /// Alignment the parser did not recognize. Renders without a style.
    Unspecified,
}

impl From<String> for Alignment {
    fn from(value: String) -> Self {
        match value.as_str() {
            "l" | "left" => Alignment::Left,
            "c" | "center" => Alignment::Center,
            "r" | "right" => Alignment::Right,
            _ => Alignment::Unspecified,
        }
    }
}

impl From<Alignment> for String {
    fn from(value: Alignment) -> Self {
        value.css().unwrap_or("none").to_string()
    }
}

impl Alignment {
    /// CSS `text-align` value, if this alignment has one.
    pub fn css(self) -> Option<&'static str> {
        match self {
            Alignment::Left => Some("left"),
            Alignment::Center => Some("center"),
            Alignment::Right => Some("right"),
            Alignment::Unspecified => None,
        }
    }
}

/// What a node is, together with its kind-specific attributes.
///
/// The set is closed: the extension parser produces exactly these kinds plus
/// the usual Markdown inlines and blocks. Anything else arrives as
/// [`Kind::Unknown`] and renders its children unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "cli", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Kind {
    /// Root of a parsed document.
    Document,
    /// Leaf text content.
    Text { content: String },
    Paragraph,
    Heading { level: u8 },
    Emphasis,
    Strong,
    InlineCode { content: String },
    Link { target: String },
    LineBreak,
    /// Horizontal rule in the source; becomes a margin anchor.
    ThematicBreak,

    /// Spaced dash (` – `).
    Dash,
    /// Editorial comment, never rendered.
    BlockComment,
    /// Text in German quotation marks.
    Quote,
    /// A value with a physical unit, e.g. `5 kOhm`.
    Unit {
        value: String,
        #[cfg_attr(feature = "cli", serde(default))]
        prefix: String,
        unit: String,
    },
    Underline,
    /// Text to be shown as Morse code.
    Morse { content: String },
    /// Annotation wrapper such as `webmargin` or `latexonly`.
    Tag { tag_type: String },
    /// Abbreviation like `z. B.` with a narrow space.
    HalfwidthSpaces { first: String, second: String },
    /// Two words glued by a non-breaking space.
    NonbreakingSpaces { first: String, second: String },
    /// A word with optional non-breaking spaces on either side.
    NonbreakingSpacesDots {
        #[cfg_attr(feature = "cli", serde(default))]
        leading: bool,
        second: String,
        #[cfg_attr(feature = "cli", serde(default))]
        trailing: bool,
    },
    /// Cross-reference to a numbered figure or table.
    Reference { target: String },
    /// Embedded exam question.
    Question { number: String },
    Picture {
        id: String,
        #[cfg_attr(feature = "cli", serde(default, rename = "ref"))]
        reference: String,
        #[cfg_attr(feature = "cli", serde(default))]
        caption: String,
    },
    Photo {
        id: String,
        #[cfg_attr(feature = "cli", serde(default, rename = "ref"))]
        reference: String,
        #[cfg_attr(feature = "cli", serde(default))]
        caption: String,
    },
    Table {
        #[cfg_attr(feature = "cli", serde(default))]
        name: String,
        #[cfg_attr(feature = "cli", serde(default))]
        caption: String,
    },
    /// `<thead>` or `<tbody>` section.
    TableBody {
        #[cfg_attr(feature = "cli", serde(default))]
        header: bool,
    },
    /// The header row of a table.
    TableHeader,
    TableRow,
    TableCell {
        #[cfg_attr(feature = "cli", serde(default))]
        header: bool,
        #[cfg_attr(feature = "cli", serde(default))]
        alignment: Option<Alignment>,
    },
    /// Radio contact transcript.
    Dialogue,
    /// One transmission inside a [`Kind::Dialogue`].
    DialogueTurn { received: bool },
    /// Content pulled in from another source.
    Include { ident: String },
    /// Display math, passed through verbatim.
    Formula { formula: String },
    /// Slide boundary. Only meaningful in slide decks.
    SlideBreak {
        #[cfg_attr(feature = "cli", serde(default))]
        attribute: Option<String>,
    },

    /// A node kind this crate does not know.
    #[cfg_attr(feature = "cli", serde(skip))]
    Unknown { name: String },
}

/// Fieldless mirror of [`Kind`], used to key rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Document,
    Text,
    Paragraph,
    Heading,
    Emphasis,
    Strong,
    InlineCode,
    Link,
    LineBreak,
    ThematicBreak,
    Dash,
    BlockComment,
    Quote,
    Unit,
    Underline,
    Morse,
    Tag,
    HalfwidthSpaces,
    NonbreakingSpaces,
    NonbreakingSpacesDots,
    Reference,
    Question,
    Picture,
    Photo,
    Table,
    TableBody,
    TableHeader,
    TableRow,
    TableCell,
    Dialogue,
    DialogueTurn,
    Include,
    Formula,
    SlideBreak,
    Unknown,
}

impl Kind {
    /// The tag used to look up this kind's rendering rule.
    pub fn tag(&self) -> KindTag {
        match self {
            Kind::Document => KindTag::Document,
            Kind::Text { .. } => KindTag::Text,
            Kind::Paragraph => KindTag::Paragraph,
            Kind::Heading { .. } => KindTag::Heading,
            Kind::Emphasis => KindTag::Emphasis,
            Kind::Strong => KindTag::Strong,
            Kind::InlineCode { .. } => KindTag::InlineCode,
            Kind::Link { .. } => KindTag::Link,
            Kind::LineBreak => KindTag::LineBreak,
            Kind::ThematicBreak => KindTag::ThematicBreak,
            Kind::Dash => KindTag::Dash,
            Kind::BlockComment => KindTag::BlockComment,
            Kind::Quote => KindTag::Quote,
            Kind::Unit { .. } => KindTag::Unit,
            Kind::Underline => KindTag::Underline,
            Kind::Morse { .. } => KindTag::Morse,
            Kind::Tag { .. } => KindTag::Tag,
            Kind::HalfwidthSpaces { .. } => KindTag::HalfwidthSpaces,
            Kind::NonbreakingSpaces { .. } => KindTag::NonbreakingSpaces,
            Kind::NonbreakingSpacesDots { .. } => KindTag::NonbreakingSpacesDots,
            Kind::Reference { .. } => KindTag::Reference,
            Kind::Question { .. } => KindTag::Question,
            Kind::Picture { .. } => KindTag::Picture,
            Kind::Photo { .. } => KindTag::Photo,
            Kind::Table { .. } => KindTag::Table,
            Kind::TableBody { .. } => KindTag::TableBody,
            Kind::TableHeader => KindTag::TableHeader,
            Kind::TableRow => KindTag::TableRow,
            Kind::TableCell { .. } => KindTag::TableCell,
            Kind::Dialogue => KindTag::Dialogue,
            Kind::DialogueTurn { .. } => KindTag::DialogueTurn,
            Kind::Include { .. } => KindTag::Include,
            Kind::Formula { .. } => KindTag::Formula,
            Kind::SlideBreak { .. } => KindTag::SlideBreak,
            Kind::Unknown { .. } => KindTag::Unknown,
        }
    }

    /// Reference identifier of a figure-bearing node.
    ///
    /// Returns `None` for kinds that are never numbered. Pictures and photos
    /// use their `ref`, tables their `name`; either may be empty.
    pub fn figure_ref(&self) -> Option<&str> {
        match self {
            Kind::Picture { reference, .. } | Kind::Photo { reference, .. } => Some(reference),
            Kind::Table { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Convenience constructor for text leaves.
    pub fn text(content: impl Into<String>) -> Self {
        Kind::Text {
            content: content.into(),
        }
    }

    /// Convenience constructor for annotation tags.
    pub fn tag_of(tag_type: impl Into<String>) -> Self {
        Kind::Tag {
            tag_type: tag_type.into(),
        }
    }
}

/// A node in the tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: Kind,
    /// Parent node (None for root).
    pub parent: Option<NodeId>,
    /// First child node.
    pub first_child: Option<NodeId>,
    /// Next sibling node.
    pub next_sibling: Option<NodeId>,
}

impl Node {
    /// Create a detached node.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            parent: None,
            first_child: None,
            next_sibling: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_ref_by_kind() {
        let picture = Kind::Picture {
            id: "antenna".into(),
            reference: "fig-antenna".into(),
            caption: String::new(),
        };
        let table = Kind::Table {
            name: "bands".into(),
            caption: String::new(),
        };
        assert_eq!(picture.figure_ref(), Some("fig-antenna"));
        assert_eq!(table.figure_ref(), Some("bands"));
        assert_eq!(Kind::Paragraph.figure_ref(), None);
    }

    #[test]
    fn test_alignment_css() {
        assert_eq!(Alignment::Center.css(), Some("center"));
        assert_eq!(Alignment::Unspecified.css(), None);
    }

    #[test]
    fn test_alignment_from_parser_codes() {
        assert_eq!(Alignment::from("l".to_string()), Alignment::Left);
        assert_eq!(Alignment::from("right".to_string()), Alignment::Right);
        assert_eq!(Alignment::from("justify".to_string()), Alignment::Unspecified);
    }
}
