//! # fiftyohm-html
//!
//! Renders parsed Fifty Ohm course documents to HTML, either as a linear web
//! page or as a reveal.js slide deck.
//!
//! ## Features
//!
//! - Hierarchical figure numbering (`edition-chapter.section.n`) shared by
//!   pictures, photos and tables, with cross-references resolved by id
//! - Domain inlines: units with proper glyphs and spacing, Morse code,
//!   non-breaking abbreviations, German quotation marks
//! - Margin notes, tips and radio transcripts through a margin template
//! - Slide mode reusing the document rules with a few overrides
//!
//! Parsing is not part of this crate: the Markdown parser with its extension
//! syntax produces a [`Tree`], which is rendered here.
//!
//! ## Quick Start
//!
//! ```
//! use fiftyohm_html::tree::{Kind, NodeId, Tree};
//! use fiftyohm_html::{Handlers, RenderConfig, Renderer};
//!
//! let mut tree = Tree::new();
//! let para = tree.append(NodeId::ROOT, Kind::Paragraph);
//! tree.append(para, Kind::Unit { value: "50".into(), prefix: String::new(), unit: "Ohm".into() });
//!
//! let mut renderer = Renderer::new(RenderConfig::new(), Handlers::new());
//! assert_eq!(renderer.render_document(&tree).unwrap(), "<p>50&#8239;Ω</p>\n");
//! ```

pub mod collab;
pub mod config;
pub mod error;
pub mod numbering;
pub mod render;
pub mod tree;

pub use collab::{Handlers, ItuMorse, MarginRenderer, MarginTemplate, MorseEncoder, MorseSymbol};
pub use config::{Location, LocationParts, Mode, RenderConfig};
pub use error::{Error, Result};
pub use numbering::FigureNumbers;
pub use render::{Renderer, RuleSet};
pub use tree::{Kind, NodeId, Tree};
