//! Tree → HTML rendering.
//!
//! Rendering is two passes over one document:
//!
//! 1. [`Renderer::collect_figures`] numbers every referenced picture, photo
//!    and table in document order.
//! 2. [`Renderer::render`] walks the tree and looks up a [`Rule`] for each
//!    node kind. A rule returns `Ok(None)` to suppress the node entirely;
//!    suppressed children leave no trace in their parent's output.
//!
//! Slide decks reuse the document rules and override a handful of them
//! (slide breaks, transcripts, tags, figure links).
//!
//! ```
//! use fiftyohm_html::tree::{Kind, NodeId, Tree};
//! use fiftyohm_html::{Handlers, Location, RenderConfig, Renderer};
//!
//! let mut tree = Tree::new();
//! tree.append(NodeId::ROOT, Kind::Picture {
//!     id: "dipole".into(),
//!     reference: "fig-dipole".into(),
//!     caption: "Halbwellendipol".into(),
//! });
//! let para = tree.append(NodeId::ROOT, Kind::Paragraph);
//! tree.append(para, Kind::Reference { target: "fig-dipole".into() });
//!
//! let config = RenderConfig::new().with_location(Location::new("3", "2", "1"));
//! let mut renderer = Renderer::new(config, Handlers::new());
//! let html = renderer.render_document(&tree).unwrap();
//! assert!(html.contains(">3-2.1.1</a>"));
//! ```

mod document;
mod format;
mod slides;

pub use document::UNRESOLVED_REFERENCE;
pub use format::{escape_html, escape_js_attr, format_unit, morse_markup, nbsp_if, unit_glyph};

use std::collections::HashMap;

use log::debug;

use crate::collab::Handlers;
use crate::config::{Location, Mode, RenderConfig};
use crate::error::Result;
use crate::numbering::FigureNumbers;
use crate::tree::{Kind, KindTag, NodeId, Tree};

/// Rendering rule for one node kind.
///
/// `Ok(None)` suppresses the node: it contributes nothing, not even a
/// separator, to its parent.
pub type Rule = fn(&mut Pass<'_>, NodeId, &Kind) -> Result<Option<String>>;

/// Wraps a figure's image in its link, or not.
pub type FigureLink = fn(url: &str, content: &str) -> String;

/// Rules for every node kind of one output mode.
#[derive(Clone)]
pub struct RuleSet {
    rules: HashMap<KindTag, Rule>,
    figure_link: FigureLink,
}

impl RuleSet {
    /// The rule set of a mode: document rules, plus slide overrides when
    /// rendering slides.
    pub fn for_mode(mode: Mode) -> Self {
        let mut set = RuleSet {
            rules: document::rules().into_iter().collect(),
            figure_link: document::figure_link,
        };
        if mode == Mode::Slides {
            set.rules.extend(slides::overrides());
            set.figure_link = slides::figure_link;
        }
        set
    }

    /// Rule for a kind; kinds without an entry render their children.
    pub fn rule(&self, tag: KindTag) -> Rule {
        self.rules.get(&tag).copied().unwrap_or(default_rule)
    }

    pub fn figure_link(&self) -> FigureLink {
        self.figure_link
    }
}

impl std::fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

/// Fallback for kinds without a rule: children, concatenated.
pub fn default_rule(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    if let Kind::Unknown { name } = kind {
        debug!("rendering unknown node kind {name:?} as its children");
    }
    pass.render_children(id, "").map(Some)
}

/// Per-render counters threaded through a single pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Last margin id handed out.
    pub margin_id: u32,
    /// Id of the most recent thematic-break anchor.
    pub margin_anchor_id: u32,
}

/// Renders documents of one output mode.
#[derive(Debug)]
pub struct Renderer {
    config: RenderConfig,
    /// Numbering context, with the mode's edition suffix applied.
    location: Option<Location>,
    handlers: Handlers,
    rules: RuleSet,
    figures: FigureNumbers,
}

impl Renderer {
    pub fn new(config: RenderConfig, handlers: Handlers) -> Self {
        let location = config.location.clone().map(|mut loc| {
            loc.edition.push_str(config.mode.edition_suffix());
            loc
        });
        let rules = RuleSet::for_mode(config.mode);
        Self {
            config,
            location,
            handlers,
            rules,
            figures: FigureNumbers::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Numbering context actually used, including any edition suffix.
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Figure numbers from the last [`collect_figures`](Self::collect_figures).
    pub fn figures(&self) -> &FigureNumbers {
        &self.figures
    }

    /// Number all figures of `tree`, discarding numbers of any earlier tree.
    pub fn collect_figures(&mut self, tree: &Tree) {
        self.figures = FigureNumbers::collect(tree, self.location.as_ref());
        debug!("numbered {} figures", self.figures.len());
    }

    /// Render one node with fresh margin counters.
    ///
    /// References resolve against the figures collected last; call
    /// [`collect_figures`](Self::collect_figures) on the same tree first.
    pub fn render(&self, tree: &Tree, id: NodeId) -> Result<Option<String>> {
        Pass::new(self, tree).render(id)
    }

    /// Number the figures of `tree` and render it from the root.
    pub fn render_document(&mut self, tree: &Tree) -> Result<String> {
        self.collect_figures(tree);
        Ok(self.render(tree, tree.root())?.unwrap_or_default())
    }
}

/// One rendering walk over a tree.
pub struct Pass<'a> {
    renderer: &'a Renderer,
    tree: &'a Tree,
    ctx: RenderContext,
}

impl<'a> Pass<'a> {
    pub fn new(renderer: &'a Renderer, tree: &'a Tree) -> Self {
        Self {
            renderer,
            tree,
            ctx: RenderContext::default(),
        }
    }

    /// Render a node through its kind's rule.
    pub fn render(&mut self, id: NodeId) -> Result<Option<String>> {
        let tree = self.tree;
        let Some(node) = tree.node(id) else {
            return Ok(None);
        };
        let rule = self.renderer.rules.rule(node.kind.tag());
        rule(self, id, &node.kind)
    }

    /// Render all children, drop suppressed ones and join the rest.
    pub fn render_children(&mut self, id: NodeId, separator: &str) -> Result<String> {
        let tree = self.tree;
        let mut parts = Vec::new();
        for child in tree.children(id) {
            if let Some(html) = self.render(child)? {
                parts.push(html);
            }
        }
        Ok(parts.join(separator))
    }

    pub fn tree(&self) -> &'a Tree {
        self.tree
    }

    pub fn renderer(&self) -> &'a Renderer {
        self.renderer
    }

    pub fn context(&self) -> RenderContext {
        self.ctx
    }

    /// Hand out the next margin id.
    pub fn next_margin_id(&mut self) -> u32 {
        self.ctx.margin_id += 1;
        self.ctx.margin_id
    }

    /// Start a new margin anchor and return its id.
    pub fn next_anchor_id(&mut self) -> u32 {
        self.ctx.margin_anchor_id += 1;
        self.ctx.margin_anchor_id
    }

    pub fn figure_link(&self, url: &str, content: &str) -> String {
        (self.renderer.rules.figure_link())(url, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_root(tree: &Tree, mode: Mode) -> String {
        let mut renderer = Renderer::new(RenderConfig::new().with_mode(mode), Handlers::new());
        renderer.render_document(tree).unwrap()
    }

    #[test]
    fn test_empty_document_renders_nothing() {
        assert_eq!(render_root(&Tree::new(), Mode::Document), "");
    }

    #[test]
    fn test_document_joins_blocks_with_newlines() {
        let mut tree = Tree::new();
        let p1 = tree.append(NodeId::ROOT, Kind::Paragraph);
        tree.append(p1, Kind::text("eins"));
        let p2 = tree.append(NodeId::ROOT, Kind::Paragraph);
        tree.append(p2, Kind::text("zwei"));

        assert_eq!(
            render_root(&tree, Mode::Document),
            "<p>eins</p>\n<p>zwei</p>\n"
        );
    }

    #[test]
    fn test_suppressed_child_adds_no_separator() {
        let mut tree = Tree::new();
        let p1 = tree.append(NodeId::ROOT, Kind::Paragraph);
        tree.append(p1, Kind::text("a"));
        let comment = tree.append(NodeId::ROOT, Kind::BlockComment);
        tree.append(comment, Kind::text("Notiz für Autoren"));
        let p2 = tree.append(NodeId::ROOT, Kind::Paragraph);
        tree.append(p2, Kind::text("b"));

        assert_eq!(render_root(&tree, Mode::Document), "<p>a</p>\n<p>b</p>\n");
    }

    #[test]
    fn test_unknown_kind_renders_children() {
        let mut tree = Tree::new();
        let unknown = tree.append(
            NodeId::ROOT,
            Kind::Unknown {
                name: "footnote".into(),
            },
        );
        tree.append(unknown, Kind::text("a"));
        tree.append(unknown, Kind::text("b"));

        assert_eq!(render_root(&tree, Mode::Document), "ab\n");
    }

    #[test]
    fn test_slide_edition_suffix() {
        let config = RenderConfig::new()
            .with_location(Location::new("3", "2", "1"))
            .with_mode(Mode::Slides);
        let renderer = Renderer::new(config, Handlers::new());
        assert_eq!(renderer.location().unwrap().edition, "3S");
        assert_eq!(renderer.config().location.as_ref().unwrap().edition, "3");
    }

    #[test]
    fn test_margin_counters_start_fresh_per_render() {
        let mut tree = Tree::new();
        tree.append(NodeId::ROOT, Kind::ThematicBreak);
        let renderer = Renderer::new(RenderConfig::new(), Handlers::new());

        let first = renderer.render(&tree, NodeId::ROOT).unwrap();
        let second = renderer.render(&tree, NodeId::ROOT).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("<a id=\"margin_1\"></a>\n"));
    }
}
