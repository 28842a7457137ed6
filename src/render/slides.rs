//! Slide deck overrides of the document rules.
//!
//! Slides are `<section>`s of a reveal.js deck. Margin notes have no place
//! there, so tags map to a few fixed layout wrappers and radio transcripts
//! animate in turn by turn.

use super::document::turn_direction;
use super::{Pass, Rule, default_rule};
use crate::error::Result;
use crate::tree::{Kind, KindTag, NodeId};

/// Rules replacing or extending the document rule set.
pub(super) fn overrides() -> Vec<(KindTag, Rule)> {
    vec![
        (KindTag::SlideBreak, slide_break as Rule),
        (KindTag::Dialogue, dialogue as Rule),
        (KindTag::Tag, tag as Rule),
    ]
}

/// Figures on slides are not clickable.
pub(super) fn figure_link(_url: &str, content: &str) -> String {
    content.to_string()
}

fn slide_break(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::SlideBreak { attribute } = kind else {
        return default_rule(pass, id, kind);
    };
    let inner = pass.render_children(id, "")?;
    let html = match attribute {
        Some(attribute) => format!("<section {attribute}>\n{inner}\n</section>\n"),
        None => format!("<section>\n{inner}\n</section>\n"),
    };
    Ok(Some(html))
}

fn dialogue(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    let tree = pass.tree();

    let mut html = String::from("<div class=\"qso r-fit-text\">\n");
    for turn in tree.children(id) {
        let Some(Kind::DialogueTurn { received }) = tree.kind(turn) else {
            if let Some(other) = pass.render(turn)? {
                html.push_str(&other);
            }
            continue;
        };
        let fade = if *received {
            "fragment fade-left"
        } else {
            "fragment fade-right"
        };
        let inner = pass.render_children(turn, "")?;
        html.push_str(&format!(
            "<div class=\"qso_{} {fade}\">{inner}</div>\n",
            turn_direction(*received)
        ));
    }
    html.push_str("</div>\n");

    Ok(Some(html))
}

fn tag(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Tag { tag_type } = kind else {
        return default_rule(pass, id, kind);
    };
    let (open, close) = match tag_type.as_str() {
        "fragment" => ("<div class=\"fragment\">", "</div>"),
        "left" => ("<div id=\"left\">", "</div>"),
        "right" => ("<div id=\"right\">", "</div>"),
        "note" => ("<aside class=\"notes\">", "</aside>"),
        // Everything else belongs to the printed or web edition.
        _ => return Ok(Some(String::new())),
    };
    let inner = pass.render_children(id, "")?;
    Ok(Some(format!("{open}\n{inner}\n{close}\n")))
}

#[cfg(test)]
mod tests {
    use crate::config::{Location, Mode, RenderConfig};
    use crate::tree::{Kind, NodeId, Tree};
    use crate::{Handlers, Renderer};

    fn slide_renderer() -> Renderer {
        Renderer::new(RenderConfig::new().with_mode(Mode::Slides), Handlers::new())
    }

    #[test]
    fn test_slide_break_with_and_without_attribute() {
        let mut tree = Tree::new();
        let plain = tree.append(NodeId::ROOT, Kind::SlideBreak { attribute: None });
        tree.append(plain, Kind::text("Folie 1"));
        let styled = tree.append(
            NodeId::ROOT,
            Kind::SlideBreak {
                attribute: Some("data-background-color=\"#000\"".into()),
            },
        );
        tree.append(styled, Kind::text("Folie 2"));

        let r = slide_renderer();
        assert_eq!(
            r.render(&tree, plain).unwrap().as_deref(),
            Some("<section>\nFolie 1\n</section>\n")
        );
        assert_eq!(
            r.render(&tree, styled).unwrap().as_deref(),
            Some("<section data-background-color=\"#000\">\nFolie 2\n</section>\n")
        );
    }

    #[test]
    fn test_slide_break_in_document_mode_renders_children() {
        let mut tree = Tree::new();
        let slide = tree.append(NodeId::ROOT, Kind::SlideBreak { attribute: None });
        tree.append(slide, Kind::text("Folie"));

        let r = Renderer::new(RenderConfig::new(), Handlers::new());
        assert_eq!(r.render(&tree, slide).unwrap().as_deref(), Some("Folie"));
    }

    #[test]
    fn test_dialogue_fades_by_direction() {
        let mut tree = Tree::new();
        let qso = tree.append(NodeId::ROOT, Kind::Dialogue);
        let own = tree.append(qso, Kind::DialogueTurn { received: false });
        tree.append(own, Kind::text("CQ DX"));
        let other = tree.append(qso, Kind::DialogueTurn { received: true });
        tree.append(other, Kind::text("DL0ABC"));

        let html = slide_renderer().render(&tree, qso).unwrap().unwrap();
        assert_eq!(
            html,
            "<div class=\"qso r-fit-text\">\n\
             <div class=\"qso_own fragment fade-right\">CQ DX</div>\n\
             <div class=\"qso_other fragment fade-left\">DL0ABC</div>\n\
             </div>\n"
        );
    }

    #[test]
    fn test_tags_on_slides() {
        let mut tree = Tree::new();
        let note = tree.append(NodeId::ROOT, Kind::tag_of("note"));
        tree.append(note, Kind::text("Sprechernotiz"));
        let left = tree.append(NodeId::ROOT, Kind::tag_of("left"));
        tree.append(left, Kind::text("links"));
        let margin = tree.append(NodeId::ROOT, Kind::tag_of("webmargin"));
        tree.append(margin, Kind::text("Randnotiz"));

        let r = slide_renderer();
        assert_eq!(
            r.render(&tree, note).unwrap().as_deref(),
            Some("<aside class=\"notes\">\nSprechernotiz\n</aside>\n")
        );
        assert_eq!(
            r.render(&tree, left).unwrap().as_deref(),
            Some("<div id=\"left\">\nlinks\n</div>\n")
        );
        assert_eq!(r.render(&tree, margin).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_figures_are_not_linked_on_slides() {
        let mut tree = Tree::new();
        let picture = tree.append(
            NodeId::ROOT,
            Kind::Picture {
                id: "yagi".into(),
                reference: "fig-yagi".into(),
                caption: "Yagi".into(),
            },
        );

        let location = Location::new("3", "2", "1");
        let mut slides = Renderer::new(
            RenderConfig::new()
                .with_location(location.clone())
                .with_mode(Mode::Slides),
            Handlers::new(),
        );
        let mut document = Renderer::new(RenderConfig::new().with_location(location), Handlers::new());
        slides.collect_figures(&tree);
        document.collect_figures(&tree);

        let on_slide = slides.render(&tree, picture).unwrap().unwrap();
        let on_page = document.render(&tree, picture).unwrap().unwrap();

        assert!(!on_slide.contains("<a href="));
        assert!(on_slide.contains("<img src=\"pictures/yagi.svg\" alt=\"\">"));
        assert!(on_slide.contains("Abbildung 3S-2.1.1: Yagi"));
        assert!(on_page.contains("<a href=\"pictures/yagi.svg\"><img"));
        assert!(on_page.contains("Abbildung 3-2.1.1: Yagi"));
    }
}
