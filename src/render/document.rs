//! Rules for the linear web page.

use log::warn;

use super::format::{escape_html, escape_js_attr, format_unit, morse_markup, nbsp_if};
use super::{Pass, Rule, default_rule};
use crate::error::Result;
use crate::tree::{Kind, KindTag, NodeId};

/// Placeholder for references to figures that were never numbered.
pub const UNRESOLVED_REFERENCE: &str = "?";

/// Every rule of the document mode.
pub(super) fn rules() -> Vec<(KindTag, Rule)> {
    vec![
        (KindTag::Document, document as Rule),
        (KindTag::Text, text as Rule),
        (KindTag::Paragraph, paragraph as Rule),
        (KindTag::Heading, heading as Rule),
        (KindTag::Emphasis, emphasis as Rule),
        (KindTag::Strong, strong as Rule),
        (KindTag::InlineCode, inline_code as Rule),
        (KindTag::Link, link as Rule),
        (KindTag::LineBreak, line_break as Rule),
        (KindTag::ThematicBreak, thematic_break as Rule),
        (KindTag::Dash, dash as Rule),
        (KindTag::BlockComment, block_comment as Rule),
        (KindTag::Quote, quote as Rule),
        (KindTag::Unit, unit as Rule),
        (KindTag::Underline, underline as Rule),
        (KindTag::Morse, morse as Rule),
        (KindTag::Tag, tag as Rule),
        (KindTag::HalfwidthSpaces, halfwidth_spaces as Rule),
        (KindTag::NonbreakingSpaces, nonbreaking_spaces as Rule),
        (KindTag::NonbreakingSpacesDots, nonbreaking_spaces_dots as Rule),
        (KindTag::Reference, reference as Rule),
        (KindTag::Question, question as Rule),
        (KindTag::Picture, picture as Rule),
        (KindTag::Photo, photo as Rule),
        (KindTag::Table, table as Rule),
        (KindTag::TableBody, table_body as Rule),
        (KindTag::TableHeader, table_row as Rule),
        (KindTag::TableRow, table_row as Rule),
        (KindTag::TableCell, table_cell as Rule),
        (KindTag::Dialogue, dialogue as Rule),
        (KindTag::Include, include as Rule),
        (KindTag::Formula, formula as Rule),
    ]
}

/// Figures link to their full-size asset.
pub(super) fn figure_link(url: &str, content: &str) -> String {
    format!("<a href=\"{url}\">{content}</a>")
}

fn wrap(pass: &mut Pass<'_>, id: NodeId, open: &str, close: &str) -> Result<Option<String>> {
    let inner = pass.render_children(id, "")?;
    Ok(Some(format!("{open}{inner}{close}")))
}

fn document(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    let inner = pass.render_children(id, "\n")?;
    if inner.is_empty() {
        return Ok(Some(inner));
    }
    Ok(Some(format!("{inner}\n")))
}

fn text(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Text { content } = kind else {
        return default_rule(pass, id, kind);
    };
    Ok(Some(escape_html(content)))
}

fn paragraph(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    wrap(pass, id, "<p>", "</p>")
}

fn heading(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Heading { level } = kind else {
        return default_rule(pass, id, kind);
    };
    let level = (*level).clamp(1, 6);
    wrap(pass, id, &format!("<h{level}>"), &format!("</h{level}>"))
}

fn emphasis(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    wrap(pass, id, "<em>", "</em>")
}

fn strong(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    wrap(pass, id, "<strong>", "</strong>")
}

fn inline_code(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::InlineCode { content } = kind else {
        return default_rule(pass, id, kind);
    };
    Ok(Some(format!("<code>{}</code>", escape_html(content))))
}

fn link(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Link { target } = kind else {
        return default_rule(pass, id, kind);
    };
    wrap(pass, id, &format!("<a href=\"{}\">", escape_html(target)), "</a>")
}

fn line_break(_pass: &mut Pass<'_>, _id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    Ok(Some("<br />\n".to_string()))
}

/// Horizontal rules are invisible; they mark where following margin notes
/// attach in the main text.
fn thematic_break(pass: &mut Pass<'_>, _id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    let anchor = pass.next_anchor_id();
    Ok(Some(format!("<a id=\"margin_{anchor}\"></a>")))
}

fn dash(_pass: &mut Pass<'_>, _id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    Ok(Some(" &ndash; ".to_string()))
}

fn block_comment(_pass: &mut Pass<'_>, _id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    Ok(None)
}

fn quote(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    wrap(pass, id, "„", "“")
}

fn unit(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Unit {
        value,
        prefix,
        unit,
    } = kind
    else {
        return default_rule(pass, id, kind);
    };
    Ok(Some(format_unit(value, prefix, unit)))
}

fn underline(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    wrap(pass, id, "<u>", "</u>")
}

fn morse(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Morse { content } = kind else {
        return default_rule(pass, id, kind);
    };
    let code = pass.renderer().handlers().morse().encode(content);
    Ok(Some(morse_markup(&code)))
}

/// Category passed to the margin template for a tag type.
pub fn margin_category(tag_type: &str) -> &str {
    match tag_type {
        "webmargin" => "margin",
        "webtip" => "tip",
        "webindepth" => "indepth",
        other => other,
    }
}

fn tag(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Tag { tag_type } = kind else {
        return default_rule(pass, id, kind);
    };
    match tag_type.as_str() {
        "latexonly" => Ok(None),
        "webonly" => pass.render_children(id, "").map(Some),
        other => {
            let margin_id = pass.next_margin_id();
            let content = pass.render_children(id, "")?;
            let anchor_id = pass.context().margin_anchor_id;
            let html = pass.renderer().handlers().margin().render_margin(
                margin_category(other),
                &content,
                margin_id,
                anchor_id,
            )?;
            Ok(Some(html))
        }
    }
}

fn halfwidth_spaces(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::HalfwidthSpaces { first, second } = kind else {
        return default_rule(pass, id, kind);
    };
    Ok(Some(format!("{first}.&#8239;{second}.")))
}

fn nonbreaking_spaces(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::NonbreakingSpaces { first, second } = kind else {
        return default_rule(pass, id, kind);
    };
    Ok(Some(format!("{first}&#160;{second}")))
}

fn nonbreaking_spaces_dots(
    pass: &mut Pass<'_>,
    id: NodeId,
    kind: &Kind,
) -> Result<Option<String>> {
    let Kind::NonbreakingSpacesDots {
        leading,
        second,
        trailing,
    } = kind
    else {
        return default_rule(pass, id, kind);
    };
    Ok(Some(format!(
        "{}{second}{}",
        nbsp_if(*leading),
        nbsp_if(*trailing)
    )))
}

fn reference(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Reference { target } = kind else {
        return default_rule(pass, id, kind);
    };
    let renderer = pass.renderer();
    let number = renderer.figures().resolve(target).unwrap_or_else(|| {
        warn!("reference to unnumbered figure {target:?}");
        UNRESOLVED_REFERENCE
    });
    Ok(Some(format!(
        "<a href=\"{}#ref_{}\" onclick=\"highlightRef('{}');\">{number}</a>",
        renderer.config().section_url,
        escape_html(target),
        escape_js_attr(target)
    )))
}

fn question(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Question { number } = kind else {
        return default_rule(pass, id, kind);
    };
    pass.renderer().handlers().question(number).map(Some)
}

/// Shared markup of pictures and photos.
struct Figure<'k> {
    css_class: &'static str,
    url: String,
    alt: String,
    reference: &'k str,
    caption: &'k str,
}

fn render_figure(pass: &mut Pass<'_>, id: NodeId, figure: Figure<'_>) -> String {
    let alt = escape_html(&figure.alt);
    let img = format!("<img src=\"{}\" alt=\"{alt}\">", figure.url);
    let content = pass.figure_link(&figure.url, &img);
    let reference = escape_html(figure.reference);
    let number = pass.renderer().figures().number_of(id);
    format!(
        "<figure class=\"{}\" id=\"ref_{reference}\" name=\"{reference}\">\n{content}\n<figcaption>Abbildung {number}: {}</figcaption>\n</figure>\n",
        figure.css_class, figure.caption
    )
}

fn picture(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Picture {
        id: asset,
        reference,
        caption,
    } = kind
    else {
        return default_rule(pass, id, kind);
    };
    let figure = Figure {
        css_class: "picture",
        url: format!("pictures/{asset}.svg"),
        alt: pass.renderer().handlers().picture_alt(asset),
        reference,
        caption,
    };
    Ok(Some(render_figure(pass, id, figure)))
}

fn photo(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Photo {
        id: asset,
        reference,
        caption,
    } = kind
    else {
        return default_rule(pass, id, kind);
    };
    let figure = Figure {
        css_class: "photo",
        url: format!("photos/{asset}.png"),
        alt: pass.renderer().handlers().photo_alt(asset),
        reference,
        caption,
    };
    Ok(Some(render_figure(pass, id, figure)))
}

fn table(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Table { name, caption } = kind else {
        return default_rule(pass, id, kind);
    };

    let mut html = String::from("<table class=\"table table-hover\"");
    if !name.is_empty() {
        let name = escape_html(name);
        html.push_str(&format!(" id=\"ref_{name}\" name=\"{name}\""));
    }
    html.push_str(">\n");
    html.push_str(&pass.render_children(id, "")?);

    if !caption.is_empty() {
        let number = pass.renderer().figures().number_of(id);
        if number.is_empty() {
            html.push_str(&format!("<caption>{caption}</caption>\n"));
        } else {
            html.push_str(&format!("<caption>Tabelle {number}: {caption}</caption>\n"));
        }
    }

    html.push_str("</table>");
    Ok(Some(html))
}

fn table_body(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::TableBody { header } = kind else {
        return default_rule(pass, id, kind);
    };
    if !pass.tree().has_children(id) {
        return Ok(None);
    }
    let section = if *header { "thead" } else { "tbody" };
    let inner = pass.render_children(id, "")?;
    Ok(Some(format!("<{section}>\n{inner}</{section}>\n")))
}

fn table_row(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    wrap(pass, id, "<tr>\n", "</tr>\n")
}

fn table_cell(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::TableCell { header, alignment } = kind else {
        return default_rule(pass, id, kind);
    };
    let cell = if *header { "th" } else { "td" };
    let style = alignment
        .and_then(|a| a.css())
        .map(|align| format!(" style=\"text-align: {align};\""))
        .unwrap_or_default();
    let inner = pass.render_children(id, "")?;
    Ok(Some(format!("<{cell}{style}>{inner}</{cell}>\n")))
}

/// Whose transmission a dialogue turn is.
pub fn turn_direction(received: bool) -> &'static str {
    if received { "other" } else { "own" }
}

fn dialogue(pass: &mut Pass<'_>, id: NodeId, _kind: &Kind) -> Result<Option<String>> {
    let margin_id = pass.next_margin_id();
    let tree = pass.tree();

    let mut content = String::new();
    for turn in tree.children(id) {
        let Some(Kind::DialogueTurn { received }) = tree.kind(turn) else {
            if let Some(html) = pass.render(turn)? {
                content.push_str(&html);
            }
            continue;
        };
        let inner = pass.render_children(turn, "")?;
        content.push_str(&format!(
            "<div class=\"qso_{}\">{inner}</div>\n",
            turn_direction(*received)
        ));
    }

    let anchor_id = pass.context().margin_anchor_id;
    let html = pass
        .renderer()
        .handlers()
        .margin()
        .render_margin("qso", &content, margin_id, anchor_id)?;
    Ok(Some(html))
}

fn include(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Include { ident } = kind else {
        return default_rule(pass, id, kind);
    };
    pass.renderer().handlers().include(ident).map(Some)
}

fn formula(pass: &mut Pass<'_>, id: NodeId, kind: &Kind) -> Result<Option<String>> {
    let Kind::Formula { formula } = kind else {
        return default_rule(pass, id, kind);
    };
    Ok(Some(format!("\n$${formula}$$\n")))
}
