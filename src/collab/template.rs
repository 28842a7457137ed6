//! Margin annotation template.
//!
//! Margin notes, tips, in-depth boxes and radio transcripts are rendered
//! through a small HTML template with `{{ name }}` placeholders:
//!
//! - `{{ type }}`: annotation category (`margin`, `tip`, `indepth`, `qso`, ...)
//! - `{{ content }}`: the rendered inner HTML
//! - `{{ id }}`: per-document margin id
//! - `{{ margin_anchor_id }}`: id of the most recent anchor in the main flow

use std::path::Path;

use crate::error::{Error, Result};

/// File name looked up inside a templates directory.
pub const MARGIN_TEMPLATE_FILE: &str = "margin.html";

/// Renders a margin annotation to HTML.
pub trait MarginRenderer {
    fn render_margin(
        &self,
        category: &str,
        content: &str,
        margin_id: u32,
        anchor_id: u32,
    ) -> Result<String>;
}

/// Placeholder template for margin annotations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarginTemplate {
    source: String,
}

impl MarginTemplate {
    /// Template used when no templates directory is configured.
    pub const DEFAULT: &'static str = r#"<aside class="margin margin_{{ type }}" id="margin_content_{{ id }}" data-anchor="margin_{{ margin_anchor_id }}">
{{ content }}
</aside>
"#;

    /// Create a template from its source text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Load `margin.html` from a templates directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(MARGIN_TEMPLATE_FILE);
        let source = std::fs::read_to_string(&path)?;
        log::debug!("loaded margin template from {}", path.display());
        Ok(Self::new(source))
    }

    /// Substitute placeholders.
    pub fn render(&self, category: &str, content: &str, id: u32, anchor_id: u32) -> Result<String> {
        let mut out = String::with_capacity(self.source.len() + content.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let Some(end) = after.find("}}") else {
                return Err(Error::Template("unclosed placeholder".to_string()));
            };
            match after[..end].trim() {
                "type" => out.push_str(category),
                "content" => out.push_str(content),
                "id" => out.push_str(&id.to_string()),
                "margin_anchor_id" => out.push_str(&anchor_id.to_string()),
                other => {
                    return Err(Error::Template(format!("unknown placeholder {other:?}")));
                }
            }
            rest = &after[end + 2..];
        }
        out.push_str(rest);

        Ok(out)
    }
}

impl Default for MarginTemplate {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl MarginRenderer for MarginTemplate {
    fn render_margin(
        &self,
        category: &str,
        content: &str,
        margin_id: u32,
        anchor_id: u32,
    ) -> Result<String> {
        self.render(category, content, margin_id, anchor_id)
    }
}
