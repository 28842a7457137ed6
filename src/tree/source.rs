//! Loading trees from the parser's JSON output.
//!
//! The parser emits a nested structure where every object has a `kind`
//! field, the kind's attributes, and an optional `children` array:
//!
//! ```json
//! {"kind": "document", "children": [
//!   {"kind": "picture", "id": "dipole", "ref": "fig-dipole", "caption": "Dipol"}
//! ]}
//! ```

use serde::Deserialize;
use serde_json::Value;

use super::{Kind, NodeId, Tree};
use crate::error::Result;

/// One node of the parser's nested JSON output.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceNode {
    #[serde(flatten)]
    attributes: serde_json::Map<String, Value>,
    #[serde(default)]
    children: Vec<SourceNode>,
}

impl SourceNode {
    /// Decode the node's kind. Kind names this crate does not know become
    /// [`Kind::Unknown`] so their children still render.
    pub fn kind(&self) -> Result<Kind> {
        let value = Value::Object(self.attributes.clone());
        match Kind::deserialize(&value) {
            Ok(kind) => Ok(kind),
            Err(err) => {
                let name = self
                    .attributes
                    .get("kind")
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                if is_known_kind(name) {
                    Err(err.into())
                } else {
                    log::debug!("unknown node kind {name:?}, rendering children only");
                    Ok(Kind::Unknown {
                        name: name.to_string(),
                    })
                }
            }
        }
    }
}

impl Tree {
    /// Build a tree from the parser's JSON output.
    ///
    /// The top-level object must be a `document`.
    pub fn from_json(json: &str) -> Result<Self> {
        let source: SourceNode = serde_json::from_str(json)?;
        Self::from_source(&source)
    }

    /// Build a tree from an already decoded [`SourceNode`].
    pub fn from_source(source: &SourceNode) -> Result<Self> {
        let mut tree = Tree::new();
        if source.kind()? != Kind::Document {
            return Err(crate::Error::InvalidTree(
                "top-level node must be a document".to_string(),
            ));
        }
        for child in &source.children {
            tree.graft(NodeId::ROOT, child)?;
        }
        Ok(tree)
    }

    fn graft(&mut self, parent: NodeId, source: &SourceNode) -> Result<()> {
        let id = self.append(parent, source.kind()?);
        for child in &source.children {
            self.graft(id, child)?;
        }
        Ok(())
    }
}

fn is_known_kind(name: &str) -> bool {
    matches!(
        name,
        "document"
            | "text"
            | "paragraph"
            | "heading"
            | "emphasis"
            | "strong"
            | "inline_code"
            | "link"
            | "line_break"
            | "thematic_break"
            | "dash"
            | "block_comment"
            | "quote"
            | "unit"
            | "underline"
            | "morse"
            | "tag"
            | "halfwidth_spaces"
            | "nonbreaking_spaces"
            | "nonbreaking_spaces_dots"
            | "reference"
            | "question"
            | "picture"
            | "photo"
            | "table"
            | "table_body"
            | "table_header"
            | "table_row"
            | "table_cell"
            | "dialogue"
            | "dialogue_turn"
            | "include"
            | "formula"
            | "slide_break"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_builds_nested_tree() {
        let tree = Tree::from_json(
            r#"{"kind": "document", "children": [
                {"kind": "paragraph", "children": [
                    {"kind": "text", "content": "Antenne "},
                    {"kind": "reference", "target": "fig-dipole"}
                ]},
                {"kind": "picture", "id": "dipole", "ref": "fig-dipole", "caption": "Dipol"}
            ]}"#,
        )
        .unwrap();

        let top: Vec<_> = tree.children(NodeId::ROOT).collect();
        assert_eq!(top.len(), 2);
        assert_eq!(tree.children(top[0]).count(), 2);
        assert_eq!(
            tree.kind(top[1]),
            Some(&Kind::Picture {
                id: "dipole".into(),
                reference: "fig-dipole".into(),
                caption: "Dipol".into(),
            })
        );
    }

    #[test]
    fn test_unknown_kind_is_kept() {
        let tree = Tree::from_json(
            r#"{"kind": "document", "children": [
                {"kind": "footnote", "children": [{"kind": "text", "content": "x"}]}
            ]}"#,
        )
        .unwrap();

        let first = tree.children(NodeId::ROOT).next().unwrap();
        assert_eq!(
            tree.kind(first),
            Some(&Kind::Unknown {
                name: "footnote".into()
            })
        );
        assert_eq!(tree.children(first).count(), 1);
    }

    #[test]
    fn test_known_kind_with_missing_attribute_fails() {
        let result = Tree::from_json(
            r#"{"kind": "document", "children": [{"kind": "reference"}]}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_table_cell_alignment_codes() {
        let tree = Tree::from_json(
            r#"{"kind": "document", "children": [
                {"kind": "table_cell", "header": true, "alignment": "c"}
            ]}"#,
        )
        .unwrap();
        let cell = tree.children(NodeId::ROOT).next().unwrap();
        assert_eq!(
            tree.kind(cell),
            Some(&Kind::TableCell {
                header: true,
                alignment: Some(crate::tree::Alignment::Center),
            })
        );
    }
}
