//! Document - Opaque Rich-Text Payload
//!
//! Announcement contents arrive from the host as a formatted document. The
//! client passes it through unmodified and only renders it read-only as a
//! sequence of text blocks.

use serde::{Deserialize, Serialize};

/// A formatted document attached to an announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

/// One display block of a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Paragraph {
        text: String,
    },
}

fn default_heading_level() -> u8 {
    1
}

impl Document {
    /// Flatten to plain text, blocks joined with newlines
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| match b {
                Block::Heading { text, .. } | Block::Paragraph { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_wire_shape() {
        let json = serde_json::json!({
            "blocks": [
                { "type": "heading", "text": "Patrol schedule", "level": 2 },
                { "type": "paragraph", "text": "Night shift starts at 22:00." }
            ]
        });

        let doc: Document = serde_json::from_value(json).expect("Failed to parse document");
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(
            doc.plain_text(),
            "Patrol schedule\nNight shift starts at 22:00."
        );
    }

    #[test]
    fn test_heading_level_defaults() {
        let json = serde_json::json!({ "blocks": [{ "type": "heading", "text": "Hi" }] });
        let doc: Document = serde_json::from_value(json).expect("Failed to parse document");
        assert_eq!(doc.blocks[0], Block::Heading { text: "Hi".into(), level: 1 });
    }

    #[test]
    fn test_empty_document() {
        let doc: Document = serde_json::from_value(serde_json::json!({}))
            .expect("Failed to parse empty document");
        assert!(doc.is_empty());
        assert_eq!(doc.plain_text(), "");
    }
}
