//! Static documentation content
//!
//! The section list ships inside the binary (`content/sections.toml`) and is
//! validated once at startup. Front ends receive an owned `Vec<Section>` and
//! never mutate it.

use std::collections::HashSet;

use serde::Deserialize;

use crate::prelude::*;
use crate::types::{Block, Section};

const SECTIONS_TOML: &str = include_str!("../content/sections.toml");

#[derive(Debug, Deserialize)]
struct SectionFile {
    #[serde(default, rename = "section")]
    sections: Vec<Section>,
}

/// Load and validate the embedded server-setup sections.
pub fn sections() -> Result<Vec<Section>> {
    let sections = parse_sections(SECTIONS_TOML)?;
    debug!("Loaded {} embedded sections", sections.len());
    Ok(sections)
}

/// Parse a `[[section]]` document and validate it.
pub fn parse_sections(source: &str) -> Result<Vec<Section>> {
    let file: SectionFile = toml::from_str(source)?;
    validate_sections(&file.sections)?;
    Ok(file.sections)
}

/// Check ids, titles and block lists.
///
/// An empty list is valid; the renderer shows a placeholder for it.
pub fn validate_sections(sections: &[Section]) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, section) in sections.iter().enumerate() {
        if section.id.is_empty() {
            return Err(Error::content(format!("section #{} has an empty id", index)));
        }
        if !is_anchor_safe(&section.id) {
            return Err(Error::content(format!(
                "section id '{}' is not a valid anchor (use a-z, 0-9 and '-')",
                section.id
            )));
        }
        if !seen.insert(section.id.as_str()) {
            return Err(Error::content(format!(
                "duplicate section id '{}'",
                section.id
            )));
        }
        if section.title.trim().is_empty() {
            return Err(Error::content(format!(
                "section '{}' has an empty title",
                section.id
            )));
        }
        if section.blocks.is_empty() {
            return Err(Error::content(format!(
                "section '{}' has no content",
                section.id
            )));
        }
        for block in &section.blocks {
            if let Block::Step(step) = block {
                if step.title.trim().is_empty() {
                    return Err(Error::content(format!(
                        "step '{}' in section '{}' has an empty title",
                        step.label, section.id
                    )));
                }
            }
        }
    }

    Ok(())
}

fn is_anchor_safe(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_sections_are_valid() {
        let sections = sections().unwrap();
        assert_eq!(sections.len(), 12);
        assert_eq!(sections[0].id, "stage-a1");
        assert_eq!(sections[0].title, "Stage A1 - Server Creation");
        assert_eq!(sections[11].id, "stage-a12");
    }

    #[test]
    fn test_embedded_sections_keep_document_order() {
        let ids: Vec<_> = sections().unwrap().into_iter().map(|s| s.id).collect();
        assert_eq!(
            ids,
            vec![
                "stage-a1",
                "stage-a2",
                "stage-a3",
                "stage-a4",
                "stage-a5",
                "stage-a6",
                "stage-a7",
                "stage-a8a",
                "stage-a8",
                "stage-a9",
                "stage-a10",
                "stage-a12",
            ]
        );
    }

    #[test]
    fn test_every_embedded_section_ends_with_summary() {
        for section in sections().unwrap() {
            assert!(
                matches!(section.blocks.last(), Some(Block::Summary { .. })),
                "section {} should close with a summary",
                section.id
            );
        }
    }

    #[test]
    fn test_empty_document_is_valid() {
        assert!(parse_sections("").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let src = r#"
[[section]]
id = "one"
title = "One"
[[section.blocks]]
kind = "paragraph"
text = "a"

[[section]]
id = "one"
title = "Again"
[[section.blocks]]
kind = "paragraph"
text = "b"
"#;
        let err = parse_sections(src).unwrap_err();
        assert!(err.to_string().contains("duplicate section id 'one'"));
    }

    #[test]
    fn test_non_anchor_id_rejected() {
        let sections = vec![Section::new("Stage A1", "Title").with_blocks(vec![
            Block::Paragraph {
                text: "body".into(),
            },
        ])];
        assert!(validate_sections(&sections).is_err());
    }

    #[test]
    fn test_blank_title_rejected() {
        let sections = vec![Section::new("a1", "  ").with_blocks(vec![Block::Paragraph {
            text: "body".into(),
        }])];
        let err = validate_sections(&sections).unwrap_err();
        assert!(matches!(err, Error::ContentInvalid { .. }));
    }

    #[test]
    fn test_section_without_blocks_rejected() {
        let sections = vec![Section::new("a1", "Title")];
        assert!(validate_sections(&sections).is_err());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = parse_sections("[[section]\nid = ").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }
}
