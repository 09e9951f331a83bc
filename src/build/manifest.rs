//! The questions.json manifest: parsed structure joined with rendered pages.

use serde::Serialize;

use super::document::{RenderedPage, slug_for};
use super::structure::Structure;

/// One row of `questions.json`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub unit: String,
    pub marks: String,
    pub text: String,
    pub title: String,
    pub slug: String,
}

/// Join every structure entry with its rendered page.
///
/// The join is by exact source file name; when several pages share a name
/// the first one in render order wins. A structure entry with no matching
/// page falls back to its question text as the title and a slug derived
/// from the referenced file name.
pub fn build_manifest(structure: &Structure, pages: &[RenderedPage]) -> Vec<ManifestEntry> {
    let mut entries = Vec::new();

    for unit in &structure.units {
        for tier in &unit.tiers {
            for question in &tier.questions {
                let page = pages.iter().find(|p| p.source == question.file);
                let (title, slug) = match page {
                    Some(page) => (page.title.clone(), page.slug.clone()),
                    None => (question.text.clone(), slug_for(&question.file)),
                };

                entries.push(ManifestEntry {
                    unit: unit.label.clone(),
                    marks: tier.label.clone(),
                    text: question.text.clone(),
                    title,
                    slug,
                });
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::structure::parse_structure;

    fn page(title: &str, slug: &str, source: &str) -> RenderedPage {
        RenderedPage {
            title: title.to_string(),
            slug: slug.to_string(),
            source: source.to_string(),
        }
    }

    #[test]
    fn test_join_uses_page_title_and_slug() {
        let structure =
            parse_structure("# UNIT 1\n### Unit 1 - 4 marks\nQ. What is X [Click Here](Q1.md)\n");
        let pages = vec![page("Perceptrons", "Q1.html", "Q1.md")];

        let manifest = build_manifest(&structure, &pages);
        assert_eq!(
            manifest,
            vec![ManifestEntry {
                unit: "Unit 1".to_string(),
                marks: "4-marks".to_string(),
                text: "What is X".to_string(),
                title: "Perceptrons".to_string(),
                slug: "Q1.html".to_string(),
            }]
        );
    }

    #[test]
    fn test_unmatched_entry_falls_back_to_question_text() {
        let structure =
            parse_structure("# UNIT 1\n### Unit 1 - 4 marks\nQ. Orphaned [Click Here](gone.md)\n");

        let manifest = build_manifest(&structure, &[]);
        assert_eq!(manifest[0].title, "Orphaned");
        assert_eq!(manifest[0].slug, "gone.html");
    }

    #[test]
    fn test_duplicate_source_names_first_match_wins() {
        let structure =
            parse_structure("# UNIT 1\n### Unit 1 - 4 marks\nQ. Dup [Click Here](Q1.md)\n");
        let pages = vec![
            page("First", "Q1.html", "Q1.md"),
            page("Second", "Q1.html", "Q1.md"),
        ];

        let manifest = build_manifest(&structure, &pages);
        assert_eq!(manifest[0].title, "First");
    }

    #[test]
    fn test_order_follows_structure_scan() {
        let text = "# UNIT 1\n### Unit 1 - 4 marks\nQ. A [Click Here](A.md)\n### Unit 1 - 8 marks\nQ. B [Click Here](B.md)\n# UNIT 2\n### Unit 2 - 4 marks\nQ. C [Click Here](C.md)\n";
        let manifest = build_manifest(&parse_structure(text), &[]);

        let order: Vec<(&str, &str)> = manifest
            .iter()
            .map(|e| (e.unit.as_str(), e.marks.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Unit 1", "4-marks"),
                ("Unit 1", "8-marks"),
                ("Unit 2", "4-marks"),
            ]
        );
    }
}
