//! Property tests over generated record lists.

use folio_content::ProjectRecord;
use folio_render::{render, RenderOptions};
use proptest::prelude::*;

use crate::common::{empty_page, entry_parts, first_anchor};

fn record_strategy() -> impl Strategy<Value = ProjectRecord> {
    (
        "[A-Za-z0-9<>&\"' ]{0,16}[A-Za-z0-9]",
        "[A-Za-z0-9 .,]{0,24}[A-Za-z0-9.]",
        "[A-Za-z+#, ]{0,12}[A-Za-z]",
        "[a-z]{1,8}/[a-z]{1,8}",
    )
        .prop_map(|(title, description, tech, label)| {
            ProjectRecord::new(
                title,
                &description,
                tech,
                label.clone(),
                format!("https://github.com/{label}"),
            )
            .expect("generated record is valid")
        })
}

proptest! {
    #[test]
    fn test_entries_match_records_in_order(
        records in prop::collection::vec(record_strategy(), 1..8)
    ) {
        let (mut doc, container) = empty_page();
        render(&mut doc, container, &records, &RenderOptions::default()).unwrap();

        let entries = doc.children(container);
        prop_assert_eq!(entries.len(), records.len());

        for (entry, record) in entries.into_iter().zip(&records) {
            let [heading, _, tech, link] = entry_parts(&doc, entry);
            prop_assert_eq!(doc.text_content(heading), record.title());
            prop_assert!(doc.element_children(heading).is_empty());

            let tech_text = doc.text_content(tech);
            prop_assert_eq!(tech_text, format!(" {}", record.tech_stack()));

            let anchor = first_anchor(&doc, link).unwrap();
            prop_assert_eq!(doc.attribute(anchor, "href"), Some(record.repo_url()));
            prop_assert_eq!(doc.text_content(anchor), record.repo_label());
        }
    }
}
