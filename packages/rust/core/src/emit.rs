//! Section-to-record emission.

use docbase_shared::{KnowledgeRecord, Section};

/// Convert flushed sections into records, advancing the run's id counter.
///
/// `about` is the header trail joined with `", "`; `text` is the non-empty
/// body lines joined with a single space. Sections where either side ends up
/// empty are dropped without consuming an id — lossy by design.
pub fn emit_records(sections: &[Section], next_id: &mut u64) -> Vec<KnowledgeRecord> {
    let mut records = Vec::new();

    for section in sections {
        let about = section.trail.join(", ");
        let text = section
            .body
            .iter()
            .filter(|line| !line.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" ");

        if about.is_empty() || text.is_empty() {
            continue;
        }

        records.push(KnowledgeRecord {
            id: *next_id,
            about,
            text,
        });
        *next_id += 1;
    }

    records
}
