/// Outcome of backfilling one category from one source file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BackfillReport {
    pub updated: usize,
    pub skipped: usize,
    pub missing: usize,
}

/// Copies topic labels from a bank file into the stored questions of one
/// category.
///
/// Fill-only: a row whose stored topic is non-blank is never touched. Rows
/// are matched by exact question text within the category; a source record
/// with no matching row is a tallied miss, not a failure. Each row update is
/// its own statement, so an interrupted run leaves a valid state that a
/// re-run simply continues from.
pub async fn backfill_category(
    pool: &SqlitePool,
    category: &str,
    path: &Path,
) -> anyhow::Result<BackfillReport> {
    // 1. The category row is a precondition for the whole run.
    let category_row = fetch_category(pool, category)
        .await?
        .ok_or_else(|| JobError::CategoryNotFound(category.to_string()))?;
    let key = CategoryKey::resolve(&category_row.slug)
        .map(|k| k.as_str())
        .unwrap_or("unresolved");
    println!(
        "Backfilling '{}' ({}) from '{}'...",
        category_row.name,
        key,
        path.display()
    );

    // 2. Load the source records. Question text reads the `Question` field
    //    first, then `question`.
    let records = load_records(path)?;

    let mut report = BackfillReport::default();
    for record in &records {
        let question_text = field_text(record, "Question", "question");
        if question_text.trim().is_empty() {
            report.skipped += 1;
            continue;
        }

        // 3. Exact-text lookup within the category; a miss is tallied.
        let Some(row) = fetch_question_by_text(pool, category_row.category_id, question_text).await?
        else {
            report.missing += 1;
            continue;
        };

        // 4. Fill-only: an already classified row stays as it is.
        if row.topic.as_deref().is_some_and(|t| !t.trim().is_empty()) {
            report.skipped += 1;
            continue;
        }

        // 5. A blank source topic coalesces to NULL. When the row is already
        //    NULL that would write nothing new, so it counts as a skip and a
        //    second pass stays at zero updates.
        let source_topic = field_text(record, "topic", "Topic").trim();
        let source_topic = (!source_topic.is_empty()).then_some(source_topic);
        if source_topic.is_none() && row.topic.is_none() {
            report.skipped += 1;
            continue;
        }

        update_question_topic(pool, row.question_id, source_topic).await?;
        report.updated += 1;
    }

    Ok(report)
}

use crate::categories::CategoryKey;
use crate::db::{fetch_category, fetch_question_by_text, update_question_topic};
use crate::error::JobError;
use crate::question_bank::{field_text, load_records};
use sqlx::SqlitePool;
use std::path::Path;
