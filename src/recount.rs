/// Outcome of a recount run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RecountReport {
    pub categories_updated: usize,
}

/// Recomputes every category's stored question total from a live count.
///
/// The stored value is overwritten exactly, so drifted totals converge in
/// one pass and re-running is harmless. Store failures abort the run; every
/// per-category update that already committed stays committed.
pub async fn recount_all(pool: &SqlitePool) -> anyhow::Result<RecountReport> {
    let categories = fetch_all_categories(pool).await?;

    let mut report = RecountReport::default();
    for category in &categories {
        let total = count_questions(pool, category.category_id).await?;
        update_category_total(pool, category.category_id, total).await?;
        println!("  {:<24} {} questions", category.slug, total);
        report.categories_updated += 1;
    }

    Ok(report)
}

use crate::db::{count_questions, fetch_all_categories, update_category_total};
use sqlx::SqlitePool;
