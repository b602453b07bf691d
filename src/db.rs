use anyhow::Context;
use chrono::{NaiveDateTime, Utc};
use sqlx::FromRow;
use sqlx::SqlitePool;

#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub category_id: i64,
    pub slug: String,
    pub name: String,
    pub total_questions: i64,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, FromRow)]
pub struct QuestionRow {
    pub question_id: i64,
    pub category_id: i64,
    pub question_text: String,
    pub topic: Option<String>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Looks up a category by its slug or its display name, case-insensitively.
///
/// Returns `Ok(None)` when no row matches; callers decide whether that is
/// fatal for their run.
pub async fn fetch_category(
    pool: &SqlitePool,
    slug_or_name: &str,
) -> anyhow::Result<Option<CategoryRow>> {
    let category = sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT category_id, slug, name, total_questions, updated_at
        FROM practice_categories
        WHERE lower(slug) = lower(?) OR lower(name) = lower(?)
        "#,
    )
    .bind(slug_or_name)
    .bind(slug_or_name)
    .fetch_optional(pool)
    .await
    .with_context(|| format!("Failed to look up category '{}'", slug_or_name))?;

    Ok(category)
}

pub async fn fetch_all_categories(pool: &SqlitePool) -> anyhow::Result<Vec<CategoryRow>> {
    let categories = sqlx::query_as::<_, CategoryRow>(
        r#"
        SELECT category_id, slug, name, total_questions, updated_at
        FROM practice_categories
        ORDER BY slug ASC
        "#,
    )
    .fetch_all(pool)
    .await
    .context("Failed to fetch categories from the question store.")?;

    Ok(categories)
}

/// Finds the stored question matching the given text exactly, within one
/// category.
///
/// Returns `Ok(None)` on a lookup miss; backfill tallies those rather than
/// failing.
pub async fn fetch_question_by_text(
    pool: &SqlitePool,
    category_id: i64,
    question_text: &str,
) -> anyhow::Result<Option<QuestionRow>> {
    let question = sqlx::query_as::<_, QuestionRow>(
        r#"
        SELECT question_id, category_id, question_text, topic, updated_at
        FROM practice_questions
        WHERE category_id = ? AND question_text = ?
        "#,
    )
    .bind(category_id)
    .bind(question_text)
    .fetch_optional(pool)
    .await
    .with_context(|| format!("Failed to look up question in category {}", category_id))?;

    Ok(question)
}

/// Writes a question's topic (NULL when `topic` is `None`) and bumps its
/// update timestamp. One independent statement per row; there is no
/// run-spanning transaction.
pub async fn update_question_topic(
    pool: &SqlitePool,
    question_id: i64,
    topic: Option<&str>,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE practice_questions
        SET topic = ?, updated_at = ?
        WHERE question_id = ?
        "#,
    )
    .bind(topic)
    .bind(Utc::now().naive_utc())
    .bind(question_id)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to update topic for question {}", question_id))?;

    Ok(())
}

pub async fn count_questions(pool: &SqlitePool, category_id: i64) -> anyhow::Result<i64> {
    let total = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM practice_questions WHERE category_id = ?",
    )
    .bind(category_id)
    .fetch_one(pool)
    .await
    .with_context(|| format!("Failed to count questions for category {}", category_id))?;

    Ok(total)
}

pub async fn update_category_total(
    pool: &SqlitePool,
    category_id: i64,
    total: i64,
) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        UPDATE practice_categories
        SET total_questions = ?, updated_at = ?
        WHERE category_id = ?
        "#,
    )
    .bind(total)
    .bind(Utc::now().naive_utc())
    .bind(category_id)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to update total for category {}", category_id))?;

    Ok(())
}
