/// Outcome of annotating one bank file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AnnotateReport {
    pub updated: usize,
    pub total: usize,
}

/// Outcome of an annotate batch across several paths.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub files: usize,
    pub updated: usize,
    pub failed: usize,
}

/// Fills the `topic` field of every unclassified record in one bank file.
///
/// The rule set is picked from the category resolved out of the file name.
/// Records already carrying a non-blank topic are never touched, so a
/// re-run changes nothing. The write is a full-file atomic replace; an
/// interrupted run leaves the original file exactly as it was.
pub fn annotate_file(path: &Path) -> anyhow::Result<AnnotateReport> {
    // 1. Load the bank. A file that is not an array of records fails here.
    let mut records = load_records(path)?;

    // 2. Resolve the rule set from the file name.
    let file_name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let category = CategoryKey::resolve(file_name);

    // 3. Fill in the missing topics.
    let mut report = AnnotateReport {
        total: records.len(),
        ..Default::default()
    };
    for record in &mut records {
        if !topic_is_blank(record) {
            continue;
        }
        let topic = classify(category, record);
        record.insert("topic".to_string(), Value::String(topic.to_string()));
        report.updated += 1;
    }

    // 4. Full-file replace, skipped when no record changed.
    if report.updated > 0 {
        save_records(path, &records)?;
    }

    Ok(report)
}

/// Annotates every given path, expanding directories to their `*.json`
/// entries. A file that fails is reported and skipped; the batch carries on
/// with the remaining files.
pub fn annotate_paths(paths: &[PathBuf]) -> anyhow::Result<BatchReport> {
    let files = expand_paths(paths)?;

    let mut report = BatchReport::default();
    for path in &files {
        match annotate_file(path) {
            Ok(file_report) => {
                println!(
                    "  {}: {} of {} records newly classified",
                    path.display(),
                    file_report.updated,
                    file_report.total
                );
                report.files += 1;
                report.updated += file_report.updated;
            }
            Err(e) => {
                eprintln!("  {}: {:#}", path.display(), e);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}

/// Expands directory arguments to their `*.json` entries, sorted for a
/// deterministic batch order. Every argument must exist before any file is
/// touched; a missing one aborts the whole batch up front.
fn expand_paths(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut expanded = Vec::new();
    for path in paths {
        if !path.exists() {
            return Err(JobError::Config(format!(
                "bank path '{}' does not exist",
                path.display()
            ))
            .into());
        }
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .with_context(|| format!("Failed to read directory '{}'", path.display()))?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.extension().and_then(|ext| ext.to_str()) == Some("json"))
                .collect();
            entries.sort();
            expanded.extend(entries);
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

use crate::categories::CategoryKey;
use crate::error::JobError;
use crate::question_bank::{load_records, save_records, topic_is_blank};
use crate::topics::classify;
use anyhow::Context;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question_bank::field_text;
    use serde_json::json;

    fn write_bank(dir: &Path, name: &str, body: &Value) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(body).unwrap()).unwrap();
        path
    }

    #[test]
    fn fills_missing_topics_from_the_file_name_category() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(
            dir.path(),
            "economy_bank.json",
            &json!([
                {
                    "Question": "RBI cuts repo rate. What happens to lending rates?",
                    "Options": ["They fall", "They rise", "Unchanged", "Doubled"]
                },
                {
                    "Question": "What is the capital of France?",
                    "Options": ["Paris", "Berlin", "Madrid", "Rome"]
                }
            ]),
        );

        let report = annotate_file(&path).unwrap();
        assert_eq!(report, AnnotateReport { updated: 2, total: 2 });

        let records = load_records(&path).unwrap();
        assert_eq!(field_text(&records[0], "topic", "Topic"), "banking");
        assert_eq!(field_text(&records[1], "topic", "Topic"), "general");
    }

    #[test]
    fn existing_topics_are_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(
            dir.path(),
            "economy_bank.json",
            &json!([
                {
                    "Question": "Union budget and the fiscal deficit target.",
                    "topic": "hand-reviewed"
                }
            ]),
        );

        let report = annotate_file(&path).unwrap();
        assert_eq!(report.updated, 0);

        let records = load_records(&path).unwrap();
        assert_eq!(field_text(&records[0], "topic", "Topic"), "hand-reviewed");
    }

    #[test]
    fn second_run_is_byte_identical_and_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(
            dir.path(),
            "history_bank.json",
            &json!([
                { "Question": "Akbar belonged to which dynasty?" },
                { "Question": "Who led the Dandi march?", "topic": "modern" }
            ]),
        );

        let first = annotate_file(&path).unwrap();
        assert_eq!(first.updated, 1);
        let after_first = fs::read(&path).unwrap();

        let second = annotate_file(&path).unwrap();
        assert_eq!(second.updated, 0);
        let after_second = fs::read(&path).unwrap();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn round_trip_preserves_all_other_fields_and_the_record_count() {
        let dir = tempfile::tempdir().unwrap();
        let original = json!([
            {
                "Category": "Geography",
                "Question": "Which river forms the Sundarbans delta?",
                "Options": ["Ganga", "Godavari", "Krishna", "Kaveri"],
                "CorrectAnswer": "Ganga",
                "CorrectOptionIndex": 1,
                "Explanation": "The Ganga-Brahmaputra delta hosts the Sundarbans.",
                "Difficulty": "Medium",
                "TargetExams": ["UPSC"]
            }
        ]);
        let path = write_bank(dir.path(), "geography_bank.json", &original);

        annotate_file(&path).unwrap();
        let records = load_records(&path).unwrap();
        assert_eq!(records.len(), 1);

        let mut expected = original[0].as_object().unwrap().clone();
        expected.insert("topic".into(), json!("rivers"));
        assert_eq!(records[0], expected);
    }

    #[test]
    fn unresolved_file_name_uses_the_general_catch_all() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_bank(
            dir.path(),
            "misc_round_one.json",
            &json!([{ "Question": "RBI cuts repo rate" }]),
        );

        annotate_file(&path).unwrap();
        let records = load_records(&path).unwrap();
        assert_eq!(field_text(&records[0], "topic", "Topic"), "general");
    }

    #[test]
    fn a_bad_file_fails_alone_and_leaves_the_batch_running() {
        let dir = tempfile::tempdir().unwrap();
        let bad = dir.path().join("economy_broken.json");
        fs::write(&bad, "not json at all").unwrap();
        let good = write_bank(
            dir.path(),
            "economy_good.json",
            &json!([{ "Question": "What does SLR stand for?" }]),
        );

        let report = annotate_paths(&[bad, good.clone()]).unwrap();
        assert_eq!(report.failed, 1);
        assert_eq!(report.files, 1);
        assert_eq!(report.updated, 1);

        let records = load_records(&good).unwrap();
        assert_eq!(field_text(&records[0], "topic", "Topic"), "banking");
    }

    #[test]
    fn a_missing_path_aborts_before_any_work() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_bank(
            dir.path(),
            "economy_good.json",
            &json!([{ "Question": "What does CRR stand for?" }]),
        );
        let before = fs::read(&good).unwrap();

        let err =
            annotate_paths(&[dir.path().join("no_such_bank.json"), good.clone()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JobError>(),
            Some(JobError::Config(_))
        ));
        assert_eq!(fs::read(&good).unwrap(), before);
    }

    #[test]
    fn directories_expand_to_sorted_json_entries() {
        let dir = tempfile::tempdir().unwrap();
        write_bank(dir.path(), "economy_b.json", &json!([{ "Question": "NPA?" }]));
        write_bank(dir.path(), "economy_a.json", &json!([{ "Question": "GST?" }]));
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = expand_paths(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join("economy_a.json"),
                dir.path().join("economy_b.json")
            ]
        );
    }
}
