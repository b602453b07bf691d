/// Loads a question bank file as a sequence of raw record objects.
///
/// Records stay as plain JSON maps so that rewriting the file preserves
/// every field the content authors put there, whatever its shape. A file
/// whose top level is not an array of objects is a `ContentFormat` failure;
/// a file that cannot be opened at all is a `Config` failure.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<Map<String, Value>>> {
    let file = File::open(path).map_err(|e| JobError::Config(format!(
        "cannot open bank file '{}': {}",
        path.display(),
        e
    )))?;
    let reader = BufReader::new(file);

    let parsed: Value = serde_json::from_reader(reader).map_err(|e| JobError::ContentFormat {
        path: path.to_path_buf(),
        reason: format!("not valid JSON: {}", e),
    })?;

    let Value::Array(items) = parsed else {
        return Err(JobError::ContentFormat {
            path: path.to_path_buf(),
            reason: "top level is not an array".to_string(),
        }
        .into());
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let Value::Object(record) = item else {
            return Err(JobError::ContentFormat {
                path: path.to_path_buf(),
                reason: format!("element {} is not a record object", index),
            }
            .into());
        };
        records.push(record);
    }

    Ok(records)
}

/// Rewrites a bank file in full, pretty-printed with 2-space indentation.
///
/// The new content is written to a sibling temp file and renamed over the
/// original, so an interrupted run never leaves a half-written bank behind.
pub fn save_records(path: &Path, records: &[Map<String, Value>]) -> anyhow::Result<()> {
    let mut body = serde_json::to_string_pretty(records)
        .with_context(|| format!("Failed to serialize records for '{}'", path.display()))?;
    body.push('\n');

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, body)
        .with_context(|| format!("Failed to write '{}'", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to replace '{}'", path.display()))?;

    Ok(())
}

/// Reads a string field from a record, trying `primary` then `fallback`.
///
/// Precedence is by key presence: if `primary` exists it is used even when
/// its value is not a string. Missing and non-string values read as "" so
/// one odd record never fails a whole file.
pub fn field_text<'a>(record: &'a Map<String, Value>, primary: &str, fallback: &str) -> &'a str {
    record
        .get(primary)
        .or_else(|| record.get(fallback))
        .and_then(Value::as_str)
        .unwrap_or("")
}

/// The texts of a record's answer options, in their authored order.
///
/// Options are usually plain strings; labeled `{"text": ...}` objects are
/// also accepted. Anything else contributes nothing.
pub fn option_texts(record: &Map<String, Value>) -> Vec<&str> {
    let options = record
        .get("Options")
        .or_else(|| record.get("options"))
        .and_then(Value::as_array);

    options
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.as_str()),
                    Value::Object(option) => option
                        .get("text")
                        .or_else(|| option.get("Text"))
                        .and_then(Value::as_str),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Whether a record still needs a topic: the field is absent, not a string,
/// or blank after trimming.
pub fn topic_is_blank(record: &Map<String, Value>) -> bool {
    field_text(record, "topic", "Topic").trim().is_empty()
}

use crate::error::JobError;
use anyhow::Context;
use serde_json::{Map, Value};
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
