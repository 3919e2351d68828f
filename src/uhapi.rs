pub mod client;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use serde_json::Value;

use crate::models::{CatalogEntry, ProblemCatalog, RawSubmission};

pub const CATALOG_PATH: &str = "p";

/// Anything that can hand back a parsed JSON document for an API path.
pub trait JsonSource {
    fn get_json(&self, path: &str) -> Result<Value>;
}

#[derive(Deserialize)]
struct SubsResponse {
    subs: Vec<Value>,
}

pub fn submissions_path(user_id: u64) -> String {
    format!("subs-user/{}", user_id)
}

fn extract_u64_at(record: &Value, index: usize) -> Result<u64> {
    record.get(index)
        .with_context(|| format!("Missing field at position {}", index))?
        .as_u64().with_context(|| format!("Could not convert position {} into u64", index))
}

fn extract_str_at(record: &Value, index: usize) -> Result<String> {
    Ok(record.get(index)
        .with_context(|| format!("Missing field at position {}", index))?
        .as_str().with_context(|| format!("Could not convert position {} into a string", index))?
        .to_string())
}

/// Decodes one `[problemId, displayNumber, title, ...]` catalog record.
fn parse_catalog_record(record: &Value) -> Result<(u64, CatalogEntry)> {
    Ok((
        extract_u64_at(record, 0)?,
        CatalogEntry {
            display_number: extract_u64_at(record, 1)?,
            title: extract_str_at(record, 2)?,
        },
    ))
}

/// Decodes one `[_, problemId, verdict, runtime, timestamp, language, ...]` submission record.
fn parse_submission_record(record: &Value) -> Result<RawSubmission> {
    Ok(RawSubmission {
        problem_id: extract_u64_at(record, 1)?,
        verdict:    extract_u64_at(record, 2)?,
        runtime:    extract_u64_at(record, 3)?,
        timestamp:  extract_u64_at(record, 4)?,
        language:   extract_u64_at(record, 5)?,
    })
}

/// Downloads the whole problem catalog.
pub fn fetch_catalog(source: &impl JsonSource) -> Result<ProblemCatalog> {
    log::trace!("[fetch_catalog] Requesting problem list...");
    let response = source.get_json(CATALOG_PATH).context("Couldn't download the problem list.")?;

    let records = response
        .as_array()
        .ok_or_else(|| anyhow!("Malformed problem list; expected an array."))?;

    records
        .iter()
        .enumerate()
        .map(|(i, record)| parse_catalog_record(record)
            .with_context(|| format!("Malformed problem record #{}", i)))
        .collect()
}

/// Downloads every submission made by `user_id`, in feed order.
pub fn fetch_submissions(source: &impl JsonSource, user_id: u64) -> Result<Vec<RawSubmission>> {
    log::trace!("[fetch_submissions] Requesting submissions for user {}...", user_id);
    let response = source
        .get_json(&submissions_path(user_id))
        .with_context(|| format!("Couldn't download submissions for user {}", user_id))?;

    let SubsResponse { subs } = serde_json::from_value(response)
        .with_context(|| format!("Malformed submission data for user {}; expected a `subs` list.", user_id))?;

    subs.iter()
        .enumerate()
        .map(|(i, record)| parse_submission_record(record)
            .with_context(|| format!("Malformed submission #{} for user {}", i, user_id)))
        .collect()
}
