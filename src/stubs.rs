pub mod languages;

use anyhow::{Context, Result};
use regex::Regex;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use crate::models::SolvedRecord;
use languages::CommentStyle;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").expect("hard-coded regex"));
static SEPARATOR_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\s]+").expect("hard-coded regex"));

pub fn problem_url(problem_id: u64) -> String {
    format!(
        "https://onlinejudge.org/index.php?option=com_onlinejudge&Itemid=8&category=24&page=show_problem&problem={}",
        problem_id
    )
}

/// Makes a problem title safe to use in a file name: drops everything that isn't a word
/// character, whitespace or a hyphen, then squashes whitespace/hyphen runs into `_`.
pub fn sanitize_title(title: &str) -> String {
    let stripped = UNSAFE_CHARS.replace_all(title, "");
    SEPARATOR_RUNS.replace_all(&stripped, "_").trim().to_string()
}

/// `{displayNumber}-{safeTitle}{extension}`
pub fn stub_file_name(record: &SolvedRecord, language: u64) -> String {
    format!(
        "{}-{}{}",
        record.display_number,
        sanitize_title(&record.title),
        languages::extension_for(language)
    )
}

pub fn stub_path(folder: &Path, record: &SolvedRecord, language: u64) -> PathBuf {
    folder.join(stub_file_name(record, language))
}

pub fn render_stub(record: &SolvedRecord, style: CommentStyle) -> String {
    let CommentStyle { block_open, block_close, line } = style;
    format!(
        "{block_open}\n\
         \x20 Problem: {title}\n\
         \x20 Number: {number}\n\
         \x20 URL: {url}\n\
         \n\
         \x20 Strategy:\n\
         \x20 (describe how you solved it)\n\
         {block_close}\n\
         \n\
         {line} Paste your code below:\n",
        title = record.title,
        number = record.display_number,
        url = problem_url(record.problem_id),
    )
}

/// Creates the stub file for `record` under `folder` unless one is already there.
/// Returns `true` if a new file was written. Existing files are never touched.
///
/// The existence check and the write are not atomic: two runs racing on the same
/// folder can both see the file as missing.
pub fn ensure_stub(folder: &Path, record: &SolvedRecord, language: u64) -> Result<bool> {
    fs::create_dir_all(folder)
        .with_context(|| format!("Couldn't create folder {}", folder.display()))?;

    let path = stub_path(folder, record, language);
    if path.exists() {
        log::trace!("[ensure_stub] {} already exists, leaving it alone.", path.display());
        return Ok(false);
    }

    let contents = render_stub(record, languages::comment_style_for(language));
    fs::write(&path, contents)
        .with_context(|| format!("Couldn't write stub file {}", path.display()))?;

    log::info!("Created new file: {}", path.display());
    Ok(true)
}
