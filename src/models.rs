use std::collections::HashMap;

/// Verdict code the judge uses for an accepted submission.
pub const ACCEPTED_VERDICT: u64 = 90;

/// Raw runtimes above this are milliseconds; anything at or below is taken as-is.
pub const MILLIS_THRESHOLD: u64 = 10000;

pub const UNKNOWN_TITLE: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub display_name: String,
    pub user_id: u64,
    pub folder: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub display_number: u64,
    pub title: String,
}

impl CatalogEntry {
    /// Stand-in for problems the catalog doesn't know about.
    pub fn unknown() -> Self {
        Self { display_number: 0, title: String::from(UNKNOWN_TITLE) }
    }
}

/// Problem id -> (display number, title). Built once per run, read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct ProblemCatalog {
    entries: HashMap<u64, CatalogEntry>,
}

impl ProblemCatalog {
    pub fn new(entries: HashMap<u64, CatalogEntry>) -> Self {
        Self { entries }
    }

    /// Looks up `problem_id`, falling back to [`CatalogEntry::unknown`].
    pub fn resolve(&self, problem_id: u64) -> CatalogEntry {
        self.entries
            .get(&problem_id)
            .cloned()
            .unwrap_or_else(CatalogEntry::unknown)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(u64, CatalogEntry)> for ProblemCatalog {
    fn from_iter<I: IntoIterator<Item = (u64, CatalogEntry)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSubmission {
    pub problem_id: u64,
    pub verdict: u64,
    pub runtime: u64,
    pub timestamp: u64,
    pub language: u64,
}

impl RawSubmission {
    pub fn accepted(&self) -> bool {
        self.verdict == ACCEPTED_VERDICT
    }

    /// Runtime in "seconds": raw values above [`MILLIS_THRESHOLD`] are divided by 1000,
    /// smaller values pass through untouched.
    pub fn runtime_seconds(&self) -> f64 {
        normalize_runtime(self.runtime)
    }
}

pub fn normalize_runtime(raw: u64) -> f64 {
    if raw > MILLIS_THRESHOLD {
        raw as f64 / 1000.0
    } else {
        raw as f64
    }
}

/// Formats a runtime the way both reports show it, e.g. `15.000s`.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.3}s", seconds)
}

/// One accepted problem, joined with its catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SolvedRecord {
    pub problem_id: u64,
    pub display_number: u64,
    pub title: String,
    pub runtime_seconds: f64,
}

impl SolvedRecord {
    pub fn new(submission: &RawSubmission, entry: CatalogEntry) -> Self {
        Self {
            problem_id: submission.problem_id,
            display_number: entry.display_number,
            title: entry.title,
            runtime_seconds: submission.runtime_seconds(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} - {}", self.display_number, self.title)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerResult {
    pub display_name: String,
    /// Most recent first.
    pub solved: Vec<SolvedRecord>,
    pub average_runtime: f64,
    pub new_stub_files: usize,
}

impl PlayerResult {
    /// Result used when a player's submissions couldn't be fetched.
    pub fn empty(display_name: &str) -> Self {
        Self {
            display_name: String::from(display_name),
            solved: Vec::new(),
            average_runtime: 0.0,
            new_stub_files: 0,
        }
    }

    pub fn solved_count(&self) -> usize {
        self.solved.len()
    }
}

impl std::fmt::Display for PlayerResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} solved, average {}",
            self.display_name,
            self.solved_count(),
            format_seconds(self.average_runtime)
        )
    }
}
