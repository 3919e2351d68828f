use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;

use crate::models::{Player, PlayerResult, ProblemCatalog, RawSubmission, SolvedRecord};
use crate::stubs;
use crate::uhapi::{self, JsonSource};

/// Reduces a submission list to one record per accepted problem.
///
/// Submissions are walked newest first, so when a problem was accepted more than once
/// the most recent accepted run is the one that gets recorded. `on_solved` is called
/// once for every record kept, along with the submission it came from.
pub fn dedup_solved(
    mut submissions: Vec<RawSubmission>,
    catalog: &ProblemCatalog,
    mut on_solved: impl FnMut(&SolvedRecord, &RawSubmission),
) -> Vec<SolvedRecord> {
    // Stable, so equal timestamps keep their feed order.
    submissions.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let mut seen = HashSet::new();
    let mut solved = Vec::new();

    for sub in submissions.iter().filter(|sub| sub.accepted()) {
        if !seen.insert(sub.problem_id) {
            continue;
        }

        let record = SolvedRecord::new(sub, catalog.resolve(sub.problem_id));
        on_solved(&record, sub);
        solved.push(record);
    }

    solved
}

pub fn average_runtime(solved: &[SolvedRecord]) -> f64 {
    if solved.is_empty() {
        return 0.0;
    }
    solved.iter().map(|r| r.runtime_seconds).sum::<f64>() / solved.len() as f64
}

/// Builds a player's result from already-fetched submissions, scaffolding a stub
/// file for every solved problem. Stub failures are logged and skipped.
pub fn summarize(
    player: &Player,
    submissions: Vec<RawSubmission>,
    catalog: &ProblemCatalog,
    output_dir: &Path,
) -> PlayerResult {
    let folder = output_dir.join(&player.folder);
    let mut new_stub_files = 0;

    let solved = dedup_solved(submissions, catalog, |record, sub| {
        match stubs::ensure_stub(&folder, record, sub.language) {
            Ok(true) => new_stub_files += 1,
            Ok(false) => {}
            Err(err) => log::error!(
                "Couldn't create stub for {} ({}): {:#}",
                record.label(), player.display_name, err
            ),
        }
    });

    log::info!("  -> {} new stub files created.", new_stub_files);

    PlayerResult {
        display_name: player.display_name.clone(),
        average_runtime: average_runtime(&solved),
        solved,
        new_stub_files,
    }
}

/// Fetches and summarizes one player. A failed fetch is reported and turned into
/// an empty result so the rest of the batch can carry on.
pub fn aggregate_player(
    source: &impl JsonSource,
    player: &Player,
    catalog: &ProblemCatalog,
    output_dir: &Path,
) -> PlayerResult {
    log::info!("Fetching data for {}...", player.display_name);

    let fetched: Result<Vec<RawSubmission>> = uhapi::fetch_submissions(source, player.user_id);
    match fetched {
        Ok(submissions) => summarize(player, submissions, catalog, output_dir),
        Err(err) => {
            log::error!("Couldn't fetch submissions for {}: {:#}", player.display_name, err);
            PlayerResult::empty(&player.display_name)
        }
    }
}
