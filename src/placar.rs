use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use std::fs;
use std::path::Path;

use crate::aggregate;
use crate::board;
use crate::config::Config;
use crate::models::PlayerResult;
use crate::uhapi::{self, JsonSource};

/// One full pass: load the catalog, aggregate every player in order, then write
/// the summary and detail documents. Only a catalog or report failure is fatal.
pub fn run_placar(config: &Config, source: &impl JsonSource, now: NaiveDateTime) -> Result<Vec<PlayerResult>> {
    log::info!("Downloading problem list...");
    let catalog = uhapi::fetch_catalog(source)?;
    log::debug!("[run_placar] Catalog holds {} problems.", catalog.len());

    let results = config.players
        .iter()
        .map(|player| aggregate::aggregate_player(source, player, &catalog, &config.output_dir))
        .collect::<Vec<_>>();

    let ranked = board::rank(&results);
    let summary = board::render_summary(&ranked, now, &config.detail_file);
    let details = board::render_details(&ranked);

    write_report(&config.output_dir.join(&config.summary_file), &summary)?;
    write_report(&config.output_dir.join(&config.detail_file), &details)?;

    Ok(results)
}

fn write_report(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("Couldn't write {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;
    use crate::uhapi::testing::FakeSource;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::time::Duration;
    use tempfile::TempDir;

    fn config(output_dir: &Path) -> Config {
        Config {
            players: vec![
                Player { display_name: "Eu".into(), user_id: 339, folder: "Gabriel".into() },
                Player { display_name: "Amigo".into(), user_id: 460, folder: "Amigo".into() },
            ],
            api_base: "http://localhost".into(),
            output_dir: output_dir.to_path_buf(),
            summary_file: "README.md".into(),
            detail_file: "detalhes.md".into(),
            timeout: Duration::from_secs(1),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 0).unwrap()
    }

    fn catalog() -> serde_json::Value {
        json!([[36, 100, "The 3n + 1 problem"], [37, 101, "The Blocks Problem"]])
    }

    #[test]
    fn one_failing_player_does_not_sink_the_run() {
        let temp_dir = TempDir::new().unwrap();
        let source = FakeSource::default()
            .with("p", catalog())
            .with("subs-user/339", json!({"subs": [
                [1, 36, 90, 15000, 100, 3],
                [2, 37, 90, 12000, 200, 1],
                [3, 37, 90, 500, 50, 1],
            ]}));

        let results = run_placar(&config(temp_dir.path()), &source, now()).unwrap();
        assert_eq!(results[0].solved_count(), 2);
        assert_eq!(results[1], PlayerResult::empty("Amigo"));

        let stubs = temp_dir.path().join("Gabriel");
        assert!(stubs.join("100-The_3n_1_problem.cpp").exists());
        assert!(stubs.join("101-The_Blocks_Problem.c").exists());
        assert!(!temp_dir.path().join("Amigo").exists());

        let summary = fs::read_to_string(temp_dir.path().join("README.md")).unwrap();
        assert!(summary.contains("| 🥇 | Eu | **2** | 13.500s |"));
        assert!(summary.contains("| 🥈 | Amigo | **0** | 0.000s |"));

        let details = fs::read_to_string(temp_dir.path().join("detalhes.md")).unwrap();
        assert!(details.contains("## Amigo (Total: 0)"));
        assert!(details.contains("| 101 - The Blocks Problem | 12.000s |"));
    }

    #[test]
    fn missing_catalog_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let source = FakeSource::default()
            .with("subs-user/339", json!({"subs": []}));

        assert!(run_placar(&config(temp_dir.path()), &source, now()).is_err());
        assert!(!temp_dir.path().join("README.md").exists());
    }

    #[test]
    fn reruns_overwrite_reports_but_not_stubs() {
        let temp_dir = TempDir::new().unwrap();
        let source = FakeSource::default()
            .with("p", catalog())
            .with("subs-user/339", json!({"subs": [[1, 36, 90, 15000, 100, 3]]}))
            .with("subs-user/460", json!({"subs": [[1, 37, 90, 15000, 100, 6]]}));

        run_placar(&config(temp_dir.path()), &source, now()).unwrap();
        let stub = temp_dir.path().join("Amigo").join("101-The_Blocks_Problem.py");
        fs::write(&stub, "print(42)\n").unwrap();
        fs::write(temp_dir.path().join("README.md"), "stale").unwrap();

        let results = run_placar(&config(temp_dir.path()), &source, now()).unwrap();
        assert!(results.iter().all(|r| r.new_stub_files == 0));
        assert_eq!(fs::read_to_string(&stub).unwrap(), "print(42)\n");
        assert_ne!(fs::read_to_string(temp_dir.path().join("README.md")).unwrap(), "stale");
    }
}
