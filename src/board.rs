use chrono::NaiveDateTime;
use itertools::Itertools;

use crate::models::{format_seconds, PlayerResult};

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

/// Medal for the top three, the 1-based position otherwise.
pub fn rank_glyph(index: usize) -> String {
    MEDALS
        .get(index)
        .map_or_else(|| (index + 1).to_string(), |medal| medal.to_string())
}

/// Most solved first. Ties keep configuration order.
pub fn rank(results: &[PlayerResult]) -> Vec<&PlayerResult> {
    results
        .iter()
        .sorted_by(|a, b| b.solved_count().cmp(&a.solved_count()))
        .collect()
}

pub fn render_summary(ranked: &[&PlayerResult], updated_at: NaiveDateTime, detail_link: &str) -> String {
    let mut output = format!(
        "# ⚔️ Algorithm Battle\n\
         > Updated: {}\n\
         \n\
         | Rank | Name | Solved | Average Time |\n\
         | :---: | :--- | :---: | :---: |\n",
        updated_at.format("%d/%m/%Y %H:%M")
    );

    for (i, result) in ranked.iter().enumerate() {
        output += &format!(
            "| {} | {} | **{}** | {} |\n",
            rank_glyph(i),
            result.display_name,
            result.solved_count(),
            format_seconds(result.average_runtime)
        );
    }

    output += &format!("\n\n👉 [See details]({})\n", detail_link);
    output
}

pub fn render_details(ranked: &[&PlayerResult]) -> String {
    let mut output = String::from("# 📜 Solved Problem Details\n\n");

    for result in ranked {
        output += &format!("## {} (Total: {})\n", result.display_name, result.solved_count());
        output += "| Problem | Time |\n| :--- | :---: |\n";
        for record in &result.solved {
            output += &format!("| {} | {} |\n", record.label(), format_seconds(record.runtime_seconds));
        }
        output += "\n---\n\n";
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SolvedRecord;
    use chrono::NaiveDate;

    fn result(name: &str, solved: usize) -> PlayerResult {
        PlayerResult {
            display_name: name.into(),
            solved: (0..solved as u64)
                .map(|i| SolvedRecord {
                    problem_id: i,
                    display_number: 100 + i,
                    title: format!("Problem {}", i),
                    runtime_seconds: 1.5,
                })
                .collect(),
            average_runtime: if solved > 0 { 1.5 } else { 0.0 },
            new_stub_files: 0,
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap().and_hms_opt(12, 5, 0).unwrap()
    }

    #[test]
    fn glyphs_for_each_position() {
        assert_eq!(rank_glyph(0), "🥇");
        assert_eq!(rank_glyph(1), "🥈");
        assert_eq!(rank_glyph(2), "🥉");
        assert_eq!(rank_glyph(3), "4");
        assert_eq!(rank_glyph(9), "10");
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let results = vec![result("C", 3), result("A", 5), result("B", 5), result("D", 0)];
        let names = rank(&results).iter().map(|r| r.display_name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn summary_lists_ranked_rows() {
        let results = vec![result("A", 5), result("B", 5), result("C", 3), result("D", 0)];
        let summary = render_summary(&rank(&results), noon(), "detalhes.md");

        assert!(summary.contains("> Updated: 09/03/2024 12:05"));
        assert!(summary.contains("| 🥇 | A | **5** | 1.500s |"));
        assert!(summary.contains("| 🥈 | B | **5** | 1.500s |"));
        assert!(summary.contains("| 🥉 | C | **3** | 1.500s |"));
        assert!(summary.contains("| 4 | D | **0** | 0.000s |"));
        assert!(summary.contains("[See details](detalhes.md)"));
    }

    #[test]
    fn details_follow_rank_and_insertion_order() {
        let results = vec![result("Low", 1), result("High", 2)];
        let details = render_details(&rank(&results));

        let high = details.find("## High (Total: 2)").unwrap();
        let low = details.find("## Low (Total: 1)").unwrap();
        assert!(high < low);

        let first = details.find("| 100 - Problem 0 | 1.500s |").unwrap();
        let second = details.find("| 101 - Problem 1 | 1.500s |").unwrap();
        assert!(first < second);
        assert_eq!(details.matches("\n---\n").count(), 2);
    }
}
