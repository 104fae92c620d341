// Text and JSON rendering of engine results.

use std::fmt::Display;
use std::io::Write;

use anyhow::{Context, Result};
use hofcast_core::leaderboard::{BallotLeaderboardEntry, LeaderboardEntry};
use hofcast_core::pipeline::Evaluation;
use hofcast_core::projection::{ProjectionPoint, TierMilestone};
use hofcast_core::sport::InductionPath;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A projection and its tier summary, as emitted by `project`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport {
    pub player_id: String,
    pub name: String,
    pub value_per_season: f64,
    pub points: Vec<ProjectionPoint>,
    pub timeline: Vec<TierMilestone>,
}

pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, data: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, data).context("failed to serialize JSON output")?;
    writeln!(out)?;
    Ok(())
}

fn pct(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn write_evaluation(out: &mut dyn Write, eval: &Evaluation) -> Result<()> {
    writeln!(
        out,
        "{} ({}) - {} {}, {}",
        eval.name, eval.player_id, eval.sport, eval.position, eval.player_type
    )?;
    writeln!(out)?;

    let agg = &eval.aggregate;
    let base = &eval.comparison.baseline;
    writeln!(out, "{:<10} {:>8} {:>8} {:>8}", "", "Player", "HOF avg", "Ratio")?;
    writeln!(
        out,
        "{:<10} {:>8.1} {:>8.1} {:>8.2}",
        "Career", agg.career_value, base.career_value, eval.comparison.career_ratio
    )?;
    writeln!(
        out,
        "{:<10} {:>8.1} {:>8.1} {:>8.2}",
        "Peak", agg.peak_value, base.peak_value, eval.comparison.peak_ratio
    )?;
    writeln!(
        out,
        "{:<10} {:>8.1} {:>8.1} {:>8.2}",
        "JAWS", agg.jaws, base.jaws, eval.comparison.jaws_ratio
    )?;
    if !agg.peak_seasons.is_empty() {
        let peak: Vec<String> = agg
            .peak_seasons
            .iter()
            .map(|p| format!("{} ({:.1})", p.season, p.value))
            .collect();
        writeln!(out, "Peak seasons: {}", peak.join(", "))?;
    }
    writeln!(out)?;

    let s = &eval.score;
    writeln!(out, "HOF score: {}/100 - {}", s.overall, s.tier)?;
    writeln!(out, "  JAWS        {:>5.1} / 40", s.jaws_component)?;
    writeln!(out, "  Awards      {:>5.1} / 25", s.awards_component)?;
    writeln!(out, "  Milestones  {:>5.1} / 20", s.milestones_component)?;
    writeln!(out, "  Trajectory  {:>5.1} / 15", s.trajectory_component)?;
    writeln!(out)?;

    match &eval.induction {
        Some(induction) => {
            let path = match induction.path {
                InductionPath::Ballot => "ballot",
                InductionPath::Committee => "committee",
            };
            writeln!(out, "Inducted {} ({})", induction.year, path)?;
        }
        None => {
            let p = &eval.prediction;
            writeln!(
                out,
                "Induction probability {}, projected vote {}",
                pct(p.induction_probability),
                pct(p.predicted_vote_pct)
            )?;
            writeln!(out, "Outlook: {} - {}", p.outcome.label, p.outcome.description)?;
        }
    }

    let milestones: Vec<_> = eval.surfaced_milestones().collect();
    if !milestones.is_empty() {
        writeln!(out)?;
        writeln!(out, "Milestones")?;
        for m in milestones {
            let mark = if m.reached { "*" } else { " " };
            writeln!(
                out,
                " {mark} {:<24} {:>9} {:>6} (HOF avg {})",
                m.label,
                trim_number(m.value),
                pct(m.progress_pct),
                trim_number(m.hof_average)
            )?;
        }
    }

    write_counts(out, "Awards", eval.awards.iter().map(|a| (&a.label, a.count)))?;
    write_counts(
        out,
        "Achievements",
        eval.achievements.iter().map(|a| (&a.label, a.count)),
    )?;
    Ok(())
}

fn write_counts<'a, L: Display + 'a>(
    out: &mut dyn Write,
    heading: &str,
    counts: impl Iterator<Item = (&'a L, u32)>,
) -> Result<()> {
    let lines: Vec<String> = counts.map(|(label, n)| format!("  {label} x{n}")).collect();
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "{heading}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Rate stats keep three decimals, counting stats none.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else if value.abs() < 10.0 {
        format!("{value:.3}")
    } else {
        format!("{value:.1}")
    }
}

pub fn write_projection(out: &mut dyn Write, report: &ProjectionReport) -> Result<()> {
    writeln!(
        out,
        "{} ({}) at {:.1} per season",
        report.name, report.player_id, report.value_per_season
    )?;
    writeln!(
        out,
        "{:>4} {:>6} {:>4} {:>8} {:>6} {:>6}  Tier",
        "+Yr", "Season", "Age", "Career", "JAWS", "Score"
    )?;
    for p in &report.points {
        let age = p.age.map(|a| a.to_string()).unwrap_or_else(|| "-".into());
        writeln!(
            out,
            "{:>4} {:>6} {:>4} {:>8.1} {:>6.1} {:>6}  {}",
            p.year_offset, p.season, age, p.projected_career_value, p.projected_jaws,
            p.projected_score, p.tier
        )?;
    }
    writeln!(out)?;
    for t in &report.timeline {
        let when = match t.seasons_until {
            Some(0) => "now".to_string(),
            Some(1) => "1 season".to_string(),
            Some(n) => format!("{n} seasons"),
            None => "not reached".to_string(),
        };
        writeln!(out, "{:<18} ({:>2}+): {}", t.tier.label(), t.threshold, when)?;
    }
    Ok(())
}

pub fn write_leaderboard<P: Display>(out: &mut dyn Write, entries: &[LeaderboardEntry<P>]) -> Result<()> {
    writeln!(
        out,
        "{:>3}  {:<24} {:<4} {:>6} {:>6} {:>6} {:>5}  Tier",
        "#", "Player", "Pos", "Career", "Peak", "JAWS", "Score"
    )?;
    for (i, e) in entries.iter().enumerate() {
        let eval = &e.evaluation;
        writeln!(
            out,
            "{:>3}  {:<24} {:<4} {:>6.1} {:>6.1} {:>6.1} {:>5}  {}",
            i + 1,
            eval.name,
            e.position.to_string(),
            eval.aggregate.career_value,
            eval.aggregate.peak_value,
            eval.aggregate.jaws,
            eval.score.overall,
            eval.score.tier
        )?;
    }
    Ok(())
}

pub fn write_ballot<P: Display>(
    out: &mut dyn Write,
    entries: &[BallotLeaderboardEntry<P>],
) -> Result<()> {
    writeln!(
        out,
        "{:>3}  {:<24} {:<4} {:>6} {:>7} {:>5}  Status",
        "#", "Player", "Pos", "JAWS", "Vote", "Score"
    )?;
    for (i, b) in entries.iter().enumerate() {
        let eval = &b.entry.evaluation;
        let vote = b.vote_percentage.map(pct).unwrap_or_else(|| "-".into());
        let status = if b.is_confirmed_inductee() {
            "elected"
        } else if b.is_new_to_ballot {
            "new"
        } else {
            ""
        };
        writeln!(
            out,
            "{:>3}  {:<24} {:<4} {:>6.1} {:>7} {:>5}  {}",
            i + 1,
            eval.name,
            b.entry.position.to_string(),
            eval.aggregate.jaws,
            vote,
            eval.score.overall,
            status
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_trim_by_magnitude() {
        assert_eq!(trim_number(3000.0), "3000");
        assert_eq!(trim_number(0.3124), "0.312");
        assert_eq!(trim_number(2.5), "2.500");
        assert_eq!(trim_number(57.24), "57.2");
    }

    #[test]
    fn json_output_ends_with_newline() {
        let mut buf = Vec::new();
        write_json(&mut buf, &vec![1, 2]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with("]\n"));
    }
}
