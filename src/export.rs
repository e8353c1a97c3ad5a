use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::league_table::{LeagueMetrics, Zone, team_rates};
use crate::state::{Competition, StandingsEntry};

/// Writes Standings, Metrics and Rates sheets. Returns the number of team rows.
pub fn export_standings(
    path: impl AsRef<Path>,
    competition: Competition,
    standings: &[StandingsEntry],
) -> Result<usize> {
    let path = path.as_ref();
    if standings.is_empty() {
        anyhow::bail!("no standings loaded for {}", competition.label());
    }

    let mut workbook = Workbook::new();
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Standings")?;
        write_rows(sheet, &standings_rows(standings))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Metrics")?;
        write_rows(sheet, &metrics_rows(competition, standings))?;
    }
    {
        let sheet = workbook.add_worksheet();
        sheet.set_name("Rates")?;
        write_rows(sheet, &rates_rows(standings))?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed writing workbook to {}", path.display()))?;
    Ok(standings.len())
}

pub fn default_export_path(competition: Competition) -> String {
    format!(
        "standings_{}_{}.xlsx",
        competition.code().to_ascii_lowercase(),
        Local::now().format("%Y%m%d_%H%M%S")
    )
}

fn standings_rows(standings: &[StandingsEntry]) -> Vec<Vec<String>> {
    let mut rows = vec![
        [
            "Pos", "Team", "Short", "Played", "Won", "Draw", "Lost", "GF", "GA", "GD", "Points",
            "Form", "Zone",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>(),
    ];
    for row in standings {
        rows.push(vec![
            row.position.to_string(),
            row.team.clone(),
            row.short_name.clone(),
            row.played.to_string(),
            row.won.to_string(),
            row.draw.to_string(),
            row.lost.to_string(),
            row.goals_for.to_string(),
            row.goals_against.to_string(),
            row.goal_difference.to_string(),
            row.points.to_string(),
            row.form.clone(),
            Zone::for_position(row.position, standings.len())
                .label()
                .to_string(),
        ]);
    }
    rows
}

fn metrics_rows(competition: Competition, standings: &[StandingsEntry]) -> Vec<Vec<String>> {
    let mut rows = vec![
        vec!["Metric".to_string(), "Value".to_string()],
        vec!["Competition".to_string(), competition.label().to_string()],
    ];
    if let Some(metrics) = LeagueMetrics::compute(standings) {
        rows.extend(
            metrics
                .rows()
                .into_iter()
                .map(|(label, value)| vec![label.to_string(), value]),
        );
    }
    rows
}

fn rates_rows(standings: &[StandingsEntry]) -> Vec<Vec<String>> {
    let mut rows = vec![vec![
        "Pos".to_string(),
        "Team".to_string(),
        "GF/match".to_string(),
        "GA/match".to_string(),
        "Win %".to_string(),
    ]];
    for rate in team_rates(standings) {
        rows.push(vec![
            rate.position.to_string(),
            rate.team,
            format!("{:.2}", rate.goals_for_per_match),
            format!("{:.2}", rate.goals_against_per_match),
            format!("{:.1}", rate.win_rate),
        ]);
    }
    rows
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data;

    #[test]
    fn standings_sheet_has_header_and_zones() {
        let table = sample_data::demo_standings(Competition::Ligue1);
        let rows = standings_rows(&table);
        assert_eq!(rows.len(), 11);
        assert_eq!(rows[0][1], "Team");
        assert_eq!(rows[1][1], "Paris SG");
        assert_eq!(rows[1][12], "Ligue des Champions");
        assert_eq!(rows[10][12], "Relégation");
    }

    #[test]
    fn metrics_sheet_lists_league_figures() {
        let table = sample_data::demo_standings(Competition::Ligue1);
        let rows = metrics_rows(Competition::Ligue1, &table);
        assert_eq!(rows[1][1], "Ligue 1");
        assert!(rows.iter().any(|r| r[0] == "Meilleure attaque" && r[1] == "Paris SG"));
    }

    #[test]
    fn empty_standings_refuse_to_export() {
        let path = std::env::temp_dir().join("football_dash_empty_export.xlsx");
        assert!(export_standings(&path, Competition::Ligue1, &[]).is_err());
    }

    #[test]
    fn writes_workbook_to_disk() {
        let path = std::env::temp_dir().join(format!(
            "football_dash_export_{}.xlsx",
            std::process::id()
        ));
        let table = sample_data::demo_standings(Competition::LaLiga);
        let rows = export_standings(&path, Competition::LaLiga, &table).unwrap();
        assert_eq!(rows, 10);
        assert!(path.exists());
        let _ = std::fs::remove_file(&path);
    }
}
