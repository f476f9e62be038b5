//! Dataset Builder - Historical CSV → StatRecord Pipeline
//!
//! Loads per-season basketball stat lines from heterogeneous CSV exports and
//! normalizes them into `hoop_core::StatRecord`s:
//! - header aliases (`PTS`/`ppg`, `TRB`/`rpg`, `AST`/`apg`, ...)
//! - rebounds derived from `ORB` + `DRB` when no total column exists
//! - `,` or `;` delimited files, sniffed from the header row
//! - non-UTF-8 bytes decoded lossily instead of failing the whole file
//!
//! Malformed rows are counted and skipped, never fatal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use hoop_core::analysis::{compute_benchmarks, BenchmarkMap};
use hoop_core::models::{Position, StatRecord};

/// Canonical columns a dataset can provide, whatever its export calls them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Column {
    Player,
    Position,
    Age,
    Ppg,
    Rpg,
    Orb,
    Drb,
    Apg,
    Mpg,
    Games,
}

fn column_for(header: &str) -> Option<Column> {
    match header.trim().to_ascii_lowercase().as_str() {
        "player" | "name" | "player_name" => Some(Column::Player),
        "position" | "pos" => Some(Column::Position),
        "age" => Some(Column::Age),
        "ppg" | "pts" | "points" => Some(Column::Ppg),
        "rpg" | "trb" | "reb" | "rebounds" => Some(Column::Rpg),
        "orb" => Some(Column::Orb),
        "drb" => Some(Column::Drb),
        "apg" | "ast" | "assists" => Some(Column::Apg),
        "mpg" | "mp" | "min" | "minutes" => Some(Column::Mpg),
        "g" | "gp" | "games" => Some(Column::Games),
        _ => None,
    }
}

/// CSV parsing statistics
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
}

/// Parse a historical stats CSV into records plus parse statistics.
pub fn load_records(csv_path: &Path) -> Result<(Vec<StatRecord>, ParseStats)> {
    let raw = fs::read(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
    let text = String::from_utf8_lossy(&raw);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(&text))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .with_context(|| format!("Failed to read CSV header: {}", csv_path.display()))?
        .clone();

    let mut columns: HashMap<Column, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        if let Some(column) = column_for(header) {
            // First alias wins so e.g. TRB is not shadowed by a later REB.
            columns.entry(column).or_insert(idx);
        }
    }

    let has_rebounds = columns.contains_key(&Column::Rpg)
        || (columns.contains_key(&Column::Orb) && columns.contains_key(&Column::Drb));
    for required in [Column::Position, Column::Ppg, Column::Apg] {
        if !columns.contains_key(&required) {
            bail!("CSV is missing a required column: {:?}", required);
        }
    }
    if !has_rebounds {
        bail!("CSV is missing a rebounds column (RPG/TRB or ORB+DRB)");
    }

    let mut records = Vec::new();
    let mut stats = ParseStats::default();

    for (row, result) in reader.records().enumerate() {
        stats.total_rows += 1;
        let line = row + 2;

        let record = match result {
            Ok(record) => record,
            Err(err) => {
                stats.failed += 1;
                eprintln!("Warning: Line {} - unreadable row: {}", line, err);
                continue;
            }
        };

        match parse_row(&record, &columns) {
            Some(parsed) => {
                records.push(parsed);
                stats.parsed += 1;
            }
            None => {
                stats.failed += 1;
                eprintln!("Warning: Line {} - skipping malformed row", line);
            }
        }
    }

    Ok((records, stats))
}

/// Load a CSV and reduce it straight to position benchmarks.
pub fn load_benchmarks(csv_path: &Path) -> Result<(BenchmarkMap, ParseStats)> {
    let (records, stats) = load_records(csv_path)?;
    Ok((compute_benchmarks(&records), stats))
}

fn parse_row(record: &csv::StringRecord, columns: &HashMap<Column, usize>) -> Option<StatRecord> {
    let field = |column: Column| columns.get(&column).and_then(|&idx| record.get(idx));
    let float = |column: Column| field(column).and_then(|v| v.parse::<f32>().ok());

    let position = Position::from_label(field(Column::Position)?)?;
    let ppg = float(Column::Ppg)?;
    let apg = float(Column::Apg)?;
    let rpg = match float(Column::Rpg) {
        Some(rpg) => rpg,
        None => float(Column::Orb)? + float(Column::Drb)?,
    };

    if !(ppg.is_finite() && rpg.is_finite() && apg.is_finite()) {
        return None;
    }
    if ppg < 0.0 || rpg < 0.0 || apg < 0.0 {
        return None;
    }

    Some(StatRecord {
        player: field(Column::Player).unwrap_or("Unknown").to_string(),
        position,
        // Ages exported as "27.0" still parse.
        age: float(Column::Age).map(|age| age as u8).unwrap_or(0),
        ppg,
        rpg,
        apg,
        mpg: float(Column::Mpg).unwrap_or(0.0),
        games: float(Column::Games).map(|g| g as u16).unwrap_or(0),
    })
}

/// Pick the delimiter from the header row. Semicolon exports are common in
/// European spreadsheet dumps.
fn sniff_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or("");
    if header.contains(';') && !header.contains(',') {
        b';'
    } else {
        b','
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_a_plain_csv() {
        let file = write_csv(
            "Player,Pos,Age,PTS,TRB,AST,MP,G\n\
             Alpha,PG,24,18.5,4.2,8.1,34.0,78\n\
             Beta,C,29,14.0,11.3,1.6,30.5,70\n",
        );

        let (records, stats) = load_records(file.path()).unwrap();
        assert_eq!(stats, ParseStats { total_rows: 2, parsed: 2, failed: 0 });
        assert_eq!(records[0].player, "Alpha");
        assert_eq!(records[0].position, Position::PG);
        assert_eq!(records[1].rpg, 11.3);
        assert_eq!(records[1].games, 70);
    }

    #[test]
    fn derives_rebounds_from_orb_and_drb() {
        let file = write_csv(
            "name,position,age,ppg,ORB,DRB,apg\n\
             Gamma,SF,26,16.0,1.5,5.5,2.4\n",
        );

        let (records, _) = load_records(file.path()).unwrap();
        assert!((records[0].rpg - 7.0).abs() < 1e-6);
    }

    #[test]
    fn sniffs_semicolon_delimited_files() {
        let file = write_csv(
            "Player;Pos;Age;PTS;TRB;AST\n\
             Delta;SG;23;21.0;3.9;3.1\n",
        );

        let (records, stats) = load_records(file.path()).unwrap();
        assert_eq!(stats.parsed, 1);
        assert_eq!(records[0].position, Position::SG);
        assert_eq!(records[0].ppg, 21.0);
    }

    #[test]
    fn malformed_rows_are_counted_not_fatal() {
        let file = write_csv(
            "Player,Pos,Age,PTS,TRB,AST\n\
             Good,PF,27,15.5,8.0,2.2\n\
             BadPosition,QB,27,15.5,8.0,2.2\n\
             BadNumber,C,27,not-a-number,8.0,2.2\n\
             Negative,C,27,-4.0,8.0,2.2\n",
        );

        let (records, stats) = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(stats, ParseStats { total_rows: 4, parsed: 1, failed: 3 });
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let file = write_csv("Player,Pos,Age,TRB,AST\nNoPoints,PG,24,4.0,6.0\n");
        assert!(load_records(file.path()).is_err());
    }

    #[test]
    fn combo_positions_resolve_to_the_first_listed() {
        let file = write_csv(
            "Player,Pos,Age,PTS,TRB,AST\n\
             Swing,SG-PG,25,19.0,4.0,5.0\n",
        );

        let (records, _) = load_records(file.path()).unwrap();
        assert_eq!(records[0].position, Position::SG);
    }

    #[test]
    fn benchmarks_come_straight_from_the_file() {
        let file = write_csv(
            "Player,Pos,Age,PTS,TRB,AST\n\
             A,PG,24,10.0,3.0,5.0\n\
             B,PG,26,20.0,4.0,7.0\n\
             Lone,C,30,15.0,11.0,1.0\n",
        );

        let (benchmarks, stats) = load_benchmarks(file.path()).unwrap();
        assert_eq!(stats.parsed, 3);
        assert!(benchmarks.contains_key(&Position::PG));
        // A single Center record is below the benchmark minimum.
        assert!(!benchmarks.contains_key(&Position::C));
    }
}
