//! Export joined cycle pairs to CSV and JSON.
//!
//! The CSV is meant to be easy to consume in spreadsheets or downstream
//! scripts; the JSON is the "portable" representation of a computed cycle
//! (run metadata + pairs), with the schema defined by `domain::CycleFile`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::app::pipeline::CountryRun;
use crate::domain::{CycleFile, JoinedPoint};
use crate::error::AppError;

/// Write joined pairs to a CSV file.
pub fn write_cycle_csv(path: &Path, points: &[JoinedPoint]) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    writeln!(file, "month,inflation_pct,output_gap_pct")
        .map_err(|e| AppError::new(2, format!("Failed to write export CSV header: {e}")))?;

    for p in points {
        writeln!(file, "{},{:.4},{:.4}", p.month, p.x, p.y)
            .map_err(|e| AppError::new(2, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

/// Write a cycle JSON file.
pub fn write_cycle_json(
    path: &Path,
    run: &CountryRun,
    window: usize,
    points: &[JoinedPoint],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create cycle JSON '{}': {e}", path.display()),
        )
    })?;

    let cycle = CycleFile {
        tool: "mcy".to_string(),
        country: run.config.country,
        window,
        x_label: run.config.inflation_label.to_string(),
        y_label: run.config.gap_label.to_string(),
        points: points.to_vec(),
    };

    serde_json::to_writer_pretty(file, &cycle)
        .map_err(|e| AppError::new(2, format!("Failed to write cycle JSON: {e}")))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MonthKey;

    #[test]
    fn csv_rows_match_the_joined_pairs() {
        let points = vec![
            JoinedPoint {
                month: MonthKey::at(2024, 6),
                x: 3.3,
                y: -0.5,
            },
            JoinedPoint {
                month: MonthKey::at(2024, 5),
                x: 3.4,
                y: -0.4,
            },
        ];

        let dir = std::env::temp_dir();
        let path = dir.join("mcy_test_cycle.csv");
        write_cycle_csv(&path, &points).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "month,inflation_pct,output_gap_pct");
        assert_eq!(lines[1], "2024-06,3.3000,-0.5000");
        assert_eq!(lines[2], "2024-05,3.4000,-0.4000");
    }

    #[test]
    fn cycle_json_round_trips() {
        let run = crate::app::pipeline::run_country(crate::domain::Country::Us);
        let points = run.joined(4);

        let dir = std::env::temp_dir();
        let path = dir.join("mcy_test_cycle.json");
        write_cycle_json(&path, &run, 4, &points).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let parsed: CycleFile = serde_json::from_reader(file).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(parsed.tool, "mcy");
        assert_eq!(parsed.window, 4);
        assert_eq!(parsed.points.len(), points.len());
        assert_eq!(parsed.points[0].month, points[0].month);
    }
}
