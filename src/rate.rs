// src/rate.rs

// Rate slice + hawk/dove classification.
//
// The federal funds rate projections sit at fixed row offsets in the SEP
// table (see params.rs). We take the "current projection" and "prior
// projection" rows, diff them per year, and label each diff.

use std::error::Error;
use std::fmt;

use crate::params::{CURRENT_ROW_OFFSET, PRIOR_ROW_OFFSET, SLICE_COLUMN_COUNT};
use crate::table::RawTable;

/// Directional label for one Change value. Absence of a label (small or
/// missing change) is expressed as `Option::None` at the call sites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    BigDove,
    Dove,
    Hawk,
    BigHawk,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::BigDove => "Big Dove",
            Direction::Dove => "Dove",
            Direction::Hawk => "Hawk",
            Direction::BigHawk => "Big Hawk",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Threshold classifier, first match wins. Values are percentage points.
/// The comparisons are strict, so ±0.25 and ±0.5 themselves get no label.
pub fn assign_direction(change: Option<f64>) -> Option<Direction> {
    let v = change?;
    if v.is_nan() {
        None
    } else if v < -0.5 {
        Some(Direction::BigDove)
    } else if v < -0.25 {
        Some(Direction::Dove)
    } else if v > 0.5 {
        Some(Direction::BigHawk)
    } else if v > 0.25 {
        Some(Direction::Hawk)
    } else {
        None
    }
}

/// The two projection rows plus derived rows, indexed by the label column.
/// Recomputed on every fetch; never persisted.
pub struct RateSlice {
    /// Header of the label column (index name).
    pub index_name: String,
    /// Headers of the four numeric columns.
    pub columns: Vec<String>,
    /// Label-column values of the two source rows.
    pub row_labels: [String; 2],
    pub current: Vec<f64>,
    pub prior: Vec<f64>,
    pub change: Vec<f64>,
    pub direction: Vec<Option<Direction>>,
}

#[derive(Debug)]
pub enum AnalyzeError {
    /// Table has fewer rows than the fixed offsets require.
    RowsOutOfRange { have: usize, need: usize },
    /// A source row is narrower than the slice.
    ShortRow { row: usize, have: usize, need: usize },
    /// A cell expected to hold a number does not parse.
    NonNumericCell { row: usize, col: usize, value: String },
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::RowsOutOfRange { have, need } => {
                write!(f, "table has {have} rows, need at least {need}")
            }
            AnalyzeError::ShortRow { row, have, need } => {
                write!(f, "row {row} has {have} cells, need at least {need}")
            }
            AnalyzeError::NonNumericCell { row, col, value } => {
                write!(f, "cell ({row},{col}) is not numeric: {value:?}")
            }
        }
    }
}

impl Error for AnalyzeError {}

/// Slice the projection rows out of `table` and derive Change/Direction.
///
/// Fails loudly when the table shape does not match the fixed offsets,
/// rather than silently returning an unrelated slice.
pub fn analyze(table: &RawTable) -> Result<RateSlice, AnalyzeError> {
    let need_rows = PRIOR_ROW_OFFSET + 1;
    if table.rows.len() < need_rows {
        return Err(AnalyzeError::RowsOutOfRange {
            have: table.rows.len(),
            need: need_rows,
        });
    }

    let current_row = &table.rows[CURRENT_ROW_OFFSET];
    let prior_row = &table.rows[PRIOR_ROW_OFFSET];
    for (offset, row) in [(CURRENT_ROW_OFFSET, current_row), (PRIOR_ROW_OFFSET, prior_row)] {
        if row.len() < SLICE_COLUMN_COUNT {
            return Err(AnalyzeError::ShortRow {
                row: offset,
                have: row.len(),
                need: SLICE_COLUMN_COUNT,
            });
        }
    }

    let current = parse_numeric(current_row, CURRENT_ROW_OFFSET)?;
    let prior = parse_numeric(prior_row, PRIOR_ROW_OFFSET)?;

    let change: Vec<f64> = current
        .iter()
        .zip(&prior)
        .map(|(c, p)| c - p)
        .collect();
    let direction = change.iter().map(|&v| assign_direction(Some(v))).collect();

    let columns = table
        .headers
        .iter()
        .skip(1)
        .take(SLICE_COLUMN_COUNT - 1)
        .cloned()
        .collect();
    let index_name = table.headers.first().cloned().unwrap_or_default();

    Ok(RateSlice {
        index_name,
        columns,
        row_labels: [current_row[0].clone(), prior_row[0].clone()],
        current,
        prior,
        change,
        direction,
    })
}

/// Columns 1..SLICE_COLUMN_COUNT of one row as floats.
fn parse_numeric(row: &[String], row_offset: usize) -> Result<Vec<f64>, AnalyzeError> {
    row[1..SLICE_COLUMN_COUNT]
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            cell.trim()
                .parse::<f64>()
                .map_err(|_| AnalyzeError::NonNumericCell {
                    row: row_offset,
                    col: i + 1,
                    value: cell.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawTable;

    #[test]
    fn classify_thresholds_and_boundaries() {
        assert_eq!(assign_direction(None), None);
        assert_eq!(assign_direction(Some(f64::NAN)), None);
        assert_eq!(assign_direction(Some(-0.6)), Some(Direction::BigDove));
        assert_eq!(assign_direction(Some(-0.5)), None); // boundary, not Dove
        assert_eq!(assign_direction(Some(-0.3)), Some(Direction::Dove));
        assert_eq!(assign_direction(Some(-0.25)), None);
        assert_eq!(assign_direction(Some(0.0)), None);
        assert_eq!(assign_direction(Some(0.25)), None);
        assert_eq!(assign_direction(Some(0.3)), Some(Direction::Hawk));
        assert_eq!(assign_direction(Some(0.5)), None); // boundary, not Big Hawk
        assert_eq!(assign_direction(Some(0.6)), Some(Direction::BigHawk));
    }

    #[test]
    fn classify_just_past_big_dove_boundary() {
        assert_eq!(assign_direction(Some(-0.51)), Some(Direction::BigDove));
        assert_eq!(assign_direction(Some(-0.49)), Some(Direction::Dove));
        assert_eq!(assign_direction(Some(0.49)), Some(Direction::Hawk));
        assert_eq!(assign_direction(Some(0.51)), Some(Direction::BigHawk));
    }

    fn fixture(current: [&str; 4], prior: [&str; 4]) -> RawTable {
        let mut rows: Vec<Vec<String>> = (0..9)
            .map(|i| vec![format!("filler {i}"), s!("1"), s!("1"), s!("1"), s!("1")])
            .collect();
        let mut cur = vec![s!("Median")];
        cur.extend(current.iter().map(|c| s!(*c)));
        let mut pri = vec![s!("Median prior")];
        pri.extend(prior.iter().map(|c| s!(*c)));
        rows.push(cur);
        rows.push(pri);

        RawTable {
            headers: vec![s!("Variable"), s!("2024"), s!("2025"), s!("2026"), s!("Longer run")],
            rows,
        }
    }

    #[test]
    fn change_is_current_minus_prior() {
        let t = fixture(["4.4", "3.4", "2.9", "2.8"], ["4.9", "3.9", "3.1", "2.8"]);
        let slice = analyze(&t).unwrap();
        assert_eq!(slice.row_labels[0], "Median");
        assert_eq!(slice.columns, vec!["2024", "2025", "2026", "Longer run"]);
        assert!((slice.change[0] - (-0.5)).abs() < 1e-9);
        assert!((slice.change[1] - (-0.5)).abs() < 1e-9);
        assert!((slice.change[2] - (-0.2)).abs() < 1e-9);
        assert_eq!(slice.change[3], 0.0);
        // -0.5 is a boundary: no label
        assert_eq!(slice.direction, vec![None, None, None, None]);
    }

    #[test]
    fn big_moves_get_big_labels() {
        let t = fixture(["4.3", "5.2", "3.0", "3.0"], ["4.9", "4.6", "3.0", "3.0"]);
        let slice = analyze(&t).unwrap();
        assert_eq!(slice.direction[0], Some(Direction::BigDove)); // -0.6
        assert_eq!(slice.direction[1], Some(Direction::BigHawk)); // +0.6
    }

    #[test]
    fn short_table_is_rows_out_of_range() {
        let t = RawTable {
            headers: vec![s!("Variable")],
            rows: vec![vec![s!("only row")]],
        };
        match analyze(&t) {
            Err(AnalyzeError::RowsOutOfRange { have: 1, need: 11 }) => {}
            other => panic!("expected RowsOutOfRange, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn non_numeric_cell_names_the_cell() {
        let t = fixture(["4.4", "n/a", "2.9", "2.8"], ["4.9", "3.9", "3.1", "2.8"]);
        match analyze(&t) {
            Err(AnalyzeError::NonNumericCell { row: 9, col: 2, value }) => {
                assert_eq!(value, "n/a");
            }
            other => panic!("expected NonNumericCell, got {:?}", other.map(|_| ())),
        }
    }
}
