//! CSV batch evaluation.
//!
//! Input columns: `side1`, `side2`, `side3` (numeric) and an optional `label`
//! naming the submitter. Every row yields one `Record`; rows with missing or
//! malformed sides carry an `error` instead of result fields.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use polars::prelude::*;
use serde::Serialize;
use trigon::{analyze_with, ClassifyCfg};

use crate::output::{Record, ResultJson};

const SIDE_COLUMNS: [&str; 3] = ["side1", "side2", "side3"];

/// One parsed CSV row; `None` marks an empty or non-numeric cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: Option<String>,
    pub sides: [Option<f64>; 3],
}

/// Counts reported after a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub rows: usize,
    pub triangles: usize,
    pub not_triangles: usize,
    pub errors: usize,
}

pub fn read_rows(input: &Path) -> Result<Vec<Row>> {
    let df = LazyCsvReader::new(input)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", input.display()))?
        .collect()
        .with_context(|| format!("reading {}", input.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(3);
    for name in SIDE_COLUMNS {
        let col = df
            .column(name)
            .with_context(|| format!("missing column `{name}`"))?
            .cast(&DataType::Float64)?;
        columns.push(col.f64()?.into_iter().collect());
    }
    let labels: Vec<Option<String>> = match df.column("label") {
        Ok(col) => {
            let col = col.cast(&DataType::String)?;
            col.str()?
                .into_iter()
                .map(|s| s.map(str::to_string))
                .collect()
        }
        Err(_) => vec![None; df.height()],
    };

    Ok((0..df.height())
        .map(|i| Row {
            label: labels[i].clone(),
            sides: [columns[0][i], columns[1][i], columns[2][i]],
        })
        .collect())
}

/// Evaluate one row; never fails, errors land in the record.
pub fn evaluate_row(row: &Row, cfg: &ClassifyCfg, created_at: String) -> Record {
    let [side1, side2, side3] = row.sides;
    let outcome = match (side1, side2, side3) {
        (Some(a), Some(b), Some(c)) => analyze_with(a, b, c, cfg).map_err(|e| e.to_string()),
        _ => Err("missing side length".to_string()),
    };
    let (result, error) = match outcome {
        Ok(r) => (Some(ResultJson::from(&r)), None),
        Err(e) => (None, Some(e)),
    };
    Record {
        label: row.label.clone(),
        side1,
        side2,
        side3,
        result,
        error,
        created_at,
    }
}

pub fn summarize(records: &[Record]) -> Summary {
    let mut s = Summary {
        rows: records.len(),
        ..Summary::default()
    };
    for rec in records {
        match &rec.result {
            Some(r) if r.is_triangle => s.triangles += 1,
            Some(_) => s.not_triangles += 1,
            None => s.errors += 1,
        }
    }
    s
}

/// Read `input`, evaluate every row, and write the records to `out` as JSON.
pub fn run(input: &Path, out: &Path, cfg: &ClassifyCfg) -> Result<Summary> {
    let rows = read_rows(input)?;
    let records: Vec<Record> = rows
        .iter()
        .map(|row| evaluate_row(row, cfg, Utc::now().to_rfc3339()))
        .collect();
    for rec in records.iter().filter(|r| r.error.is_some()) {
        tracing::warn!(label = ?rec.label, error = ?rec.error, "row_rejected");
    }
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&records)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(summarize(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn evaluate_row_covers_all_outcomes() {
        let cfg = ClassifyCfg::default();
        let at = || "2024-01-01T00:00:00+00:00".to_string();
        let ok = evaluate_row(
            &Row {
                label: Some("ada".into()),
                sides: [Some(3.0), Some(4.0), Some(5.0)],
            },
            &cfg,
            at(),
        );
        assert_eq!(ok.result.as_ref().unwrap().triangle_type, "Scalene Right");
        assert!(ok.error.is_none());

        let flat = evaluate_row(
            &Row {
                label: None,
                sides: [Some(1.0), Some(1.0), Some(3.0)],
            },
            &cfg,
            at(),
        );
        assert!(!flat.result.as_ref().unwrap().is_triangle);

        let bad = evaluate_row(
            &Row {
                label: None,
                sides: [Some(0.0), Some(4.0), Some(5.0)],
            },
            &cfg,
            at(),
        );
        assert!(bad.result.is_none());
        assert!(bad.error.as_deref().unwrap().contains("side1"));

        let missing = evaluate_row(
            &Row {
                label: None,
                sides: [Some(3.0), None, Some(5.0)],
            },
            &cfg,
            at(),
        );
        assert_eq!(missing.error.as_deref(), Some("missing side length"));

        assert_eq!(
            summarize(&[ok, flat, bad, missing]),
            Summary {
                rows: 4,
                triangles: 1,
                not_triangles: 1,
                errors: 2
            }
        );
    }

    #[test]
    fn run_writes_one_record_per_row() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sides.csv");
        fs::write(
            &input,
            "label,side1,side2,side3\nada,3,4,5\nbob,5,5,8\ncy,1,1,3\ndee,0,4,5\n",
        )
        .unwrap();
        let out = dir.path().join("out/records.json");
        let summary = run(&input, &out, &ClassifyCfg::default()).unwrap();
        assert_eq!(
            summary,
            Summary {
                rows: 4,
                triangles: 2,
                not_triangles: 1,
                errors: 1
            }
        );

        let parsed: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        let recs = parsed.as_array().unwrap();
        assert_eq!(recs.len(), 4);
        assert_eq!(recs[0]["label"], "ada");
        assert!((recs[0]["area"].as_f64().unwrap() - 6.0).abs() < 1e-12);
        assert_eq!(recs[1]["triangle_type"], "Isosceles Obtuse");
        assert_eq!(recs[2]["triangle_type"], "Not a triangle");
        assert!(recs[3].get("error").is_some());
        assert!(recs[3]["created_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn label_column_is_optional() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sides.csv");
        fs::write(&input, "side1,side2,side3\n2.5,2.5,2.5\n").unwrap();
        let rows = read_rows(&input).unwrap();
        assert_eq!(
            rows,
            vec![Row {
                label: None,
                sides: [Some(2.5), Some(2.5), Some(2.5)]
            }]
        );
    }

    #[test]
    fn missing_side_column_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("sides.csv");
        fs::write(&input, "side1,side2\n3,4\n").unwrap();
        let err = read_rows(&input).unwrap_err();
        assert!(format!("{err:#}").contains("side3"));
    }
}
