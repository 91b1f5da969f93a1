//! Provenance sidecars: `<stem>.provenance.json` next to every written file.
//!
//! A sidecar records which build produced the file, under which tolerances,
//! and from which inputs, so a stored batch or figure can be reproduced.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use trigon::ClassifyCfg;

use crate::batch::Summary;

/// Tolerances the evaluator ran with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerances {
    pub side_eq_eps: f64,
    pub right_angle_tol_deg: f64,
}

impl From<&ClassifyCfg> for Tolerances {
    fn from(cfg: &ClassifyCfg) -> Self {
        Self {
            side_eq_eps: cfg.side_eq_eps,
            right_angle_tol_deg: cfg.right_angle_tol_deg,
        }
    }
}

/// Per-command inputs, tagged by command name.
#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Run {
    Batch {
        input: PathBuf,
        tolerances: Tolerances,
        summary: Summary,
    },
    Figure {
        sides: [f64; 3],
        extent: f64,
    },
}

#[derive(Debug, Serialize)]
pub struct Sidecar {
    pub code_rev: &'static str,
    pub trigon_version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub run: Run,
    pub output: PathBuf,
}

impl Sidecar {
    pub fn new(output: &Path, run: Run, tag: Option<String>) -> Self {
        Self {
            code_rev: option_env!("GIT_COMMIT").unwrap_or("unknown"),
            trigon_version: trigon::VERSION,
            tag,
            run,
            output: output.to_path_buf(),
        }
    }

    /// `out/records.json` → `out/records.provenance.json`.
    pub fn path(&self) -> PathBuf {
        self.output.with_extension("provenance.json")
    }

    /// Write next to the output; returns the sidecar path.
    pub fn write(&self) -> Result<PathBuf> {
        let path = self.path();
        fs::write(&path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}
