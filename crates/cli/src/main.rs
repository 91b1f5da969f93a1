use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;
use trigon::{analyze_with, place, ClassifyCfg, Sides, DEFAULT_EXTENT};

mod batch;
mod output;
mod provenance;

use output::{AnalyzeOutput, FigureJson, ResultJson};
use provenance::{Run, Sidecar, Tolerances};

#[derive(Parser)]
#[command(name = "trigon")]
#[command(about = "Classify triangles from three side lengths")]
struct Cmd {
    /// Optional run tag; propagated to logs and provenance sidecars
    #[arg(long, global = true)]
    tag: Option<String>,

    /// Two sides count as equal when they differ by at most this much (0 = exact)
    #[arg(long, global = true, default_value_t = ClassifyCfg::default().side_eq_eps)]
    side_eps: f64,

    /// Half-width in degrees of the window around 90° that counts as right
    #[arg(long, global = true, default_value_t = ClassifyCfg::default().right_angle_tol_deg)]
    right_tol: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Evaluate one side triple and print the result as JSON
    #[command(allow_negative_numbers = true)]
    Analyze {
        side1: f64,
        side2: f64,
        side3: f64,
        /// Name of the submitter, echoed in the output
        #[arg(long)]
        label: Option<String>,
    },
    /// Evaluate every row of a CSV (side1,side2,side3[,label]) into JSON records
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write display coordinates of the triangle as JSON
    #[command(allow_negative_numbers = true)]
    Figure {
        side1: f64,
        side2: f64,
        side3: f64,
        #[arg(long)]
        out: PathBuf,
        /// Length of the longest side after scaling
        #[arg(long, default_value_t = DEFAULT_EXTENT)]
        extent: f64,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.classify_cfg()?;
    match cmd.action {
        Action::Analyze {
            side1,
            side2,
            side3,
            label,
        } => {
            let out = analyze(Sides::new(side1, side2, side3), label, &cfg, cmd.tag)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
            Ok(())
        }
        Action::Batch { input, out } => batch(&input, &out, &cfg, cmd.tag),
        Action::Figure {
            side1,
            side2,
            side3,
            out,
            extent,
        } => figure(Sides::new(side1, side2, side3), &out, extent, cmd.tag),
    }
}

impl Cmd {
    /// Tolerances from the global flags, built once per process.
    fn classify_cfg(&self) -> Result<ClassifyCfg> {
        let cfg = ClassifyCfg {
            side_eq_eps: self.side_eps,
            right_angle_tol_deg: self.right_tol,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Malformed sides are a command error; "Not a triangle" is a normal output.
fn analyze(
    sides: Sides,
    label: Option<String>,
    cfg: &ClassifyCfg,
    tag: Option<String>,
) -> Result<AnalyzeOutput> {
    let r = analyze_with(sides.side1, sides.side2, sides.side3, cfg)
        .with_context(|| format!("rejected sides {:?}", sides.as_array()))?;
    tracing::info!(
        sides = ?sides.as_array(),
        label = ?label,
        tag = ?tag,
        triangle_type = %r.triangle_type,
        "analyze"
    );
    Ok(AnalyzeOutput {
        label,
        result: ResultJson::from(&r),
    })
}

fn batch(input: &Path, out: &Path, cfg: &ClassifyCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "batch");
    let summary = batch::run(input, out, cfg)?;
    tracing::info!(
        rows = summary.rows,
        triangles = summary.triangles,
        not_triangles = summary.not_triangles,
        errors = summary.errors,
        "batch_done"
    );
    let run = Run::Batch {
        input: input.to_path_buf(),
        tolerances: Tolerances::from(cfg),
        summary,
    };
    Sidecar::new(out, run, tag).write()?;
    Ok(())
}

fn figure(sides: Sides, out: &Path, extent: f64, tag: Option<String>) -> Result<()> {
    tracing::info!(sides = ?sides.as_array(), out = %out.display(), extent, tag = ?tag, "figure");
    let fig = place(sides, extent)
        .with_context(|| format!("cannot place sides {:?}", sides.as_array()))?;
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(&FigureJson::from(&fig))?)
        .with_context(|| format!("writing {}", out.display()))?;
    let run = Run::Figure {
        sides: sides.as_array(),
        extent,
    };
    Sidecar::new(out, run, tag).write()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("trigon").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn tolerance_flags_default_to_library_defaults() {
        let cmd = parse(&["analyze", "3", "4", "5"]);
        assert_eq!(cmd.classify_cfg().unwrap(), ClassifyCfg::default());
        let loose = parse(&["--side-eps", "0.01", "analyze", "3", "4", "5"]);
        assert_eq!(loose.classify_cfg().unwrap().side_eq_eps, 0.01);
        let bad = parse(&["--right-tol=-1", "analyze", "3", "4", "5"]);
        assert!(bad.classify_cfg().is_err());
    }

    #[test]
    fn analyze_rejects_malformed_sides_with_context() {
        let cmd = parse(&["analyze", "3", "-4", "5", "--label", "ada"]);
        let Action::Analyze {
            side1,
            side2,
            side3,
            label,
        } = cmd.action
        else {
            panic!("expected analyze");
        };
        assert_eq!(side2, -4.0);
        let cfg = ClassifyCfg::default();
        let err = analyze(Sides::new(side1, side2, side3), label, &cfg, None).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("rejected sides [3.0, -4.0, 5.0]"), "{msg}");
        assert!(msg.contains("side2"), "{msg}");
    }

    #[test]
    fn analyze_reports_not_a_triangle_as_output() {
        let out = analyze(Sides::new(1.0, 1.0, 3.0), None, &ClassifyCfg::default(), None).unwrap();
        assert!(!out.result.is_triangle);
        assert_eq!(out.result.triangle_type, trigon::NOT_A_TRIANGLE);
        let ok = analyze(
            Sides::new(5.0, 5.0, 8.0),
            Some("bob".into()),
            &ClassifyCfg::default(),
            None,
        )
        .unwrap();
        assert_eq!(ok.label.as_deref(), Some("bob"));
        assert_eq!(ok.result.triangle_type, "Isosceles Obtuse");
    }
}
