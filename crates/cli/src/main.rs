mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};
use shapes::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

use output::Summary;

#[derive(Parser)]
#[command(name = "shapes-cli")]
#[command(about = "Run shape strategies through the closed or open dispatch engine")]
struct Cmd {
    /// Print a JSON summary instead of one line per shape
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Closed engine: apply one strategy to every shape of a batch
    Closed {
        #[arg(long, value_enum, default_value_t = Op::Area)]
        op: Op,
        /// Uniform scale for area and perimeter
        #[arg(long, default_value_t = 1.0)]
        scale: f64,
        /// Decimals for text reports (0-17)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=17))]
        precision: u8,
        /// Draw this many random shapes instead of the built-in sample
        #[arg(long)]
        random: Option<usize>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Evaluate shapes on the rayon thread pool
        #[arg(long)]
        parallel: bool,
    },
    /// Open engine: each shape carries its own report strategy
    Open {
        /// Decimals for text reports (0-17)
        #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=17))]
        precision: u8,
        #[arg(long, value_enum, default_value_t = LabelArg::Lower)]
        label: LabelArg,
        /// Use block layout with this indent
        #[arg(long)]
        indent: Option<String>,
    },
    /// Print library version and code revision
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Op {
    Area,
    Perimeter,
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LabelArg {
    Hidden,
    Lower,
    Upper,
}

impl From<LabelArg> for Label {
    fn from(l: LabelArg) -> Self {
        match l {
            LabelArg::Hidden => Label::Hidden,
            LabelArg::Lower => Label::Lower,
            LabelArg::Upper => Label::Upper,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let summary = match cmd.action {
        Action::Closed {
            op,
            scale,
            precision,
            random,
            seed,
            parallel,
        } => closed(op, scale, precision.into(), random, seed, parallel)?,
        Action::Open {
            precision,
            label,
            indent,
        } => open(precision.into(), label, indent)?,
        Action::Info => {
            let obj = json!({
                "version": shapes::VERSION,
                "code_rev": output::current_git_rev(),
            });
            println!("{}", serde_json::to_string_pretty(&obj)?);
            return Ok(());
        }
    };
    println!("{}", summary.render(cmd.json)?);
    Ok(())
}

/// Built-in closed-engine sample: the three reference shapes plus a triangle.
fn closed_sample() -> Result<Vec<ClosedShape>> {
    Ok(vec![
        Circle::new(Point2::origin(), 2.3)?.into(),
        Square::new(Point2::origin(), 1.2)?.into(),
        Circle::new(Point2::origin(), 4.1)?.into(),
        Triangle::new(3.0, 4.0)?.into(),
    ])
}

fn measure<S>(strategy: &S, shapes: &[ClosedShape], parallel: bool) -> Vec<Value>
where
    S: Exhaustive<f64> + Sync,
{
    let values: Vec<f64> = if parallel {
        par_apply_sequence(strategy, shapes)
    } else {
        apply_sequence(strategy, shapes)
    };
    tracing::debug!(total = par_total(strategy, shapes), "closed_total");
    shapes
        .iter()
        .zip(values)
        .map(|(s, v)| json!({"kind": s.kind(), "value": v}))
        .collect()
}

fn closed(
    op: Op,
    scale: f64,
    precision: usize,
    random: Option<usize>,
    seed: u64,
    parallel: bool,
) -> Result<Summary> {
    let shapes = match random {
        Some(n) => draw_batch(MixCfg::default(), seed, n)?,
        None => closed_sample()?,
    };
    tracing::info!(?op, scale, count = shapes.len(), seed, parallel, "closed");
    let params = json!({
        "scale": scale,
        "precision": precision,
        "random": random,
        "seed": seed,
        "parallel": parallel,
    });
    let mut summary = Summary::new("closed", format!("{op:?}").to_lowercase(), params);
    summary.results = match op {
        Op::Area => measure(&Area::new(scale), &shapes, parallel),
        Op::Perimeter => measure(&Perimeter::new(scale), &shapes, parallel),
        Op::Report => {
            let report = Report::new(Label::Lower, precision);
            let lines: Vec<String> = if parallel {
                par_apply_sequence(&report, &shapes)
            } else {
                apply_sequence(&report, &shapes)
            };
            lines.into_iter().map(Value::String).collect()
        }
    };
    Ok(summary)
}

/// Open-engine sample: five shapes with their own strategies, then two copies.
fn open(precision: usize, label: LabelArg, indent: Option<String>) -> Result<Summary> {
    let base = Report::new(label.into(), precision);
    let styled = match &indent {
        Some(i) => base.clone().block(i.clone()),
        None => base.clone(),
    };
    let plain = Report::new(Label::Upper, 0);

    let mut shapes: Vec<OpenShape<String>> = vec![
        OpenShape::new(Circle::new(point(1.0), 11.0)?, base.clone()),
        OpenShape::new(Circle::new(point(2.0), 12.0)?, plain.clone()),
        OpenShape::new(Circle::new(point(3.0), 13.0)?, styled.clone()),
        OpenShape::new(Square::new(point(4.0), 14.0)?, plain),
        OpenShape::new(Square::new(point(5.0), 15.0)?, styled.clone()),
        OpenShape::new(Triangle::new(6.0, 16.0)?, styled),
    ];
    let first = shapes[0].try_clone()?;
    let fifth = shapes[4].try_clone()?;
    shapes.push(first);
    shapes.push(fifth);
    tracing::info!(precision, ?label, indent = ?indent, count = shapes.len(), "open");

    let params = json!({
        "precision": precision,
        "label": format!("{label:?}").to_lowercase(),
        "indent": indent,
    });
    let mut summary = Summary::new("open", "report", params);
    summary.results = invoke_all(&shapes).into_iter().map(Value::String).collect();
    Ok(summary)
}

fn point(v: f64) -> Point2 {
    Point2::new(v, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_sample_areas_in_order() {
        let s = closed(Op::Area, 1.0, 2, None, 0, false).unwrap();
        assert_eq!(s.results.len(), 4);
        assert_eq!(s.results[0]["kind"], "circle");
        let a0 = s.results[0]["value"].as_f64().unwrap();
        assert!((a0 - 16.619).abs() < 1e-3);
        assert_eq!(s.results[1]["value"].as_f64().unwrap(), 1.2 * 1.2);
        assert_eq!(s.results[3]["kind"], "triangle");
    }

    #[test]
    fn closed_parallel_matches_sequential() {
        let seq = closed(Op::Perimeter, 2.0, 2, Some(64), 9, false).unwrap();
        let par = closed(Op::Perimeter, 2.0, 2, Some(64), 9, true).unwrap();
        assert_eq!(seq.results, par.results);
        let rep = closed(Op::Report, 1.0, 1, None, 0, true).unwrap();
        assert_eq!(rep.results[1], "square: center=(0.0,0.0), side=1.2");
    }

    #[test]
    fn open_sample_keeps_copies_at_the_end() {
        let s = open(2, LabelArg::Lower, None).unwrap();
        let lines = s.lines();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "circle: center=(1.00,1.00), radius=11.00");
        assert_eq!(lines[3], "SQUARE: center=(4,4), side=14");
        assert_eq!(lines[6], lines[0]);
        assert_eq!(lines[7], lines[4]);
    }

    #[test]
    fn precision_is_bounded_at_parse_time() {
        assert!(Cmd::try_parse_from(["shapes-cli", "closed", "--precision", "1000000"]).is_err());
        assert!(Cmd::try_parse_from(["shapes-cli", "open", "--precision", "18"]).is_err());
        let cmd = Cmd::try_parse_from(["shapes-cli", "open", "--precision", "17"]).unwrap();
        assert!(matches!(cmd.action, Action::Open { precision: 17, .. }));
    }

    #[test]
    fn open_block_layout_uses_indent() {
        let s = open(0, LabelArg::Hidden, Some("  ".into())).unwrap();
        assert_eq!(s.lines()[4], "  center=(5,5)\n  side=15");
    }
}
