//! Builds small sample tables and prints lookups against them.
//!
//! **Usage:**
//! ```text
//! lut-demo [--mode error|constant|linear] [--json]
//! ```
//!
//! Lookups that fail under the chosen boundary mode are printed with their error
//! instead of stopping the run.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use multilut::{utils::sample_grid, BoundaryMode, BoundaryPolicy, LookupTable};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    Error,
    Constant,
    Linear,
}

impl From<Mode> for BoundaryMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Error => BoundaryMode::Error,
            Mode::Constant => BoundaryMode::Constant,
            Mode::Linear => BoundaryMode::Linear,
        }
    }
}

/// Print lookups against sample multilinear tables.
#[derive(Parser)]
#[command(name = "lut-demo", about = "Print lookups against sample multilinear tables")]
struct Args {
    /// Boundary mode applied to both sides of every axis.
    #[arg(long, value_enum, default_value_t = Mode::Linear)]
    mode: Mode,

    /// Print the 2D table's JSON record.
    #[arg(long)]
    json: bool,
}

fn show(label: &str, result: multilut::Result<f64>) {
    match result {
        Ok(v) => println!("{label}: {v}"),
        Err(e) => println!("{label}: error: {e}"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let policy = BoundaryPolicy::uniform(args.mode.into());

    // f(x) = 2x
    let lut_1d = LookupTable::<f64, 1>::from_parts(
        [vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]],
        vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0],
        policy,
    )?;
    for x in [2.5, 12.0, -5.0] {
        show(&format!("1D f({x})"), lut_1d.value_scalar(x));
    }

    // f(x, y) = x * y
    let axes = [
        vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        vec![-2.0, 0.0, 2.0, 4.0, 6.0, 8.0, 10.0],
    ];
    let z = sample_grid(&axes, |p| p[0] * p[1]);
    let lut_2d = LookupTable::<f64, 2>::from_parts(axes, z, policy)?;
    for p in [
        [1.0, 0.0],
        [2.0, 5.5],
        [2.0, 12.0],
        [5.0, 10.0],
        [5.1, 10.0],
        [-2.0, 2.0],
        [-2.0, -3.0],
    ] {
        show(&format!("2D f({}, {})", p[0], p[1]), lut_2d.value(&p));
    }

    // The record does not carry the policy, so it is reattached on decode
    let record = lut_2d.to_json_string()?;
    let decoded = LookupTable::<f64, 2>::from_json_str(&record, policy)?;
    show("2D decoded f(3, 6)", decoded.value(&[3.0, 6.0]));

    if args.json {
        println!("{record}");
    }

    Ok(())
}
