//! Encoding Pipeline Demo
//!
//! Runs the full classical → quantum encoding pipeline on the reference
//! 4×4 system against the in-memory engine, and prints every intermediate
//! artifact: the embedded system, quantized vectors, amplitude trees, and
//! the scheduled step count.

use clap::Parser;
use ndarray::array;
use tracing_subscriber::EnvFilter;

use alsvin_adapter_sim::SimEngine;
use alsvin_encode::{AmplitudeTree, FixedPoint, embed};
use alsvin_solve::{EncodingParams, SolveOptions, solve_with_params};

#[derive(Parser, Debug)]
#[command(name = "demo-encode")]
#[command(about = "Demonstrate the Alsvin encoding pipeline")]
struct Args {
    /// Condition-number estimate (0 = ask the engine)
    #[arg(short, long, default_value = "0")]
    kappa: f64,

    /// Step rate fed to the scheduler
    #[arg(short, long, default_value = "0.1")]
    step_rate: f64,

    /// Quantization scale exponent
    #[arg(short, long, default_value = "15")]
    exponent: i32,

    /// Show the full flattened amplitude trees
    #[arg(long)]
    show_trees: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let a = array![
        [1.0, 2.0, 3.0, 4.0],
        [2.0, 1.0, 4.0, 5.0],
        [3.0, 4.0, 1.0, 6.0],
        [4.0, 5.0, 6.0, 1.0],
    ];
    let b = array![3.0, 4.5, 11.8, 0.2];

    println!("=== Embedding ===");
    let sys = match embed(&a, &b) {
        Ok(sys) => sys,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    println!("original dim:  {}", sys.recovery.original_dim());
    println!("hermitian dim: {}", sys.recovery.herm_dim());
    println!("padded dim:    {}", sys.recovery.padded_dim());
    println!("embedded:      {}", sys.recovery.was_embedded());

    let params = EncodingParams {
        scale_exponent: args.exponent,
        ..EncodingParams::default()
    };

    println!("\n=== Quantization (exponent {}) ===", params.scale_exponent);
    let fp = match FixedPoint::new(params.scale_exponent, params.data_width) {
        Ok(fp) => fp,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let codes = fp.encode_all(&sys.rhs.to_vec());
    println!("rhs codes: {:?}", codes.codes());

    let tree = AmplitudeTree::build(&codes);
    println!("\n=== Amplitude tree ===");
    println!("nodes: {} (sentinel included)", tree.len());
    if let Some(root) = tree.root() {
        println!("root mass: {root}");
    }
    if args.show_trees {
        println!("flattened: {:?}", tree.nodes());
    }

    println!("\n=== Solve ===");
    let opts = SolveOptions {
        kappa: (args.kappa > 0.0).then_some(args.kappa),
        step_rate: args.step_rate,
        ..SolveOptions::default()
    };
    let mut engine = SimEngine::new();
    match solve_with_params(&mut engine, &a, &b, &opts, &params) {
        Ok(outcome) => {
            println!("scheduled steps: {}", outcome.steps);
            println!(
                "solution: {:?} (evolution stage not yet implemented)",
                outcome.solution.to_vec()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
