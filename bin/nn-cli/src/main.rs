// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # nnk
//!
//! Command-line interface for the nn-core kernels and the token sampler.
//!
//! ## Usage
//! ```bash
//! # Sample 10 tokens from a logit vector with nucleus sampling
//! nnk sample --logits 1.0,2.5,0.3,-1.0 --top-p 0.9 --seed 42 --count 10
//!
//! # Print the softmax of a vector
//! nnk softmax --values 1,1,2
//!
//! # Time the kernels at GPT-2-small sizes
//! nnk benchmark --dim 768 --rows 3072 --vocab 50257
//! ```

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nnk",
    about = "Transformer forward-pass kernels and token sampling",
    version,
    author
)]
struct Cli {
    /// Path to a sampler TOML configuration file (CLI flags override it).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Select token indices from a logit vector.
    Sample {
        /// Comma-separated logits (e.g., "1.0,2.5,-0.3").
        #[arg(short, long, conflicts_with = "logits_file")]
        logits: Option<String>,

        /// JSON file holding an array of logits.
        #[arg(long)]
        logits_file: Option<std::path::PathBuf>,

        /// Logit temperature; 0 selects greedy decoding.
        #[arg(short, long)]
        temperature: Option<f64>,

        /// Nucleus threshold; values outside (0, 1) disable nucleus sampling.
        #[arg(short = 'p', long)]
        top_p: Option<f64>,

        /// Seed for reproducible sampling.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of selections to draw.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,

        /// Print statistics as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Print the softmax of a vector.
    Softmax {
        /// Comma-separated values.
        #[arg(long)]
        values: String,
    },

    /// Time the kernels on synthetic data.
    Benchmark {
        /// Hidden dimension (columns of the projection).
        #[arg(long, default_value_t = 768)]
        dim: usize,

        /// Rows of the projection matrix.
        #[arg(long, default_value_t = 3072)]
        rows: usize,

        /// Vocabulary size for softmax and sampling.
        #[arg(long, default_value_t = 50_257)]
        vocab: usize,

        /// Iterations per kernel.
        #[arg(long, default_value_t = 100)]
        iters: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing/logging based on verbosity.
    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Sample {
            logits,
            logits_file,
            temperature,
            top_p,
            seed,
            count,
            json,
        } => commands::sample::execute(commands::sample::SampleArgs {
            config: cli.config,
            logits,
            logits_file,
            temperature,
            top_p,
            seed,
            count,
            json,
        }),
        Commands::Softmax { values } => commands::softmax::execute(&values),
        Commands::Benchmark {
            dim,
            rows,
            vocab,
            iters,
        } => commands::benchmark::execute(dim, rows, vocab, iters),
    }
}
