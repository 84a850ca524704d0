// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `nnk sample` command: draw token indices from a logit vector.
//!
//! Configuration is layered: defaults, then the `--config` TOML file, then
//! individual CLI flags.

use std::path::PathBuf;

use anyhow::Context;
use sampler::{Sampler, SamplerConfig, SamplingStats, Strategy};

/// Arguments of the `sample` subcommand.
pub struct SampleArgs {
    pub config: Option<PathBuf>,
    pub logits: Option<String>,
    pub logits_file: Option<PathBuf>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub seed: Option<u64>,
    pub count: usize,
    pub json: bool,
}

#[derive(serde::Serialize)]
struct Report<'a> {
    strategy: Strategy,
    config: &'a SamplerConfig,
    tokens: &'a [usize],
    stats: &'a SamplingStats,
}

pub fn execute(args: SampleArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args)?;
    let logits = load_logits(&args)?;
    tracing::info!("loaded {} logits", logits.len());

    let mut sampler = Sampler::<f32>::new(config)?;
    let mut buf = vec![0.0f32; logits.len()];
    let mut tokens = Vec::with_capacity(args.count);

    for _ in 0..args.count {
        buf.copy_from_slice(&logits);
        tokens.push(sampler.try_select(&mut buf)?);
    }

    if args.json {
        let report = Report {
            strategy: sampler.strategy(),
            config: sampler.config(),
            tokens: &tokens,
            stats: sampler.stats(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_table(&sampler, &tokens);
    Ok(())
}

fn resolve_config(args: &SampleArgs) -> anyhow::Result<SamplerConfig> {
    let mut config = match &args.config {
        Some(path) => SamplerConfig::from_file(path)?,
        None => SamplerConfig::default(),
    };
    if let Some(t) = args.temperature {
        config.temperature = t;
    }
    if let Some(p) = args.top_p {
        config.top_p = p;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;
    Ok(config)
}

fn load_logits(args: &SampleArgs) -> anyhow::Result<Vec<f32>> {
    let logits = match (&args.logits, &args.logits_file) {
        (Some(inline), _) => super::parse_values(inline)?,
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read logits file '{}'", path.display()))?;
            serde_json::from_str::<Vec<f32>>(&content)
                .with_context(|| format!("'{}' is not a JSON array of numbers", path.display()))?
        }
        (None, None) => anyhow::bail!("provide --logits or --logits-file"),
    };
    if logits.is_empty() {
        anyhow::bail!("no logits given");
    }
    Ok(logits)
}

fn print_table(sampler: &Sampler<f32>, tokens: &[usize]) {
    let config = sampler.config();
    let stats = sampler.stats();

    println!("  Strategy:    {}", sampler.strategy().name());
    println!("  Temperature: {}", config.temperature);
    println!("  Top-p:       {}", config.top_p);
    if let Some(seed) = config.seed {
        println!("  Seed:        {seed}");
    }
    println!();
    println!(
        "  Tokens: {}",
        tokens
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!();
    println!("  {:<8} {:>8} {:>10}", "Index", "Count", "Freq");
    println!("  {}", "-".repeat(28));
    for (&index, &count) in &stats.histogram {
        println!(
            "  {:<8} {:>8} {:>9.1}%",
            index,
            count,
            stats.frequency(index) * 100.0
        );
    }
    println!();
    println!("  {}", stats.summary());
}
