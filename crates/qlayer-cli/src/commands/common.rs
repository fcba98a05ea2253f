//! Shared helpers for CLI commands.

use std::collections::BTreeMap;

use anyhow::Result;
use clap::ValueEnum;
use console::style;
use num_complex::Complex64;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

use qlayer_core::matrix::{self, Matrix};
use qlayer_core::{Circuit, Counts, basis_string};

use crate::diagram;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable histogram.
    #[default]
    Table,
    /// Pretty-printed JSON report.
    Json,
}

/// Per-invocation state shared by all commands: output format and RNG.
pub struct Session {
    format: OutputFormat,
    seed: Option<u64>,
    rng: StdRng,
}

impl Session {
    /// Seeded sessions are fully reproducible.
    pub fn new(seed: Option<u64>, format: OutputFormat) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { format, seed, rng }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Sample `trials` outcomes from `circuit` and print them.
    pub fn report(&mut self, name: &str, circuit: &Circuit, trials: usize, draw: bool) -> Result<Counts> {
        info!(circuit = name, trials, "executing");
        let counts = circuit.counts_with_rng(trials, &mut self.rng);

        match self.format {
            OutputFormat::Table => {
                print_result("Qubits", circuit.num_qubits());
                print_result("Layers", circuit.num_layers());
                if draw {
                    print_section("Circuit");
                    print!("{}", diagram::render(circuit));
                }
                print_counts(&counts, trials);
            }
            OutputFormat::Json => {
                let report = RunReport {
                    circuit: name,
                    num_qubits: circuit.num_qubits(),
                    layers: circuit.num_layers(),
                    trials,
                    seed: self.seed,
                    diagram: draw.then(|| diagram::render(circuit)),
                    probabilities: nonzero_probabilities(circuit),
                    counts: &counts,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
        }
        Ok(counts)
    }
}

/// JSON shape of a sampled run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub circuit: &'a str,
    pub num_qubits: usize,
    pub layers: usize,
    pub trials: usize,
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
    pub probabilities: BTreeMap<String, f64>,
    pub counts: &'a Counts,
}

/// Exact outcome probabilities above numerical noise, keyed by basis string.
pub fn nonzero_probabilities(circuit: &Circuit) -> BTreeMap<String, f64> {
    let n = circuit.num_qubits();
    circuit
        .probabilities()
        .into_iter()
        .enumerate()
        .filter(|(_, p)| *p > matrix::TOLERANCE)
        .map(|(i, p)| (basis_string(i, n), p))
        .collect()
}

/// Print a command header.
pub fn print_header(title: &str) {
    println!();
    println!("{}", style("═".repeat(60)).cyan());
    println!("{}", style(format!("  {title}")).cyan().bold());
    println!("{}", style("═".repeat(60)).cyan());
    println!();
}

/// Print a section heading.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
    println!("{}", style("─".repeat(40)).dim());
}

/// Print a labelled value.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print a histogram, most frequent first.
pub fn print_counts(counts: &Counts, trials: usize) {
    println!("\n{} Results ({} trials):", style("✓").green().bold(), trials);

    let mut sorted: Vec<(&str, u64)> = counts.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    let total = counts.total().max(1) as f64;

    for (bitstring, count) in sorted.iter().take(16) {
        let prob = *count as f64 / total * 100.0;
        let bar = "█".repeat((prob / 2.0).round() as usize);
        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if sorted.len() > 16 {
        println!("  ... and {} more outcomes", sorted.len() - 16);
    }
}

/// `a`, `bi` or `a±bi`.
pub fn format_complex(z: Complex64) -> String {
    match (z.re, z.im) {
        (re, im) if im == 0.0 => format!("{re}"),
        (re, im) if re == 0.0 => format!("{im}i"),
        (re, im) if im < 0.0 => format!("{re}-{}i", -im),
        (re, im) => format!("{re}+{im}i"),
    }
}

/// Print a matrix rounded to `decimals`, one row per line.
pub fn print_matrix(m: &Matrix, decimals: i32) {
    let rounded = matrix::round(m, decimals);
    let cells: Vec<Vec<String>> = rounded
        .rows()
        .into_iter()
        .map(|row| row.iter().copied().map(format_complex).collect())
        .collect();
    let width = cells.iter().flatten().map(String::len).max().unwrap_or(0);

    for row in cells {
        let line: Vec<String> = row.iter().map(|cell| format!("{cell:>width$}")).collect();
        println!("  [ {} ]", line.join("  "));
    }
}
