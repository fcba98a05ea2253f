//! Dense execution engine.
//!
//! Every layer is expanded to its full 2^n x 2^n operator by Kronecker
//! product (slot 0 is the most significant qubit). [`Circuit::unitary`]
//! multiplies those operators together, [`Circuit::measure`] applies them
//! one after another to the initial state, and [`Circuit::execute`]
//! samples basis strings from the resulting distribution.

use std::collections::BTreeMap;
use std::time::Instant;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use crate::circuit::Circuit;
use crate::layer::Layer;
use crate::matrix::{self, Amplitudes, Matrix};

impl Layer {
    /// The full-register operator of this layer.
    pub fn matrix(&self) -> Matrix {
        matrix::kron_all(self.gates().iter().map(|g| &**g))
    }
}

impl Circuit {
    /// The composite unitary of the whole circuit.
    ///
    /// Layer 0 acts first, so later layers multiply from the left. An empty
    /// circuit yields the identity.
    #[instrument(skip(self), fields(num_qubits = self.num_qubits(), layers = self.num_layers()))]
    pub fn unitary(&self) -> Matrix {
        let start = Instant::now();
        let result = self
            .layers()
            .iter()
            .enumerate()
            .fold(matrix::identity(self.dimension()), |acc, (i, layer)| {
                trace!(layer = i, "composing layer");
                layer.matrix().dot(&acc)
            });
        debug!(elapsed = ?start.elapsed(), "composed circuit unitary");
        result
    }

    /// Evolve the initial state through every layer.
    #[instrument(skip(self), fields(num_qubits = self.num_qubits(), layers = self.num_layers()))]
    pub fn measure(&self) -> Amplitudes {
        let start = Instant::now();
        let result = self.layers().iter().enumerate().fold(
            self.initial_state().amplitudes().clone(),
            |state, (i, layer)| {
                trace!(layer = i, "applying layer");
                layer.matrix().dot(&state)
            },
        );
        debug!(elapsed = ?start.elapsed(), "evolved state vector");
        result
    }

    /// Outcome probabilities |amplitude|², indexed by basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.measure().iter().map(|a| a.norm_sqr()).collect()
    }

    /// Sample `trials` basis strings using the given generator.
    ///
    /// Outcomes are drawn independently, with replacement, from the
    /// distribution of [`Circuit::probabilities`].
    #[instrument(skip(self, rng), fields(num_qubits = self.num_qubits()))]
    pub fn execute_with_rng<R: Rng + ?Sized>(&self, trials: usize, rng: &mut R) -> Vec<String> {
        let probabilities = self.probabilities();
        let n = self.num_qubits();

        let outcomes: Vec<String> = (0..trials)
            .map(|_| basis_string(sample_index(&probabilities, &mut *rng), n))
            .collect();

        debug!("sampled {} trials", outcomes.len());
        outcomes
    }

    /// Sample `trials` basis strings using the thread-local generator.
    pub fn execute(&self, trials: usize) -> Vec<String> {
        self.execute_with_rng(trials, &mut rand::thread_rng())
    }

    /// Sample and tally outcomes.
    pub fn counts_with_rng<R: Rng + ?Sized>(&self, trials: usize, rng: &mut R) -> Counts {
        Counts::from_samples(self.execute_with_rng(trials, rng))
    }
}

/// Draw an index from a discrete distribution.
fn sample_index<R: Rng + ?Sized>(probabilities: &[f64], rng: &mut R) -> usize {
    let r: f64 = rng.r#gen();

    let mut cumulative = 0.0;
    for (i, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if r < cumulative {
            return i;
        }
    }

    // Rounding can leave the total just below r; fall back to the last
    // outcome with non-zero weight.
    probabilities
        .iter()
        .rposition(|p| *p > 0.0)
        .unwrap_or(probabilities.len().saturating_sub(1))
}

/// Zero-padded binary label of a basis index, most significant bit first.
pub fn basis_string(index: usize, num_qubits: usize) -> String {
    format!("{index:0num_qubits$b}")
}

/// All basis strings of an n-qubit register in index order.
pub fn basis_labels(num_qubits: usize) -> Vec<String> {
    (0..1usize << num_qubits)
        .map(|i| basis_string(i, num_qubits))
        .collect()
}

/// Histogram of sampled basis strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    counts: BTreeMap<String, u64>,
}

impl Counts {
    /// An empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a sequence of outcomes.
    pub fn from_samples<I, S>(samples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts = Self::new();
        for sample in samples {
            counts.insert(sample, 1);
        }
        counts
    }

    /// Add `n` occurrences of an outcome.
    pub fn insert(&mut self, outcome: impl Into<String>, n: u64) {
        *self.counts.entry(outcome.into()).or_insert(0) += n;
    }

    /// Occurrences of an outcome.
    pub fn get(&self, outcome: &str) -> u64 {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Total number of recorded samples.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Relative frequency of an outcome.
    pub fn frequency(&self, outcome: &str) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.get(outcome) as f64 / total as f64,
        }
    }

    /// The outcome seen most often; ties go to the smallest basis string.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.counts
            .iter()
            .fold(None, |best: Option<(&str, u64)>, (k, &v)| match best {
                Some((_, bv)) if bv >= v => best,
                _ => Some((k.as_str(), v)),
            })
    }

    /// Outcomes in lexicographic (= index) order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of distinct outcomes.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
