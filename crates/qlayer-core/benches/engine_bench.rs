//! Benchmarks for the dense execution engine
//!
//! Run with: cargo bench -p qlayer-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::f64::consts::PI;

use qlayer_core::{Circuit, Gate, gate};

/// Alternating Hadamard / CNOT-ladder circuit with a controlled rotation per layer pair.
fn layered_circuit(num_qubits: usize, depth: usize) -> Circuit {
    let mut circuit = Circuit::prepared(num_qubits).unwrap();
    for d in 0..depth {
        circuit
            .append_layer(vec![Gate::Hadamard; num_qubits])
            .unwrap();

        let mut entangling = vec![Gate::Cnot; num_qubits / 2];
        if num_qubits % 2 == 1 {
            entangling.push(Gate::Identity);
        }
        circuit.append_layer(entangling).unwrap();

        let angle = PI / (1 << (d % 4 + 1)) as f64;
        let cu = gate::controlled(num_qubits - 1, 0, &gate::rotation(angle), num_qubits).unwrap();
        circuit.append_layer([cu]).unwrap();
    }
    circuit
}

/// Benchmark controlled-unitary construction
fn bench_controlled(c: &mut Criterion) {
    let mut group = c.benchmark_group("controlled");

    for num_qubits in &[2, 4, 6, 8] {
        group.bench_with_input(
            BenchmarkId::new("cu_far", num_qubits),
            num_qubits,
            |b, &n| {
                let x = gate::pauli_x();
                b.iter(|| gate::controlled(black_box(0), black_box(n - 1), &x, n).unwrap());
            },
        );
    }

    group.finish();
}

/// Benchmark layer appends (validation + commit)
fn bench_append_layer(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_layer");

    for num_qubits in &[2, 6, 10] {
        group.bench_with_input(
            BenchmarkId::new("hadamards", num_qubits),
            num_qubits,
            |b, &n| {
                let mut circuit = Circuit::prepared(n).unwrap();
                b.iter(|| {
                    circuit
                        .append_layer(black_box(vec![Gate::Hadamard; n]))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the three execution paths
fn bench_execution(c: &mut Criterion) {
    let mut group = c.benchmark_group("execution");
    group.sample_size(20);

    for num_qubits in &[2, 4, 6, 8] {
        let circuit = layered_circuit(*num_qubits, 3);

        group.bench_with_input(
            BenchmarkId::new("unitary", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.unitary()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("measure", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.measure()));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("execute_1024", num_qubits),
            &circuit,
            |b, circuit| {
                b.iter(|| black_box(circuit.execute(1024)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_controlled, bench_append_layer, bench_execution);

criterion_main!(benches);
