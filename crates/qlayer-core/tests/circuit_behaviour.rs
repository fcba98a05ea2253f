//! End-to-end behaviour of the public circuit API.

use rand::SeedableRng;
use rand::rngs::StdRng;

use qlayer_core::matrix::{TOLERANCE, approx_eq, c, dagger, identity, is_unitary, kron};
use qlayer_core::{
    Circuit, CircuitError, Counts, Gate, InitialState, Matrix, QubitSpec, basis_string, gate,
};

// ---------------------------------------------------------------------------
// Gate library
// ---------------------------------------------------------------------------

#[test]
fn every_library_gate_is_unitary() {
    let fixed: Vec<(&str, Matrix)> = vec![
        ("I", (*gate::identity()).clone()),
        ("X", (*gate::pauli_x()).clone()),
        ("Y", (*gate::pauli_y()).clone()),
        ("Z", (*gate::pauli_z()).clone()),
        ("H", (*gate::hadamard()).clone()),
        ("S", (*gate::phase_s()).clone()),
        ("T", (*gate::t_gate()).clone()),
        ("CNOT", (*gate::cnot()).clone()),
        ("SWAP", (*gate::swap()).clone()),
        ("R(1.1)", gate::rotation(1.1)),
    ];
    for (name, m) in fixed {
        let product = m.dot(&dagger(&m));
        assert!(
            approx_eq(&product, &identity(m.nrows()), TOLERANCE),
            "{name}·{name}† ≠ I"
        );
    }
}

#[test]
fn controlled_x_acts_only_when_control_is_set() {
    let n = 3;
    for control in 0..n {
        for target in 0..n {
            if control == target {
                continue;
            }
            let cu = gate::controlled(control, target, &gate::pauli_x(), n).unwrap();
            assert!(is_unitary(&cu, TOLERANCE));

            let control_bit = 1 << (n - 1 - control);
            let target_bit = 1 << (n - 1 - target);
            for basis in 0..(1usize << n) {
                let expected = if basis & control_bit == 0 {
                    basis
                } else {
                    basis ^ target_bit
                };
                let column = cu.column(basis);
                for (row, amp) in column.iter().enumerate() {
                    let want = if row == expected { 1.0 } else { 0.0 };
                    assert!(
                        (amp - c(want, 0.0)).norm() < TOLERANCE,
                        "CU({control},{target}) on |{}⟩ row {row}",
                        basis_string(basis, n)
                    );
                }
            }
        }
    }
}

#[test]
fn controlled_u_applies_u_to_target_pair() {
    // control 2, target 0 over three qubits; U = H
    let n = 3;
    let cu = gate::controlled(2, 0, &gate::hadamard(), n).unwrap();
    let h = gate::hadamard();

    // Inputs |0 1 1⟩ (idx 3) and |1 1 1⟩ (idx 7): the target pair (3, 7) transforms by H
    for (i, &input) in [3usize, 7].iter().enumerate() {
        let col = cu.column(input);
        assert!((col[3] - h[[0, i]]).norm() < TOLERANCE);
        assert!((col[7] - h[[1, i]]).norm() < TOLERANCE);
    }
    // Control clear: |0 1 0⟩ stays put
    assert!((cu[[2, 2]] - c(1.0, 0.0)).norm() < TOLERANCE);
}

// ---------------------------------------------------------------------------
// Circuit builder
// ---------------------------------------------------------------------------

#[test]
fn hadamard_layer_equals_tensor_product() {
    let mut circuit = Circuit::prepared(2).unwrap();
    circuit.append_layer([Gate::Hadamard, Gate::Hadamard]).unwrap();
    let expected = kron(&gate::hadamard(), &gate::hadamard());
    assert!(approx_eq(&circuit.layers()[0].matrix(), &expected, TOLERANCE));
    assert!(approx_eq(&circuit.unitary(), &expected, TOLERANCE));
}

#[test]
fn single_qubit_matrix_on_two_qubit_circuit_fails() {
    let mut circuit = Circuit::prepared(2).unwrap();
    let err = circuit
        .append_layer([(*gate::hadamard()).clone()])
        .unwrap_err();
    assert!(matches!(
        err,
        CircuitError::DimensionMismatch {
            expected: 4,
            got: 2,
            ..
        }
    ));
    assert_eq!(circuit.num_layers(), 0);
}

#[test]
fn gates_parsed_from_labels() {
    let mut circuit = Circuit::prepared(3).unwrap();
    let gates: Vec<Gate> = ["H", "CNOT"].iter().map(|s| s.parse().unwrap()).collect();
    circuit.append_layer(gates).unwrap();
    assert_eq!(circuit.labels()[0], &["H", "CNT", "CNT"]);
}

#[test]
fn append_circuit_requires_equal_sizes() {
    let mut three = Circuit::prepared(3).unwrap();
    let two = Circuit::prepared(2).unwrap();
    assert!(matches!(
        three.append_circuit(&two),
        Err(CircuitError::SizeMismatch {
            expected: 3,
            got: 2
        })
    ));
}

#[test]
fn append_circuit_to_itself_doubles_layers() {
    let mut circuit = Circuit::prepared(2).unwrap();
    circuit
        .append_layer([Gate::Hadamard, Gate::T])
        .unwrap()
        .append_layer([Gate::Cnot])
        .unwrap()
        .append_layer([Gate::Rotation(0.4), Gate::PauliY])
        .unwrap();
    let k = circuit.num_layers();
    let copy = circuit.clone();
    circuit.append_circuit(&copy).unwrap();
    assert_eq!(circuit.num_layers(), 2 * k);

    let once = copy.unitary();
    assert!(approx_eq(&circuit.unitary(), &once.dot(&once), TOLERANCE));
}

// ---------------------------------------------------------------------------
// Execution
// ---------------------------------------------------------------------------

#[test]
fn hadamard_twice_is_identity() {
    let mut circuit = Circuit::prepared(2).unwrap();
    circuit
        .append_layer([Gate::Hadamard, Gate::Hadamard])
        .unwrap()
        .append_layer([Gate::Hadamard, Gate::Hadamard])
        .unwrap();
    assert!(approx_eq(&circuit.unitary(), &identity(4), TOLERANCE));
}

#[test]
fn single_hadamard_samples_evenly() {
    let mut circuit = Circuit::prepared(1).unwrap();
    circuit.append_layer([Gate::Hadamard]).unwrap();

    let mut rng = StdRng::seed_from_u64(17);
    let counts = Counts::from_samples(circuit.execute_with_rng(1000, &mut rng));
    assert_eq!(counts.total(), 1000);
    assert!((counts.frequency("0") - 0.5).abs() < 0.05);
    assert!((counts.frequency("1") - 0.5).abs() < 0.05);
}

#[test]
fn plus_minus_initial_state() {
    let circuit = Circuit::new(2, InitialState::custom([QubitSpec::Plus, QubitSpec::Minus])).unwrap();
    let amps = circuit.initial_state().amplitudes();
    let expected = [0.5, -0.5, 0.5, -0.5];
    for (a, e) in amps.iter().zip(expected) {
        assert!((a - c(e, 0.0)).norm() < TOLERANCE);
    }

    // H ⊗ H maps |+−⟩ to |01⟩
    let mut circuit = circuit;
    circuit.append_layer([Gate::Hadamard, Gate::Hadamard]).unwrap();
    let out = circuit.measure();
    assert!((out[1] - c(1.0, 0.0)).norm() < TOLERANCE);
}

#[test]
fn initial_state_length_mismatch() {
    let err = Circuit::new(3, InitialState::custom([QubitSpec::Zero])).unwrap_err();
    assert!(matches!(err, CircuitError::LengthMismatch { expected: 3, got: 1 }));
}

#[test]
fn random_initial_state_is_seedable() {
    let a = Circuit::with_rng(4, InitialState::Random, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = Circuit::with_rng(4, InitialState::Random, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a.initial_state(), b.initial_state());
    assert!((a.initial_state().norm_sqr() - 1.0).abs() < TOLERANCE);
}
