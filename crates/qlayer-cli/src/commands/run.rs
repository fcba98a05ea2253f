//! Run command: build an ad-hoc circuit from gate labels and sample it.

use anyhow::{Context, Result};
use console::style;
use tracing::debug;

use qlayer_core::{Circuit, Gate, InitialState, QubitSpec};

use super::common::{OutputFormat, Session, print_header, print_matrix, print_section};

/// Parse `"H, I"` into gates.
pub fn parse_layer(spec: &str) -> Result<Vec<Gate>> {
    spec.split(',')
        .map(|label| label.parse::<Gate>().map_err(Into::into))
        .collect()
}

/// Parse the `--init` argument: `random` or comma-separated `0`, `1`, `+`, `-`.
pub fn parse_init(spec: Option<&str>) -> Result<InitialState> {
    match spec.map(str::trim) {
        None => Ok(InitialState::Prepared),
        Some(s) if s.eq_ignore_ascii_case("random") => Ok(InitialState::Random),
        Some(s) => {
            let specs = s
                .split(',')
                .map(str::parse::<QubitSpec>)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(InitialState::custom(specs))
        }
    }
}

/// Execute the run command.
pub fn execute(
    session: &mut Session,
    qubits: usize,
    layers: &[String],
    init: Option<&str>,
    trials: usize,
    draw: bool,
    show_matrix: bool,
) -> Result<()> {
    let init = parse_init(init)?;
    let mut circuit = Circuit::with_rng(qubits, init, session.rng())?;

    for (index, spec) in layers.iter().enumerate() {
        let gates = parse_layer(spec).with_context(|| format!("Layer {index}: '{spec}'"))?;
        circuit
            .append_layer(gates)
            .with_context(|| format!("Layer {index}: '{spec}'"))?;
    }
    debug!(qubits, layers = circuit.num_layers(), "built ad-hoc circuit");

    if session.format() == OutputFormat::Table {
        print_header(&format!(
            "Custom circuit on {} qubits",
            style(qubits).yellow()
        ));
        if show_matrix {
            print_section("Unitary");
            print_matrix(&circuit.unitary(), 3);
        }
    }

    session.report("run", &circuit, trials, draw)?;
    Ok(())
}
