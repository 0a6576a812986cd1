//! Evidence CSV export.
//!
//! Students attach this file to a feedback request as the data backing their
//! reasoning. One row per recorded generation; survival rate and trait
//! averages describe the current population, so they only fill the last row.

use crate::error::{IoError, Result};
use std::io::Write;
use stemulator_data::SimulationState;

pub const EVIDENCE_HEADER: &str =
    "generation,population,survival_rate,avg_speed,avg_camouflage,avg_size";

pub fn write_evidence_csv<W: Write>(mut writer: W, state: &SimulationState) -> Result<()> {
    writeln!(writer, "{}", EVIDENCE_HEADER)?;

    let history = &state.population_history;
    // History only covers generations since the last reset or lab change.
    let first_generation = (state.generation + 1).saturating_sub(history.len() as u64);
    let [speed, camouflage, size] = state.trait_distribution.means();

    for (i, population) in history.iter().enumerate() {
        let generation = first_generation + i as u64;
        if i + 1 == history.len() {
            writeln!(
                writer,
                "{},{},{:.4},{:.4},{:.4},{:.4}",
                generation, population, state.survival_rate, speed, camouflage, size
            )?;
        } else {
            writeln!(writer, "{},{},,,,", generation, population)?;
        }
    }
    writer.flush()?;
    Ok(())
}

pub fn evidence_csv_string(state: &SimulationState) -> Result<String> {
    let mut buffer = Vec::new();
    write_evidence_csv(&mut buffer, state)?;
    String::from_utf8(buffer).map_err(|e| IoError::serialization(e.to_string()))
}
