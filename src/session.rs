//! A lab session: one long-lived engine bound to a lab and the part the
//! student is currently working on.

use std::collections::BTreeMap;
use stemulator_core::SimulationEngine;
use stemulator_data::{
    GenerationReport, LabPart, LabSnapshot, RenderFrame, ScienceLab, SettingsUpdate,
    SimulationState,
};
use stemulator_io::{GuidePayload, GuideRequest};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("lab '{0}' has no parts")]
    NoParts(String),

    #[error("part index {index} out of range (lab has {len} parts)")]
    PartOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    Io(#[from] stemulator_io::IoError),
}

pub struct LabSession {
    engine: SimulationEngine,
    lab: ScienceLab,
    current_part: usize,
}

impl LabSession {
    /// Binds `engine` to `lab` and applies the first part, if any.
    pub fn new(engine: SimulationEngine, lab: ScienceLab) -> Self {
        Self::bind(engine, lab, 0)
    }

    /// Binds `engine` to `lab` and applies only the part at `index`.
    pub fn starting_at(
        engine: SimulationEngine,
        lab: ScienceLab,
        index: usize,
    ) -> Result<Self, SessionError> {
        check_part_index(&lab, index)?;
        Ok(Self::bind(engine, lab, index))
    }

    fn bind(engine: SimulationEngine, lab: ScienceLab, current_part: usize) -> Self {
        let mut session = Self {
            engine,
            lab,
            current_part,
        };
        session.apply_current_part();
        session
    }

    fn apply_current_part(&mut self) {
        if let Some(part_id) = self.lab.lab_parts.get(self.current_part).map(|p| p.part_id) {
            self.engine.apply_lab(&self.lab, Some(part_id));
        }
    }

    /// Moves to the part at `index` and applies it.
    pub fn select_part(&mut self, index: usize) -> Result<&LabPart, SessionError> {
        check_part_index(&self.lab, index)?;
        self.current_part = index;
        self.apply_current_part();
        Ok(&self.lab.lab_parts[index])
    }

    pub fn current_part(&self) -> Option<&LabPart> {
        self.lab.lab_parts.get(self.current_part)
    }

    pub fn current_part_index(&self) -> usize {
        self.current_part
    }

    pub fn lab(&self) -> &ScienceLab {
        &self.lab
    }

    pub fn update_settings(&mut self, update: &SettingsUpdate) {
        self.engine.update_settings(update);
    }

    pub fn run_generation(&mut self) -> GenerationReport {
        self.engine.run_generation()
    }

    /// Runs `count` generations and returns their reports.
    pub fn run_generations(&mut self, count: usize) -> Vec<GenerationReport> {
        (0..count).map(|_| self.engine.run_generation()).collect()
    }

    /// Resets the engine, then re-applies the current part.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.apply_current_part();
    }

    /// Frame for the renderer's polling loop.
    pub fn frame(&self) -> RenderFrame {
        self.engine.render_frame()
    }

    pub fn snapshot(&self) -> LabSnapshot {
        self.engine.snapshot()
    }

    pub fn state(&self) -> SimulationState {
        self.engine.state()
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    /// Builds the feedback payload for the current part.
    ///
    /// `responses` maps a response key (`setup`, `observations`, `evidence`,
    /// `predictions`, optionally suffixed as `observations.1`) to the text the
    /// student wrote. Responses keep the numeric order of their suffixes.
    pub fn guide_payload(
        &self,
        student_name: &str,
        responses: &BTreeMap<String, String>,
    ) -> Result<GuidePayload, SessionError> {
        let part = self
            .current_part()
            .ok_or_else(|| SessionError::NoParts(self.lab.lab_id.clone()))?;

        let mut entries: Vec<(&str, Option<u64>, &str)> = responses
            .iter()
            .map(|(key, text)| {
                let (section, index) = match key.split_once('.') {
                    Some((section, suffix)) => (section, suffix.parse().ok()),
                    None => (key.as_str(), None),
                };
                (section, index, text.trim())
            })
            .filter(|(_, _, text)| !text.is_empty())
            .collect();
        entries.sort_by_key(|&(section, index, _)| (section, index));

        let mut request = GuideRequest::new(student_name);
        for (section, _, text) in entries {
            match section {
                "setup" => request.setup.push(text.to_string()),
                "observations" => request.observations.push(text.to_string()),
                "evidence" => request.evidence.push(text.to_string()),
                "predictions" => request.predictions.push(text.to_string()),
                other => tracing::debug!(key = other, "Ignoring unknown response key"),
            }
        }

        Ok(GuidePayload::new(&self.lab, part, request, self.engine.snapshot())?)
    }
}

fn check_part_index(lab: &ScienceLab, index: usize) -> Result<(), SessionError> {
    let len = lab.lab_parts.len();
    if len == 0 {
        return Err(SessionError::NoParts(lab.lab_id.clone()));
    }
    if index >= len {
        return Err(SessionError::PartOutOfRange { index, len });
    }
    Ok(())
}
