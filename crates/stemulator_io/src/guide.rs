//! Feedback request payload.
//!
//! The feedback service receives the student's written responses for one lab
//! part together with a snapshot of the simulation. The snapshot is opaque to
//! the service; no schema negotiation happens here.

use crate::error::{IoError, Result};
use crate::serialization::to_json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use stemulator_data::{LabPart, LabSnapshot, ScienceLab};

/// The student's written responses for one lab part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuideRequest {
    pub student_name: String,
    pub setup: Vec<String>,
    pub observations: Vec<String>,
    pub evidence: Vec<String>,
    pub predictions: Vec<String>,
}

impl GuideRequest {
    pub fn new(student_name: impl Into<String>) -> Self {
        Self {
            student_name: student_name.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.student_name.trim().is_empty() {
            return Err(IoError::validation("student name is required"));
        }
        if self.observations.iter().all(|o| o.trim().is_empty())
            && self.predictions.iter().all(|p| p.trim().is_empty())
        {
            return Err(IoError::validation(
                "at least one observation or prediction is required",
            ));
        }
        Ok(())
    }
}

/// Everything handed to the feedback consumer for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidePayload {
    pub lab_id: String,
    pub part_id: u32,
    pub part_title: String,
    /// RFC 3339 submission time.
    pub submitted_at: String,
    pub request: GuideRequest,
    pub snapshot: LabSnapshot,
}

impl GuidePayload {
    pub fn new(
        lab: &ScienceLab,
        part: &LabPart,
        request: GuideRequest,
        snapshot: LabSnapshot,
    ) -> Result<Self> {
        request.validate()?;
        Ok(Self {
            lab_id: lab.lab_id.clone(),
            part_id: part.part_id,
            part_title: part.title.clone(),
            submitted_at: Utc::now().to_rfc3339(),
            request,
            snapshot,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        to_json(self)
    }
}
