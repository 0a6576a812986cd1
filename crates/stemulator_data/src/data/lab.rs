use serde::{Deserialize, Serialize};

/// Learning goals attached to a lab. Only carried through to consumers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningGoals {
    pub big_idea: String,
    pub objectives: Vec<String>,
    pub success_criteria: Vec<String>,
}

/// One part of a lab. `setup` lines drive parameter derivation; the other
/// sequences are what the student is expected to record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LabPart {
    pub part_id: u32,
    pub title: String,
    pub setup: Vec<String>,
    pub observations: Vec<String>,
    pub evidence: Vec<String>,
    pub predictions: Vec<String>,
}

/// Externally supplied lab definition.
///
/// Every field defaults when missing so partially filled documents from the
/// lab service are still usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScienceLab {
    #[serde(alias = "_id")]
    pub lab_id: String,
    pub discipline: String,
    pub topic: String,
    pub sub_topic: String,
    pub description: String,
    pub learning_goals: LearningGoals,
    pub lab_parts: Vec<LabPart>,
}

impl ScienceLab {
    /// Parts selected by `part_id`; `None` selects every part.
    pub fn parts_for(&self, part_id: Option<u32>) -> impl Iterator<Item = &LabPart> {
        self.lab_parts
            .iter()
            .filter(move |p| part_id.is_none_or(|id| p.part_id == id))
    }

    /// Display title: the sub-topic, or the id when no sub-topic is set.
    pub fn title(&self) -> &str {
        if !self.sub_topic.is_empty() {
            &self.sub_topic
        } else {
            &self.lab_id
        }
    }
}
