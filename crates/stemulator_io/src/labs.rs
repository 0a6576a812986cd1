//! Lab definitions as supplied by the lab service.
//!
//! A JSON document may hold a single lab object or an array of labs. A
//! directory is read as every `*.json` file inside it, in name order.

use crate::error::{IoError, Result};
use crate::serialization::{from_json, read_json_file};
use serde::Deserialize;
use std::path::Path;
use stemulator_data::{LabPart, LearningGoals, ScienceLab};

#[derive(Deserialize)]
#[serde(untagged)]
enum LabDocument {
    Many(Vec<ScienceLab>),
    One(Box<ScienceLab>),
}

#[derive(Debug, Clone, Default)]
pub struct LabLibrary {
    labs: Vec<ScienceLab>,
}

impl LabLibrary {
    pub fn new(labs: Vec<ScienceLab>) -> Self {
        for lab in labs.iter().filter(|l| l.lab_id.is_empty()) {
            tracing::warn!(topic = %lab.topic, "Lab without an id cannot be looked up");
        }
        Self { labs }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_document(from_json(json)?))
    }

    fn from_document(document: LabDocument) -> Self {
        let labs = match document {
            LabDocument::Many(labs) => labs,
            LabDocument::One(lab) => vec![*lab],
        };
        Self::new(labs)
    }

    /// Loads a JSON file, or every `*.json` file of a directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(IoError::not_found(path.display().to_string()));
        }

        if path.is_dir() {
            let mut files: Vec<_> = std::fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
                .collect();
            files.sort();

            let mut labs = Vec::new();
            for file in files {
                let library = Self::load_file(&file)?;
                labs.extend(library.labs);
            }
            tracing::info!(dir = %path.display(), labs = labs.len(), "Labs loaded");
            Ok(Self::new(labs))
        } else {
            let library = Self::load_file(path)?;
            tracing::info!(file = %path.display(), labs = library.len(), "Labs loaded");
            Ok(library)
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        Ok(Self::from_document(read_json_file(path)?))
    }

    pub fn get(&self, lab_id: &str) -> Option<&ScienceLab> {
        self.labs.iter().find(|lab| lab.lab_id == lab_id)
    }

    pub fn first(&self) -> Option<&ScienceLab> {
        self.labs.first()
    }

    pub fn labs(&self) -> &[ScienceLab] {
        &self.labs
    }

    pub fn len(&self) -> usize {
        self.labs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labs.is_empty()
    }

    /// Offline fallback used when no lab service is reachable.
    pub fn builtin() -> Self {
        Self::new(vec![sample_lab()])
    }
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn sample_lab() -> ScienceLab {
    ScienceLab {
        lab_id: "natural-selection-hares".into(),
        discipline: "Biology".into(),
        topic: "Evolution".into(),
        sub_topic: "Natural Selection in Snowshoe Hares".into(),
        description: "Explore how environment, predators and food shape the traits of a hare \
                      population over many generations."
            .into(),
        learning_goals: LearningGoals {
            big_idea: "Traits that improve survival become more common over generations.".into(),
            objectives: lines(&[
                "Relate environmental pressure to survival rate",
                "Track how average traits shift between generations",
            ]),
            success_criteria: lines(&[
                "Explain a trait shift using recorded evidence",
                "Predict the effect of a new selective pressure",
            ]),
        },
        lab_parts: vec![
            LabPart {
                part_id: 1,
                title: "A Snowy Habitat".into(),
                setup: lines(&[
                    "Start with a mix of fur colors in a snowy arctic habitat",
                    "Some hares are born with white fur",
                    "Observe the population changes over 10 generations",
                ]),
                observations: lines(&[
                    "How does the population size change?",
                    "Which camouflage values become more common?",
                    "Do larger hares survive more often?",
                ]),
                evidence: lines(&["Record the population for each generation"]),
                predictions: lines(&[
                    "What happens to white-furred hares after 10 generations?",
                    "What would happen if the snow melted?",
                ]),
            },
            LabPart {
                part_id: 2,
                title: "Predators Arrive".into(),
                setup: lines(&[
                    "Keep the snowy habitat",
                    "Introduce wolves into the habitat",
                ]),
                observations: lines(&[
                    "How quickly does the population shrink?",
                    "Which speed values are most common among survivors?",
                    "Does camouflage matter more or less than before?",
                ]),
                evidence: lines(&["Record the survival rate for each generation"]),
                predictions: lines(&[
                    "Will the population recover if predation stays high?",
                    "Which trait will matter most in the long run?",
                ]),
            },
            LabPart {
                part_id: 3,
                title: "A Changing Landscape".into(),
                setup: lines(&[
                    "The environment is rocky and dry",
                    "Food availability becomes tough as plants die back",
                ]),
                observations: lines(&[
                    "How do speed and size shift in the new habitat?",
                    "Is camouflage still useful?",
                    "How does scarce food affect population size?",
                ]),
                evidence: lines(&["Record average trait values after each generation"]),
                predictions: lines(&[
                    "What would happen if food became plentiful again?",
                    "Which hares will dominate after 20 generations?",
                ]),
            },
            LabPart {
                part_id: 4,
                title: "Mutation and Variation".into(),
                setup: lines(&[
                    "Increase how often mutations appear in offspring",
                    "Observe the population changes over 10 generations",
                ]),
                observations: lines(&[
                    "Does trait variation increase?",
                    "Does higher mutation help the population adapt?",
                    "Are extreme trait values more common?",
                ]),
                evidence: lines(&["Record the range of each trait every generation"]),
                predictions: lines(&[
                    "What would happen with no mutation at all?",
                    "Can mutation rescue a shrinking population?",
                ]),
            },
        ],
    }
}
