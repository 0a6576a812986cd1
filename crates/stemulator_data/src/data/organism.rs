use serde::{Deserialize, Serialize};

/// Lower bound shared by every continuous trait.
pub const TRAIT_MIN: f64 = 0.0;
/// Upper bound shared by every continuous trait.
pub const TRAIT_MAX: f64 = 10.0;

/// Ecological role of an organism. Fixed at creation and inherited unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Prey,
    Predator,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Prey => write!(f, "prey"),
            Role::Predator => write!(f, "predator"),
        }
    }
}

/// One simulated individual.
///
/// `id` is dense within a single generation's population and is recomputed
/// whenever the population is rebuilt, so it is not a stable identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organism {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    pub camouflage: f64,
    pub size: f64,
    pub alive: bool,
    pub role: Role,
}

impl Organism {
    /// Clamps a raw trait value into `[TRAIT_MIN, TRAIT_MAX]`.
    #[must_use]
    pub fn clamp_trait(value: f64) -> f64 {
        if value.is_nan() {
            return TRAIT_MIN;
        }
        value.clamp(TRAIT_MIN, TRAIT_MAX)
    }

    /// Returns `[speed, camouflage, size]`.
    #[must_use]
    pub fn traits(&self) -> [f64; 3] {
        [self.speed, self.camouflage, self.size]
    }

    /// True when every trait sits inside the trait range.
    #[must_use]
    pub fn traits_in_bounds(&self) -> bool {
        self.traits()
            .iter()
            .all(|t| (TRAIT_MIN..=TRAIT_MAX).contains(t))
    }

    pub fn is_prey(&self) -> bool {
        self.role == Role::Prey
    }
}
