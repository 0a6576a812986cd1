use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Habitat the population lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Forest,
    Desert,
    Arctic,
}

/// Predator pressure on the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Predation {
    Low,
    #[default]
    Medium,
    High,
}

/// How much food the habitat provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodAvailability {
    Low,
    #[default]
    Medium,
    High,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Forest => "forest",
            Environment::Desert => "desert",
            Environment::Arctic => "arctic",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Predation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Predation::Low => "low",
            Predation::Medium => "medium",
            Predation::High => "high",
        };
        f.write_str(name)
    }
}

impl fmt::Display for FoodAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FoodAvailability::Low => "low",
            FoodAvailability::Medium => "medium",
            FoodAvailability::High => "high",
        };
        f.write_str(name)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forest" => Ok(Environment::Forest),
            "desert" => Ok(Environment::Desert),
            "arctic" => Ok(Environment::Arctic),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

impl FromStr for Predation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Predation::Low),
            "medium" => Ok(Predation::Medium),
            "high" => Ok(Predation::High),
            other => Err(format!("unknown predation level '{other}'")),
        }
    }
}

impl FromStr for FoodAvailability {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(FoodAvailability::Low),
            "medium" => Ok(FoodAvailability::Medium),
            "high" => Ok(FoodAvailability::High),
            other => Err(format!("unknown food availability '{other}'")),
        }
    }
}

/// The four user-adjustable simulation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub environment: Environment,
    pub predation: Predation,
    #[serde(alias = "food_availability")]
    pub food_availability: FoodAvailability,
    /// Percentage-like scalar in `[0, 10]`.
    #[serde(alias = "mutation_rate")]
    pub mutation_rate: u8,
}

impl Settings {
    pub const MAX_MUTATION_RATE: u8 = 10;
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            environment: Environment::Forest,
            predation: Predation::Medium,
            food_availability: FoodAvailability::Medium,
            mutation_rate: 5,
        }
    }
}

/// Partial settings record. `None` leaves the current value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predation: Option<Predation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_availability: Option<FoodAvailability>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation_rate: Option<u8>,
}

impl SettingsUpdate {
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn predation(mut self, predation: Predation) -> Self {
        self.predation = Some(predation);
        self
    }

    pub fn food_availability(mut self, food: FoodAvailability) -> Self {
        self.food_availability = Some(food);
        self
    }

    pub fn mutation_rate(mut self, rate: u8) -> Self {
        self.mutation_rate = Some(rate);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.environment.is_none()
            && self.predation.is_none()
            && self.food_availability.is_none()
            && self.mutation_rate.is_none()
    }

    /// Overwrites only the provided fields of `settings`.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(environment) = self.environment {
            settings.environment = environment;
        }
        if let Some(predation) = self.predation {
            settings.predation = predation;
        }
        if let Some(food) = self.food_availability {
            settings.food_availability = food;
        }
        if let Some(rate) = self.mutation_rate {
            settings.mutation_rate = rate.min(Settings::MAX_MUTATION_RATE);
        }
    }
}
