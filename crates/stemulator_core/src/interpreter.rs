//! Rule-based interpreter that turns lab setup text into simulation settings.
//!
//! Each setup line is lowercased and checked against [`RULES`] in table
//! order. Lines are processed in order across every selected part, so a later
//! match overwrites an earlier one.

use stemulator_data::{
    Environment, FoodAvailability, Predation, ScienceLab, Settings, SettingsUpdate,
};

/// Mutation rate installed by any line mentioning mutation.
pub const LAB_MUTATION_RATE: u8 = 8;

/// Settings and population hints derived from a lab's setup text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabDirectives {
    pub settings: SettingsUpdate,
    /// Prey should be rebuilt with light (white fur) coloration.
    pub favor_light_coloration: bool,
}

impl LabDirectives {
    /// Fills untouched fields from `current`.
    pub fn resolve(&self, current: &Settings) -> Settings {
        let mut resolved = *current;
        self.settings.apply_to(&mut resolved);
        resolved
    }
}

/// One keyword rule: a predicate over a lowercased line and its effect.
pub struct Rule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
    pub apply: fn(&mut LabDirectives),
}

pub const RULES: &[Rule] = &[
    Rule {
        name: "desert",
        matches: |line| line.contains("desert"),
        apply: |d| d.settings.environment = Some(Environment::Desert),
    },
    Rule {
        name: "arctic",
        matches: |line| line.contains("snow") || line.contains("arctic"),
        apply: |d| d.settings.environment = Some(Environment::Arctic),
    },
    Rule {
        name: "rocky",
        matches: |line| line.contains("rocky"),
        apply: |d| d.settings.environment = Some(Environment::Desert),
    },
    Rule {
        name: "predators",
        matches: |line| line.contains("wolves") || line.contains("predator"),
        apply: |d| d.settings.predation = Some(Predation::High),
    },
    Rule {
        name: "scarce food",
        matches: |line| {
            (line.contains("food availability") && line.contains("tough"))
                || line.contains("tough food")
        },
        apply: |d| d.settings.food_availability = Some(FoodAvailability::Low),
    },
    Rule {
        name: "mutation",
        matches: |line| line.contains("mutat"),
        apply: |d| d.settings.mutation_rate = Some(LAB_MUTATION_RATE),
    },
    Rule {
        name: "white fur",
        matches: |line| line.contains("white fur"),
        apply: |d| d.favor_light_coloration = true,
    },
];

/// Applies every matching rule for a single line.
pub fn interpret_line(line: &str, directives: &mut LabDirectives) {
    let line = line.to_lowercase();
    for rule in RULES {
        if (rule.matches)(&line) {
            tracing::trace!(rule = rule.name, line = %line, "Lab rule matched");
            (rule.apply)(directives);
        }
    }
}

/// Interprets a sequence of setup lines in order.
pub fn interpret_lines<'a, I>(lines: I) -> LabDirectives
where
    I: IntoIterator<Item = &'a str>,
{
    let mut directives = LabDirectives::default();
    for line in lines {
        interpret_line(line, &mut directives);
    }
    directives
}

/// Interprets the setup of the selected part, or of every part when `part_id` is `None`.
pub fn interpret_lab(lab: &ScienceLab, part_id: Option<u32>) -> LabDirectives {
    interpret_lines(
        lab.parts_for(part_id)
            .flat_map(|part| part.setup.iter().map(String::as_str)),
    )
}
