//! Daily nutrition goals and progress towards them.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};
use crate::nutrition::Totals;

pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;
pub const DEFAULT_PROTEIN_GOAL: f64 = 50.0;
pub const DEFAULT_CARBS_GOAL: f64 = 275.0;
pub const DEFAULT_FATS_GOAL: f64 = 78.0;

/// A nutrient tracked against a goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    Calories,
    Protein,
    Carbs,
    Fats,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calories,
        Nutrient::Protein,
        Nutrient::Carbs,
        Nutrient::Fats,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Calories => "calories",
            Nutrient::Protein => "protein",
            Nutrient::Carbs => "carbs",
            Nutrient::Fats => "fats",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Nutrient::Calories => "kcal",
            _ => "g",
        }
    }
}

/// Per-nutrient daily targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goal {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl Default for Goal {
    fn default() -> Self {
        Self {
            calories: DEFAULT_CALORIE_GOAL,
            protein: DEFAULT_PROTEIN_GOAL,
            carbs: DEFAULT_CARBS_GOAL,
            fats: DEFAULT_FATS_GOAL,
        }
    }
}

impl Goal {
    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fats => self.fats,
        }
    }

    /// Change one target. Rejects negative and non-finite values.
    pub fn set(&mut self, nutrient: Nutrient, target: f64) -> Result<()> {
        if !target.is_finite() || target < 0.0 {
            return Err(LedgerError::Validation(format!(
                "{} goal must be a non-negative number (got {})",
                nutrient.as_str(),
                target
            )));
        }
        match nutrient {
            Nutrient::Calories => self.calories = target,
            Nutrient::Protein => self.protein = target,
            Nutrient::Carbs => self.carbs = target,
            Nutrient::Fats => self.fats = target,
        }
        Ok(())
    }

    /// Check every target, e.g. after loading from a config file.
    pub fn validate(&self) -> Result<()> {
        let mut copy = *self;
        for nutrient in Nutrient::ALL {
            copy.set(nutrient, self.get(nutrient))?;
        }
        Ok(())
    }
}

/// Progress towards a single target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientProgress {
    pub consumed: f64,
    pub target: f64,
    /// `min(100, 100 * consumed / target)`; 0 when the target is 0
    pub percent: f64,
    /// `max(0, target - consumed)`
    pub remaining: f64,
}

impl NutrientProgress {
    pub fn new(consumed: f64, target: f64) -> Self {
        let percent = if target > 0.0 {
            (consumed / target * 100.0).min(100.0)
        } else {
            0.0
        };
        Self {
            consumed,
            target,
            percent,
            remaining: (target - consumed).max(0.0),
        }
    }
}

/// Progress towards every target in a [`Goal`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    pub calories: NutrientProgress,
    pub protein: NutrientProgress,
    pub carbs: NutrientProgress,
    pub fats: NutrientProgress,
}

impl GoalProgress {
    pub fn get(&self, nutrient: Nutrient) -> &NutrientProgress {
        match nutrient {
            Nutrient::Calories => &self.calories,
            Nutrient::Protein => &self.protein,
            Nutrient::Carbs => &self.carbs,
            Nutrient::Fats => &self.fats,
        }
    }
}

/// Compare aggregated totals against a goal.
pub fn goal_progress(totals: &Totals, goal: &Goal) -> GoalProgress {
    GoalProgress {
        calories: NutrientProgress::new(totals.calories, goal.calories),
        protein: NutrientProgress::new(totals.protein, goal.protein),
        carbs: NutrientProgress::new(totals.carbs, goal.carbs),
        fats: NutrientProgress::new(totals.fats, goal.fats),
    }
}
