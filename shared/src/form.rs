//! Calculator form state
//!
//! Holds the three raw inputs of the calculator screen and the result of
//! the last submission. Fields are stored exactly as entered; nothing is
//! checked until [`CalorieForm::submit`].

use crate::estimator::{estimate, ActivityLevel, CalorieEstimate, Sex};
use serde::{Deserialize, Serialize};

/// Message shown when the last submission produced no estimate
pub const INVALID_INPUT_MESSAGE: &str = "Anna kelvolliset tiedot.";

/// In-memory state of the calculator screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalorieForm {
    weight: String,
    sex: String,
    activity: String,
    #[serde(default)]
    result: Option<CalorieEstimate>,
}

impl Default for CalorieForm {
    fn default() -> Self {
        Self {
            weight: String::new(),
            sex: Sex::Male.form_label().to_string(),
            activity: ActivityLevel::Low.form_label().to_string(),
            result: None,
        }
    }
}

impl CalorieForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weight(&self) -> &str {
        &self.weight
    }

    pub fn sex(&self) -> &str {
        &self.sex
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    /// Result of the last submission, if it was valid
    pub fn result(&self) -> Option<CalorieEstimate> {
        self.result
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) {
        self.weight = weight.into();
    }

    pub fn set_sex(&mut self, sex: impl Into<String>) {
        self.sex = sex.into();
    }

    pub fn set_activity(&mut self, activity: impl Into<String>) {
        self.activity = activity.into();
    }

    /// Run the estimator on the current fields and keep the outcome
    ///
    /// An invalid submission clears any earlier result.
    pub fn submit(&mut self) -> Option<CalorieEstimate> {
        self.result = estimate(&self.weight, &self.sex, &self.activity);
        self.result
    }

    /// Text shown under the calculate button
    pub fn result_message(&self) -> String {
        match self.result {
            Some(estimate) => format!("Arvioidut poltetut kalorit: {} kcal", estimate),
            None => INVALID_INPUT_MESSAGE.to_string(),
        }
    }
}
