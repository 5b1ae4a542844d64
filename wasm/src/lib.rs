//! Calorie Estimator WASM Module
//!
//! WebAssembly bindings so the calculator form can run in the browser.

use calorie_estimator_shared::{self as shared, ActivityLevel, CalorieForm};
use wasm_bindgen::prelude::*;

/// Estimate daily calorie expenditure from raw form input
///
/// Returns `undefined` when any input is invalid.
#[wasm_bindgen]
pub fn estimate_calories(weight: &str, sex: &str, activity: &str) -> Option<f64> {
    shared::estimate(weight, sex, activity).map(|estimate| estimate.kcal())
}

/// Activity level labels in dropdown order
#[wasm_bindgen]
pub fn activity_level_labels() -> Vec<String> {
    ActivityLevel::ALL
        .iter()
        .map(|level| level.form_label().to_string())
        .collect()
}

/// Calculator form state exposed to JavaScript
#[wasm_bindgen]
#[derive(Default)]
pub struct CalorieFormHandle {
    inner: CalorieForm,
}

#[wasm_bindgen]
impl CalorieFormHandle {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(getter)]
    pub fn weight(&self) -> String {
        self.inner.weight().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_weight(&mut self, weight: String) {
        self.inner.set_weight(weight);
    }

    #[wasm_bindgen(getter)]
    pub fn sex(&self) -> String {
        self.inner.sex().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_sex(&mut self, sex: String) {
        self.inner.set_sex(sex);
    }

    #[wasm_bindgen(getter)]
    pub fn activity(&self) -> String {
        self.inner.activity().to_string()
    }

    #[wasm_bindgen(setter)]
    pub fn set_activity(&mut self, activity: String) {
        self.inner.set_activity(activity);
    }

    /// Calculate and keep the result
    pub fn submit(&mut self) -> Option<f64> {
        self.inner.submit().map(|estimate| estimate.kcal())
    }

    #[wasm_bindgen(getter)]
    pub fn result(&self) -> Option<f64> {
        self.inner.result().map(|estimate| estimate.kcal())
    }

    #[wasm_bindgen(getter, js_name = resultMessage)]
    pub fn result_message(&self) -> String {
        self.inner.result_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_calories() {
        assert_eq!(estimate_calories("70", "Mies", "Matala"), Some(1334.0));
        assert_eq!(estimate_calories("", "Mies", "Matala"), None);
    }

    #[test]
    fn test_activity_level_labels() {
        let labels = activity_level_labels();
        assert_eq!(
            labels,
            vec!["Matala", "Tavallinen", "Keskitaso", "Korkea", "Erittäin korkea"]
        );
    }

    #[test]
    fn test_form_handle() {
        let mut form = CalorieFormHandle::new();
        assert_eq!(form.sex(), "Mies");
        form.set_weight("60".to_string());
        form.set_sex("Nainen".to_string());
        form.set_activity("Korkea".to_string());
        assert_eq!(form.submit(), Some(2005.0));
        assert_eq!(form.result_message(), "Arvioidut poltetut kalorit: 2005 kcal");
    }
}
