use contracts::system::options::Options;
use serde_json::Value;

use crate::shared::components::form_builder::{FieldChange, FieldValue, SelectOption};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionsFormState {
    pub start_hour: String,
    pub end_hour: String,
    /// Minutes, as picked in the select
    pub split: String,
}

impl OptionsFormState {
    pub fn from_options(options: &Options) -> Self {
        Self {
            start_hour: options.start_hour_planning.clone(),
            end_hour: options.end_hour_planning.clone(),
            split: options
                .split_planning
                .map(|s| s.to_string())
                .unwrap_or_default(),
        }
    }

    pub fn apply(&mut self, change: FieldChange) {
        let text = change.value.text();
        match change.name.as_str() {
            "startHourPlanning" => self.start_hour = text,
            "endHourPlanning" => self.end_hour = text,
            "splitPlanning" => self.split = text,
            _ => {}
        }
    }

    pub fn value(&self, name: &str) -> FieldValue {
        let text = match name {
            "startHourPlanning" => self.start_hour.clone(),
            "endHourPlanning" => self.end_hour.clone(),
            "splitPlanning" => self.split.clone(),
            _ => String::new(),
        };
        FieldValue::Text(text)
    }

    /// `splitPlanning` is sent as `null` when the selection is not a number.
    pub fn to_options(&self) -> Options {
        Options {
            split_planning: self.split.trim().parse().ok(),
            start_hour_planning: self.start_hour.clone(),
            end_hour_planning: self.end_hour.clone(),
        }
    }
}

/// Select options from the split values endpoint (numbers or strings).
pub fn split_options(values: &[Value]) -> Vec<SelectOption> {
    values
        .iter()
        .filter_map(|v| match v {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        })
        .map(SelectOption::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_through_form() {
        let options = Options {
            split_planning: Some(30),
            start_hour_planning: "08:00".into(),
            end_hour_planning: "18:00".into(),
        };
        let mut state = OptionsFormState::from_options(&options);
        assert_eq!(state.value("splitPlanning"), FieldValue::Text("30".into()));

        state.apply(FieldChange {
            name: "splitPlanning".into(),
            value: FieldValue::Text("15".into()),
        });
        assert_eq!(state.to_options().split_planning, Some(15));
    }

    #[test]
    fn test_split_options() {
        let options = split_options(&[json!(15), json!("30"), json!(null)]);
        assert_eq!(options, vec![SelectOption::from("15"), SelectOption::from("30")]);
    }
}
