use serde::{Deserialize, Serialize};

/// Global planning options (`GET`/`PUT /options`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Length in minutes of one planning cell
    #[serde(rename = "splitPlanning", default)]
    pub split_planning: Option<u32>,

    #[serde(rename = "startHourPlanning", default)]
    pub start_hour_planning: String,

    #[serde(rename = "endHourPlanning", default)]
    pub end_hour_planning: String,
}
