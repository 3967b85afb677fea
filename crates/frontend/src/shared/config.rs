//! Application configuration
//!
//! Values come from `config.toml` at the crate root, embedded at build time.
//! Every key is optional: missing keys fall back to the defaults below.
//! `SCHEDULER_API_URL` set in the build environment overrides `api.base_url`.

use leptos::prelude::*;
use serde::Deserialize;

use crate::shared::date_utils::is_valid_format;
use crate::shared::resource::Resource;

/// Configuration embedded in the bundle
const EMBEDDED_CONFIG: &str = include_str!("../../config.toml");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("table.elements_per_page must be greater than zero")]
    ZeroPageSize,
    #[error("display.date_format is not a valid chrono format: {0:?}")]
    DateFormat(String),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub table: TableConfig,
    pub display: DisplayConfig,
    pub messages: MessagesConfig,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Absolute backend URL. Empty: same host as the page, on `backend_port`.
    pub base_url: String,
    pub backend_port: u16,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub elements_per_page: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// chrono format string for `creationDate` / `modificationDate`
    pub date_format: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub general_error: String,
    pub options_saved: String,
}

/// Paths of the six CRUD endpoints of one resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceEndpoints {
    pub list: String,
    pub count: String,
    pub get: String,
    pub create: String,
    pub update: String,
    pub delete: String,
}

impl ResourceEndpoints {
    /// `/{plural}`, `/count/{plural}` and `/{singular}` for the rest.
    pub fn conventional(singular: &str, plural: &str) -> Self {
        let item = format!("/{singular}");
        Self {
            list: format!("/{plural}"),
            count: format!("/count/{plural}"),
            get: item.clone(),
            create: item.clone(),
            update: item.clone(),
            delete: item,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub days: String,
    pub options: String,
    pub options_split_values: String,
    pub planning_generate: String,
    pub classes: ResourceEndpoints,
    pub teachers: ResourceEndpoints,
    pub rooms: ResourceEndpoints,
    pub disciplines: ResourceEndpoints,
    pub timeslots: ResourceEndpoints,
    pub slots: ResourceEndpoints,
    pub plannings: ResourceEndpoints,
}

impl Endpoints {
    pub fn resource(&self, resource: Resource) -> &ResourceEndpoints {
        match resource {
            Resource::Classes => &self.classes,
            Resource::Teachers => &self.teachers,
            Resource::Rooms => &self.rooms,
            Resource::Disciplines => &self.disciplines,
            Resource::TimeSlots => &self.timeslots,
            Resource::Slots => &self.slots,
            Resource::Plannings => &self.plannings,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            backend_port: 8080,
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            elements_per_page: 10,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: "%d/%m/%Y %H:%M".to_string(),
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            general_error: "Impossible de se connecter au serveur : Veuillez contacter votre responsable informatique".to_string(),
            options_saved: "Les options ont bien été enregistrées.".to_string(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        let mut timeslots = ResourceEndpoints::conventional("timeslot", "timeslots");
        timeslots.count = "/timeslot/count".to_string();

        Self {
            days: "/jours".to_string(),
            options: "/options".to_string(),
            options_split_values: "/options/choicesSplitTime".to_string(),
            planning_generate: "/planning/generate".to_string(),
            classes: ResourceEndpoints::conventional("classe", "classes"),
            teachers: ResourceEndpoints::conventional("enseignant", "enseignants"),
            rooms: ResourceEndpoints::conventional("salle", "salles"),
            disciplines: ResourceEndpoints::conventional("matiere", "matieres"),
            timeslots,
            slots: ResourceEndpoints::conventional("slot", "slots"),
            plannings: ResourceEndpoints::conventional("planning", "plannings"),
        }
    }
}

impl AppConfig {
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(source)?;
        if config.table.elements_per_page == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if !is_valid_format(&config.display.date_format) {
            return Err(ConfigError::DateFormat(config.display.date_format));
        }
        Ok(config)
    }

    /// Embedded config plus the build-time API URL override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_toml(EMBEDDED_CONFIG)?;
        if let Some(url) = option_env!("SCHEDULER_API_URL") {
            config.api.base_url = url.trim_end_matches('/').to_string();
        }
        Ok(config)
    }

    pub fn page_size(&self) -> usize {
        self.table.elements_per_page
    }
}

/// Load the configuration, falling back to defaults when the embedded file is broken.
pub fn load_or_default() -> AppConfig {
    match AppConfig::load() {
        Ok(config) => {
            log::debug!("configuration loaded, api base: {:?}", config.api.base_url);
            config
        }
        Err(e) => {
            log::error!("{e}; using default configuration");
            AppConfig::default()
        }
    }
}

/// Configuration provided at the application root.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_else(load_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_loads() {
        let config = AppConfig::from_toml(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.page_size(), 10);
        assert_eq!(config.endpoints.classes.count, "/count/classes");
        assert_eq!(config.endpoints.timeslots.count, "/timeslot/count");
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let config = AppConfig::from_toml("[table]\nelements_per_page = 25\n").unwrap();
        assert_eq!(config.page_size(), 25);
        assert_eq!(config.api.backend_port, 8080);
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_resource_override() {
        let source = r#"
[endpoints.rooms]
list = "/v2/rooms"
count = "/v2/rooms/count"
get = "/v2/room"
create = "/v2/room"
update = "/v2/room"
delete = "/v2/room"
"#;
        let config = AppConfig::from_toml(source).unwrap();
        assert_eq!(config.endpoints.resource(Resource::Rooms).list, "/v2/rooms");
        assert_eq!(config.endpoints.resource(Resource::Classes).list, "/classes");
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = AppConfig::from_toml("[table]\nelements_per_page = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroPageSize));
    }

    #[test]
    fn test_bad_date_format_rejected() {
        let err = AppConfig::from_toml("[display]\ndate_format = \"%d/%m/%Y %Q\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::DateFormat(ref f) if f == "%d/%m/%Y %Q"));

        let config = AppConfig::from_toml("[display]\ndate_format = \"%Y-%m-%d\"\n").unwrap();
        assert_eq!(config.display.date_format, "%Y-%m-%d");
    }
}
