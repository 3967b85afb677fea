//! Generic key/value details view.
//!
//! Keys are shown in the order the backend sent them. Labels and formats come
//! from a static table; keys missing from it are shown raw.

use leptos::prelude::*;
use serde_json::{Map, Value};

use crate::shared::config::use_config;
use crate::shared::date_utils::format_date_value;

const EMPTY: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailFormat {
    Text,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailLabel {
    pub key: &'static str,
    pub label: &'static str,
    pub format: DetailFormat,
}

const fn text(key: &'static str, label: &'static str) -> DetailLabel {
    DetailLabel {
        key,
        label,
        format: DetailFormat::Text,
    }
}

const fn date(key: &'static str, label: &'static str) -> DetailLabel {
    DetailLabel {
        key,
        label,
        format: DetailFormat::Date,
    }
}

pub static DETAIL_LABELS: &[DetailLabel] = &[
    text("id", "Identifiant"),
    text("nom", "Nom"),
    text("prenom", "Prénom"),
    date("creationDate", "Date de création"),
    date("modificationDate", "Date de modification"),
    text("couleurFond", "Couleur du fond"),
    text("couleurPolice", "Couleur de la police"),
    text("volumeHoraire", "Volume horaire"),
    text("descriptionMatiere", "Description"),
    text("start", "Début"),
    text("end", "Fin"),
    text("comment", "Commentaire"),
    text("timeSlot", "Créneau horaire"),
    text("enseignant", "Enseignant"),
    text("matiere", "Matière"),
    text("salle", "Salle"),
    text("jour", "Jour"),
    text("classe", "Classe"),
    text("slots", "Slots"),
    text("wednesdayUsed", "Mercredi travaillé"),
    text("saturdayUsed", "Samedi travaillé"),
];

/// Label table used to render a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailsConfig {
    pub labels: &'static [DetailLabel],
}

impl Default for DetailsConfig {
    fn default() -> Self {
        Self {
            labels: DETAIL_LABELS,
        }
    }
}

impl DetailsConfig {
    pub fn lookup(&self, key: &str) -> (String, DetailFormat) {
        self.labels
            .iter()
            .find(|l| l.key == key)
            .map(|l| (l.label.to_string(), l.format))
            .unwrap_or_else(|| (key.to_string(), DetailFormat::Text))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    Text(String),
    Nested(Vec<DetailItem>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailItem {
    pub key: String,
    pub label: String,
    pub value: DetailValue,
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

fn scalar_text(value: &Value) -> String {
    if is_falsy(value) {
        return EMPTY.to_string();
    }
    match value {
        Value::Bool(true) => "Oui".to_string(),
        Value::Bool(false) => "Non".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn array_text(items: &[Value]) -> String {
    let parts: Vec<String> = items
        .iter()
        .map(|item| match item {
            Value::Object(obj) => obj
                .get("id")
                .map(scalar_text)
                .unwrap_or_else(|| item.to_string()),
            Value::Array(_) => item.to_string(),
            scalar => scalar_text(scalar),
        })
        .collect();
    if parts.is_empty() {
        EMPTY.to_string()
    } else {
        parts.join(", ")
    }
}

fn detail_value(
    value: &Value,
    format: DetailFormat,
    depth: usize,
    config: &DetailsConfig,
    date_format: &str,
) -> DetailValue {
    match value {
        _ if is_falsy(value) => DetailValue::Text(EMPTY.to_string()),
        _ if format == DetailFormat::Date => {
            DetailValue::Text(format_date_value(value, date_format))
        }
        Value::Object(obj) if depth == 0 => {
            DetailValue::Nested(items_at(obj, config, date_format, depth + 1))
        }
        Value::Object(_) => DetailValue::Text(value.to_string()),
        Value::Array(items) => DetailValue::Text(array_text(items)),
        scalar => DetailValue::Text(scalar_text(scalar)),
    }
}

fn items_at(
    data: &Map<String, Value>,
    config: &DetailsConfig,
    date_format: &str,
    depth: usize,
) -> Vec<DetailItem> {
    data.iter()
        .map(|(key, value)| {
            let (label, format) = config.lookup(key);
            DetailItem {
                key: key.clone(),
                label,
                value: detail_value(value, format, depth, config, date_format),
            }
        })
        .collect()
}

/// Rows to render for `data`, one per key.
pub fn detail_items(
    data: &Map<String, Value>,
    config: &DetailsConfig,
    date_format: &str,
) -> Vec<DetailItem> {
    items_at(data, config, date_format, 0)
}

fn item_view(item: DetailItem) -> AnyView {
    match item.value {
        DetailValue::Text(text) => view! {
            <li data-key=item.key>
                <span class="details__label">{item.label}</span>
                " : "
                <span class="details__value">{text}</span>
            </li>
        }
        .into_any(),
        DetailValue::Nested(children) => view! {
            <li data-key=item.key>
                <span class="details__label">{item.label}</span>
                " : "
                <ul class="details__nested">
                    {children.into_iter().map(item_view).collect_view()}
                </ul>
            </li>
        }
        .into_any(),
    }
}

#[component]
pub fn DetailsList(
    #[prop(into)] data: Signal<Option<Map<String, Value>>>,
    #[prop(optional)] config: Option<DetailsConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let date_format = use_config().display.date_format;

    view! {
        <div class="details">
            <ul>
                {move || {
                    data.get()
                        .map(|map| detail_items(&map, &config, &date_format))
                        .unwrap_or_default()
                        .into_iter()
                        .map(item_view)
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FMT: &str = "%d/%m/%Y %H:%M";

    fn items(value: Value) -> Vec<DetailItem> {
        let map = value.as_object().cloned().unwrap_or_default();
        detail_items(&map, &DetailsConfig::default(), FMT)
    }

    fn text_of(item: &DetailItem) -> &str {
        match &item.value {
            DetailValue::Text(t) => t,
            DetailValue::Nested(_) => panic!("nested value for {}", item.key),
        }
    }

    #[test]
    fn test_one_item_per_key() {
        let rendered = items(json!({"name": "toto", "age": 10}));
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].label, "name");
        assert_eq!(text_of(&rendered[0]), "toto");
        assert_eq!(text_of(&rendered[1]), "10");
    }

    #[test]
    fn test_no_data_no_items() {
        assert!(items(json!({})).is_empty());
    }

    #[test]
    fn test_labels_and_order() {
        let rendered = items(json!({"nom": "Dupont", "id": 3, "prenom": "Jean"}));
        let labels: Vec<_> = rendered.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Nom", "Identifiant", "Prénom"]);
    }

    #[test]
    fn test_falsy_and_booleans() {
        let rendered = items(json!({
            "comment": "",
            "volumeHoraire": 0,
            "salle": null,
            "wednesdayUsed": true,
            "saturdayUsed": false
        }));
        let texts: Vec<_> = rendered.iter().map(text_of).collect();
        assert_eq!(texts, vec!["-", "-", "-", "Oui", "Non"]);
    }

    #[test]
    fn test_dates_formatted() {
        let rendered = items(json!({"creationDate": "2024-03-15T14:02:26Z", "modificationDate": null}));
        assert_eq!(text_of(&rendered[0]), "15/03/2024 14:02");
        assert_eq!(text_of(&rendered[1]), "-");
    }

    #[test]
    fn test_nested_object_one_level() {
        let rendered = items(json!({
            "timeSlot": {"id": 2, "start": "08:00", "end": "09:00"},
            "classe": {"id": 1, "nested": {"deep": true}}
        }));
        match &rendered[0].value {
            DetailValue::Nested(children) => {
                assert_eq!(children.len(), 3);
                assert_eq!(children[1].label, "Début");
                assert_eq!(text_of(&children[1]), "08:00");
            }
            other => panic!("unexpected {other:?}"),
        }
        match &rendered[1].value {
            DetailValue::Nested(children) => {
                assert_eq!(text_of(&children[1]), r#"{"deep":true}"#);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_arrays_joined() {
        let rendered = items(json!({
            "slots": [{"id": 4}, {"id": 9}],
            "tags": ["a", "b"],
            "empty": []
        }));
        assert_eq!(text_of(&rendered[0]), "4, 9");
        assert_eq!(text_of(&rendered[1]), "a, b");
        assert_eq!(text_of(&rendered[2]), "-");
    }
}
