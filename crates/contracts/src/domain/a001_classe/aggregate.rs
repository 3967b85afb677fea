use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, Identified};

/// Classe (group of pupils a planning is built for)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classe {
    #[serde(default)]
    pub id: Option<EntityId>,

    #[serde(rename = "nom", default)]
    pub name: String,

    #[serde(rename = "creationDate", default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<serde_json::Value>,

    #[serde(rename = "modificationDate", default, skip_serializing_if = "Option::is_none")]
    pub modification_date: Option<serde_json::Value>,
}

impl Identified for Classe {
    fn id(&self) -> Option<EntityId> {
        self.id
    }
}

/// Create / update body. `id` is only sent on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClasseDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,

    #[serde(rename = "nom")]
    pub name: String,
}

impl From<&Classe> for ClasseDto {
    fn from(c: &Classe) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classe_from_backend() {
        let c: Classe = serde_json::from_str(
            r#"{"id":4,"nom":"6eme A","creationDate":"2020-09-01T08:00:00.000+0000","modificationDate":null}"#,
        )
        .unwrap();
        assert_eq!(c.id, Some(4));
        assert_eq!(c.name, "6eme A");
        assert_eq!(c.id_string(), "4");
    }

    #[test]
    fn test_create_body_has_no_id() {
        let dto = ClasseDto {
            id: None,
            name: "5eme B".into(),
        };
        assert_eq!(serde_json::to_string(&dto).unwrap(), r#"{"nom":"5eme B"}"#);
    }
}
