use serde::{Deserialize, Serialize};

/// Backend identifiers are plain integers.
pub type EntityId = i64;

/// Reference to another record inside a mutation body, e.g. `"classe": { "id": 3 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: EntityId,
}

impl EntityRef {
    pub fn new(id: EntityId) -> Self {
        Self { id }
    }

    /// Parse a form value ("12") into a reference. Blank or invalid input gives `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.trim().parse::<EntityId>().ok().map(Self::new)
    }
}

/// Records that carry a backend identifier.
pub trait Identified {
    fn id(&self) -> Option<EntityId>;

    /// Identifier rendered for tables and URLs; empty when the record is not saved yet.
    fn id_string(&self) -> String {
        self.id().map(|id| id.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_ref_parse() {
        assert_eq!(EntityRef::parse(" 7 "), Some(EntityRef::new(7)));
        assert_eq!(EntityRef::parse(""), None);
        assert_eq!(EntityRef::parse("abc"), None);
    }

    #[test]
    fn test_entity_ref_wire_shape() {
        let json = serde_json::to_string(&EntityRef::new(3)).unwrap();
        assert_eq!(json, r#"{"id":3}"#);
    }
}
