//! The mod entity and its change events, as serialized by the backend.

use serde::{Deserialize, Serialize};

/// A single installed game modification.
///
/// Owned and mutated exclusively by the backend; the shell only mirrors it.
/// Field names match the backend's JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mod {
    pub name: String,
    /// Unique identifier of the mod, assigned by the backend registry
    pub uid: u64,
    pub author: Option<String>,
    pub version: Option<String>,
    pub info: Option<String>,
    /// Injection method required to install this mod into the game
    pub injection: String,
    /// Whether the mod is currently installed into the game
    pub is_active: bool,
}

/// Event emitted by the backend whenever a mod in its registry changes.
///
/// Externally tagged on the wire: `{"InsertUpdate": [uid, mod]}` or
/// `{"Delete": uid}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModChangeEvent {
    Delete(u64),
    InsertUpdate(u64, Mod),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wire_mod(uid: u64, name: &str) -> serde_json::Value {
        json!({
            "name": name,
            "uid": uid,
            "author": "TeyKey1",
            "version": "1.2.0",
            "info": null,
            "injection": "Localization",
            "is_active": false
        })
    }

    #[test]
    fn mod_deserializes_from_wire_shape() {
        let parsed: Mod = serde_json::from_value(wire_mod(3, "Gold Rain")).unwrap();

        assert_eq!(parsed.uid, 3);
        assert_eq!(parsed.name, "Gold Rain");
        assert_eq!(parsed.author.as_deref(), Some("TeyKey1"));
        assert_eq!(parsed.info, None);
        assert!(!parsed.is_active);
    }

    #[test]
    fn unknown_backend_fields_are_ignored() {
        let mut value = wire_mod(1, "Skin Pack");
        value["archive_file_extension"] = json!("zip");

        let parsed: Mod = serde_json::from_value(value).unwrap();
        assert_eq!(parsed.name, "Skin Pack");
    }

    #[test]
    fn change_events_match_wire_tags() {
        let delete: ModChangeEvent = serde_json::from_value(json!({ "Delete": 7 })).unwrap();
        assert_eq!(delete, ModChangeEvent::Delete(7));

        let upsert: ModChangeEvent =
            serde_json::from_value(json!({ "InsertUpdate": [3, wire_mod(3, "Gold Rain")] }))
                .unwrap();
        let ModChangeEvent::InsertUpdate(uid, module) = upsert else {
            panic!("wrong variant");
        };
        assert_eq!(uid, 3);
        assert_eq!(module.name, "Gold Rain");
    }
}
