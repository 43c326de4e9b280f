//! Typed records for the inventory REST API
//!
//! Every response is decoded into one of these structs at the boundary;
//! a shape mismatch surfaces as `HomeboxError::Decode` instead of failing
//! later on a missing key.

use serde::{Deserialize, Serialize};

/// Connection parameters for the remote inventory service
#[derive(Debug, Clone)]
pub struct Connection {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

/// Login request payload for `POST /users/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response; the token is attached verbatim as the
/// `Authorization` header on all subsequent requests
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// A storage location; forms a forest via `parent_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Payload for `POST /locations`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationCreate {
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
}

/// Payload for `PUT /locations/{id}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    pub name: String,
    pub description: String,
    pub parent_id: Option<String>,
}

/// A named label attachable to items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// Payload for `POST /tags`
#[derive(Debug, Clone, Serialize)]
pub struct TagCreate {
    pub name: String,
}

/// Reference to the location an item is stored in, as embedded in
/// item responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationRef {
    pub id: String,
    pub name: String,
}

/// An inventory item
#[derive(Debug, Clone, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub location: Option<LocationRef>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Payload for `PUT /items/{id}`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub location_id: Option<String>,
    pub tag_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_decodes_camel_case_parent() {
        let json = r#"{"id":"a","name":"Garage","description":"","parentId":"b"}"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.parent_id.as_deref(), Some("b"));
    }

    #[test]
    fn test_location_tolerates_missing_optional_fields() {
        let json = r#"{"id":"a","name":"Garage"}"#;
        let loc: Location = serde_json::from_str(json).unwrap();
        assert_eq!(loc.description, "");
        assert!(loc.parent_id.is_none());
    }

    #[test]
    fn test_item_decodes_embedded_location_and_tags() {
        let json = r#"{
            "id": "i1",
            "name": "Drill",
            "quantity": 2,
            "location": {"id": "l1", "name": "Shelf"},
            "tags": [{"id": "t1", "name": "tools"}]
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.location.unwrap().id, "l1");
        assert_eq!(item.tags[0].name, "tools");
    }

    #[test]
    fn test_item_update_serializes_camel_case() {
        let update = ItemUpdate {
            name: "Drill".to_owned(),
            description: String::new(),
            quantity: 1,
            location_id: Some("l1".to_owned()),
            tag_ids: vec!["t1".to_owned()],
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["locationId"], "l1");
        assert_eq!(value["tagIds"][0], "t1");
    }
}
