use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use super::bson_to_rfc3339;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub email: String,
    pub password_hash: String,

    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub clinical_story: Option<String>,
    pub notes: Option<Vec<String>>,

    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

/// Outward projection of a user, without the password hash.
#[derive(Debug, Clone, Serialize)]
pub struct UserPublic {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub clinical_story: Option<String>,
    pub notes: Option<Vec<String>>,
    pub created_at: String,
}

impl From<UserDoc> for UserPublic {
    fn from(u: UserDoc) -> Self {
        Self {
            id: u.id.to_hex(),
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            age: u.age,
            gender: u.gender,
            phone: u.phone,
            clinical_story: u.clinical_story,
            notes: u.notes,
            created_at: bson_to_rfc3339(u.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_projection_drops_password_hash() {
        let doc = UserDoc {
            id: ObjectId::new(),
            email: "a@x.com".into(),
            password_hash: "$argon2id$...".into(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            age: Some(28),
            gender: None,
            phone: None,
            clinical_story: None,
            notes: None,
            created_at: BsonDateTime::from_millis(0),
            updated_at: BsonDateTime::from_millis(0),
        };
        let public = UserPublic::from(doc);
        let json = serde_json::to_string(&public).unwrap();
        assert!(!json.contains("argon2"));
        assert!(json.contains("a@x.com"));
    }
}
