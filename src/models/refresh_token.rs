use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// One link in a login session's refresh-token chain. `token` is the opaque
/// lookup key; `replaced_by_token` points at the successor once this record
/// has been rotated away (it stays `None` for a plain logout revoke).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub token: String,
    pub username: String,

    pub expiry_date: BsonDateTime,
    pub revoked: bool,
    pub replaced_by_token: Option<String>,

    pub created_at: BsonDateTime,
}

impl RefreshTokenDoc {
    pub fn new(username: String, token: String, expiry_date: BsonDateTime) -> Self {
        Self {
            id: ObjectId::new(),
            token,
            username,
            expiry_date,
            revoked: false,
            replaced_by_token: None,
            created_at: BsonDateTime::now(),
        }
    }

    /// A record is usable for `refresh` only while it is neither revoked nor
    /// expired. Expiry is exclusive of the boundary instant.
    pub fn is_active(&self, now: BsonDateTime) -> bool {
        !self.revoked && self.expiry_date > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_expiring_at(millis: i64) -> RefreshTokenDoc {
        RefreshTokenDoc::new(
            "a@x.com".into(),
            "token-value".into(),
            BsonDateTime::from_millis(millis),
        )
    }

    #[test]
    fn fresh_record_is_active() {
        let doc = doc_expiring_at(10_000);
        assert!(doc.is_active(BsonDateTime::from_millis(5_000)));
    }

    #[test]
    fn expired_record_is_not_active() {
        let doc = doc_expiring_at(10_000);
        assert!(!doc.is_active(BsonDateTime::from_millis(10_001)));
    }

    #[test]
    fn expiry_boundary_counts_as_expired() {
        let doc = doc_expiring_at(10_000);
        assert!(!doc.is_active(BsonDateTime::from_millis(10_000)));
    }

    #[test]
    fn revoked_record_is_not_active() {
        let mut doc = doc_expiring_at(10_000);
        doc.revoked = true;
        assert!(!doc.is_active(BsonDateTime::from_millis(5_000)));
    }
}
