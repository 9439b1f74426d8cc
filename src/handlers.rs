pub mod activities;
pub mod auth;
pub mod health;
pub mod model_outputs;
pub mod processed_data;
pub mod raw_data;
pub mod users;

use mongodb::bson::oid::ObjectId;

use crate::errors::AppError;

pub fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| AppError::Validation("invalid id".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_ids() {
        assert!(parse_object_id("not-an-oid").is_err());
        let oid = ObjectId::new();
        assert_eq!(parse_object_id(&oid.to_hex()).unwrap(), oid);
    }
}
