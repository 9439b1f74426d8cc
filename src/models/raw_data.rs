use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use super::bson_to_rfc3339;

/// A raw sensor upload: the RR-interval series for one measurement window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDataDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub user_id: ObjectId,
    pub activity_id: Option<ObjectId>,

    pub measurement_start_time: BsonDateTime,
    pub measurement_end_time: BsonDateTime,
    pub device_name: Option<String>,

    pub rr_intervals_ms: Vec<f64>,
    pub raw_duration_seconds: f64,

    pub created_at: BsonDateTime,
}

/// Listing projection; the interval series itself is only reported as a count.
#[derive(Debug, Clone, Serialize)]
pub struct RawDataPublic {
    pub id: String,
    pub user_id: String,
    pub activity_id: Option<String>,
    pub measurement_start_time: String,
    pub measurement_end_time: String,
    pub device_name: Option<String>,
    pub rr_count: usize,
    pub created_at: String,
}

impl From<RawDataDoc> for RawDataPublic {
    fn from(r: RawDataDoc) -> Self {
        Self {
            id: r.id.to_hex(),
            user_id: r.user_id.to_hex(),
            activity_id: r.activity_id.map(|id| id.to_hex()),
            measurement_start_time: bson_to_rfc3339(r.measurement_start_time),
            measurement_end_time: bson_to_rfc3339(r.measurement_end_time),
            device_name: r.device_name,
            rr_count: r.rr_intervals_ms.len(),
            created_at: bson_to_rfc3339(r.created_at),
        }
    }
}
