use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub name: String,
    pub category: Option<String>,
    pub duration_min: Option<i32>,

    pub intensity: Option<String>,
    pub calories: Option<i32>,
    pub note: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub user_id: Option<ObjectId>,

    pub created_at: BsonDateTime,
    pub updated_at: BsonDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityPublic {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
    pub duration_min: Option<i32>,
    pub intensity: Option<String>,
    pub calories: Option<i32>,
    pub note: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub user_id: Option<String>,
}

impl From<ActivityDoc> for ActivityPublic {
    fn from(a: ActivityDoc) -> Self {
        Self {
            id: a.id.to_hex(),
            name: a.name,
            category: a.category,
            duration_min: a.duration_min,
            intensity: a.intensity,
            calories: a.calories,
            note: a.note,
            date: a.date,
            time: a.time,
            user_id: a.user_id.map(|id| id.to_hex()),
        }
    }
}
