use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use super::bson_to_rfc3339;

/// Model-level scores for one measurement, the subset of processed data that
/// is shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOutputDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub measurement_id: Option<String>,
    pub user_id: ObjectId,
    pub measurement_time: BsonDateTime,

    pub biological_age: Option<f64>,
    pub biological_age_percentage: Option<f64>,
    pub burnout_resistance: Option<f64>,
    pub burnout_resistance_percentage: Option<f64>,
    pub performance_potential: Option<f64>,
    pub performance_potential_percentage: Option<f64>,
    pub stress: Option<f64>,
    pub stress_percentage: Option<f64>,
    pub health_state: Option<f64>,
    pub health_state_percentage: Option<f64>,

    pub created_at: BsonDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelOutputPublic {
    pub id: String,
    pub user_id: String,
    pub measurement_time: String,
    pub biological_age: Option<f64>,
    pub biological_age_percentage: Option<f64>,
    pub burnout_resistance: Option<f64>,
    pub burnout_resistance_percentage: Option<f64>,
    pub performance_potential: Option<f64>,
    pub performance_potential_percentage: Option<f64>,
    pub stress: Option<f64>,
    pub stress_percentage: Option<f64>,
    pub health_state: Option<f64>,
    pub health_state_percentage: Option<f64>,
}

impl From<ModelOutputDoc> for ModelOutputPublic {
    fn from(m: ModelOutputDoc) -> Self {
        Self {
            id: m.id.to_hex(),
            user_id: m.user_id.to_hex(),
            measurement_time: bson_to_rfc3339(m.measurement_time),
            biological_age: m.biological_age,
            biological_age_percentage: m.biological_age_percentage,
            burnout_resistance: m.burnout_resistance,
            burnout_resistance_percentage: m.burnout_resistance_percentage,
            performance_potential: m.performance_potential,
            performance_potential_percentage: m.performance_potential_percentage,
            stress: m.stress,
            stress_percentage: m.stress_percentage,
            health_state: m.health_state,
            health_state_percentage: m.health_state_percentage,
        }
    }
}
