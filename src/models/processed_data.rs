use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

use super::bson_to_rfc3339;

/// Derived HRV metrics and scores for one measurement, produced by the
/// analysis pipeline from a raw upload. Everything after the identity fields
/// is pass-through numeric payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDataDoc {
    #[serde(rename = "_id")]
    pub id: ObjectId,

    pub measurement_id: Option<String>,
    pub user_id: ObjectId,
    pub measurement_time: BsonDateTime,

    pub rmssd: Option<f64>,
    pub sdnn: Option<f64>,
    pub pnn_50: Option<f64>,
    pub heart_beats: Option<f64>,
    pub min_hr: Option<f64>,
    pub max_hr: Option<f64>,
    pub gvi: Option<f64>,
    pub dynamic_a: Option<f64>,
    pub dynamic_b: Option<f64>,

    pub tp: Option<f64>,
    pub ulf: Option<f64>,
    pub vlf: Option<f64>,
    pub lf: Option<f64>,
    pub hf: Option<f64>,

    pub tp_night: Option<f64>,
    pub ulf_night: Option<f64>,
    pub vlf_night: Option<f64>,
    pub lf_night: Option<f64>,
    pub hf_night: Option<f64>,
    pub pnn_50_night: Option<f64>,
    pub sdnn_night: Option<f64>,
    pub rmssd_night: Option<f64>,

    pub stress: Option<f64>,
    pub stress_percentage: Option<f64>,
    pub health_state: Option<f64>,
    pub health_state_percentage: Option<f64>,
    pub biological_age: Option<f64>,
    pub biological_age_percentage: Option<f64>,
    pub burnout_resistance: Option<f64>,
    pub burnout_resistance_percentage: Option<f64>,
    pub performance_potential: Option<f64>,
    pub performance_potential_percentage: Option<f64>,

    pub created_at: BsonDateTime,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedDataPublic {
    pub id: String,
    pub user_id: String,
    pub measurement_time: String,
    pub rmssd: Option<f64>,
    pub sdnn: Option<f64>,
    pub pnn_50: Option<f64>,
    pub min_hr: Option<f64>,
    pub max_hr: Option<f64>,
    pub gvi: Option<f64>,
    pub stress: Option<f64>,
    pub stress_percentage: Option<f64>,
    pub health_state: Option<f64>,
    pub health_state_percentage: Option<f64>,
    pub biological_age: Option<f64>,
    pub biological_age_percentage: Option<f64>,
    pub burnout_resistance: Option<f64>,
    pub burnout_resistance_percentage: Option<f64>,
    pub performance_potential: Option<f64>,
    pub performance_potential_percentage: Option<f64>,
    pub created_at: String,
}

impl From<ProcessedDataDoc> for ProcessedDataPublic {
    fn from(p: ProcessedDataDoc) -> Self {
        Self {
            id: p.id.to_hex(),
            user_id: p.user_id.to_hex(),
            measurement_time: bson_to_rfc3339(p.measurement_time),
            rmssd: p.rmssd,
            sdnn: p.sdnn,
            pnn_50: p.pnn_50,
            min_hr: p.min_hr,
            max_hr: p.max_hr,
            gvi: p.gvi,
            stress: p.stress,
            stress_percentage: p.stress_percentage,
            health_state: p.health_state,
            health_state_percentage: p.health_state_percentage,
            biological_age: p.biological_age,
            biological_age_percentage: p.biological_age_percentage,
            burnout_resistance: p.burnout_resistance,
            burnout_resistance_percentage: p.burnout_resistance_percentage,
            performance_potential: p.performance_potential,
            performance_potential_percentage: p.performance_potential_percentage,
            created_at: bson_to_rfc3339(p.created_at),
        }
    }
}
