use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawDataCreateRequest {
    pub user_id: String,
    pub activity_id: Option<String>,
    pub measurement_start_time: DateTime<Utc>,
    pub measurement_end_time: DateTime<Utc>,
    pub device_name: Option<String>,
    pub rr_intervals_ms: Vec<f64>,
}

#[derive(Debug, Deserialize)]
pub struct ProcessedDataCreateRequest {
    pub user_id: String,
    pub measurement_time: DateTime<Utc>,
    pub measurement_id: Option<String>,

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
}

#[derive(Debug, Deserialize)]
pub struct ModelOutputCreateRequest {
    pub user_id: String,
    pub measurement_time: DateTime<Utc>,
    pub measurement_id: Option<String>,

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
