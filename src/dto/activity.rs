use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ActivityCreateRequest {
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
