use serde::Deserialize;

/// Partial profile update; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UserUpdateRequest {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub phone: Option<String>,
    pub clinical_story: Option<String>,
    pub notes: Option<Vec<String>>,
}
