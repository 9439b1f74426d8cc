pub mod activity;
pub mod model_output;
pub mod processed_data;
pub mod raw_data;
pub mod refresh_token;
pub mod user;

use mongodb::bson::DateTime as BsonDateTime;

pub fn bson_to_rfc3339(dt: BsonDateTime) -> String {
    let ms = dt.timestamp_millis();
    let secs = ms.div_euclid(1000);
    let nsec = (ms.rem_euclid(1000) * 1_000_000) as u32;
    let chrono_dt = chrono::DateTime::<chrono::Utc>::from_timestamp(secs, nsec)
        .unwrap_or_else(|| chrono::DateTime::<chrono::Utc>::from_timestamp(0, 0).unwrap());
    chrono_dt.to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_millis_render_as_rfc3339() {
        let dt = BsonDateTime::from_millis(0);
        assert_eq!(bson_to_rfc3339(dt), "1970-01-01T00:00:00+00:00");
    }
}
