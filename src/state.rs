use std::sync::Arc;
use std::time::Duration;

use mongodb::{
    options::{ClientOptions, IndexOptions},
    Client, Collection, IndexModel,
};

use crate::{
    auth::JwtKeys,
    config::Config,
    models::{
        activity::ActivityDoc, model_output::ModelOutputDoc, processed_data::ProcessedDataDoc,
        raw_data::RawDataDoc, refresh_token::RefreshTokenDoc, user::UserDoc,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub keys: JwtKeys,

    pub users: Collection<UserDoc>,
    pub refresh_tokens: Collection<RefreshTokenDoc>,
    pub activities: Collection<ActivityDoc>,
    pub raw_data: Collection<RawDataDoc>,
    pub processed_data: Collection<ProcessedDataDoc>,
    pub model_outputs: Collection<ModelOutputDoc>,
}

impl AppState {
    pub async fn new(cfg: &Config) -> mongodb::error::Result<Self> {
        let mut opts = ClientOptions::parse(&cfg.mongodb_uri).await?;
        opts.app_name = Some("hrv-backend".to_string());
        let client = Client::with_options(opts)?;
        let db = client.database(&cfg.db_name);

        let users: Collection<UserDoc> = db.collection("users");
        let refresh_tokens: Collection<RefreshTokenDoc> = db.collection("refresh_tokens");
        let activities: Collection<ActivityDoc> = db.collection("activities");
        let raw_data: Collection<RawDataDoc> = db.collection("raw_datas");
        let processed_data: Collection<ProcessedDataDoc> = db.collection("processed_datas");
        let model_outputs: Collection<ModelOutputDoc> = db.collection("model_outputs");

        let email_index = IndexModel::builder()
            .keys(mongodb::bson::doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let _ = users.create_index(email_index).await?;

        let token_index = IndexModel::builder()
            .keys(mongodb::bson::doc! { "token": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        let _ = refresh_tokens.create_index(token_index).await?;

        // TTL cleanup of expired refresh tokens; verification still checks
        // expiry explicitly, this only reclaims storage.
        let expiry_index = IndexModel::builder()
            .keys(mongodb::bson::doc! { "expiry_date": 1 })
            .options(
                IndexOptions::builder()
                    .expire_after(Duration::from_secs(0))
                    .build(),
            )
            .build();
        let _ = refresh_tokens.create_index(expiry_index).await?;

        let activity_user_index = IndexModel::builder()
            .keys(mongodb::bson::doc! { "user_id": 1 })
            .build();
        let _ = activities.create_index(activity_user_index).await?;

        let raw_user_index = IndexModel::builder()
            .keys(mongodb::bson::doc! { "user_id": 1, "measurement_start_time": 1 })
            .build();
        let _ = raw_data.create_index(raw_user_index).await?;

        let processed_user_index = IndexModel::builder()
            .keys(mongodb::bson::doc! { "user_id": 1, "measurement_time": 1 })
            .build();
        let _ = processed_data.create_index(processed_user_index).await?;

        let output_user_index = IndexModel::builder()
            .keys(mongodb::bson::doc! { "user_id": 1, "measurement_time": 1 })
            .build();
        let _ = model_outputs.create_index(output_user_index).await?;

        Ok(Self {
            cfg: Arc::new(cfg.clone()),
            keys: JwtKeys::new(&cfg.jwt_secret),
            users,
            refresh_tokens,
            activities,
            raw_data,
            processed_data,
            model_outputs,
        })
    }
}
