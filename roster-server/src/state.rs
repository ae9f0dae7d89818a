use crate::settings::Settings;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub database: DatabaseConnection,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>, database: DatabaseConnection) -> Self {
        Self { database, settings }
    }
}
