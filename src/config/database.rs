use crate::core::{AppError, Result};
use crate::data::mongo::MongoStore;
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            connection_string: env::var("MONGODB_URI")
                .map_err(|_| AppError::Configuration("MONGODB_URI not set".to_string()))?,
            database_name: env::var("MONGODB_DATABASE")
                .map_err(|_| AppError::Configuration("MONGODB_DATABASE not set".to_string()))?,
        })
    }

    /// Connect to the document database
    pub async fn connect(&self) -> Result<MongoStore> {
        MongoStore::connect(self).await
    }
}
