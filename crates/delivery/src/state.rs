use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::{
    abstract_trait::DynJwtService,
    config::{ConnectionManager, JwtConfig},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub jwt: DynJwtService,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(database_url: &str, jwt_secret: &str) -> Result<Self> {
        info!("Initializing database connection pool");

        let pool = ConnectionManager::new_pool(database_url)
            .await
            .context("Failed to create database connection pool")?;

        let jwt = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;

        let di_container = DependenciesInject::new(pool);

        Ok(Self { jwt, di_container })
    }
}
