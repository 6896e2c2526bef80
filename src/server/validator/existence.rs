use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    error::AppError,
    validator::{lookup, Check},
};

pub struct UserExists(pub Uuid);

#[async_trait]
impl Check for UserExists {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        lookup::user(db, self.0).await.map(|_| ())
    }
}

pub struct TeamExists(pub Uuid);

#[async_trait]
impl Check for TeamExists {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        lookup::team(db, self.0).await.map(|_| ())
    }
}

pub struct RequestExists(pub Uuid);

#[async_trait]
impl Check for RequestExists {
    async fn check(&self, db: &DatabaseConnection) -> Result<(), AppError> {
        lookup::roster_request(db, self.0).await.map(|_| ())
    }
}
