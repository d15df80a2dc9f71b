//! Seller repository.

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use uuid::Uuid;

use crate::entities::sellers;

/// Repository for sales staff.
#[derive(Debug, Clone)]
pub struct SellerRepository {
    db: DatabaseConnection,
}

impl SellerRepository {
    /// Creates a new seller repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a seller by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<sellers::Model>, DbErr> {
        sellers::Entity::find_by_id(id).one(&self.db).await
    }

    /// All sellers ordered by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<sellers::Model>, DbErr> {
        sellers::Entity::find()
            .order_by_asc(sellers::Column::Username)
            .all(&self.db)
            .await
    }

    /// Creates a seller. The RUT is the canonical normalized form.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn create(&self, username: String, rut: String) -> Result<sellers::Model, DbErr> {
        sellers::ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(username),
            rut: Set(rut),
            created_at: Set(chrono::Utc::now().fixed_offset()),
        }
        .insert(&self.db)
        .await
    }
}
