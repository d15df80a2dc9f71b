//! Client repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::clients;

/// Error types for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A client with this RUT already exists.
    #[error("a client with RUT {0} already exists")]
    DuplicateRut(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Fields for a new client record. The RUT is the canonical normalized form.
#[derive(Debug, Clone)]
pub struct NewClient {
    /// Canonical normalized RUT.
    pub rut: String,
    /// Commerce name, if any.
    pub commerce_name: Option<String>,
    /// Contact first name.
    pub first_name: String,
    /// Contact surname.
    pub last_name: String,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Commercial address.
    pub location: Option<String>,
}

/// Repository for confirmed clients.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    db: DatabaseConnection,
}

impl ClientRepository {
    /// Creates a new client repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::DuplicateRut`] when the RUT is already taken.
    pub async fn insert(&self, client: NewClient) -> Result<clients::Model, ClientError> {
        if self.find_by_rut(&client.rut).await?.is_some() {
            return Err(ClientError::DuplicateRut(client.rut));
        }

        Ok(clients::ActiveModel {
            id: Set(Uuid::new_v4()),
            rut: Set(client.rut),
            commerce_name: Set(client.commerce_name),
            first_name: Set(client.first_name),
            last_name: Set(client.last_name),
            email: Set(client.email),
            phone: Set(client.phone),
            location: Set(client.location),
            created_at: Set(chrono::Utc::now().fixed_offset()),
        }
        .insert(&self.db)
        .await?)
    }

    /// Finds a client by canonical RUT.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_rut(&self, rut: &str) -> Result<Option<clients::Model>, ClientError> {
        Ok(clients::Entity::find()
            .filter(clients::Column::Rut.eq(rut))
            .one(&self.db)
            .await?)
    }

    /// Counts all clients.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn count(&self) -> Result<u64, ClientError> {
        Ok(clients::Entity::find().count(&self.db).await?)
    }

    /// All clients ordered by contact first name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<clients::Model>, ClientError> {
        Ok(clients::Entity::find()
            .order_by_asc(clients::Column::FirstName)
            .all(&self.db)
            .await?)
    }
}
