//! Prospect repository, including the prospect-to-client conversion.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::entities::{clients, prospects};
use crate::repositories::client::NewClient;

/// Error types for prospect operations.
#[derive(Debug, thiserror::Error)]
pub enum ProspectError {
    /// Prospect not found.
    #[error("Prospect not found: {0}")]
    NotFound(Uuid),

    /// A client with this RUT already exists.
    #[error("a client with RUT {0} already exists")]
    DuplicateClientRut(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Fields for a new prospect record. The RUT, when present, is canonical.
#[derive(Debug, Clone, Default)]
pub struct NewProspect {
    /// Canonical normalized RUT, if known.
    pub rut: Option<String>,
    /// Commerce name, if any.
    pub commerce_name: Option<String>,
    /// Contact first name.
    pub first_name: Option<String>,
    /// Contact surname.
    pub last_name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// Address / city.
    pub location: Option<String>,
    /// Notes and interests.
    pub notes: Option<String>,
}

/// Repository for prospective clients.
#[derive(Debug, Clone)]
pub struct ProspectRepository {
    db: DatabaseConnection,
}

impl ProspectRepository {
    /// Creates a new prospect repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new prospect.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn insert(&self, prospect: NewProspect) -> Result<prospects::Model, ProspectError> {
        Ok(prospects::ActiveModel {
            id: Set(Uuid::new_v4()),
            rut: Set(prospect.rut),
            commerce_name: Set(prospect.commerce_name),
            first_name: Set(prospect.first_name),
            last_name: Set(prospect.last_name),
            email: Set(prospect.email),
            phone: Set(prospect.phone),
            location: Set(prospect.location),
            notes: Set(prospect.notes),
            created_at: Set(chrono::Utc::now().fixed_offset()),
        }
        .insert(&self.db)
        .await?)
    }

    /// Finds a prospect by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<prospects::Model>, ProspectError> {
        Ok(prospects::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// All prospects ordered by contact first name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list(&self) -> Result<Vec<prospects::Model>, ProspectError> {
        Ok(prospects::Entity::find()
            .order_by_asc(prospects::Column::FirstName)
            .all(&self.db)
            .await?)
    }

    /// Counts all prospects.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn count(&self) -> Result<u64, ProspectError> {
        Ok(prospects::Entity::find().count(&self.db).await?)
    }

    /// Converts a prospect into a confirmed client.
    ///
    /// The conversion is an atomic delete-and-insert: the client row is
    /// created from the submitted fields and the prospect removed in the
    /// same transaction.
    ///
    /// # Errors
    ///
    /// Returns [`ProspectError::NotFound`] for an unknown prospect and
    /// [`ProspectError::DuplicateClientRut`] when the RUT is already a
    /// confirmed client.
    pub async fn convert(
        &self,
        prospect_id: Uuid,
        client: NewClient,
    ) -> Result<clients::Model, ProspectError> {
        let prospect = self
            .find_by_id(prospect_id)
            .await?
            .ok_or(ProspectError::NotFound(prospect_id))?;

        let existing = clients::Entity::find()
            .filter(clients::Column::Rut.eq(client.rut.as_str()))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(ProspectError::DuplicateClientRut(client.rut));
        }

        let txn = self.db.begin().await?;

        let created = clients::ActiveModel {
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
        .insert(&txn)
        .await?;

        prospect.delete(&txn).await?;

        txn.commit().await?;
        Ok(created)
    }
}
