//! Lookup-table repository and sentinel resolution.
//!
//! The "N/A" rows in the product and payment lookup tables are required
//! configuration: no-sale reports are forced onto them. They are resolved
//! once at startup into typed identifiers; a database without them refuses
//! to serve.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use vendra_core::visit::Sentinels;
use vendra_shared::types::{PaymentMethodId, ProductTypeId};

use crate::entities::{contact_methods, payment_methods, product_types};

/// Name of the sentinel rows in the lookup tables.
pub const SENTINEL_NAME: &str = "N/A";

/// Error types for lookup operations.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// A required "N/A" sentinel row is missing.
    #[error("missing required \"{SENTINEL_NAME}\" row in {table}")]
    MissingSentinel {
        /// Table that lacks the sentinel row.
        table: &'static str,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for the lookup tables.
#[derive(Debug, Clone)]
pub struct LookupRepository {
    db: DatabaseConnection,
}

impl LookupRepository {
    /// Creates a new lookup repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the "N/A" sentinel rows into typed identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::MissingSentinel`] when either row is absent;
    /// callers treat this as fatal configuration.
    pub async fn resolve_sentinels(&self) -> Result<Sentinels, LookupError> {
        let product = product_types::Entity::find()
            .filter(product_types::Column::Name.eq(SENTINEL_NAME))
            .one(&self.db)
            .await?
            .ok_or(LookupError::MissingSentinel {
                table: "product_types",
            })?;

        let payment = payment_methods::Entity::find()
            .filter(payment_methods::Column::Name.eq(SENTINEL_NAME))
            .one(&self.db)
            .await?
            .ok_or(LookupError::MissingSentinel {
                table: "payment_methods",
            })?;

        Ok(Sentinels {
            product_type_na: ProductTypeId::from_uuid(product.id),
            payment_method_na: PaymentMethodId::from_uuid(payment.id),
        })
    }

    /// All product categories, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn product_types(&self) -> Result<Vec<product_types::Model>, LookupError> {
        Ok(product_types::Entity::find()
            .order_by_asc(product_types::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// All payment methods, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn payment_methods(&self) -> Result<Vec<payment_methods::Model>, LookupError> {
        Ok(payment_methods::Entity::find()
            .order_by_asc(payment_methods::Column::Name)
            .all(&self.db)
            .await?)
    }

    /// All contact methods, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn contact_methods(&self) -> Result<Vec<contact_methods::Model>, LookupError> {
        Ok(contact_methods::Entity::find()
            .order_by_asc(contact_methods::Column::Name)
            .all(&self.db)
            .await?)
    }
}
