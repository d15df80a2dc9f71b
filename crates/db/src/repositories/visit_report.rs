//! Visit report repository: persistence and date-range aggregation queries.

use std::collections::HashMap;

use chrono::{Days, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
    prelude::DateTimeWithTimeZone,
};
use uuid::Uuid;

use vendra_core::reports::{ClientInfo, SellerSection, VisitRow};
use vendra_core::visit::ValidatedVisit;
use vendra_shared::types::{ClientId, ContactMethodId, PaymentMethodId, ProductTypeId, SellerId};

use crate::entities::{clients, payment_methods, product_types, visit_report_products, visit_reports};

/// Error types for visit report operations.
#[derive(Debug, thiserror::Error)]
pub enum VisitReportError {
    /// Seller not found.
    #[error("Seller not found: {0}")]
    SellerNotFound(Uuid),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Repository for visit report persistence and aggregation queries.
#[derive(Debug, Clone)]
pub struct VisitReportRepository {
    db: DatabaseConnection,
}

impl VisitReportRepository {
    /// Creates a new visit report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated visit report and its product links atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the seller does not exist or the insert fails.
    pub async fn insert(
        &self,
        seller_id: SellerId,
        visit: ValidatedVisit,
    ) -> Result<visit_reports::Model, VisitReportError> {
        let seller = crate::entities::sellers::Entity::find_by_id(seller_id.into_inner())
            .one(&self.db)
            .await?;
        if seller.is_none() {
            return Err(VisitReportError::SellerNotFound(seller_id.into_inner()));
        }

        let txn = self.db.begin().await?;

        let report = visit_reports::ActiveModel {
            id: Set(Uuid::new_v4()),
            seller_id: Set(seller_id.into_inner()),
            client_id: Set(visit.client_id.map(ClientId::into_inner)),
            first_name: Set(visit.first_name),
            last_name: Set(visit.last_name),
            commerce_name: Set(visit.commerce_name),
            sale_completed: Set(visit.sale_completed),
            note: Set(visit.note),
            entered_at: Set(Utc::now().fixed_offset()),
            started_at: Set(visit.started_at.map(|t| t.and_utc().fixed_offset())),
            ended_at: Set(visit.ended_at.map(|t| t.and_utc().fixed_offset())),
            contact_method_id: Set(visit.contact_method_id.map(ContactMethodId::into_inner)),
            payment_method_id: Set(visit.payment_method_id.map(PaymentMethodId::into_inner)),
        }
        .insert(&txn)
        .await?;

        if !visit.product_type_ids.is_empty() {
            let links =
                visit
                    .product_type_ids
                    .iter()
                    .map(|product| visit_report_products::ActiveModel {
                        visit_report_id: Set(report.id),
                        product_type_id: Set(ProductTypeId::into_inner(*product)),
                    });
            visit_report_products::Entity::insert_many(links)
                .exec(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(report)
    }

    /// Returns the most recent reports, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn recent(&self, limit: u64) -> Result<Vec<visit_reports::Model>, VisitReportError> {
        Ok(visit_reports::Entity::find()
            .order_by_desc(visit_reports::Column::EnteredAt)
            .limit(limit)
            .all(&self.db)
            .await?)
    }

    /// Counts all visit reports.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn count(&self) -> Result<u64, VisitReportError> {
        Ok(visit_reports::Entity::find().count(&self.db).await?)
    }

    /// Distinct sellers with at least one report whose entry date falls in
    /// `[from, to]` inclusive, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn seller_ids_in_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<Uuid>, VisitReportError> {
        let (start, end) = range_bounds(from, to);
        Ok(visit_reports::Entity::find()
            .select_only()
            .column(visit_reports::Column::SellerId)
            .filter(visit_reports::Column::EnteredAt.gte(start))
            .filter(visit_reports::Column::EnteredAt.lt(end))
            .distinct()
            .order_by_asc(visit_reports::Column::SellerId)
            .into_tuple::<Uuid>()
            .all(&self.db)
            .await?)
    }

    /// One seller's section for the range: their reports ascending by entry
    /// timestamp with products, payment method and client resolved.
    ///
    /// Returns `None` when the seller is unknown or has no reports in range.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub async fn section_for_seller(
        &self,
        seller_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Option<SellerSection>, VisitReportError> {
        let Some(seller) = crate::entities::sellers::Entity::find_by_id(seller_id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let (start, end) = range_bounds(from, to);
        let reports = visit_reports::Entity::find()
            .filter(visit_reports::Column::SellerId.eq(seller_id))
            .filter(visit_reports::Column::EnteredAt.gte(start))
            .filter(visit_reports::Column::EnteredAt.lt(end))
            .order_by_asc(visit_reports::Column::EnteredAt)
            .find_with_related(product_types::Entity)
            .all(&self.db)
            .await?;

        if reports.is_empty() {
            return Ok(None);
        }

        let payments: HashMap<Uuid, String> = payment_methods::Entity::find()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|method| (method.id, method.name))
            .collect();

        let client_ids: Vec<Uuid> = reports
            .iter()
            .filter_map(|(report, _)| report.client_id)
            .collect();
        let client_map: HashMap<Uuid, clients::Model> = if client_ids.is_empty() {
            HashMap::new()
        } else {
            clients::Entity::find()
                .filter(clients::Column::Id.is_in(client_ids))
                .all(&self.db)
                .await?
                .into_iter()
                .map(|client| (client.id, client))
                .collect()
        };

        let rows = reports
            .into_iter()
            .map(|(report, products)| VisitRow {
                entered_at: report.entered_at.naive_utc(),
                client: report
                    .client_id
                    .and_then(|id| client_map.get(&id))
                    .map(|client| ClientInfo {
                        first_name: client.first_name.clone(),
                        last_name: client.last_name.clone(),
                        commerce_name: client.commerce_name.clone(),
                    }),
                first_name: report.first_name,
                last_name: report.last_name,
                commerce_name: report.commerce_name,
                sale_completed: report.sale_completed,
                products: products.into_iter().map(|product| product.name).collect(),
                payment_method: report
                    .payment_method_id
                    .and_then(|id| payments.get(&id).cloned()),
                note: report.note,
            })
            .collect();

        Ok(Some(SellerSection {
            seller_name: seller.username,
            rows,
        }))
    }

    /// Fetches all per-seller sections for the range, one filtered query
    /// per seller to bound memory use.
    ///
    /// # Errors
    ///
    /// Returns an error if any query fails.
    pub async fn fetch_sections(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<SellerSection>, VisitReportError> {
        let mut sections = Vec::new();
        for seller_id in self.seller_ids_in_range(from, to).await? {
            if let Some(section) = self.section_for_seller(seller_id, from, to).await? {
                sections.push(section);
            }
        }
        Ok(sections)
    }
}

/// Converts an inclusive date range into half-open timestamp bounds.
fn range_bounds(from: NaiveDate, to: NaiveDate) -> (DateTimeWithTimeZone, DateTimeWithTimeZone) {
    let start = from.and_time(NaiveTime::MIN).and_utc().fixed_offset();
    let end = to
        .checked_add_days(Days::new(1))
        .unwrap_or(to)
        .and_time(NaiveTime::MIN)
        .and_utc()
        .fixed_offset();
    (start, end)
}
