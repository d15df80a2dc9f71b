//! `SeaORM` Entity for the visit_reports table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "visit_reports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub seller_id: Uuid,
    /// Confirmed client, when the visit referenced one.
    pub client_id: Option<Uuid>,
    /// Denormalized contact fields for visits to unconverted prospects.
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub commerce_name: Option<String>,
    pub sale_completed: bool,
    pub note: String,
    pub entered_at: DateTimeWithTimeZone,
    pub started_at: Option<DateTimeWithTimeZone>,
    pub ended_at: Option<DateTimeWithTimeZone>,
    pub contact_method_id: Option<Uuid>,
    pub payment_method_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sellers::Entity",
        from = "Column::SellerId",
        to = "super::sellers::Column::Id"
    )]
    Sellers,
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id"
    )]
    Clients,
    #[sea_orm(
        belongs_to = "super::payment_methods::Entity",
        from = "Column::PaymentMethodId",
        to = "super::payment_methods::Column::Id"
    )]
    PaymentMethods,
    #[sea_orm(
        belongs_to = "super::contact_methods::Entity",
        from = "Column::ContactMethodId",
        to = "super::contact_methods::Column::Id"
    )]
    ContactMethods,
}

impl Related<super::sellers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sellers.def()
    }
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Clients.def()
    }
}

impl Related<super::payment_methods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PaymentMethods.def()
    }
}

impl Related<super::contact_methods::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactMethods.def()
    }
}

impl Related<super::product_types::Entity> for Entity {
    fn to() -> RelationDef {
        super::visit_report_products::Relation::ProductTypes.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::visit_report_products::Relation::VisitReports
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
