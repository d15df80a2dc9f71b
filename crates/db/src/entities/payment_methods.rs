//! `SeaORM` Entity for the payment_methods lookup table.
//!
//! Contains the required "N/A" sentinel row used for no-sale reports.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "payment_methods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::visit_reports::Entity")]
    VisitReports,
}

impl Related<super::visit_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitReports.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
