//! `SeaORM` Entity for the product_types lookup table.
//!
//! Contains the required "N/A" sentinel row used for no-sale reports.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "product_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::visit_reports::Entity> for Entity {
    fn to() -> RelationDef {
        super::visit_report_products::Relation::VisitReports.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::visit_report_products::Relation::ProductTypes
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
