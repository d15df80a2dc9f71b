//! `SeaORM` Entity for the visit_reports <-> product_types join table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "visit_report_products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub visit_report_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_type_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::visit_reports::Entity",
        from = "Column::VisitReportId",
        to = "super::visit_reports::Column::Id"
    )]
    VisitReports,
    #[sea_orm(
        belongs_to = "super::product_types::Entity",
        from = "Column::ProductTypeId",
        to = "super::product_types::Column::Id"
    )]
    ProductTypes,
}

impl Related<super::visit_reports::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitReports.def()
    }
}

impl Related<super::product_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTypes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
