//! `SeaORM` Entity for the sellers table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sellers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub username: String,
    /// Canonical normalized RUT (body + check character).
    pub rut: String,
    pub created_at: DateTimeWithTimeZone,
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
