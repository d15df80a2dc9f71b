//! `SeaORM` entity definitions.

pub mod clients;
pub mod contact_methods;
pub mod payment_methods;
pub mod product_types;
pub mod prospects;
pub mod sellers;
pub mod visit_report_products;
pub mod visit_reports;
