//! Initial schema migration.
//!
//! Creates the CRM tables and inserts the required "N/A" sentinel rows in
//! the product and payment lookup tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(INITIAL_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS visit_report_products, visit_reports, prospects, clients, \
             sellers, product_types, payment_methods, contact_methods CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const INITIAL_SQL: &str = r"
-- Sales staff
CREATE TABLE sellers (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    username VARCHAR(150) NOT NULL UNIQUE,
    rut VARCHAR(12) NOT NULL UNIQUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Lookup tables
CREATE TABLE product_types (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL UNIQUE,
    description TEXT
);

CREATE TABLE payment_methods (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL UNIQUE,
    description TEXT
);

CREATE TABLE contact_methods (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    name VARCHAR(100) NOT NULL UNIQUE,
    description TEXT
);

-- Confirmed clients
CREATE TABLE clients (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    rut VARCHAR(12) NOT NULL UNIQUE,
    commerce_name VARCHAR(150),
    first_name VARCHAR(100) NOT NULL,
    last_name VARCHAR(100) NOT NULL,
    email VARCHAR(254) UNIQUE,
    phone VARCHAR(15),
    location VARCHAR(255),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Prospective clients (all contact fields optional at this stage)
CREATE TABLE prospects (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    rut VARCHAR(12) UNIQUE,
    commerce_name VARCHAR(150),
    first_name VARCHAR(100),
    last_name VARCHAR(100),
    email VARCHAR(254) UNIQUE,
    phone VARCHAR(15),
    location VARCHAR(255),
    notes TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- Visit reports; client reference is nullable, denormalized contact fields
-- cover visits to unconverted prospects
CREATE TABLE visit_reports (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    seller_id UUID NOT NULL REFERENCES sellers(id) ON DELETE CASCADE,
    client_id UUID REFERENCES clients(id) ON DELETE SET NULL,
    first_name VARCHAR(100),
    last_name VARCHAR(100),
    commerce_name VARCHAR(150),
    sale_completed BOOLEAN NOT NULL DEFAULT FALSE,
    note TEXT NOT NULL DEFAULT '',
    entered_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    started_at TIMESTAMPTZ,
    ended_at TIMESTAMPTZ,
    contact_method_id UUID REFERENCES contact_methods(id),
    payment_method_id UUID REFERENCES payment_methods(id),
    CONSTRAINT chk_visit_times CHECK (
        started_at IS NULL OR ended_at IS NULL OR ended_at > started_at
    )
);

CREATE TABLE visit_report_products (
    visit_report_id UUID NOT NULL REFERENCES visit_reports(id) ON DELETE CASCADE,
    product_type_id UUID NOT NULL REFERENCES product_types(id) ON DELETE CASCADE,
    PRIMARY KEY (visit_report_id, product_type_id)
);

-- Index for date-range report queries
CREATE INDEX idx_visit_reports_entered ON visit_reports(entered_at);

-- Index for per-seller range queries used by the export
CREATE INDEX idx_visit_reports_seller_entered ON visit_reports(seller_id, entered_at);

-- Required sentinel rows for no-sale reports
INSERT INTO product_types (name, description) VALUES ('N/A', 'Sin venta asociada');
INSERT INTO payment_methods (name, description) VALUES ('N/A', 'Sin venta asociada');
";
