//! Database seeder for Vendra development and testing.
//!
//! Seeds lookup rows (product categories, payment methods, contact
//! methods) and a demo seller for local development. The "N/A" sentinel
//! rows are created by the initial migration, not here.
//!
//! Usage: cargo run --bin seeder

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;
use vendra_db::entities::{contact_methods, payment_methods, product_types, sellers};

/// Demo seller ID (consistent for all seeds)
const DEMO_SELLER_ID: &str = "00000000-0000-0000-0000-000000000001";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    println!("Connecting to database...");
    let db = vendra_db::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    println!("Seeding product categories...");
    seed_product_types(&db).await;

    println!("Seeding payment methods...");
    seed_payment_methods(&db).await;

    println!("Seeding contact methods...");
    seed_contact_methods(&db).await;

    println!("Seeding demo seller...");
    seed_demo_seller(&db).await;

    println!("Seeding complete!");
}

fn demo_seller_id() -> Uuid {
    Uuid::parse_str(DEMO_SELLER_ID).unwrap()
}

/// Seeds product categories for the visit report form.
async fn seed_product_types(db: &DatabaseConnection) {
    let names = [
        ("Internet Hogar", "Conexión de fibra para el hogar"),
        ("TV Cable", "Plan de televisión por cable"),
        ("Telefonía Móvil", "Planes de telefonía móvil"),
        ("Pack Full", "Internet, TV y telefonía combinados"),
    ];

    for (name, description) in names {
        let exists = product_types::Entity::find()
            .filter(product_types::Column::Name.eq(name))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some();
        if exists {
            println!("  {name} already exists, skipping...");
            continue;
        }

        let row = product_types::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
        };
        if let Err(e) = row.insert(db).await {
            eprintln!("Failed to insert product category {name}: {e}");
        } else {
            println!("  Created product category: {name}");
        }
    }
}

/// Seeds payment methods for completed-sale reports.
async fn seed_payment_methods(db: &DatabaseConnection) {
    let names = [
        ("Efectivo", "Pago en efectivo"),
        ("Tarjeta de crédito", "Pago con tarjeta de crédito"),
        ("Tarjeta de débito", "Pago con tarjeta de débito"),
        ("Transferencia", "Transferencia bancaria"),
    ];

    for (name, description) in names {
        let exists = payment_methods::Entity::find()
            .filter(payment_methods::Column::Name.eq(name))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some();
        if exists {
            println!("  {name} already exists, skipping...");
            continue;
        }

        let row = payment_methods::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
        };
        if let Err(e) = row.insert(db).await {
            eprintln!("Failed to insert payment method {name}: {e}");
        } else {
            println!("  Created payment method: {name}");
        }
    }
}

/// Seeds contact methods.
async fn seed_contact_methods(db: &DatabaseConnection) {
    let names = [
        ("Presencial", "Visita en terreno"),
        ("Teléfono", "Llamada telefónica"),
        ("WhatsApp", "Mensaje por WhatsApp"),
        ("Correo", "Correo electrónico"),
    ];

    for (name, description) in names {
        let exists = contact_methods::Entity::find()
            .filter(contact_methods::Column::Name.eq(name))
            .one(db)
            .await
            .ok()
            .flatten()
            .is_some();
        if exists {
            println!("  {name} already exists, skipping...");
            continue;
        }

        let row = contact_methods::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name.to_string()),
            description: Set(Some(description.to_string())),
        };
        if let Err(e) = row.insert(db).await {
            eprintln!("Failed to insert contact method {name}: {e}");
        } else {
            println!("  Created contact method: {name}");
        }
    }
}

/// Seeds a demo seller with a valid RUT.
async fn seed_demo_seller(db: &DatabaseConnection) {
    if sellers::Entity::find_by_id(demo_seller_id())
        .one(db)
        .await
        .ok()
        .flatten()
        .is_some()
    {
        println!("  Demo seller already exists, skipping...");
        return;
    }

    let seller = sellers::ActiveModel {
        id: Set(demo_seller_id()),
        username: Set("vendedor.demo".to_string()),
        // 12.345.678-5 in canonical form
        rut: Set("123456785".to_string()),
        created_at: Set(Utc::now().into()),
    };

    if let Err(e) = seller.insert(db).await {
        eprintln!("Failed to insert demo seller: {e}");
    } else {
        println!("  Created demo seller: vendedor.demo");
    }
}
