use crate::db::connect;
use crate::{provider_profile, service};
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{DatabaseConnection, EntityTrait};
use serde_json::json;
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_provider_and_service_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };

    let business = format!("test_provider_{}", Uuid::new_v4());
    let p = provider_profile::create(&db, Uuid::new_v4(), &business, "Dubai", "Dubai", json!([])).await?;
    assert_eq!(p.verification_status, provider_profile::STATUS_PENDING);
    assert!(!p.is_approved());

    provider_profile::set_verification_status(&db, p.id, provider_profile::STATUS_APPROVED).await?;
    let reloaded = provider_profile::Entity::find_by_id(p.id).one(&db).await?.expect("provider");
    assert!(reloaded.is_approved());

    let svc = service::create(
        &db,
        p.id,
        "Pipe Repair",
        "plumbing",
        "Fix leaking pipes",
        75.0,
        "fixed",
        "Dubai",
        "Dubai",
    )
    .await?;
    assert!(svc.is_active);
    assert_eq!(svc.price_currency, service::DEFAULT_CURRENCY);

    service::set_active(&db, svc.id, false).await?;
    let svc = service::Entity::find_by_id(svc.id).one(&db).await?.expect("service");
    assert!(!svc.is_active);

    // cleanup (cascade removes the service)
    provider_profile::Entity::delete_by_id(p.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_category_seed_present() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }
    let db = match setup_test_db().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return Ok(());
        }
    };
    let rows = crate::service_category::Entity::find().all(&db).await?;
    assert!(rows.iter().any(|c| c.slug == "beauty-wellness"));
    assert!(rows.iter().any(|c| c.origin == "legacy"));
    Ok(())
}
