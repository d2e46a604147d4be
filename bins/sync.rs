//! Administrative batch job: materialize approved providers' embedded
//! services into the standalone service table. Intended to run as a single
//! exclusive batch; the unique index on (provider_id, name) keeps
//! accidental concurrent runs from duplicating rows.

use dotenvy::dotenv;
use migration::MigratorTrait;
use tracing::{error, info};

fn init_logging() {
    dotenv().ok();
    common::utils::logging::init_logging_default();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    info!(service = "sync", event = "start", version = env!("CARGO_PKG_VERSION"), "service sync starting");

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    match search::sync::sync_all(&db).await {
        Ok(report) => {
            info!(
                service = "sync",
                event = "done",
                created = report.created,
                skipped = report.skipped,
                "service sync finished"
            );
            println!("sync complete: created={} skipped={}", report.created, report.skipped);
            Ok(())
        }
        Err(e) => {
            error!(service = "sync", event = "failed", error = %e, "service sync failed");
            Err(e.into())
        }
    }
}
