use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service: composite unique on (provider_id, name), the natural key
        // the sync job relies on to stay idempotent under concurrent runs
        manager
            .create_index(
                Index::create()
                    .name("uniq_service_provider_name")
                    .table(Service::Table)
                    .col(Service::ProviderId)
                    .col(Service::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Service: search-path indexes
        manager
            .create_index(
                Index::create()
                    .name("idx_service_category")
                    .table(Service::Table)
                    .col(Service::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_active")
                    .table(Service::Table)
                    .col(Service::IsActive)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_service_city_state")
                    .table(Service::Table)
                    .col(Service::City)
                    .col(Service::State)
                    .to_owned(),
            )
            .await?;

        // ProviderProfile: index on verification status for sync batch scans
        manager
            .create_index(
                Index::create()
                    .name("idx_provider_verification")
                    .table(ProviderProfile::Table)
                    .col(ProviderProfile::VerificationStatus)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_service_provider_name").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_category").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_active").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_service_city_state").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_provider_verification").table(ProviderProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Service { Table, ProviderId, Name, Category, IsActive, City, State }

#[derive(DeriveIden)]
enum ProviderProfile { Table, VerificationStatus }
