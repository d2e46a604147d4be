use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProviderProfile::Table)
                    .if_not_exists()
                    .col(uuid(ProviderProfile::Id).primary_key())
                    .col(uuid(ProviderProfile::UserId).not_null())
                    .col(string_len(ProviderProfile::BusinessName, 256).not_null())
                    .col(string_len(ProviderProfile::City, 128).not_null())
                    .col(string_len(ProviderProfile::State, 128).not_null())
                    .col(string_len(ProviderProfile::VerificationStatus, 32).not_null())
                    // Embedded service list pending sync into the service table
                    .col(json_binary(ProviderProfile::Services).not_null())
                    .col(timestamp_with_time_zone(ProviderProfile::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(ProviderProfile::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProviderProfile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProviderProfile {
    Table,
    Id,
    UserId,
    BusinessName,
    City,
    State,
    VerificationStatus,
    Services,
    CreatedAt,
    UpdatedAt,
}
