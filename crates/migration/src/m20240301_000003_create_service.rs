use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Service::Table)
                    .if_not_exists()
                    .col(uuid(Service::Id).primary_key())
                    .col(uuid(Service::ProviderId).not_null())
                    .col(string_len(Service::Name, 256).not_null())
                    .col(string_len(Service::Category, 64).not_null())
                    .col(string_len_null(Service::Subcategory, 128))
                    .col(text(Service::Description).not_null())
                    .col(double(Service::PriceAmount).not_null())
                    .col(string_len(Service::PriceCurrency, 8).not_null())
                    .col(string_len(Service::PriceType, 16).not_null())
                    .col(integer(Service::DurationMinutes).not_null())
                    .col(string_len(Service::Address, 512).not_null())
                    .col(string_len(Service::City, 128).not_null())
                    .col(string_len(Service::State, 128).not_null())
                    .col(double_null(Service::Lat))
                    .col(double_null(Service::Lng))
                    // Weekly schedule plus exceptions; empty schedule by default
                    .col(json_binary(Service::Availability).not_null())
                    .col(double(Service::RatingAvg).not_null())
                    .col(integer(Service::RatingCount).not_null())
                    .col(boolean(Service::IsActive).not_null())
                    // Whitespace-separated keyword list used by substring search
                    .col(text(Service::SearchKeywords).not_null())
                    .col(double(Service::PopularityScore).not_null())
                    .col(timestamp_with_time_zone(Service::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Service::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_service_provider")
                            .from(Service::Table, Service::ProviderId)
                            .to(ProviderProfile::Table, ProviderProfile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Service::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
    ProviderId,
    Name,
    Category,
    Subcategory,
    Description,
    PriceAmount,
    PriceCurrency,
    PriceType,
    DurationMinutes,
    Address,
    City,
    State,
    Lat,
    Lng,
    Availability,
    RatingAvg,
    RatingCount,
    IsActive,
    SearchKeywords,
    PopularityScore,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum ProviderProfile { Table, Id }
