use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Reference data frozen at migration time. The in-process category
/// registry is the authority for request-path lookups; this table exists
/// for the admin/provider subsystems that read categories from the store.
const SEED: &[(&str, &str, &str, i32, bool, &str)] = &[
    ("cleaning", "Cleaning", "broom", 1, true, "current"),
    ("plumbing", "Plumbing", "wrench", 2, true, "current"),
    ("electrical", "Electrical", "bolt", 3, true, "current"),
    ("hvac", "HVAC", "fan", 4, true, "current"),
    ("painting", "Painting", "roller", 5, false, "current"),
    ("carpentry", "Carpentry", "hammer", 6, false, "current"),
    ("appliance-repair", "Appliance Repair", "plug", 7, false, "current"),
    ("pest-control", "Pest Control", "bug", 8, false, "current"),
    ("landscaping", "Landscaping & Gardening", "leaf", 9, false, "current"),
    ("beauty-wellness", "Beauty & Wellness", "spa", 10, true, "current"),
    ("moving-packing", "Moving & Packing", "truck", 11, false, "current"),
    ("home-security", "Home Security", "shield", 12, false, "current"),
    ("handyman", "Handyman", "toolbox", 13, false, "legacy"),
    ("tutoring", "Tutoring", "book", 14, false, "legacy"),
    ("car-wash", "Car Wash", "car", 15, false, "legacy"),
    ("laundry", "Laundry", "shirt", 16, false, "legacy"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceCategory::Table)
                    .if_not_exists()
                    .col(string_len(ServiceCategory::Slug, 64).primary_key())
                    .col(string_len(ServiceCategory::Name, 128).not_null())
                    .col(string_len(ServiceCategory::Icon, 64).not_null())
                    .col(integer(ServiceCategory::SortOrder).not_null())
                    .col(boolean(ServiceCategory::IsFeatured).not_null())
                    .col(string_len(ServiceCategory::Origin, 16).not_null())
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert()
            .into_table(ServiceCategory::Table)
            .columns([
                ServiceCategory::Slug,
                ServiceCategory::Name,
                ServiceCategory::Icon,
                ServiceCategory::SortOrder,
                ServiceCategory::IsFeatured,
                ServiceCategory::Origin,
            ])
            .to_owned();
        for (slug, name, icon, sort_order, featured, origin) in SEED {
            insert.values_panic([
                (*slug).into(),
                (*name).into(),
                (*icon).into(),
                (*sort_order).into(),
                (*featured).into(),
                (*origin).into(),
            ]);
        }
        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ServiceCategory {
    Table,
    Slug,
    Name,
    Icon,
    SortOrder,
    IsFeatured,
    Origin,
}
