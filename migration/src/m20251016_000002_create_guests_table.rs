use sea_orm_migration::{prelude::*, schema::*};

/// Guests carry `client_id` as a soft reference without a foreign key, so deleting
/// a client leaves its guests in place.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guests::Table)
                    .if_not_exists()
                    .col(string_len(Guests::Id, 24).primary_key())
                    .col(string(Guests::Name))
                    .col(string(Guests::Message))
                    .col(string(Guests::Confirmation))
                    .col(string_len(Guests::ClientId, 24))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_guests_client_id")
                    .table(Guests::Table)
                    .col(Guests::ClientId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guests::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guests {
    Table,
    Id,
    Name,
    Message,
    Confirmation,
    ClientId,
}
