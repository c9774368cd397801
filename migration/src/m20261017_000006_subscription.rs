use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_user::User;

static IDX_SUBSCRIPTION_AUTHOR_ID: &str = "idx_subscription_author_id";
static FK_SUBSCRIPTION_SUBSCRIBER_ID: &str = "fk_subscription_subscriber_id";
static FK_SUBSCRIPTION_AUTHOR_ID: &str = "fk_subscription_author_id";
static CK_SUBSCRIPTION_NOT_SELF: &str = "ck_subscription_prevent_self_subscription";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subscription::Table)
                    .if_not_exists()
                    .col(integer(Subscription::SubscriberId))
                    .col(integer(Subscription::AuthorId))
                    .col(timestamp(Subscription::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(Subscription::SubscriberId)
                            .col(Subscription::AuthorId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(&format!(
                "ALTER TABLE subscription ADD CONSTRAINT {} CHECK (subscriber_id <> author_id)",
                CK_SUBSCRIPTION_NOT_SELF
            ))
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SUBSCRIPTION_AUTHOR_ID)
                    .table(Subscription::Table)
                    .col(Subscription::AuthorId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_SUBSCRIBER_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::SubscriberId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBSCRIPTION_AUTHOR_ID)
                    .from_tbl(Subscription::Table)
                    .from_col(Subscription::AuthorId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBSCRIPTION_AUTHOR_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBSCRIPTION_SUBSCRIBER_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SUBSCRIPTION_AUTHOR_ID)
                    .table(Subscription::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subscription::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Subscription {
    Table,
    SubscriberId,
    AuthorId,
    CreatedAt,
}
