use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_user::User;

static IDX_RECIPE_AUTHOR_ID: &str = "idx_recipe_author_id";
static IDX_RECIPE_AUTHOR_NAME: &str = "idx_recipe_author_lower_name";
static FK_RECIPE_AUTHOR_ID: &str = "fk_recipe_author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Recipe::Table)
                    .if_not_exists()
                    .col(pk_auto(Recipe::Id))
                    .col(integer(Recipe::AuthorId))
                    .col(string_len(Recipe::Name, 256))
                    .col(text(Recipe::Text))
                    .col(string_null(Recipe::Image))
                    .col(integer(Recipe::CookingTime).extra("CHECK (cooking_time >= 1)"))
                    .col(timestamp(Recipe::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_RECIPE_AUTHOR_ID)
                    .table(Recipe::Table)
                    .col(Recipe::AuthorId)
                    .to_owned(),
            )
            .await?;

        // Recipe names are unique per author regardless of case
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {} ON recipe (author_id, lower(name))",
                IDX_RECIPE_AUTHOR_NAME
            ))
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_RECIPE_AUTHOR_ID)
                    .from_tbl(Recipe::Table)
                    .from_col(Recipe::AuthorId)
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
                    .name(FK_RECIPE_AUTHOR_ID)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_AUTHOR_NAME)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_RECIPE_AUTHOR_ID)
                    .table(Recipe::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Recipe::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Recipe {
    Table,
    Id,
    AuthorId,
    Name,
    Text,
    Image,
    CookingTime,
    CreatedAt,
}
