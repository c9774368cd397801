use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000001_user::User, m20261017_000003_recipe::Recipe};

static IDX_USER_RECIPE_RELATION_LISTING: &str = "idx_user_recipe_relation_user_kind_created_at";
static FK_USER_RECIPE_RELATION_USER_ID: &str = "fk_user_recipe_relation_user_id";
static FK_USER_RECIPE_RELATION_RECIPE_ID: &str = "fk_user_recipe_relation_recipe_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Favorites and shopping cart entries share one table, the primary key
        // on (kind, user_id, recipe_id) arbitrates concurrent identical inserts.
        manager
            .create_table(
                Table::create()
                    .table(UserRecipeRelation::Table)
                    .if_not_exists()
                    .col(
                        string_len(UserRecipeRelation::Kind, 16)
                            .extra("CHECK (kind IN ('favorite', 'shopping_cart'))"),
                    )
                    .col(integer(UserRecipeRelation::UserId))
                    .col(integer(UserRecipeRelation::RecipeId))
                    .col(timestamp(UserRecipeRelation::CreatedAt))
                    .primary_key(
                        Index::create()
                            .col(UserRecipeRelation::Kind)
                            .col(UserRecipeRelation::UserId)
                            .col(UserRecipeRelation::RecipeId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_RECIPE_RELATION_LISTING)
                    .table(UserRecipeRelation::Table)
                    .col(UserRecipeRelation::UserId)
                    .col(UserRecipeRelation::Kind)
                    .col(UserRecipeRelation::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_RECIPE_RELATION_USER_ID)
                    .from_tbl(UserRecipeRelation::Table)
                    .from_col(UserRecipeRelation::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_USER_RECIPE_RELATION_RECIPE_ID)
                    .from_tbl(UserRecipeRelation::Table)
                    .from_col(UserRecipeRelation::RecipeId)
                    .to_tbl(Recipe::Table)
                    .to_col(Recipe::Id)
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
                    .name(FK_USER_RECIPE_RELATION_RECIPE_ID)
                    .table(UserRecipeRelation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_USER_RECIPE_RELATION_USER_ID)
                    .table(UserRecipeRelation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_RECIPE_RELATION_LISTING)
                    .table(UserRecipeRelation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserRecipeRelation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserRecipeRelation {
    Table,
    Kind,
    UserId,
    RecipeId,
    CreatedAt,
}
