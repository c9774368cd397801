use chrono::Utc;
use entity::user_recipe_relation::RelationKind;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

pub struct RelationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RelationRepository<'a, C> {
    /// Creates a new instance of [`RelationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a relation of `kind` between a user and a recipe
    ///
    /// The primary key `(kind, user_id, recipe_id)` arbitrates concurrent identical inserts,
    /// a pair already present surfaces as [`sea_orm::SqlErr::UniqueConstraintViolation`].
    pub async fn create(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<(), DbErr> {
        let relation = entity::user_recipe_relation::ActiveModel {
            kind: ActiveValue::Set(kind.as_str().to_string()),
            user_id: ActiveValue::Set(user_id),
            recipe_id: ActiveValue::Set(recipe_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
        };

        entity::prelude::UserRecipeRelation::insert(relation)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a relation of `kind` between a user and a recipe
    ///
    /// Returns OK regardless of the relation existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserRecipeRelation::delete_many()
            .filter(entity::user_recipe_relation::Column::Kind.eq(kind.as_str()))
            .filter(entity::user_recipe_relation::Column::UserId.eq(user_id))
            .filter(entity::user_recipe_relation::Column::RecipeId.eq(recipe_id))
            .exec(self.db)
            .await
    }

    /// Whether the user holds the recipe in a relation of `kind`
    pub async fn exists(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_id: i32,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::UserRecipeRelation::find()
            .filter(entity::user_recipe_relation::Column::Kind.eq(kind.as_str()))
            .filter(entity::user_recipe_relation::Column::UserId.eq(user_id))
            .filter(entity::user_recipe_relation::Column::RecipeId.eq(recipe_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Query of the recipes a user holds in a relation of `kind`, most recent first
    ///
    /// The query is not executed, callers run it whole or page through it.
    pub fn list_query(&self, kind: RelationKind, user_id: i32) -> Select<entity::recipe::Entity> {
        entity::prelude::Recipe::find()
            .join(
                JoinType::InnerJoin,
                entity::recipe::Relation::UserRecipeRelation.def(),
            )
            .filter(entity::user_recipe_relation::Column::Kind.eq(kind.as_str()))
            .filter(entity::user_recipe_relation::Column::UserId.eq(user_id))
            .order_by_desc(entity::user_recipe_relation::Column::CreatedAt)
            .order_by_desc(entity::recipe::Column::Id)
    }

    /// Which of the provided recipes the user holds in a relation of `kind`
    pub async fn recipe_ids_for_user(
        &self,
        kind: RelationKind,
        user_id: i32,
        recipe_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::UserRecipeRelation::find()
            .select_only()
            .column(entity::user_recipe_relation::Column::RecipeId)
            .filter(entity::user_recipe_relation::Column::Kind.eq(kind.as_str()))
            .filter(entity::user_recipe_relation::Column::UserId.eq(user_id))
            .filter(
                entity::user_recipe_relation::Column::RecipeId.is_in(recipe_ids.iter().copied()),
            )
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
