use std::collections::HashMap;

use chrono::Utc;
use entity::user_recipe_relation::RelationKind;
use sea_orm::{
    sea_query::{self, Expr, Func, Query, SelectStatement},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, TryIntoModel,
};

use crate::server::model::db::RecipeModel;

/// Validated recipe fields written on creation
pub struct RecipeFields {
    pub name: String,
    pub text: String,
    pub image: Option<String>,
    pub cooking_time: i32,
}

/// Validated recipe fields to change on update, `None` leaves a field unchanged
#[derive(Default)]
pub struct RecipeChanges {
    pub name: Option<String>,
    pub text: Option<String>,
    pub image: Option<String>,
    pub cooking_time: Option<i32>,
}

/// Restrictions applied by [`RecipeRepository::list_query`]
#[derive(Clone, Copy, Debug, Default)]
pub struct RecipeFilter {
    pub author_id: Option<i32>,
    /// Only recipes this user has favorited
    pub favorited_by: Option<i32>,
    /// Only recipes in this user's shopping cart
    pub in_cart_of: Option<i32>,
}

pub struct RecipeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RecipeRepository<'a, C> {
    /// Creates a new instance of [`RecipeRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, author_id: i32, fields: RecipeFields) -> Result<RecipeModel, DbErr> {
        let recipe = entity::recipe::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            name: ActiveValue::Set(fields.name),
            text: ActiveValue::Set(fields.text),
            image: ActiveValue::Set(fields.image),
            cooking_time: ActiveValue::Set(fields.cooking_time),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        recipe.insert(self.db).await
    }

    pub async fn get_by_id(&self, recipe_id: i32) -> Result<Option<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find_by_id(recipe_id)
            .one(self.db)
            .await
    }

    /// Applies the provided changes to a recipe
    pub async fn update(
        &self,
        recipe: RecipeModel,
        changes: RecipeChanges,
    ) -> Result<RecipeModel, DbErr> {
        let mut recipe_am = recipe.into_active_model();

        if let Some(name) = changes.name {
            recipe_am.name = ActiveValue::Set(name);
        }
        if let Some(text) = changes.text {
            recipe_am.text = ActiveValue::Set(text);
        }
        if let Some(image) = changes.image {
            recipe_am.image = ActiveValue::Set(Some(image));
        }
        if let Some(cooking_time) = changes.cooking_time {
            recipe_am.cooking_time = ActiveValue::Set(cooking_time);
        }

        if !recipe_am.is_changed() {
            return recipe_am.try_into_model();
        }

        recipe_am.update(self.db).await
    }

    /// Deletes a recipe, its ingredient lines and relations are removed by cascade
    ///
    /// Returns OK regardless of recipe existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, recipe_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Recipe::delete_by_id(recipe_id)
            .exec(self.db)
            .await
    }

    /// Whether the author already has a recipe with this name, ignoring case
    ///
    /// # Arguments
    /// - `exclude_recipe_id` - Recipe to ignore, used when renaming a recipe
    pub async fn name_taken(
        &self,
        author_id: i32,
        name: &str,
        exclude_recipe_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .filter(sea_query::ExprTrait::eq(
                Expr::expr(Func::lower(Expr::col(entity::recipe::Column::Name))),
                name.to_lowercase(),
            ));

        if let Some(recipe_id) = exclude_recipe_id {
            query = query.filter(entity::recipe::Column::Id.ne(recipe_id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Query of recipes matching `filter`, newest first
    ///
    /// The query is not executed, callers run it whole or page through it.
    pub fn list_query(&self, filter: RecipeFilter) -> Select<entity::recipe::Entity> {
        let mut query = entity::prelude::Recipe::find();

        if let Some(author_id) = filter.author_id {
            query = query.filter(entity::recipe::Column::AuthorId.eq(author_id));
        }
        if let Some(user_id) = filter.favorited_by {
            query = query.filter(
                entity::recipe::Column::Id
                    .in_subquery(member_recipe_ids(RelationKind::Favorite, user_id)),
            );
        }
        if let Some(user_id) = filter.in_cart_of {
            query = query.filter(
                entity::recipe::Column::Id
                    .in_subquery(member_recipe_ids(RelationKind::ShoppingCart, user_id)),
            );
        }

        query
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_desc(entity::recipe::Column::Id)
    }

    /// Number of recipes published by each of the provided authors
    ///
    /// Authors without recipes have no entry in the map.
    pub async fn count_by_authors(&self, author_ids: &[i32]) -> Result<HashMap<i32, u64>, DbErr> {
        if author_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let counts = entity::prelude::Recipe::find()
            .select_only()
            .column(entity::recipe::Column::AuthorId)
            .column_as(entity::recipe::Column::Id.count(), "recipes_count")
            .filter(entity::recipe::Column::AuthorId.is_in(author_ids.iter().copied()))
            .group_by(entity::recipe::Column::AuthorId)
            .into_tuple::<(i32, i64)>()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(author_id, count)| (author_id, count.max(0) as u64))
            .collect())
    }

    /// Newest recipes of an author, at most `limit` of them when provided
    pub async fn preview_by_author(
        &self,
        author_id: i32,
        limit: Option<u64>,
    ) -> Result<Vec<RecipeModel>, DbErr> {
        entity::prelude::Recipe::find()
            .filter(entity::recipe::Column::AuthorId.eq(author_id))
            .order_by_desc(entity::recipe::Column::CreatedAt)
            .order_by_desc(entity::recipe::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}

/// Subquery selecting the IDs of recipes a user holds in a relation of `kind`
fn member_recipe_ids(kind: RelationKind, user_id: i32) -> SelectStatement {
    Query::select()
        .column(entity::user_recipe_relation::Column::RecipeId)
        .from(entity::user_recipe_relation::Entity)
        .and_where(entity::user_recipe_relation::Column::Kind.eq(kind.as_str()))
        .and_where(entity::user_recipe_relation::Column::UserId.eq(user_id))
        .to_owned()
}
