use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::model::db::IngredientModel;

pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    /// Creates a new instance of [`IngredientRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a catalog ingredient
    ///
    /// The name must already be normalized, the unique constraint on `name` is the authority
    /// on duplicates and surfaces as [`sea_orm::SqlErr::UniqueConstraintViolation`].
    pub async fn create(
        &self,
        name: String,
        measurement_unit: String,
    ) -> Result<IngredientModel, DbErr> {
        let ingredient = entity::ingredient::ActiveModel {
            name: ActiveValue::Set(name),
            measurement_unit: ActiveValue::Set(measurement_unit),
            ..Default::default()
        };

        ingredient.insert(self.db).await
    }

    pub async fn get_by_id(&self, ingredient_id: i32) -> Result<Option<IngredientModel>, DbErr> {
        entity::prelude::Ingredient::find_by_id(ingredient_id)
            .one(self.db)
            .await
    }

    /// Query of ingredients whose normalized name starts with `prefix`, ordered by name
    ///
    /// No prefix selects the whole catalog. The query is not executed, callers run it whole
    /// or page through it and may do so any number of times.
    pub fn search_query(&self, prefix: Option<&str>) -> Select<entity::ingredient::Entity> {
        let mut query = entity::prelude::Ingredient::find();

        if let Some(prefix) = prefix.filter(|p| !p.is_empty()) {
            let pattern = LikeExpr::new(format!("{}%", escape_like(prefix))).escape('\\');
            query = query.filter(entity::ingredient::Column::Name.like(pattern));
        }

        query
            .order_by_asc(entity::ingredient::Column::Name)
            .order_by_asc(entity::ingredient::Column::Id)
    }

    /// Returns which of the provided ingredient IDs exist in the catalog
    ///
    /// The returned rows are share-locked until the surrounding transaction ends, so they
    /// cannot be deleted in the meantime. Backends without row locks ignore the lock.
    pub async fn lock_existing_ids(&self, ingredient_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ingredient_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ingredient::find()
            .select_only()
            .column(entity::ingredient::Column::Id)
            .filter(entity::ingredient::Column::Id.is_in(ingredient_ids.iter().copied()))
            .lock_shared()
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Whether any recipe lists the ingredient
    pub async fn is_referenced(&self, ingredient_id: i32) -> Result<bool, DbErr> {
        let references = entity::prelude::RecipeIngredient::find()
            .filter(entity::recipe_ingredient::Column::IngredientId.eq(ingredient_id))
            .count(self.db)
            .await?;

        Ok(references > 0)
    }

    /// Deletes an ingredient
    ///
    /// Returns OK regardless of the ingredient existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, ingredient_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Ingredient::delete_by_id(ingredient_id)
            .exec(self.db)
            .await
    }
}

/// Escapes the `LIKE` wildcards of a user-supplied prefix with a backslash.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
