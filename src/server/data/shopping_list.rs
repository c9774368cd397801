use entity::user_recipe_relation::RelationKind;
use sea_orm::{
    sea_query::Query, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect,
};

/// Summed amount of one catalog ingredient over a user's shopping cart
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult)]
pub struct CartIngredientTotal {
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

pub struct ShoppingListRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShoppingListRepository<'a, C> {
    /// Creates a new instance of [`ShoppingListRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Sums the ingredient lines of every recipe in the user's shopping cart
    ///
    /// Cart membership, the line join and the `SUM ... GROUP BY` are one statement, so the
    /// datastore evaluates the whole report against a single snapshot of the cart.
    pub async fn sum_cart_ingredients(
        &self,
        user_id: i32,
    ) -> Result<Vec<CartIngredientTotal>, DbErr> {
        let cart_recipe_ids = Query::select()
            .column(entity::user_recipe_relation::Column::RecipeId)
            .from(entity::user_recipe_relation::Entity)
            .and_where(
                entity::user_recipe_relation::Column::Kind.eq(RelationKind::ShoppingCart.as_str()),
            )
            .and_where(entity::user_recipe_relation::Column::UserId.eq(user_id))
            .to_owned();

        entity::prelude::RecipeIngredient::find()
            .select_only()
            .column(entity::ingredient::Column::Name)
            .column(entity::ingredient::Column::MeasurementUnit)
            .column_as(entity::recipe_ingredient::Column::Amount.sum(), "total_amount")
            .inner_join(entity::ingredient::Entity)
            .filter(entity::recipe_ingredient::Column::RecipeId.in_subquery(cart_recipe_ids))
            .group_by(entity::ingredient::Column::Name)
            .group_by(entity::ingredient::Column::MeasurementUnit)
            .order_by_asc(entity::ingredient::Column::Name)
            .into_model::<CartIngredientTotal>()
            .all(self.db)
            .await
    }
}
