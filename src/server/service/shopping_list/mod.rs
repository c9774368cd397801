//! Shopping list aggregation.
//!
//! The datastore sums the ingredient lines of every recipe in a user's cart in a single
//! statement. [`merge_totals`] then folds rows whose names only differ by case or
//! surrounding whitespace, so the report holds one entry per ingredient identity.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::shopping::ShoppingListItemDto,
    server::{
        data::shopping_list::{CartIngredientTotal, ShoppingListRepository},
        error::Error,
        util::name::normalize_ingredient_name,
    },
};

/// Header line of the downloadable shopping list.
pub const SHOPPING_LIST_HEADER: &str = "Список покупок:";

pub struct ShoppingListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShoppingListService<'a> {
    /// Creates a new instance of ShoppingListService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Aggregates the ingredients of every recipe in the user's shopping cart.
    ///
    /// # Returns
    /// - `Ok(Vec<ShoppingListItemDto>)` - One entry per ingredient and unit ordered by name
    ///   then unit, empty when the cart is empty
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn aggregate(&self, user_id: i32) -> Result<Vec<ShoppingListItemDto>, Error> {
        let totals = ShoppingListRepository::new(self.db)
            .sum_cart_ingredients(user_id)
            .await?;

        Ok(merge_totals(totals))
    }
}

/// Folds per-ingredient totals into one item per `(normalized name, unit)` key.
///
/// The output is ordered by name then unit, independent of the input order.
pub fn merge_totals(totals: Vec<CartIngredientTotal>) -> Vec<ShoppingListItemDto> {
    let mut merged: BTreeMap<(String, String), i64> = BTreeMap::new();

    for total in totals {
        let key = (
            normalize_ingredient_name(&total.name),
            total.measurement_unit,
        );
        *merged.entry(key).or_default() += total.total_amount;
    }

    merged
        .into_iter()
        .map(|((name, measurement_unit), total_amount)| ShoppingListItemDto {
            name,
            measurement_unit,
            total_amount,
        })
        .collect()
}

/// Renders the shopping list as the plain text served for download.
pub fn render_shopping_list(items: &[ShoppingListItemDto]) -> String {
    let mut text = format!("{}\n\n", SHOPPING_LIST_HEADER);

    for item in items {
        text.push_str(&format!(
            "{} - {} {}\n",
            item.name, item.total_amount, item.measurement_unit
        ));
    }

    text
}
