use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An ingredient of the shopping list with amounts summed over every recipe in the cart
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListItemDto {
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}
