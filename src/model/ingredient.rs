use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub name: String,
    pub measurement_unit: String,
}

impl From<entity::ingredient::Model> for IngredientDto {
    fn from(model: entity::ingredient::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            measurement_unit: model.measurement_unit,
        }
    }
}

/// Request body to register a catalog ingredient
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct NewIngredientDto {
    pub name: String,
    pub measurement_unit: String,
}

#[derive(Clone, Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IngredientSearchParams {
    /// Case-insensitive prefix of the ingredient name
    pub name: Option<String>,
}
