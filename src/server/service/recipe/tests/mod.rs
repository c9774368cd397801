
use larder_test_utils::prelude::*;

use crate::model::recipe::IngredientLineDto;

use super::*;

fn line(id: i32, amount: i32) -> IngredientLineDto {
    IngredientLineDto { id, amount }
}

fn new_recipe(name: &str, ingredients: Vec<IngredientLineDto>) -> NewRecipeDto {
    NewRecipeDto {
        name: name.to_string(),
        text: "Mix everything and bake for an hour".to_string(),
        image: None,
        cooking_time: 60,
        ingredients,
    }
}
