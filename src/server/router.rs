//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. Handlers sharing a path are registered together in one `routes!` call so
//! that utoipa-axum mounts them as one method router. Swagger UI is served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET|POST /api/ingredients` - Search / register catalog ingredients
/// - `GET|DELETE /api/ingredients/{id}` - Resolve / remove an ingredient
/// - `GET|POST /api/recipes` - List / publish recipes
/// - `GET|PATCH|DELETE /api/recipes/{id}` - Get / update / delete a recipe
/// - `GET|PUT /api/recipes/{id}/ingredients` - Get / replace a recipe's ingredient lines
/// - `POST|DELETE /api/recipes/{id}/favorite` - Add / remove a favorite
/// - `POST|DELETE /api/recipes/{id}/shopping_cart` - Add / remove a shopping cart entry
/// - `GET /api/recipes/{id}/get-link` - Short link to a recipe
/// - `GET /api/recipes/shopping_list` - Aggregated shopping list
/// - `GET /api/recipes/download_shopping_cart` - Shopping list as a text file
/// - `POST /api/users` - Create a user
/// - `GET /api/users/me` - Current user
/// - `GET /api/users/me/favorites` - Current user's favorites
/// - `GET /api/users/me/shopping_cart` - Current user's shopping cart
/// - `GET /api/users/subscriptions` - Authors the current user follows
/// - `GET /api/users/{id}` - User profile
/// - `POST|DELETE /api/users/{id}/subscribe` - Subscribe / unsubscribe
/// - `GET /s/{id}` - Short link redirect
///
/// # Returns
/// An Axum `Router<AppState>` with every route and the Swagger UI, ready for `with_state`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Larder", description = "Larder recipe sharing API"), tags(
        (name = controller::ingredient::INGREDIENT_TAG, description = "Ingredient catalog API routes"),
        (name = controller::recipe::RECIPE_TAG, description = "Recipe API routes"),
        (name = controller::relation::RELATION_TAG, description = "Favorites and shopping cart API routes"),
        (name = controller::shopping_list::SHOPPING_LIST_TAG, description = "Shopping list API routes"),
        (name = controller::subscription::SUBSCRIPTION_TAG, description = "Author subscription API routes"),
        (name = controller::user::USER_TAG, description = "User API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::ingredient::search_ingredients,
            controller::ingredient::register_ingredient
        ))
        .routes(routes!(
            controller::ingredient::get_ingredient,
            controller::ingredient::remove_ingredient
        ))
        .routes(routes!(
            controller::recipe::list_recipes,
            controller::recipe::create_recipe
        ))
        .routes(routes!(
            controller::recipe::get_recipe,
            controller::recipe::update_recipe,
            controller::recipe::delete_recipe
        ))
        .routes(routes!(
            controller::recipe::get_recipe_ingredients,
            controller::recipe::set_recipe_ingredients
        ))
        .routes(routes!(controller::recipe::get_recipe_link))
        .routes(routes!(controller::recipe::follow_short_link))
        .routes(routes!(
            controller::relation::add_favorite,
            controller::relation::remove_favorite
        ))
        .routes(routes!(
            controller::relation::add_to_shopping_cart,
            controller::relation::remove_from_shopping_cart
        ))
        .routes(routes!(controller::relation::list_favorites))
        .routes(routes!(controller::relation::list_shopping_cart))
        .routes(routes!(controller::shopping_list::get_shopping_list))
        .routes(routes!(controller::shopping_list::download_shopping_list))
        .routes(routes!(controller::user::create_user))
        .routes(routes!(controller::user::get_current_user))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::subscription::list_subscriptions))
        .routes(routes!(
            controller::subscription::subscribe,
            controller::subscription::unsubscribe
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
