//! Declarative test builder for test setup.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()` to create a
/// complete test context.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_recipe_tables: bool,

    // Database fixtures to insert
    users: Vec<String>,
    ingredients: Vec<(String, String)>, // (name, measurement_unit)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_recipe_tables: false,
            users: Vec::new(),
            ingredients: Vec::new(),
        }
    }

    /// Add every table of the recipe domain to the test database.
    ///
    /// Creates, in dependency order: User, Ingredient, Recipe, RecipeIngredient,
    /// UserRecipeRelation and Subscription.
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_recipe_tables(mut self) -> Self {
        self.include_recipe_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use larder_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), larder_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(User)
    ///     .with_table(Ingredient)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with the provided username.
    ///
    /// The email and names are derived from the username.
    pub fn with_user(mut self, username: impl Into<String>) -> Self {
        self.users.push(username.into());
        self
    }

    /// Insert a catalog ingredient.
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        measurement_unit: impl Into<String>,
    ) -> Self {
        self.ingredients
            .push((name.into(), measurement_unit.into()));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (recipe tables if specified, then custom tables)
    /// 2. Inserts database fixtures (users, then ingredients)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut test = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_recipe_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Ingredient),
                schema.create_table_from_entity(entity::prelude::Recipe),
                schema.create_table_from_entity(entity::prelude::RecipeIngredient),
                schema.create_table_from_entity(entity::prelude::UserRecipeRelation),
                schema.create_table_from_entity(entity::prelude::Subscription),
            ]);
        }

        all_tables.extend(self.tables);
        test.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for username in self.users {
            test.user().insert_user(&username).await?;
        }

        for (name, measurement_unit) in self.ingredients {
            test.ingredient()
                .insert_ingredient(&name, &measurement_unit)
                .await?;
        }

        Ok(test)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
