use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Fluent builder for test contexts backed by in-memory SQLite.
///
/// Add the entity tables a test needs, then call `build()` to get a
/// `TestContext` with the schema created.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_member_xp_table()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to run during setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity's table to the schema.
    ///
    /// The CREATE TABLE statement is derived from the SeaORM entity with
    /// SQLite syntax. Add tables in dependency order when foreign keys are
    /// involved.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        self
    }

    /// Adds the member XP table to the schema.
    ///
    /// Convenience for the one table XP store tests need.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_member_xp_table(self) -> Self {
        self.with_table(entity::prelude::MemberXp)
    }

    /// Connects to a fresh in-memory database and creates the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the schema ready
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
