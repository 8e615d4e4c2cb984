//! Role repository for reference-data lookups.

use crate::entities::Role;
use crate::types::AccountResult;
use sqlx::{Row, SqlitePool};

/// Read-only repository over the seeded role reference data.
#[derive(Clone)]
pub struct RoleRepository {
    pool: SqlitePool,
}

impl RoleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a role by its name
    pub async fn find_by_name(&self, name: &str) -> AccountResult<Option<Role>> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Role {
            id: row.get("id"),
            name: row.get("name"),
        }))
    }

    /// List every role
    pub async fn find_all(&self) -> AccountResult<Vec<Role>> {
        let rows = sqlx::query("SELECT id, name FROM roles ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Role {
                id: row.get("id"),
                name: row.get("name"),
            })
            .collect())
    }
}
