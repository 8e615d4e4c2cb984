//! User repository for database operations.

use crate::entities::{Role, User};
use crate::types::{AccountError, AccountResult};
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const USER_COLUMNS: &str =
    "id, username, first_name, last_name, email, dui, password_hash, created_at, updated_at";

/// Repository for user database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i64) -> AccountResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        self.attach_roles(row).await
    }

    /// Find user by username
    pub async fn find_by_username(&self, username: &str) -> AccountResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = ?"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        self.attach_roles(row).await
    }

    /// Find user by national id
    pub async fn find_by_dui(&self, dui: &str) -> AccountResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE dui = ?"))
            .bind(dui)
            .fetch_optional(&self.pool)
            .await?;

        self.attach_roles(row).await
    }

    /// Insert-or-update a user record. A user with `id == 0` is inserted and
    /// gets its id from the store; any other id overwrites the existing row.
    /// Role links are replaced to mirror the record's role set either way.
    pub async fn save(&self, user: &User) -> AccountResult<User> {
        if user.id == 0 {
            self.insert(user).await
        } else {
            self.update(user).await
        }
    }

    async fn insert(&self, user: &User) -> AccountResult<User> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO users (username, first_name, last_name, email, dui, password_hash, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?)"
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.dui)
        .bind(&user.password_hash)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let user_id = result.last_insert_rowid();
        self.replace_role_links(user_id, &user.roles).await?;

        self.find_by_id(user_id).await?.ok_or_else(|| {
            AccountError::DatabaseError("failed to retrieve saved user".to_string())
        })
    }

    async fn update(&self, user: &User) -> AccountResult<User> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "UPDATE users SET username = ?, first_name = ?, last_name = ?, email = ?, dui = ?, password_hash = ?, updated_at = ? WHERE id = ?"
        )
        .bind(&user.username)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.dui)
        .bind(&user.password_hash)
        .bind(&now)
        .bind(user.id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AccountError::UserNotFound);
        }

        self.replace_role_links(user.id, &user.roles).await?;

        self.find_by_id(user.id).await?.ok_or(AccountError::UserNotFound)
    }

    /// Delete a user and its role links
    pub async fn delete(&self, user: &User) -> AccountResult<()> {
        sqlx::query("DELETE FROM users_roles WHERE user_id = ?")
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AccountError::UserNotFound);
        }

        Ok(())
    }

    /// List every user
    pub async fn find_all(&self) -> AccountResult<Vec<User>> {
        let rows = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        let mut users = Vec::with_capacity(rows.len());
        for row in rows {
            let mut user = map_user_row(&row);
            user.roles = self.load_roles(user.id).await?;
            users.push(user);
        }

        Ok(users)
    }

    async fn attach_roles(&self, row: Option<SqliteRow>) -> AccountResult<Option<User>> {
        if let Some(row) = row {
            let mut user = map_user_row(&row);
            user.roles = self.load_roles(user.id).await?;
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    async fn load_roles(&self, user_id: i64) -> AccountResult<Vec<Role>> {
        let rows = sqlx::query(
            "SELECT r.id, r.name FROM roles r JOIN users_roles ur ON ur.role_id = r.id WHERE ur.user_id = ? ORDER BY r.name"
        )
        .bind(user_id)
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

    async fn replace_role_links(&self, user_id: i64, roles: &[Role]) -> AccountResult<()> {
        sqlx::query("DELETE FROM users_roles WHERE user_id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        for role in roles {
            sqlx::query("INSERT OR IGNORE INTO users_roles (user_id, role_id) VALUES (?, ?)")
                .bind(user_id)
                .bind(role.id)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }
}

fn map_user_row(row: &SqliteRow) -> User {
    User {
        id: row.get("id"),
        username: row.get("username"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        dui: row.get("dui"),
        password_hash: row.get("password_hash"),
        roles: Vec::new(),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
