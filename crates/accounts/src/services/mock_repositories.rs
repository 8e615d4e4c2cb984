//! Mock repository implementations for testing core service functionality

use chrono::Utc;
use padron_database::{AccountError, AccountResult, User};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory user store for testing. Keeps username and dui indexes the way
/// the real repository keeps unique columns, but enforces no constraints on
/// the update path.
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
    next_id: Arc<RwLock<i64>>,
    username_index: Arc<RwLock<HashMap<String, i64>>>,
    dui_index: Arc<RwLock<HashMap<String, i64>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            username_index: Arc::new(RwLock::new(HashMap::new())),
            dui_index: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn find_by_id(&self, user_id: i64) -> AccountResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&user_id).cloned())
    }

    pub async fn find_by_username(&self, username: &str) -> AccountResult<Option<User>> {
        let username_index = self.username_index.read().await;
        if let Some(user_id) = username_index.get(username) {
            let users = self.users.read().await;
            Ok(users.get(user_id).cloned())
        } else {
            Ok(None)
        }
    }

    pub async fn find_by_dui(&self, dui: &str) -> AccountResult<Option<User>> {
        let dui_index = self.dui_index.read().await;
        if let Some(user_id) = dui_index.get(dui) {
            let users = self.users.read().await;
            Ok(users.get(user_id).cloned())
        } else {
            Ok(None)
        }
    }

    pub async fn save(&self, user: &User) -> AccountResult<User> {
        if user.id == 0 {
            self.insert(user).await
        } else {
            self.update(user).await
        }
    }

    async fn insert(&self, user: &User) -> AccountResult<User> {
        let mut next_id = self.next_id.write().await;
        let user_id = *next_id;
        *next_id += 1;

        let now = Utc::now().to_rfc3339();
        let mut stored = user.clone();
        stored.id = user_id;
        stored.created_at = now.clone();
        stored.updated_at = now;

        let mut users = self.users.write().await;
        users.insert(user_id, stored.clone());

        let mut username_index = self.username_index.write().await;
        username_index.insert(stored.username.clone(), user_id);
        let mut dui_index = self.dui_index.write().await;
        dui_index.insert(stored.dui.clone(), user_id);

        Ok(stored)
    }

    async fn update(&self, user: &User) -> AccountResult<User> {
        let mut users = self.users.write().await;
        let Some(existing) = users.get(&user.id).cloned() else {
            return Err(AccountError::UserNotFound);
        };

        let mut stored = user.clone();
        stored.updated_at = Utc::now().to_rfc3339();

        if existing.username != stored.username {
            let mut username_index = self.username_index.write().await;
            username_index.remove(&existing.username);
            username_index.insert(stored.username.clone(), stored.id);
        }
        if existing.dui != stored.dui {
            let mut dui_index = self.dui_index.write().await;
            dui_index.remove(&existing.dui);
            dui_index.insert(stored.dui.clone(), stored.id);
        }

        users.insert(stored.id, stored.clone());
        Ok(stored)
    }

    pub async fn delete(&self, user: &User) -> AccountResult<()> {
        let mut users = self.users.write().await;
        if let Some(removed) = users.remove(&user.id) {
            let mut username_index = self.username_index.write().await;
            username_index.remove(&removed.username);
            let mut dui_index = self.dui_index.write().await;
            dui_index.remove(&removed.dui);
            Ok(())
        } else {
            Err(AccountError::UserNotFound)
        }
    }

    pub async fn find_all(&self) -> AccountResult<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by_key(|user| user.id);
        Ok(all)
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}
