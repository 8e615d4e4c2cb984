//! Account service enforcing the business rules over the user store.

use padron_database::{
    AccountError, AccountResult, ChangePasswordRequest, CreateUserRequest, UpdateUserRequest, User,
    UserRepository,
};
use sqlx::sqlite::SqlitePool;

use super::mock_repositories::MockUserRepository;
use crate::types::Caller;
use crate::utils::password::{hash_password, verify_password};

/// Service for managing user accounts and the password lifecycle.
pub struct AccountService<R> {
    user_store: R,
}

impl AccountService<UserRepository> {
    /// Create a new account service backed by the real database repository
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            user_store: UserRepository::new(pool),
        }
    }
}

impl AccountService<MockUserRepository> {
    /// Create a new account service backed by the in-memory store, for testing
    pub fn new_for_testing() -> Self {
        Self {
            user_store: MockUserRepository::new(),
        }
    }
}

impl<R> AccountService<R>
where
    R: UserStore,
{
    /// List every user. No pagination, no filtering.
    pub async fn list_users(&self) -> AccountResult<Vec<User>> {
        self.user_store.find_all().await
    }

    /// Create a new user.
    ///
    /// Availability and confirmation checks run in order and short-circuit,
    /// so nothing is hashed or persisted before the request fully passes.
    pub async fn create_user(&self, request: CreateUserRequest) -> AccountResult<User> {
        self.check_username_available(&request.username).await?;
        self.check_dui_available(&request.dui).await?;
        check_password_confirmed(&request)?;

        let password_hash = hash_password(&request.password)?;
        let user = self
            .user_store
            .save(&User::from_request(&request, password_hash))
            .await?;

        log::info!("created user {} (id {})", user.username, user.id);
        Ok(user)
    }

    /// Get a user by ID
    pub async fn get_user(&self, user_id: i64) -> AccountResult<User> {
        self.user_store
            .find_by_id(user_id)
            .await?
            .ok_or(AccountError::UserNotFound)
    }

    /// Get a user by username
    pub async fn get_user_by_username(&self, username: &str) -> AccountResult<User> {
        self.user_store
            .find_by_username(username)
            .await?
            .ok_or(AccountError::UserNotFound)
    }

    /// Overwrite the mutable attributes of an existing user.
    ///
    /// The stored password hash is untouched; it only changes through
    /// [`AccountService::change_password`]. Uniqueness of username and dui is
    /// not re-checked here; the store's unique constraints are the backstop.
    pub async fn update_user(&self, request: UpdateUserRequest) -> AccountResult<User> {
        let mut user = self.get_user(request.id).await?;
        map_user(&request, &mut user);
        user.touch();

        let updated = self.user_store.save(&user).await?;

        log::info!("updated user {} (id {})", updated.username, updated.id);
        Ok(updated)
    }

    /// Delete a user. Restricted to callers holding the admin role.
    pub async fn delete_user(&self, caller: &Caller, user_id: i64) -> AccountResult<()> {
        if !caller.is_admin() {
            return Err(AccountError::AdminRequired);
        }

        let user = self.get_user(user_id).await?;
        self.user_store.delete(&user).await?;

        log::warn!(
            "user {} (id {}) deleted by {}",
            user.username,
            user.id,
            caller.username
        );
        Ok(())
    }

    /// Change a user's password.
    ///
    /// Non-admin callers must present the current password; admin callers
    /// bypass that check (privileged reset). The new password must differ
    /// from the current one for every caller.
    pub async fn change_password(
        &self,
        caller: &Caller,
        request: ChangePasswordRequest,
    ) -> AccountResult<User> {
        let mut user = self.get_user(request.user_id).await?;

        if !caller.is_admin() {
            let current = request.current_password.as_deref().unwrap_or("");
            if !verify_password(current, &user.password_hash)? {
                return Err(AccountError::InvalidCurrentPassword);
            }
        }

        if verify_password(&request.new_password, &user.password_hash)? {
            return Err(AccountError::PasswordReused);
        }

        if request.new_password != request.confirm_password {
            return Err(AccountError::NewPasswordMismatch);
        }

        user.password_hash = hash_password(&request.new_password)?;
        user.touch();

        let updated = self.user_store.save(&user).await?;

        log::info!(
            "password changed for user {} (id {}) by {}",
            updated.username,
            updated.id,
            caller.username
        );
        Ok(updated)
    }

    async fn check_username_available(&self, username: &str) -> AccountResult<()> {
        if self
            .user_store
            .find_by_username(username)
            .await?
            .is_some()
        {
            return Err(AccountError::UsernameUnavailable);
        }
        Ok(())
    }

    async fn check_dui_available(&self, dui: &str) -> AccountResult<()> {
        if self.user_store.find_by_dui(dui).await?.is_some() {
            return Err(AccountError::DuiUnavailable);
        }
        Ok(())
    }
}

/// Copy the mutable attributes of an update request onto the stored record.
fn map_user(from: &UpdateUserRequest, to: &mut User) {
    to.username = from.username.clone();
    to.first_name = from.first_name.clone();
    to.last_name = from.last_name.clone();
    to.email = from.email.clone();
    to.dui = from.dui.clone();
    to.roles = from.roles.clone();
}

fn check_password_confirmed(request: &CreateUserRequest) -> AccountResult<()> {
    if request.confirm_password.is_empty() {
        return Err(AccountError::ConfirmationRequired);
    }

    if request.password != request.confirm_password {
        return Err(AccountError::PasswordMismatch);
    }

    Ok(())
}

/// Trait for user stores to allow generic usage
pub trait UserStore {
    async fn find_by_id(&self, id: i64) -> AccountResult<Option<User>>;
    async fn find_by_username(&self, username: &str) -> AccountResult<Option<User>>;
    async fn find_by_dui(&self, dui: &str) -> AccountResult<Option<User>>;
    async fn save(&self, user: &User) -> AccountResult<User>;
    async fn delete(&self, user: &User) -> AccountResult<()>;
    async fn find_all(&self) -> AccountResult<Vec<User>>;
}

impl UserStore for UserRepository {
    async fn find_by_id(&self, id: i64) -> AccountResult<Option<User>> {
        self.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> AccountResult<Option<User>> {
        self.find_by_username(username).await
    }

    async fn find_by_dui(&self, dui: &str) -> AccountResult<Option<User>> {
        self.find_by_dui(dui).await
    }

    async fn save(&self, user: &User) -> AccountResult<User> {
        self.save(user).await
    }

    async fn delete(&self, user: &User) -> AccountResult<()> {
        self.delete(user).await
    }

    async fn find_all(&self) -> AccountResult<Vec<User>> {
        self.find_all().await
    }
}

impl UserStore for MockUserRepository {
    async fn find_by_id(&self, id: i64) -> AccountResult<Option<User>> {
        self.find_by_id(id).await
    }

    async fn find_by_username(&self, username: &str) -> AccountResult<Option<User>> {
        self.find_by_username(username).await
    }

    async fn find_by_dui(&self, dui: &str) -> AccountResult<Option<User>> {
        self.find_by_dui(dui).await
    }

    async fn save(&self, user: &User) -> AccountResult<User> {
        self.save(user).await
    }

    async fn delete(&self, user: &User) -> AccountResult<()> {
        self.delete(user).await
    }

    async fn find_all(&self) -> AccountResult<Vec<User>> {
        self.find_all().await
    }
}
