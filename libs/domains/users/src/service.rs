use axum_helpers::auth::{TokenManager, TokenPayload};
use database::{IdGenerator, UuidV7Generator};
use std::sync::Arc;

use crate::error::{UserError, UserResult};
use crate::hashing::HashManager;
use crate::models::{
    LoginRequest, LoginResponse, Role, SignupRequest, SignupResponse, User, UserResponse,
};
use crate::repository::UserRepository;

pub const SIGNUP_MESSAGE: &str = "User registered successfully";
pub const LOGIN_MESSAGE: &str = "Login successful";

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
    ids: Arc<dyn IdGenerator>,
    hasher: HashManager,
    tokens: TokenManager,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R, tokens: TokenManager) -> Self {
        Self {
            repository: Arc::new(repository),
            ids: Arc::new(UuidV7Generator),
            hasher: HashManager::new(),
            tokens,
        }
    }

    /// Replace the identifier source (tests use a deterministic one).
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Register a user and issue a token for it.
    ///
    /// The requested role is ignored: every registration creates a
    /// [`Role::Normal`] user. A taken email (or identifier) is rejected by the
    /// store as AlreadyExists.
    pub async fn create_user(&self, input: SignupRequest) -> UserResult<SignupResponse> {
        let password_hash = self.hasher.hash(&input.password).await?;

        let user = User::new(
            self.ids.generate(),
            input.name,
            normalize_email(&input.email),
            password_hash,
            Role::Normal,
        );

        let created = self.repository.create(user).await?;
        let token = self.issue_token(&created)?;

        Ok(SignupResponse {
            message: SIGNUP_MESSAGE.to_string(),
            token,
        })
    }

    /// Verify credentials and issue a token.
    pub async fn login_user(&self, input: LoginRequest) -> UserResult<LoginResponse> {
        let user = self
            .repository
            .get_by_email(&normalize_email(&input.email))
            .await?
            .ok_or_else(|| UserError::NotFound("'email' not found".to_string()))?;

        if !self
            .hasher
            .compare(&input.password, &user.password_hash)
            .await?
        {
            return Err(UserError::BadRequest(
                "invalid email and/or password".to_string(),
            ));
        }

        let token = self.issue_token(&user)?;

        Ok(LoginResponse {
            message: LOGIN_MESSAGE.to_string(),
            token,
            name: user.name,
            role: user.role,
        })
    }

    /// List every user. Only callers holding an admin token may do this.
    pub async fn get_all_users(&self, token: &str) -> UserResult<Vec<UserResponse>> {
        let payload = self
            .tokens
            .get_payload(token)
            .ok_or_else(|| UserError::BadRequest("invalid token".to_string()))?;

        if payload.role != Role::Admin.as_str() {
            return Err(UserError::BadRequest(
                "only admins can access this resource".to_string(),
            ));
        }

        let users = self.repository.list().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Users whose name contains `query` (case-insensitive).
    pub async fn find_user_by_name(&self, query: &str) -> UserResult<Vec<UserResponse>> {
        let users = self.repository.find_by_name(query.trim()).await?;

        if users.is_empty() {
            return Err(UserError::NotFound(format!(
                "No users found matching '{}'",
                query.trim()
            )));
        }

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Declared user edit. Accepted and ignored; users are never mutated.
    pub async fn edit_users(&self) -> UserResult<()> {
        Ok(())
    }

    /// Declared user deletion. Accepted and ignored; users are never removed.
    pub async fn delete_users(&self) -> UserResult<()> {
        Ok(())
    }

    fn issue_token(&self, user: &User) -> UserResult<String> {
        let payload = TokenPayload::new(user.id.to_string(), user.name.clone(), user.role.as_str());
        self.tokens
            .create_token(&payload)
            .map_err(|e| UserError::Internal(format!("Token signing failed: {}", e)))
    }
}

fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
