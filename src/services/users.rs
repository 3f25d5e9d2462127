//! Authentication and user management service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{
        LoginResponse, LoginUserPayload, RegisterUserPayload, User, UserClaims, UserProfile, UserShort,
        DEFAULT_ROLE,
    },
    repository::{users::NewUser, Repository},
};

const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Create an account with the default role
    pub async fn register(&self, data: &RegisterUserPayload) -> AppResult<UserProfile> {
        let email = data.email.trim().to_lowercase();
        if self.repository.users.get_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict("User with this email already exists".to_string()));
        }

        let new_user = NewUser {
            first_name: data.first_name.trim().to_string(),
            last_name: data.last_name.trim().to_string(),
            name: User::full_name(&data.first_name, &data.last_name),
            email,
            password_hash: hash_password(&data.password)?,
            role: DEFAULT_ROLE.to_string(),
        };

        let user = self.repository.users.create(&new_user).await?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(user.into())
    }

    /// Check credentials and issue a session token
    pub async fn login(&self, data: &LoginUserPayload) -> AppResult<LoginResponse> {
        let user = self
            .repository
            .users
            .get_by_email(data.email.trim())
            .await?
            .ok_or_else(|| AppError::Authentication(INVALID_CREDENTIALS.to_string()))?;

        if !verify_password(&user.password, &data.password)? {
            tracing::debug!(user_id = user.id, "Rejected login with a wrong password");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.create_token(&user)?;
        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.config.jwt_expiration_hours as i64 * 3600,
        })
    }

    fn create_token(&self, user: &User) -> AppResult<String> {
        UserClaims::new(user, self.config.jwt_expiration_hours)
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Decode and check a session token
    pub fn verify_token(&self, token: &str) -> AppResult<UserClaims> {
        UserClaims::from_token(token, &self.config.jwt_secret)
            .map_err(|_| AppError::Authorization("Invalid or expired token".to_string()))
    }

    pub async fn profile(&self, user_id: i32) -> AppResult<UserProfile> {
        Ok(self.repository.users.get_by_id(user_id).await?.into())
    }

    pub async fn lookup(&self) -> AppResult<Vec<UserShort>> {
        self.repository.users.lookup().await
    }
}

/// Hash a password using Argon2
pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
    Ok(hash.to_string())
}

pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
