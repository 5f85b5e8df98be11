//! Identity Service
//!
//! 注册 / 登录 / 资料修改 / 注销。密码以 Argon2 哈希保存，
//! 每次修改密码重新哈希；注册、登录、修改资料后签发新令牌。

use std::sync::Arc;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{AuthResponse, LoginRequest, SignupRequest, UserProfile, UserUpdate};
use surrealdb::RecordId;
use validator::Validate;

use super::duplicate_as;
use crate::auth::JwtService;
use crate::auth::password::{hash_password, verify_password};
use crate::db::models::{NewUser, User, UserChanges};
use crate::db::repository::UserStore;

pub struct IdentityService<U> {
    users: U,
    jwt: Arc<JwtService>,
}

impl<U: UserStore> IdentityService<U> {
    pub fn new(users: U, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    pub async fn signup(&self, req: SignupRequest) -> AppResult<AuthResponse> {
        req.validate()?;
        let email = normalize_email(&req.email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::new(ErrorCode::EmailAlreadyExists));
        }

        let user = self
            .users
            .create(NewUser {
                name: req.name.trim().to_string(),
                email,
                password_hash: hash(&req.password)?,
                birthday: req.birthday,
                admin: false,
            })
            .await
            .map_err(duplicate_as(ErrorCode::EmailAlreadyExists))?;

        tracing::info!(user_id = %user.id, "User signed up");
        Ok(AuthResponse {
            message: format!("Thank you for signing up to Three Beans {}!", user.name),
            token: self.issue_token(&user)?,
        })
    }

    pub async fn login(&self, req: LoginRequest) -> AppResult<AuthResponse> {
        req.validate()?;
        let email = normalize_email(&req.email);

        let Some(user) = self.users.find_by_email(&email).await? else {
            crate::security_log!(WARN, "login_unknown_email", email = %email);
            return Err(AppError::new(ErrorCode::EmailNotFound));
        };

        let matches = verify_password(&req.password, &user.password).map_err(|e| {
            tracing::error!(user_id = %user.id, error = %e, "Stored password hash is malformed");
            AppError::internal("Password verification failed")
        })?;
        if !matches {
            crate::security_log!(WARN, "login_bad_password", user_id = %user.id);
            return Err(AppError::new(ErrorCode::PasswordIncorrect));
        }

        crate::security_log!(INFO, "login_success", user_id = %user.id);
        Ok(AuthResponse {
            message: "Login successful!".to_string(),
            token: self.issue_token(&user)?,
        })
    }

    /// 部分更新；修改 email 时重新查重
    pub async fn update(&self, id: &RecordId, req: UserUpdate) -> AppResult<AuthResponse> {
        req.validate()?;
        let existing = self.require_user(id).await?;

        let email = req.email.as_deref().map(normalize_email);
        if let Some(email) = &email
            && *email != existing.email
            && self.users.find_by_email(email).await?.is_some()
        {
            return Err(AppError::new(ErrorCode::EmailAlreadyExists));
        }

        let password_hash = match &req.password {
            Some(password) => Some(hash(password)?),
            None => None,
        };

        let user = self
            .users
            .update(
                id,
                UserChanges {
                    name: req.name.map(|n| n.trim().to_string()),
                    email,
                    password_hash,
                    birthday: req.birthday,
                },
            )
            .await
            .map_err(duplicate_as(ErrorCode::EmailAlreadyExists))?
            .ok_or_else(|| user_not_found(id))?;

        tracing::info!(user_id = %user.id, "User profile updated");
        Ok(AuthResponse {
            message: "Your profile has been updated.".to_string(),
            token: self.issue_token(&user)?,
        })
    }

    pub async fn delete(&self, id: &RecordId) -> AppResult<()> {
        if !self.users.delete(id).await? {
            return Err(user_not_found(id));
        }
        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    pub async fn profile(&self, id: &RecordId) -> AppResult<UserProfile> {
        Ok(self.require_user(id).await?.profile())
    }

    async fn require_user(&self, id: &RecordId) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    fn issue_token(&self, user: &User) -> AppResult<String> {
        self.jwt
            .generate_token(&user.id.to_string(), user.admin)
            .map_err(|e| AppError::internal(e.to_string()))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash(password: &str) -> AppResult<String> {
    hash_password(password).map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
}

fn user_not_found(id: &RecordId) -> AppError {
    AppError::new(ErrorCode::UserNotFound).with_detail("id", id.to_string())
}
