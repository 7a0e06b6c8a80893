use crate::entities::punter_entity as punters;
use crate::error::{AppError, AppResult};
use crate::models::{AuthResponse, LoginRequest, PunterResponse, RegisterRequest};
use crate::utils::{JwtService, hash_password, validate_password, verify_password};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

#[derive(Clone)]
pub struct AuthService {
    pool: DatabaseConnection,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(pool: DatabaseConnection, jwt_service: JwtService) -> Self {
        Self { pool, jwt_service }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<AuthResponse> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::ValidationError("Name is required".to_string()));
        }
        let email = request.email.trim().to_lowercase();
        if !email.contains('@') {
            return Err(AppError::ValidationError("Invalid email address".to_string()));
        }
        validate_password(&request.password)?;

        let existing = punters::Entity::find()
            .filter(punters::Column::Email.eq(email.clone()))
            .one(&self.pool)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = hash_password(&request.password)?;

        let punter = punters::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email),
            password_hash: Set(password_hash),
            address: Set(request.address),
            is_admin: Set(false),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Registered punter {} ({})", punter.id, punter.email);
        self.auth_response(punter)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let email = request.email.trim().to_lowercase();
        let punter = punters::Entity::find()
            .filter(punters::Column::Email.eq(email))
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Invalid email or password".to_string()))?;

        if !verify_password(&request.password, &punter.password_hash)? {
            return Err(AppError::AuthError("Invalid email or password".to_string()));
        }

        self.auth_response(punter)
    }

    pub async fn refresh(&self, refresh_token: &str) -> AppResult<AuthResponse> {
        let claims = self.jwt_service.verify_refresh_token(refresh_token)?;
        let punter_id: i64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::AuthError("Invalid token subject".to_string()))?;

        let punter = punters::Entity::find_by_id(punter_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::AuthError("Punter no longer exists".to_string()))?;

        self.auth_response(punter)
    }

    fn auth_response(&self, punter: punters::Model) -> AppResult<AuthResponse> {
        let access_token = self
            .jwt_service
            .generate_access_token(punter.id, &punter.email)?;
        let refresh_token = self
            .jwt_service
            .generate_refresh_token(punter.id, &punter.email)?;

        Ok(AuthResponse {
            punter: PunterResponse::from(punter),
            access_token,
            refresh_token,
            expires_in: self.jwt_service.get_access_token_expires_in(),
        })
    }
}
