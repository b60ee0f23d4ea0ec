use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::dto::driver_dto::{
    CheckExistsRequest, CheckExistsResponse, DriverStatusResponse, RegisterDriverRequest,
    RegisterDriverResponse,
};
use crate::models::driver::{Driver, DriverSummary, NewDriver};
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::AppError;
use crate::utils::jwt::generate_token;
use crate::utils::validation::validate_required;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    /// Registro de conductor. Chequea solo presencia de los requeridos;
    /// la unicidad es el pre-chequeo aparte de check_exists (la carrera
    /// entre ambos es una brecha documentada del diseño, no se cierra acá).
    pub async fn register(
        &self,
        request: RegisterDriverRequest,
    ) -> Result<RegisterDriverResponse, AppError> {
        let required = [
            request.name.as_ref(),
            request.email.as_ref(),
            request.phone_number.as_ref(),
            request.password.as_ref(),
        ];

        if required.iter().any(|f| validate_required(*f).is_err()) {
            return Err(AppError::ValidationError(
                "Required fields are missing".to_string(),
            ));
        }

        let password_hash = hash(request.password.as_deref().unwrap_or_default(), DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Error hashing password: {}", e)))?;

        let driver = NewDriver {
            name: request.name.unwrap_or_default(),
            email: request.email.unwrap_or_default(),
            phone_number: request.phone_number.unwrap_or_default(),
            password: password_hash,
            rc_number: request.rc_number,
            fc_date: request.fc_date,
            insurance_number: request.insurance_number,
            insurance_expiry_date: request.insurance_expiry_date,
            driving_license: request.driving_license,
            driving_license_expiry_date: request.driving_license_expiry_date,
            aadhar_number: request.aadhar_number,
        };

        let driver_id = self.repository.create(&driver).await?;

        Ok(RegisterDriverResponse {
            message: "Driver registered successfully".to_string(),
            driver_id,
        })
    }

    pub async fn check_exists(
        &self,
        request: CheckExistsRequest,
    ) -> Result<CheckExistsResponse, AppError> {
        let (email, phone_number, rc_number, insurance_number) = self
            .repository
            .check_exists(
                request.email.as_deref(),
                request.phone_number.as_deref(),
                request.rc_number.as_deref(),
                request.insurance_number.as_deref(),
            )
            .await?;

        Ok(CheckExistsResponse {
            email,
            phone_number,
            rc_number,
            insurance_number,
        })
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_secret: &str,
    ) -> Result<LoginResponse, AppError> {
        // Email o password ausentes se responden igual que credenciales malas
        let (Some(email), Some(password)) = (request.email, request.password) else {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        };

        let driver = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid email or password".to_string()))?;

        let valid = verify(&password, &driver.password)
            .map_err(|e| AppError::Internal(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized(
                "Invalid email or password".to_string(),
            ));
        }

        let token = generate_token(driver.id, &driver.email, jwt_secret)?;

        Ok(LoginResponse {
            token,
            user: driver,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Driver, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))
    }

    pub async fn update(
        &self,
        id: i64,
        fields: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), AppError> {
        self.repository.update_partial(id, &fields).await
    }

    pub async fn status_by_email(&self, email: &str) -> Result<DriverStatusResponse, AppError> {
        let status = self
            .repository
            .status_by_email(email)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;

        Ok(DriverStatusResponse { status })
    }

    pub async fn list(&self) -> Result<Vec<DriverSummary>, AppError> {
        self.repository.list_summaries().await
    }

    pub async fn list_all(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.list_all().await
    }
}
