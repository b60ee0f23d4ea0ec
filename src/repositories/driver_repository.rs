use sqlx::PgPool;

use crate::models::driver::{updatable_column, Driver, DriverSummary, NewDriver};
use crate::utils::errors::{db_error, AppError};

pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, driver: &NewDriver) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO drivers (
                name, email, phone_number, password, rc_number, fc_date,
                insurance_number, insurance_expiry_date, driving_license,
                driving_license_expiry_date, aadhar_number
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id
            "#,
        )
        .bind(&driver.name)
        .bind(&driver.email)
        .bind(&driver.phone_number)
        .bind(&driver.password)
        .bind(&driver.rc_number)
        .bind(&driver.fc_date)
        .bind(&driver.insurance_number)
        .bind(&driver.insurance_expiry_date)
        .bind(&driver.driving_license)
        .bind(&driver.driving_license_expiry_date)
        .bind(&driver.aadhar_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Driver registration", e))?;

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Fetching driver", e))?;

        Ok(driver)
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Login", e))?;

        Ok(driver)
    }

    /// Cuatro chequeos de existencia independientes en una sola consulta.
    /// Cada booleano indica si ALGÚN conductor ya usa ese valor, no
    /// necesariamente el mismo conductor en los cuatro.
    pub async fn check_exists(
        &self,
        email: Option<&str>,
        phone_number: Option<&str>,
        rc_number: Option<&str>,
        insurance_number: Option<&str>,
    ) -> Result<(bool, bool, bool, bool), AppError> {
        let result: (bool, bool, bool, bool) = sqlx::query_as(
            r#"
            SELECT
                EXISTS(SELECT 1 FROM drivers WHERE email = $1),
                EXISTS(SELECT 1 FROM drivers WHERE phone_number = $2),
                EXISTS(SELECT 1 FROM drivers WHERE rc_number = $3),
                EXISTS(SELECT 1 FROM drivers WHERE insurance_number = $4)
            "#,
        )
        .bind(email)
        .bind(phone_number)
        .bind(rc_number)
        .bind(insurance_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Checking driver existence", e))?;

        Ok(result)
    }

    pub async fn status_by_email(&self, email: &str) -> Result<Option<Option<String>>, AppError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT status FROM drivers WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| db_error("Fetching driver status", e))?;

        Ok(row.map(|(status,)| status))
    }

    /// Update parcial: escribe tal cual cualquier columna que mande el
    /// cliente. El nombre de columna se resuelve contra el mapa fijo del
    /// modelo; el valor se bindea siempre como parámetro.
    pub async fn update_partial(
        &self,
        id: i64,
        fields: &serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), AppError> {
        let mut updates: Vec<(&'static str, Option<String>)> = Vec::new();

        for (field, value) in fields {
            let Some(column) = updatable_column(field) else {
                return Err(AppError::ValidationError(format!(
                    "Unknown field: {}",
                    field
                )));
            };

            let text = match value {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            };

            updates.push((column, text));
        }

        if updates.is_empty() {
            return Err(AppError::ValidationError(
                "No fields to update".to_string(),
            ));
        }

        let mut builder = sqlx::QueryBuilder::<sqlx::Postgres>::new("UPDATE drivers SET ");
        let mut separated = builder.separated(", ");

        for (column, value) in updates {
            separated.push(format!("{} = ", column));
            separated.push_bind_unseparated(value);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id);

        builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Updating driver", e))?;

        Ok(())
    }

    pub async fn list_summaries(&self) -> Result<Vec<DriverSummary>, AppError> {
        let drivers = sqlx::query_as::<_, DriverSummary>("SELECT email, name FROM drivers")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Fetching drivers", e))?;

        Ok(drivers)
    }

    pub async fn list_all(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>("SELECT * FROM drivers")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Fetching drivers", e))?;

        Ok(drivers)
    }
}
