use chrono::Utc;
use sqlx::PgPool;

use crate::dto::trip_dto::{CompleteTripRequest, CreateTripRequest};
use crate::models::trip::{
    parse_accepted_drivers, push_accepted_driver, serialize_accepted_drivers, status, Trip,
};
use crate::utils::errors::{db_error, AppError};

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, trip: &CreateTripRequest) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO trips (
                pickup_location, drop_location, trip_type, car, pickup_date,
                pickup_time, days, km_price, km, betta, phone, state,
                customer_name, customer_remark, adult, child, luggage,
                customer_current_location, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20)
            RETURNING id
            "#,
        )
        .bind(&trip.pickup_location)
        .bind(&trip.drop_location)
        .bind(&trip.trip_type)
        .bind(&trip.car)
        .bind(&trip.pickup_date)
        .bind(&trip.pickup_time)
        .bind(trip.days.unwrap_or(0))
        .bind(trip.km_price.unwrap_or(0.0))
        .bind(trip.km.unwrap_or(0.0))
        .bind(trip.betta.unwrap_or(0.0))
        .bind(&trip.phone)
        .bind(&trip.state)
        .bind(&trip.customer_name)
        .bind(&trip.customer_remark)
        .bind(trip.adult.unwrap_or(0))
        .bind(trip.child.unwrap_or(0))
        .bind(trip.luggage.unwrap_or(0.0))
        .bind(&trip.customer_current_location)
        .bind(status::CREATED)
        .bind(trip.created_at.unwrap_or_else(Utc::now))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Inserting trip", e))?;

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Fetching trip", e))?;

        Ok(trip)
    }

    pub async fn list_all(&self) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>("SELECT * FROM trips")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Fetching trips", e))?;

        Ok(trips)
    }

    /// Accept-intent: lee el conjunto accepted_drivers, agrega el email si
    /// falta y lo escribe de vuelta junto con status = accept.
    ///
    /// El read-modify-write corre en una transacción con lock de fila para
    /// que dos aceptes concurrentes sobre el mismo viaje no se pisen.
    pub async fn accept_intent(&self, id: i64, driver_email: &str) -> Result<(), AppError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Accepting trip", e))?;

        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT accepted_drivers FROM trips WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| db_error("Fetching acceptedDrivers", e))?;

        let Some((raw,)) = row else {
            return Err(AppError::NotFound("Trip not found".to_string()));
        };

        let mut accepted = parse_accepted_drivers(raw.as_deref());
        push_accepted_driver(&mut accepted, driver_email);

        sqlx::query("UPDATE trips SET accepted_drivers = $1, status = $2 WHERE id = $3")
            .bind(serialize_accepted_drivers(&accepted))
            .bind(status::ACCEPT)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Updating acceptedDrivers", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Accepting trip", e))?;

        Ok(())
    }

    /// Asignación administrativa: pisa driver_email y estampa assigned_at.
    /// No toca accepted_drivers.
    pub async fn assign_driver(&self, id: i64, driver_email: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE trips
            SET driver_email = $1, status = $2, assigned_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(driver_email)
        .bind(status::ACCEPT)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Assigning driver", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        Ok(())
    }

    pub async fn start(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE trips SET status = $1 WHERE id = $2")
            .bind(status::WIP)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Starting trip", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Trip not found".to_string()));
        }

        Ok(())
    }

    pub async fn complete(&self, id: i64, data: &CompleteTripRequest) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE trips SET
                start_meter = $1,
                end_meter = $2,
                luggage = $3,
                pet = $4,
                toll = $5,
                hills = $6,
                total_km = $7,
                final_km = $8,
                final_bill = $9,
                status = $10,
                created_at = NOW()
            WHERE id = $11
            "#,
        )
        .bind(data.start_meter)
        .bind(data.end_meter)
        .bind(data.luggage.unwrap_or(0.0))
        .bind(data.pet.unwrap_or(0.0))
        .bind(data.toll.unwrap_or(0.0))
        .bind(data.hills.unwrap_or(0.0))
        .bind(data.total_km.unwrap_or(0.0))
        .bind(data.final_km.unwrap_or(0.0))
        .bind(data.final_bill)
        .bind(status::COMPLETED)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Completing trip", e))?;

        Ok(())
    }

    /// Parche de un solo campo. `column` ya viene resuelto contra el
    /// allow-list del modelo, nunca del input del cliente.
    pub async fn update_field(
        &self,
        id: i64,
        column: &'static str,
        value: Option<f64>,
    ) -> Result<(), AppError> {
        let query = format!("UPDATE trips SET {} = $1 WHERE id = $2", column);

        sqlx::query(&query)
            .bind(value)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("Updating trip field", e))?;

        Ok(())
    }

    /// Viajes en accept donde el email es miembro del conjunto
    /// accepted_drivers parseado. El filtro corre sobre el set parseado,
    /// no por substring sobre la columna.
    pub async fn find_accepted_by_driver(&self, email: &str) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>("SELECT * FROM trips WHERE status = $1")
            .bind(status::ACCEPT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Fetching accepted trips", e))?;

        Ok(trips
            .into_iter()
            .filter(|t| t.has_accepted_driver(email))
            .collect())
    }

    /// Viajes en WIP del conductor. driver_email se compara por igualdad
    /// exacta.
    pub async fn find_wip_by_driver(&self, email: &str) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            "SELECT * FROM trips WHERE status = $1 AND driver_email = $2",
        )
        .bind(status::WIP)
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Fetching WIP trips", e))?;

        Ok(trips)
    }
}
