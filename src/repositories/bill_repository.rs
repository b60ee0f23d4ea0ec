use chrono::Utc;
use sqlx::PgPool;

use crate::dto::bill_dto::CreateBillRequest;
use crate::models::bill::Bill;
use crate::utils::errors::{db_error, AppError};

pub struct BillRepository {
    pool: PgPool,
}

impl BillRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, bill: &CreateBillRequest) -> Result<i64, AppError> {
        let (id,): (i64,) = sqlx::query_as(
            r#"
            INSERT INTO bills (
                driver_email, customer_name, phone, pickup_location,
                drop_location, pickup_date, pickup_time, trip_type,
                start_meter, end_meter, total_km, final_km, km_price,
                total_km_price, luggage_charge, pet_charge, toll_charge,
                hills_charge, betta_charge, state_charge,
                total_entered_charges, final_bill, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                    $14, $15, $16, $17, $18, $19, $20, $21, $22, $23)
            RETURNING id
            "#,
        )
        .bind(&bill.driver_email)
        .bind(&bill.customer_name)
        .bind(&bill.phone)
        .bind(&bill.pickup_location)
        .bind(&bill.drop_location)
        .bind(&bill.pickup_date)
        .bind(&bill.pickup_time)
        .bind(&bill.trip_type)
        .bind(bill.start_meter.unwrap_or(0.0))
        .bind(bill.end_meter.unwrap_or(0.0))
        .bind(bill.total_km.unwrap_or(0.0))
        .bind(bill.final_km.unwrap_or(0.0))
        .bind(bill.km_price.unwrap_or(0.0))
        .bind(bill.total_km_price.unwrap_or(0.0))
        .bind(bill.luggage_charge.unwrap_or(0.0))
        .bind(bill.pet_charge.unwrap_or(0.0))
        .bind(bill.toll_charge.unwrap_or(0.0))
        .bind(bill.hills_charge.unwrap_or(0.0))
        .bind(bill.betta_charge.unwrap_or(0.0))
        .bind(bill.state_charge.unwrap_or(0.0))
        .bind(bill.total_entered_charges.unwrap_or(0.0))
        .bind(bill.final_bill)
        .bind(bill.created_at.unwrap_or_else(Utc::now))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| db_error("Creating bill", e))?;

        Ok(id)
    }

    pub async fn find_by_driver(&self, driver_email: &str) -> Result<Vec<Bill>, AppError> {
        let bills = sqlx::query_as::<_, Bill>(
            "SELECT * FROM bills WHERE driver_email = $1 ORDER BY created_at DESC",
        )
        .bind(driver_email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("Fetching bills", e))?;

        Ok(bills)
    }

    pub async fn list_all(&self) -> Result<Vec<Bill>, AppError> {
        let bills = sqlx::query_as::<_, Bill>("SELECT * FROM bills ORDER BY pickup_date DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Fetching bills", e))?;

        Ok(bills)
    }
}
