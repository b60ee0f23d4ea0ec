use sqlx::PgPool;

use crate::dto::bill_dto::{CreateBillRequest, CreateBillResponse};
use crate::models::bill::Bill;
use crate::repositories::bill_repository::BillRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_required;

pub struct BillController {
    repository: BillRepository,
}

impl BillController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BillRepository::new(pool),
        }
    }

    /// Guardar la factura de un viaje completado. Fila inmutable: no hay
    /// update ni delete de bills en ninguna ruta.
    pub async fn create(&self, request: CreateBillRequest) -> Result<CreateBillResponse, AppError> {
        if validate_required(request.driver_email.as_ref()).is_err()
            || validate_required(request.customer_name.as_ref()).is_err()
            || request.final_bill.is_none()
        {
            return Err(AppError::ValidationError(
                "Required fields are missing".to_string(),
            ));
        }

        let bill_id = self.repository.create(&request).await?;

        Ok(CreateBillResponse {
            message: "Bill saved successfully".to_string(),
            bill_id,
            trip_id: request.trip_id,
        })
    }

    pub async fn list_by_driver(&self, driver_email: &str) -> Result<Vec<Bill>, AppError> {
        self.repository.find_by_driver(driver_email).await
    }

    pub async fn list_all(&self) -> Result<Vec<Bill>, AppError> {
        self.repository.list_all().await
    }
}
