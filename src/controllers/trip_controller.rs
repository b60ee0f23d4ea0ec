use sqlx::PgPool;

use crate::dto::trip_dto::{
    AcceptTripRequest, AssignDriverRequest, CompleteTripRequest, CompleteTripResponse,
    CreateTripRequest, CreateTripResponse, TripStatusResponse, UpdateFieldRequest,
};
use crate::models::trip::{patchable_column, Trip};
use crate::repositories::trip_repository::TripRepository;
use crate::utils::errors::AppError;

pub struct TripController {
    repository: TripRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTripRequest) -> Result<CreateTripResponse, AppError> {
        let trip_id = self.repository.create(&request).await?;

        Ok(CreateTripResponse {
            message: "Trip stored successfully".to_string(),
            trip_id,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Trip, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Trip not found".to_string()))
    }

    pub async fn list(&self) -> Result<Vec<Trip>, AppError> {
        self.repository.list_all().await
    }

    /// Accept-intent: agrega al conductor al conjunto de interesados y pasa
    /// el viaje a accept. No excluye a otros conductores de aceptar después.
    pub async fn accept(&self, id: i64, request: AcceptTripRequest) -> Result<(), AppError> {
        let Some(driver_email) = request.driver_email else {
            return Err(AppError::ValidationError(
                "driverEmail is required".to_string(),
            ));
        };

        self.repository.accept_intent(id, &driver_email).await
    }

    /// Asignación administrativa: transición privilegiada que liga un solo
    /// conductor. No consulta ni limpia accepted_drivers.
    pub async fn assign_driver(&self, request: AssignDriverRequest) -> Result<(), AppError> {
        let (Some(trip_id), Some(driver_email)) = (request.trip_id, request.driver_email) else {
            return Err(AppError::ValidationError(
                "tripId and driverEmail are required".to_string(),
            ));
        };

        self.repository.assign_driver(trip_id, &driver_email).await
    }

    pub async fn start(&self, id: i64) -> Result<(), AppError> {
        self.repository.start(id).await
    }

    /// Completar viaje: valida presencia de los medidores y del total final
    /// antes de tocar la fila; la transición a completed es incondicional
    /// respecto del estado previo.
    pub async fn complete(
        &self,
        id: i64,
        request: CompleteTripRequest,
    ) -> Result<CompleteTripResponse, AppError> {
        if request.start_meter.is_none()
            || request.end_meter.is_none()
            || request.final_bill.is_none()
        {
            return Err(AppError::ValidationError(
                "Required fields are missing".to_string(),
            ));
        }

        self.repository.complete(id, &request).await?;

        Ok(CompleteTripResponse {
            message: "Trip marked as completed successfully".to_string(),
            trip_id: id,
            final_bill: request.final_bill.unwrap_or_default(),
        })
    }

    pub async fn update_field(&self, request: UpdateFieldRequest) -> Result<(), AppError> {
        let (Some(trip_id), Some(field)) = (request.trip_id, request.field) else {
            return Err(AppError::ValidationError(
                "Missing tripId or field".to_string(),
            ));
        };

        let Some(column) = patchable_column(&field) else {
            return Err(AppError::ValidationError("Invalid field name".to_string()));
        };

        self.repository
            .update_field(trip_id, column, request.value)
            .await
    }

    pub async fn accepted_by_driver(&self, email: &str) -> Result<Vec<Trip>, AppError> {
        self.repository.find_accepted_by_driver(email).await
    }

    pub async fn wip_by_driver(&self, email: &str) -> Result<Vec<Trip>, AppError> {
        self.repository.find_wip_by_driver(email).await
    }

    /// Vista combinada para la app del conductor: sus viajes en accept y
    /// en WIP en una sola respuesta.
    pub async fn status_by_driver(&self, email: &str) -> Result<TripStatusResponse, AppError> {
        let accepted_trips = self.repository.find_accepted_by_driver(email).await?;
        let wip_trips = self.repository.find_wip_by_driver(email).await?;

        Ok(TripStatusResponse {
            accepted_trips,
            wip_trips,
        })
    }
}
