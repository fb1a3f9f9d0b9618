//! Read-only cars queries. View data: fetched per page, never mutated.

use crate::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{Car, CarType};
use crate::store::ActorKind;

/// `GET /v1/cars*` endpoints. Requests go out with the ordinary user's
/// token when one is stored; the endpoints themselves are public.
pub struct CarsApi {
    client: ApiClient,
}

impl CarsApi {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All cars.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`ApiError`].
    pub async fn list(&self) -> Result<Vec<Car>, ApiError> {
        self.client.get(ActorKind::User, "/v1/cars").await
    }

    /// One car by numeric id.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`ApiError`].
    pub async fn get(&self, id: i64) -> Result<Car, ApiError> {
        self.client.get(ActorKind::User, &format!("/v1/cars/{id}")).await
    }

    /// All cars of a category.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`ApiError`].
    pub async fn by_type(&self, car_type: CarType) -> Result<Vec<Car>, ApiError> {
        self.client
            .get(ActorKind::User, &format!("/v1/cars/type/{car_type}"))
            .await
    }

    /// One car by exact name.
    ///
    /// # Errors
    ///
    /// Propagates the transport's [`ApiError`].
    pub async fn by_name(&self, name: &str) -> Result<Car, ApiError> {
        self.client.get(ActorKind::User, &format!("/v1/cars/name/{name}")).await
    }
}
