use tracing::{debug, info};

use crate::db::{queries, DbPool};
use crate::error::RideError;
use crate::models::{NewRide, Ride};
use crate::validation::Pagination;

/// Maps rides to and from the `Rides` table. Every value reaches the
/// database through parameter binding.
#[derive(Debug, Clone)]
pub struct RideRepository {
    pool: DbPool,
}

impl RideRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Inserts `ride` and reads the stored row back by its assigned id.
    pub async fn create(&self, ride: &NewRide) -> Result<Ride, RideError> {
        let result = sqlx::query(queries::INSERT_RIDE)
            .bind(ride.start_lat)
            .bind(ride.start_long)
            .bind(ride.end_lat)
            .bind(ride.end_long)
            .bind(&ride.rider_name)
            .bind(&ride.driver_name)
            .bind(&ride.driver_vehicle)
            .execute(&self.pool)
            .await
            .map_err(RideError::storage("insert ride"))?;

        let ride_id = result.last_insert_rowid();
        info!(ride_id, "Inserted ride");

        sqlx::query_as::<_, Ride>(queries::SELECT_RIDE_BY_ID)
            .bind(ride_id)
            .fetch_one(&self.pool)
            .await
            .map_err(RideError::storage("read back inserted ride"))
    }

    /// All rides, or the window described by `pagination`.
    pub async fn list(&self, pagination: Option<Pagination>) -> Result<Vec<Ride>, RideError> {
        let rides = match pagination {
            None => {
                sqlx::query_as::<_, Ride>(queries::SELECT_ALL_RIDES)
                    .fetch_all(&self.pool)
                    .await
            }
            Some(p) => {
                sqlx::query_as::<_, Ride>(queries::SELECT_RIDES_PAGE)
                    .bind(p.limit)
                    .bind(p.offset)
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(RideError::storage("list rides"))?;

        debug!(count = rides.len(), ?pagination, "Listed rides");
        Ok(rides)
    }

    /// Rows matching `ride_id`; empty when there is no such ride.
    pub async fn get_by_id(&self, ride_id: i64) -> Result<Vec<Ride>, RideError> {
        sqlx::query_as::<_, Ride>(queries::SELECT_RIDE_BY_ID)
            .bind(ride_id)
            .fetch_all(&self.pool)
            .await
            .map_err(RideError::storage("get ride by id"))
    }

    pub async fn count(&self) -> Result<i64, RideError> {
        sqlx::query_scalar::<_, i64>(queries::COUNT_RIDES)
            .fetch_one(&self.pool)
            .await
            .map_err(RideError::storage("count rides"))
    }
}
