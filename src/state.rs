use crate::db::RideRepository;
use crate::error::{ApiError, RideError, StatusMode};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub rides: RideRepository,
    pub status_mode: StatusMode,
}

impl AppState {
    pub fn new(rides: RideRepository, status_mode: StatusMode) -> Self {
        Self { rides, status_mode }
    }

    pub fn reject(&self, err: RideError) -> ApiError {
        ApiError::from_ride_error(err, self.status_mode)
    }
}
