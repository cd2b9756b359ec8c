mod directive;
mod pong;

use std::sync::Arc;

use axum::body::Body;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{head, post};
use axum::Router;
use log::error;
use tokio::sync::Mutex;

use crate::{Catalog, Error, PowerStateCell};

/// Shared by every request. The power state sits behind a mutex held for the
/// whole dispatch, so concurrent power directives toggle one after another.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    power: Arc<Mutex<PowerStateCell>>,
}

pub struct ServiceError(Error, uuid::Uuid);

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response<Body> {
        error!("ServiceError[{}]: {}", self.1, self.0);

        let status = if self.0.is_unsupported_directive() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status, self.0.to_string()).into_response()
    }
}

impl From<Error> for ServiceError {
    fn from(value: Error) -> Self {
        ServiceError(value, uuid::Uuid::new_v4())
    }
}

pub fn router(catalog: Catalog, power: PowerStateCell) -> Router {
    let state = AppState {
        catalog: Arc::new(catalog),
        power: Arc::new(Mutex::new(power)),
    };

    Router::new()
        .route("/", head(pong::pong).get(pong::pong))
        .route("/directive", post(directive::directive))
        .with_state(state)
}
