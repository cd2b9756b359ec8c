use alexa::{DirectiveRequest, Response};

use axum::extract::State;
use axum::Json;

use super::{AppState, ServiceError};
use crate::handle_directive;

pub async fn directive(
    State(state): State<AppState>,
    Json(request): Json<DirectiveRequest>,
) -> Result<Json<Response>, ServiceError> {
    let mut power = state.power.lock().await;
    let response = handle_directive(request, &state.catalog, &mut power)?;

    Ok(Json(response))
}
