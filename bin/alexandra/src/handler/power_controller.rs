use alexa::{EndpointReference, EventName, Namespace, Payload, Response};
use log::info;

use super::current_properties;
use crate::PowerStateCell;

pub fn prepare_power_controller_response(
    endpoint: Option<EndpointReference>,
    correlation_token: Option<String>,
    power: &mut PowerStateCell,
) -> Response {
    let power_state = power.toggle();
    info!("power toggled {power_state}");

    Response::new(Namespace::Alexa, EventName::Response, Payload::Empty {})
        .with_endpoint(endpoint)
        .with_correlation_token(correlation_token)
        .with_context(current_properties(power_state))
}
