use alexa::{EndpointReference, EventName, Namespace, Payload, Response};

use super::current_properties;
use crate::PowerStateCell;

pub fn prepare_state_report(
    endpoint: Option<EndpointReference>,
    correlation_token: Option<String>,
    power: &PowerStateCell,
) -> Response {
    Response::new(Namespace::Alexa, EventName::StateReport, Payload::Empty {})
        .with_endpoint(endpoint)
        .with_correlation_token(correlation_token)
        .with_context(current_properties(power.read()))
}
