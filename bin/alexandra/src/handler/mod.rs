mod discovery;
mod power_controller;
mod report_state;

pub use discovery::prepare_discovery_response;
pub use power_controller::prepare_power_controller_response;
pub use report_state::prepare_state_report;

use std::str::FromStr;

use alexa::{Connectivity, DirectiveHeader, DirectiveRequest, Namespace, PowerState, Property};
use alexa::Response;

use chrono::Utc;
use log::debug;
use serde::{de::value, de::IntoDeserializer, Deserialize, Serialize};

use crate::{Catalog, Error, PowerStateCell, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Discovery,
    PowerController,
    ReportState,
}

/// Operations accepted under the bare `Alexa` namespace.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Eq)]
enum AlexaOperation {
    ReportState,
}

impl FromStr for AlexaOperation {
    type Err = value::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}

impl Route {
    pub fn from_header(header: &DirectiveHeader) -> Result<Route> {
        let namespace = Namespace::from_str(&header.namespace)
            .map_err(|_| Error::UnsupportedNamespace(header.namespace.clone()))?;

        match namespace {
            Namespace::Discovery => Ok(Route::Discovery),
            Namespace::PowerController => Ok(Route::PowerController),
            Namespace::Alexa => match AlexaOperation::from_str(&header.name) {
                Ok(AlexaOperation::ReportState) => Ok(Route::ReportState),
                Err(_) => Err(Error::UnsupportedOperation(header.name.clone())),
            },
            Namespace::EndpointHealth => {
                Err(Error::UnsupportedNamespace(header.namespace.clone()))
            }
        }
    }
}

/// Routes a directive to its response builder.
///
/// Power control directives toggle the switch regardless of their name:
/// `TurnOn` and `TurnOff` behave the same way.
pub fn handle_directive(
    request: DirectiveRequest,
    catalog: &Catalog,
    power: &mut PowerStateCell,
) -> Result<Response> {
    debug!("directive request: {}", to_json(&request));

    let directive = request.directive;
    let route = Route::from_header(&directive.header)?;

    let response = match route {
        Route::Discovery => prepare_discovery_response(catalog),
        Route::PowerController => prepare_power_controller_response(
            directive.endpoint,
            directive.header.correlation_token,
            power,
        ),
        Route::ReportState => prepare_state_report(
            directive.endpoint,
            directive.header.correlation_token,
            power,
        ),
    };

    debug!("{route:?} response: {}", to_json(&response));

    Ok(response)
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unserializable: {err}>"))
}

fn current_properties(power_state: PowerState) -> Vec<Property> {
    vec![
        Property::connectivity(Connectivity::Ok, Utc::now()),
        Property::power_state(power_state, Utc::now()),
    ]
}
