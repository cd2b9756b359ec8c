mod property;

pub use property::{Connectivity, Property};

use serde::Serialize;
use uuid::Uuid;

use crate::{Endpoint, EndpointReference, Namespace};

pub const PAYLOAD_VERSION: &str = "3";

#[derive(Debug, Serialize)]
pub struct Response {
    pub event: Event,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
}

impl Response {
    pub fn new(namespace: Namespace, name: EventName, payload: Payload) -> Response {
        Response {
            event: Event {
                header: Header::new(namespace, name),
                endpoint: None,
                payload,
            },
            context: None,
        }
    }

    pub fn with_endpoint(self, endpoint: Option<EndpointReference>) -> Response {
        let mut value = self;
        value.event.endpoint = endpoint;
        value
    }

    pub fn with_correlation_token(self, correlation_token: Option<String>) -> Response {
        let mut value = self;
        value.event.header.correlation_token = correlation_token;
        value
    }

    pub fn with_context(self, properties: Vec<Property>) -> Response {
        let mut value = self;
        value.context = Some(Context { properties });
        value
    }
}

#[derive(Debug, Serialize)]
pub struct Event {
    pub header: Header,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointReference>,

    pub payload: Payload,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub message_id: Uuid,
    pub name: EventName,
    pub namespace: Namespace,
    pub payload_version: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
}

impl Header {
    pub fn new(namespace: Namespace, name: EventName) -> Header {
        Header {
            message_id: Uuid::new_v4(),
            name,
            namespace,
            payload_version: PAYLOAD_VERSION,
            correlation_token: None,
        }
    }
}

#[derive(Copy, Clone, Debug, Serialize, PartialEq, Eq)]
pub enum EventName {
    #[serde(rename = "Discover.Response")]
    DiscoverResponse,
    StateReport,
    Response,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Payload {
    Discovery { endpoints: Vec<Endpoint> },
    Empty {},
}

#[derive(Debug, Serialize)]
pub struct Context {
    pub properties: Vec<Property>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PowerState;

    use chrono::{TimeZone, Utc};
    use serde_json::{json, to_value, Map};

    #[test]
    fn test_event_names() {
        assert_eq!(
            to_value(EventName::DiscoverResponse).unwrap(),
            json!("Discover.Response")
        );
        assert_eq!(to_value(EventName::StateReport).unwrap(), json!("StateReport"));
        assert_eq!(to_value(EventName::Response).unwrap(), json!("Response"));
    }

    #[test]
    fn test_empty_payload() {
        assert_eq!(to_value(Payload::Empty {}).unwrap(), json!({}));
    }

    #[test]
    fn test_discovery_response() {
        let response = Response::new(
            Namespace::Discovery,
            EventName::DiscoverResponse,
            Payload::Discovery { endpoints: vec![] },
        );
        let message_id = response.event.header.message_id.to_string();

        assert_eq!(
            to_value(&response).unwrap(),
            json!({
                "event": {
                    "header": {
                        "messageId": message_id,
                        "name": "Discover.Response",
                        "namespace": "Alexa.Discovery",
                        "payloadVersion": "3"
                    },
                    "payload": {"endpoints": []}
                }
            })
        );
    }

    #[test]
    fn test_response_with_endpoint_and_context() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 15).unwrap();
        let endpoint = EndpointReference {
            endpoint_id: "radio-pulse-edm".to_string(),
            extra: Map::new(),
        };

        let response = Response::new(Namespace::Alexa, EventName::Response, Payload::Empty {})
            .with_endpoint(Some(endpoint))
            .with_context(vec![
                Property::connectivity(Connectivity::Ok, time),
                Property::power_state(PowerState::On, time),
            ]);
        let message_id = response.event.header.message_id.to_string();

        assert_eq!(
            to_value(&response).unwrap(),
            json!({
                "event": {
                    "header": {
                        "messageId": message_id,
                        "name": "Response",
                        "namespace": "Alexa",
                        "payloadVersion": "3"
                    },
                    "endpoint": {"endpointId": "radio-pulse-edm"},
                    "payload": {}
                },
                "context": {
                    "properties": [
                        {
                            "namespace": "Alexa.EndpointHealth",
                            "name": "connectivity",
                            "value": {"value": "OK"},
                            "timeOfSample": "2024-03-01T12:30:15.000Z",
                            "uncertaintyInMilliseconds": 200
                        },
                        {
                            "namespace": "Alexa.PowerController",
                            "name": "powerState",
                            "value": "ON",
                            "timeOfSample": "2024-03-01T12:30:15.000Z",
                            "uncertaintyInMilliseconds": 500
                        }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_correlation_token() {
        let response = Response::new(Namespace::Alexa, EventName::Response, Payload::Empty {})
            .with_correlation_token(Some("dFMb0z+PgpgdDmluhJ1LddFvSqZ".to_string()));

        assert_eq!(
            to_value(&response).unwrap()["event"]["header"]["correlationToken"],
            json!("dFMb0z+PgpgdDmluhJ1LddFvSqZ")
        );

        let response = response.with_correlation_token(None);
        assert!(to_value(&response).unwrap()["event"]["header"]
            .get("correlationToken")
            .is_none());
    }

    #[test]
    fn test_message_ids_are_fresh() {
        let first = Header::new(Namespace::Alexa, EventName::StateReport);
        let second = Header::new(Namespace::Alexa, EventName::StateReport);

        assert_ne!(first.message_id, second.message_id);
    }
}
