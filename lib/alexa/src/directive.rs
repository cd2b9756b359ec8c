use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
    pub directive: Directive,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Directive {
    pub header: Header,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointReference>,

    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub namespace: String,
    pub name: String,

    #[serde(default)]
    pub message_id: String,

    #[serde(default)]
    pub payload_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correlation_token: Option<String>,
}

/// Endpoint a directive is addressed to. Everything beyond `endpointId`
/// (scope, cookie, ...) is kept as is so responses can echo it back.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EndpointReference {
    pub endpoint_id: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_value, json, to_value};

    #[test]
    fn test_request_parsing() {
        let json = json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.PowerController",
                    "name": "TurnOn",
                    "messageId": "1bd5d003-31b9-476f-ad03-71d471922820",
                    "correlationToken": "dFMb0z+PgpgdDmluhJ1LddFvSqZ/jCc8ptlAKulUj90jSqg==",
                    "payloadVersion": "3"
                },
                "endpoint": {
                    "scope": {
                        "type": "BearerToken",
                        "token": "access-token-from-skill"
                    },
                    "endpointId": "radio-pulse-edm",
                    "cookie": {}
                },
                "payload": {}
            }
        });

        let directive = from_value::<Request>(json).unwrap().directive;

        assert_eq!(directive.header.namespace, "Alexa.PowerController");
        assert_eq!(directive.header.name, "TurnOn");
        assert_eq!(directive.header.payload_version, "3");
        assert!(directive.header.correlation_token.is_some());

        let endpoint = directive.endpoint.unwrap();
        assert_eq!(endpoint.endpoint_id, "radio-pulse-edm");
        assert_eq!(endpoint.extra.len(), 2);
        assert_eq!(endpoint.extra["scope"]["type"], json!("BearerToken"));
    }

    #[test]
    fn test_discovery_request_without_endpoint() {
        let json = json!({
            "directive": {
                "header": {
                    "namespace": "Alexa.Discovery",
                    "name": "Discover",
                    "messageId": "6d6d6e14-8aee-473e-8c24-0d31ff9c17a2",
                    "payloadVersion": "3"
                },
                "payload": {
                    "scope": {"type": "BearerToken", "token": "access-token-from-skill"}
                }
            }
        });

        let directive = from_value::<Request>(json).unwrap().directive;

        assert_eq!(directive.header.namespace, "Alexa.Discovery");
        assert_eq!(directive.endpoint, None);
        assert_eq!(directive.header.correlation_token, None);
    }

    #[test]
    fn test_endpoint_reference_is_echoed_verbatim() {
        let json = json!({
            "endpointId": "radio-pulse-edm",
            "scope": {"type": "BearerToken", "token": "abc"},
            "cookie": {"key": "value"}
        });

        let endpoint = from_value::<EndpointReference>(json.clone()).unwrap();

        assert_eq!(to_value(&endpoint).unwrap(), json);
    }
}
