use serde::{Deserialize, Serialize};

const INTERFACE_VERSION: &str = "3";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Capability {
    #[serde(rename = "type")]
    pub capability_type: CapabilityType,
    pub interface: Interface,
    pub version: String,
    pub properties: Properties,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq)]
pub enum CapabilityType {
    AlexaInterface,
}

/// Interfaces an endpoint may advertise. Directive-only namespaces such as
/// `Alexa.Discovery` are not capabilities.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum Interface {
    #[serde(rename = "Alexa.EndpointHealth")]
    EndpointHealth,
    #[serde(rename = "Alexa.PowerController")]
    PowerController,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Properties {
    pub supported: Vec<SupportedProperty>,
    pub proactively_reported: bool,
    pub retrievable: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct SupportedProperty {
    pub name: PropertyName,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PropertyName {
    Connectivity,
    PowerState,
}

impl Capability {
    pub fn endpoint_health() -> Capability {
        Capability::interface(Interface::EndpointHealth, PropertyName::Connectivity)
    }

    pub fn power_controller() -> Capability {
        Capability::interface(Interface::PowerController, PropertyName::PowerState)
    }

    fn interface(interface: Interface, property: PropertyName) -> Capability {
        Capability {
            capability_type: CapabilityType::AlexaInterface,
            interface,
            version: INTERFACE_VERSION.to_string(),
            properties: Properties {
                supported: vec![SupportedProperty { name: property }],
                proactively_reported: false,
                retrievable: false,
            },
        }
    }

    pub fn retrievable(self) -> Capability {
        let mut value = self;
        value.properties.retrievable = true;
        value
    }

    pub fn proactively_reported(self) -> Capability {
        let mut value = self;
        value.properties.proactively_reported = true;
        value
    }
}
