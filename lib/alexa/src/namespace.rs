use std::fmt;

use serde::{de::value, de::IntoDeserializer, Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq, Hash)]
pub enum Namespace {
    #[serde(rename = "Alexa")]
    Alexa,
    #[serde(rename = "Alexa.Discovery")]
    Discovery,
    #[serde(rename = "Alexa.EndpointHealth")]
    EndpointHealth,
    #[serde(rename = "Alexa.PowerController")]
    PowerController,
}

impl std::str::FromStr for Namespace {
    type Err = value::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::deserialize(s.into_deserializer())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.serialize(f)
    }
}
