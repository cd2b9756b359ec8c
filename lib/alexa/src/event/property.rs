use chrono::{DateTime, SecondsFormat, Utc};
use serde::ser::SerializeStruct;
use serde::Serialize;

use crate::{Namespace, PowerState, PropertyName};

#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Connectivity {
        value: Connectivity,
        time_of_sample: DateTime<Utc>,
    },
    PowerState {
        value: PowerState,
        time_of_sample: DateTime<Utc>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Connectivity {
    Ok,
}

impl Property {
    pub fn connectivity(value: Connectivity, time_of_sample: DateTime<Utc>) -> Property {
        Property::Connectivity {
            value,
            time_of_sample,
        }
    }

    pub fn power_state(value: PowerState, time_of_sample: DateTime<Utc>) -> Property {
        Property::PowerState {
            value,
            time_of_sample,
        }
    }

    pub fn namespace(&self) -> Namespace {
        match self {
            Property::Connectivity { .. } => Namespace::EndpointHealth,
            Property::PowerState { .. } => Namespace::PowerController,
        }
    }

    pub fn name(&self) -> PropertyName {
        match self {
            Property::Connectivity { .. } => PropertyName::Connectivity,
            Property::PowerState { .. } => PropertyName::PowerState,
        }
    }

    pub fn uncertainty_in_milliseconds(&self) -> u32 {
        match self {
            Property::Connectivity { .. } => 200,
            Property::PowerState { .. } => 500,
        }
    }

    pub fn time_of_sample(&self) -> DateTime<Utc> {
        match self {
            Property::Connectivity { time_of_sample, .. }
            | Property::PowerState { time_of_sample, .. } => *time_of_sample,
        }
    }
}

impl serde::ser::Serialize for Connectivity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut connectivity = serializer.serialize_struct("Connectivity", 1)?;

        match self {
            Connectivity::Ok => connectivity.serialize_field("value", "OK")?,
        }

        connectivity.end()
    }
}

impl serde::ser::Serialize for Property {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut property = serializer.serialize_struct("Property", 5)?;
        property.serialize_field("namespace", &self.namespace())?;
        property.serialize_field("name", &self.name())?;

        match self {
            Property::Connectivity { value, .. } => property.serialize_field("value", value)?,
            Property::PowerState { value, .. } => property.serialize_field("value", value)?,
        }

        property.serialize_field(
            "timeOfSample",
            &self
                .time_of_sample()
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        property.serialize_field(
            "uncertaintyInMilliseconds",
            &self.uncertainty_in_milliseconds(),
        )?;

        property.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::TimeZone;
    use serde_json::{json, to_value};

    #[test]
    fn test_properties() {
        let time = Utc.with_ymd_and_hms(2019, 2, 1, 8, 0, 1).unwrap()
            + chrono::Duration::milliseconds(250);

        assert_eq!(
            to_value(Property::connectivity(Connectivity::Ok, time)).unwrap(),
            json!({
                "namespace": "Alexa.EndpointHealth",
                "name": "connectivity",
                "value": {"value": "OK"},
                "timeOfSample": "2019-02-01T08:00:01.250Z",
                "uncertaintyInMilliseconds": 200
            })
        );

        assert_eq!(
            to_value(Property::power_state(PowerState::Off, time)).unwrap(),
            json!({
                "namespace": "Alexa.PowerController",
                "name": "powerState",
                "value": "OFF",
                "timeOfSample": "2019-02-01T08:00:01.250Z",
                "uncertaintyInMilliseconds": 500
            })
        );
    }
}
