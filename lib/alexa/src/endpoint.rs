mod capability;

pub use capability::{
    Capability, CapabilityType, Interface, Properties, PropertyName, SupportedProperty,
};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    pub endpoint_id: String,
    pub description: String,
    pub display_categories: Vec<DisplayCategory>,
    pub friendly_name: String,
    pub manufacturer_name: String,

    #[serde(default)]
    pub cookie: Map<String, Value>,

    pub capabilities: Vec<Capability>,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DisplayCategory {
    ActivityTrigger,
    Camera,
    Computer,
    ContactSensor,
    Door,
    Doorbell,
    Fan,
    GameConsole,
    Garage,
    Light,
    MotionSensor,
    MusicSystem,
    Other,
    Printer,
    Router,
    SceneTrigger,
    Screen,
    SecurityPanel,
    #[serde(rename = "SMARTLOCK")]
    SmartLock,
    #[serde(rename = "SMARTPLUG")]
    SmartPlug,
    Speaker,
    StreamingDevice,
    Switch,
    Tablet,
    TemperatureSensor,
    Thermostat,
    #[serde(rename = "TV")]
    Tv,
    VacuumCleaner,
    WearableDevice,
}
