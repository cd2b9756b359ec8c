mod directive;
mod endpoint;
mod event;
mod namespace;
mod power_state;

pub use directive::{
    Directive, EndpointReference, Header as DirectiveHeader, Request as DirectiveRequest,
};

pub use endpoint::{Capability, CapabilityType, DisplayCategory, Endpoint, Interface};
pub use endpoint::{Properties as CapabilityProperties, PropertyName, SupportedProperty};

pub use event::{
    Connectivity, Context, Event, EventName, Header as EventHeader, Payload, Property,
    Response, PAYLOAD_VERSION,
};

pub use namespace::Namespace;
pub use power_state::PowerState;
