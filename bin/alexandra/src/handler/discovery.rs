use alexa::{EventName, Namespace, Payload, Response};

use crate::Catalog;

pub fn prepare_discovery_response(catalog: &Catalog) -> Response {
    Response::new(
        Namespace::Discovery,
        EventName::DiscoverResponse,
        Payload::Discovery {
            endpoints: catalog.endpoints().to_vec(),
        },
    )
}
