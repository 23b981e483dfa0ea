//! Network boundary: the HTTP exchange behind the request coordinator.

mod http;

pub use http::{HttpTransport, TransportError};
