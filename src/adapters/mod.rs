// Adapters layer: request parsing, HTTP dispatch and API Gateway event mapping.

pub mod gateway;
pub mod http;
pub mod request;

pub use gateway::handle_event;
pub use http::{handle_request, ApiResponse};
