mod http;
mod views;

pub use http::{build_router, start_http_server, HttpState};
