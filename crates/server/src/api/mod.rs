pub mod handlers;
pub mod plan;
pub mod routes;
pub mod simplify;

pub use routes::create_router;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
