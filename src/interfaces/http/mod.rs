pub mod routes;
pub mod server;

pub use routes::{ApiState, create_router};
pub use server::ApiServer;
