pub mod cors;
pub mod panic;
pub mod request_id;

pub use cors::cors_layer;
pub use panic::catch_panic_layer;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
