pub mod echo;

pub use echo::{EchoRequest, MessageResponse};
