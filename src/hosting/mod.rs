mod handlers;
mod request;
mod response;
mod server;

pub use handlers::*;
pub use request::*;
pub use response::*;
pub use server::*;
