//! REST backend for the browser front-end.

mod api;
mod error;
mod request;
mod response;
mod routes;

pub use api::Api;
pub use request::{MatrixQuery, SubmitRequest};
pub use response::{
    CellResponse, ErrorResponse, MatrixResponse, MatrixRowResponse, MessageResponse,
};
pub use routes::{ADMIN_HEADER, Server, configure};
