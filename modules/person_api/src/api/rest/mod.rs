pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod request_log;
pub mod routes;
