pub mod error;
pub mod fields;
pub mod pagination;
pub mod repo;
pub mod service;
