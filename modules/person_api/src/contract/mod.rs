pub mod model;

pub use model::{NewPerson, NewRequestLog, Person, RequestLogEntry};
