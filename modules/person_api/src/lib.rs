// === PUBLIC CONTRACT ===
pub mod contract;
pub use contract::model;

// === MODULE DEFINITION ===
pub mod module;
pub use module::PersonModule;

pub use infra::storage::{connect, StoreOptions};

// === INTERNAL MODULES ===
// Exposed for tests and the server binary; the stable surface is `contract` and `module`.
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
