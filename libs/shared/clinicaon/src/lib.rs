pub mod client;
pub mod error;
pub mod models;

pub use client::ClinicaOnClient;
pub use error::ClinicaOnError;
pub use models::*;
