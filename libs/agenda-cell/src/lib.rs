pub mod handlers;
pub mod router;

pub use router::agenda_routes;
