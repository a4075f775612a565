pub mod bounded;
pub mod random_gauge;

pub use bounded::BoundedCollector;
pub use random_gauge::RandomGauge;
