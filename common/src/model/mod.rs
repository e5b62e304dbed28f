pub mod apartment;
pub mod contract;
pub mod customer;
pub mod entity_kind;
pub mod user;
