pub mod account;
pub mod card;
pub mod client;
pub mod customer;
