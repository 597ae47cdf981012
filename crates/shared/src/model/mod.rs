pub mod account;
pub mod card;
pub mod customer;
