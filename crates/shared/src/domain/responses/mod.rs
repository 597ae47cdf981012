mod account;
mod api;
mod card;
mod customer;

pub use self::account::AccountResponse;
pub use self::api::ApiResponse;
pub use self::card::CardResponse;
pub use self::customer::CustomerResponse;
