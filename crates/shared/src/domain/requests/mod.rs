mod account;
mod card;
mod customer;

pub use self::account::{CreateAccountRequest, FindAccounts, UpdateAccountRequest};
pub use self::card::{
    CardAliasQuery, CreateCardRequest, FindCardById, FindCards, UpdateCardRequest,
};
pub use self::customer::{CreateCustomerRequest, FindCustomers, UpdateCustomerRequest};
