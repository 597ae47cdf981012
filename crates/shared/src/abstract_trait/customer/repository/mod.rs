mod command;
mod query;

pub use self::command::{CustomerCommandRepositoryTrait, DynCustomerCommandRepository};
pub use self::query::{CustomerQueryRepositoryTrait, DynCustomerQueryRepository};

#[cfg(test)]
pub use self::command::MockCustomerCommandRepositoryTrait;
#[cfg(test)]
pub use self::query::MockCustomerQueryRepositoryTrait;
