mod command;
mod query;

pub use self::command::{CardCommandRepositoryTrait, DynCardCommandRepository};
pub use self::query::{CardQueryRepositoryTrait, DynCardQueryRepository};

#[cfg(test)]
pub use self::command::MockCardCommandRepositoryTrait;
#[cfg(test)]
pub use self::query::MockCardQueryRepositoryTrait;
