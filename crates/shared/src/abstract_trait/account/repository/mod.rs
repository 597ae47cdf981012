mod command;
mod query;

pub use self::command::{AccountCommandRepositoryTrait, DynAccountCommandRepository};
pub use self::query::{AccountQueryRepositoryTrait, DynAccountQueryRepository};

#[cfg(test)]
pub use self::command::MockAccountCommandRepositoryTrait;
#[cfg(test)]
pub use self::query::MockAccountQueryRepositoryTrait;
