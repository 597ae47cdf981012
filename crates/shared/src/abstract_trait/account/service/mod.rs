mod command;
mod query;

pub use self::command::{AccountCommandServiceTrait, DynAccountCommandService};
pub use self::query::{AccountQueryServiceTrait, DynAccountQueryService};
