mod gracefull;
mod logs;
mod mark;
mod random_card_number;
mod random_iban;

pub use self::gracefull::shutdown_signal;
pub use self::logs::Logger;
pub use self::mark::{mask_cvv, mask_pan};
pub use self::random_card_number::{random_cvv, random_pan};
pub use self::random_iban::random_iban;
