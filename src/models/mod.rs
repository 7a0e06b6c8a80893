pub mod draw;
pub mod entry;
pub mod lottery_type;
pub mod punter;

pub use draw::*;
pub use entry::*;
pub use lottery_type::*;
pub use punter::*;
