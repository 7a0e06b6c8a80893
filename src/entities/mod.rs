pub mod draws;
pub mod entries;
pub mod lottery_types;
pub mod punters;
pub mod wins;

pub use draws as draw_entity;
pub use entries as entry_entity;
pub use lottery_types as lottery_type_entity;
pub use punters as punter_entity;
pub use wins as win_entity;

pub use wins::WinType;
