pub mod auth_service;
pub mod draw_service;
pub mod entry_service;
pub mod lottery_type_service;
pub mod punter_service;

pub use auth_service::*;
pub use draw_service::*;
pub use entry_service::*;
pub use lottery_type_service::*;
pub use punter_service::*;
