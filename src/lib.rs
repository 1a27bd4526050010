pub mod calendar;
pub mod config;
pub mod error;
pub mod fetch;
pub mod game_id;
pub mod pipeline;
pub mod process;
pub mod schema;
pub mod teams;

pub use calendar::{Round, WeekSpec};
pub use error::ScrapeError;
pub use game_id::{synthesize, GameId};
