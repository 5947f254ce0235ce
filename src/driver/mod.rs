//! Driver loop: tick scheduling, pause/step handling and the terminal front end

pub mod session;
pub mod terminal;
pub mod ticker;

pub use session::{Session, TickReport, PAUSE_KEY, STEP_KEY};
pub use ticker::Ticker;
