pub mod app_state;
pub mod clock;
pub mod event;
pub mod timeline;

pub use app_state::AppState;
pub use clock::{Clock, ClockParts};
pub use event::{Event, EventId};
pub use timeline::Timeline;
