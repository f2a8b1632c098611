pub mod category;
pub mod error;
pub mod event;
pub mod reading;
pub mod state;
pub mod window;

pub use category::{classify, gauge_fraction, Category, GAUGE_MAX_LUX};
pub use error::{FetchError, LuxError, Result};
pub use event::Message;
pub use reading::{Reading, Sample};
pub use state::{AppState, Applied, OrderingPolicy};
pub use window::{WindowStore, DEFAULT_CAPACITY};
