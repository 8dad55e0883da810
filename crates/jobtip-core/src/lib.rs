pub mod error;
pub mod status;
pub mod tooltip;

pub use error::{JobTipError, Result};
pub use status::JobStatus;
pub use tooltip::{known_statuses, status_tooltip, TOOLTIPS};
