//! Video cache service: mirrors remote video objects to local disk so the
//! site can serve them with seek support instead of proxying object storage
//! on every play.

pub mod cache;
pub mod error;

pub use cache::{CacheInfo, CacheOutcome, VideoCache};
pub use error::{MediaError, MediaResult};
