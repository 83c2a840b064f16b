//! Persisted, observable theme preference state.
//!
//! - [`ThemeStore`]: get / set / subscribe over the user's preference
//! - [`KeyValueStorage`]: the durable backend, with [`MemoryStorage`] and
//!   [`FileStorage`] implementations
//! - [`load_preference`] / [`save_preference`]: the raw persistence helpers,
//!   which surface errors instead of logging them

mod storage;
#[allow(clippy::module_inception)]
mod store;

pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, CONFIG_DIR_NAME, STORAGE_FILE_NAME};
pub use store::{load_preference, save_preference, SubscriptionId, ThemeStore, STORAGE_KEY};
