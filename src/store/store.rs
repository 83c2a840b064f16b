//! The theme preference store.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ThemeError;
use crate::theme::{resolve, AppearanceSource, ResolvedTheme, ThemePreference};

use super::storage::KeyValueStorage;

/// Storage key under which the preference record lives.
pub const STORAGE_KEY: &str = "theme-storage";

/// Handle returned by [`ThemeStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&ResolvedTheme)>;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PreferenceRecord {
    theme_preference: String,
}

/// Accepted shapes of the stored value. Older client builds wrapped the
/// record in a versioned `{"state": ..., "version": N}` envelope.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredRecord {
    Flat(PreferenceRecord),
    Envelope { state: PreferenceRecord },
}

impl StoredRecord {
    fn into_record(self) -> PreferenceRecord {
        match self {
            StoredRecord::Flat(record) => record,
            StoredRecord::Envelope { state } => state,
        }
    }
}

/// Reads the persisted preference from `storage`.
///
/// `Ok(None)` means nothing has been stored yet.
pub fn load_preference<S: KeyValueStorage + ?Sized>(
    storage: &S,
) -> Result<Option<ThemePreference>, ThemeError> {
    let Some(raw) = storage.get_item(STORAGE_KEY)? else {
        return Ok(None);
    };

    let record = serde_json::from_str::<StoredRecord>(&raw)
        .map_err(crate::error::StorageError::from)?
        .into_record();
    record.theme_preference.parse().map(Some)
}

/// Writes `preference` to `storage` as `{"themePreference": "..."}`.
pub fn save_preference<S: KeyValueStorage + ?Sized>(
    storage: &mut S,
    preference: ThemePreference,
) -> Result<(), ThemeError> {
    let record = PreferenceRecord {
        theme_preference: preference.as_str().to_string(),
    };
    let raw = serde_json::to_string(&record).map_err(crate::error::StorageError::from)?;
    storage.set_item(STORAGE_KEY, &raw)?;
    Ok(())
}

/// Holds the user's theme preference, persists it, and tells subscribers
/// when it changes.
///
/// The in-memory preference is authoritative. Persistence is write-behind:
/// [`set_preference`](Self::set_preference) updates memory first, then writes
/// to storage, and a failed write is logged and otherwise ignored. The next
/// change simply writes again.
///
/// A freshly constructed store reports [`ThemePreference::System`] until
/// [`hydrate`](Self::hydrate) loads the persisted value, so there is never a
/// read without a theme.
///
/// # Example
///
/// ```rust
/// use tiktrack_theme::{
///     Appearance, FixedAppearance, MemoryStorage, ThemePreference, ThemeStore,
/// };
///
/// let storage = MemoryStorage::new();
/// let platform = FixedAppearance::new(Some(Appearance::Dark));
///
/// let mut store = ThemeStore::open(storage.clone(), platform.clone());
/// assert_eq!(store.preference(), ThemePreference::System);
/// assert!(store.theme().is_dark);
///
/// store.set_preference(ThemePreference::Light);
/// assert!(!store.theme().is_dark);
///
/// // A new store over the same storage sees the saved choice.
/// let restarted = ThemeStore::open(storage, platform);
/// assert_eq!(restarted.preference(), ThemePreference::Light);
/// ```
pub struct ThemeStore<S, A> {
    storage: S,
    appearance: A,
    preference: ThemePreference,
    hydrated: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl<S, A> ThemeStore<S, A>
where
    S: KeyValueStorage,
    A: AppearanceSource,
{
    /// Creates a store holding the default preference. Call
    /// [`hydrate`](Self::hydrate) to load the persisted value.
    pub fn new(storage: S, appearance: A) -> Self {
        Self {
            storage,
            appearance,
            preference: ThemePreference::default(),
            hydrated: false,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Creates a store and immediately hydrates it from `storage`.
    pub fn open(storage: S, appearance: A) -> Self {
        let mut store = Self::new(storage, appearance);
        store.hydrate();
        store
    }

    /// Loads the persisted preference, replacing the in-memory default.
    ///
    /// Returns `true` if a stored value was applied. Missing, unreadable or
    /// unrecognized values leave the current preference in place. Subscribers
    /// are notified when hydration changes the preference.
    pub fn hydrate(&mut self) -> bool {
        self.hydrated = true;
        match load_preference(&self.storage) {
            Ok(Some(stored)) => {
                debug!(preference = %stored, "hydrated theme preference");
                let changed = stored != self.preference;
                self.preference = stored;
                if changed {
                    self.notify();
                }
                true
            }
            Ok(None) => {
                debug!("no persisted theme preference, keeping {}", self.preference);
                false
            }
            Err(e) => {
                warn!(error = %e, "ignoring persisted theme preference");
                false
            }
        }
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// The current preference. No side effects.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Resolves the current preference against a fresh appearance sample.
    pub fn theme(&self) -> ResolvedTheme {
        resolve(self.preference, self.appearance.appearance())
    }

    /// Sets the preference, persists it, and notifies every subscriber.
    ///
    /// Subscribers are called synchronously, in subscription order, even when
    /// `preference` equals the current value.
    pub fn set_preference(&mut self, preference: ThemePreference) {
        self.preference = preference;

        if let Err(e) = save_preference(&mut self.storage, preference) {
            warn!(
                error = %e,
                preference = %preference,
                "failed to persist theme preference; keeping it for this session"
            );
        } else {
            debug!(preference = %preference, "persisted theme preference");
        }

        self.notify();
    }

    /// Parses `raw` and sets it as the preference.
    ///
    /// Unrecognized input is rejected with
    /// [`ThemeError::InvalidPreference`] and changes nothing.
    pub fn set_preference_str(&mut self, raw: &str) -> Result<(), ThemeError> {
        let preference = raw.parse()?;
        self.set_preference(preference);
        Ok(())
    }

    /// Registers `listener` to be called with the resolved theme after every
    /// preference change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ResolvedTheme) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        let theme = self.theme();
        for (_, listener) in &mut self.listeners {
            listener(&theme);
        }
    }
}

impl<S, A> std::fmt::Debug for ThemeStore<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preference", &self.preference)
            .field("hydrated", &self.hydrated)
            .field("subscribers", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
