use tokio::sync::Mutex;

use crate::error::{GoKartsError, Result};
use crate::models::{IngredientLine, ShoppingListItem};
use crate::storage::KeyValueStore;

/// Store key holding the serialized shopping list
pub const SHOPPING_LIST_KEY: &str = "shoppingList";

/// Where an unparseable list is kept before it gets replaced
pub const SHOPPING_LIST_BACKUP_KEY: &str = "shoppingList.corrupt";

/// Result of merging a selection into the shopping list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Items were appended; carries the full updated list
    Added(Vec<ShoppingListItem>),
    /// The selection was empty; carries the unchanged list
    NothingToAdd(Vec<ShoppingListItem>),
}

impl AddOutcome {
    pub fn list(&self) -> &[ShoppingListItem] {
        match self {
            AddOutcome::Added(list) | AddOutcome::NothingToAdd(list) => list,
        }
    }

    pub fn into_list(self) -> Vec<ShoppingListItem> {
        match self {
            AddOutcome::Added(list) | AddOutcome::NothingToAdd(list) => list,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added(_))
    }
}

/// Owns the persisted shopping list.
///
/// The list is append-only from here: entries are never merged or deduplicated,
/// so adding the same ingredient for the same dish twice stores it twice.
pub struct ShoppingListAggregator<S> {
    store: S,
    // Held across each read-modify-write so concurrent adds never drop a batch
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> ShoppingListAggregator<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the full list. A missing, unreadable or corrupt list reads as empty.
    pub async fn load(&self) -> Vec<ShoppingListItem> {
        match self.read_list().await {
            Ok(stored) => stored.items,
            Err(e) => {
                tracing::warn!(error = %e, "shopping list unavailable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Append the selected lines, stamped with `dish`, and persist the whole list.
    ///
    /// An empty selection touches nothing and returns [`AddOutcome::NothingToAdd`].
    /// The dish is trimmed before stamping; a blank dish is `InvalidDish`.
    /// A failed write returns `PersistenceUnavailable` and leaves the stored
    /// list as it was.
    pub async fn add_selected(
        &self,
        selections: &[IngredientLine],
        dish: &str,
    ) -> Result<AddOutcome> {
        if selections.is_empty() {
            return Ok(AddOutcome::NothingToAdd(self.load().await));
        }

        let dish = dish.trim();
        if dish.is_empty() {
            return Err(GoKartsError::InvalidDish);
        }

        let _guard = self.write_lock.lock().await;

        // A store that cannot be read must not be overwritten with a partial list
        let StoredList { mut items, corrupt } = self.read_list().await?;
        if let Some(payload) = corrupt {
            self.store
                .set(SHOPPING_LIST_BACKUP_KEY, &payload)
                .await
                .map_err(|e| GoKartsError::PersistenceUnavailable(e.to_string()))?;
            tracing::warn!(
                backup_key = SHOPPING_LIST_BACKUP_KEY,
                "replacing unparseable shopping list, old payload kept under backup key"
            );
        }

        items.extend(
            selections
                .iter()
                .map(|line| ShoppingListItem::from_line(line, dish)),
        );

        self.write_list(&items).await?;
        tracing::info!(dish, added = selections.len(), total = items.len(), "updated shopping list");

        Ok(AddOutcome::Added(items))
    }

    /// Drop every entry
    pub async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        self.store
            .remove(SHOPPING_LIST_KEY)
            .await
            .map_err(|e| GoKartsError::PersistenceUnavailable(e.to_string()))
    }

    /// Absent or unparseable payloads read as an empty list; store errors propagate
    async fn read_list(&self) -> Result<StoredList> {
        let Some(payload) = self
            .store
            .get(SHOPPING_LIST_KEY)
            .await
            .map_err(|e| GoKartsError::PersistenceUnavailable(e.to_string()))?
        else {
            return Ok(StoredList::default());
        };

        match serde_json::from_str(&payload) {
            Ok(items) => Ok(StoredList {
                items,
                corrupt: None,
            }),
            Err(e) => {
                tracing::warn!(error = %e, "stored shopping list is unparseable, reading as empty");
                Ok(StoredList {
                    items: Vec::new(),
                    corrupt: Some(payload),
                })
            }
        }
    }

    async fn write_list(&self, list: &[ShoppingListItem]) -> Result<()> {
        let payload = serde_json::to_string(list)?;

        self.store
            .set(SHOPPING_LIST_KEY, &payload)
            .await
            .map_err(|e| GoKartsError::PersistenceUnavailable(e.to_string()))
    }
}

#[derive(Default)]
struct StoredList {
    items: Vec<ShoppingListItem>,
    // Raw payload that failed to parse
    corrupt: Option<String>,
}
