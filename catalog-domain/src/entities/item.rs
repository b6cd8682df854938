// Item entity and its on-disk document

use serde::{Deserialize, Deserializer, Serialize};

use crate::value_objects::ItemId;

/// One catalog record. Identity is positional and never stored on the item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub category: String,
    pub image: String,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            image: image.into(),
        }
    }

    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&keyword)
            || self.category.to_lowercase().contains(&keyword)
    }
}

/// The whole backing file: `{"items": [...]}` in insertion order.
/// A missing or `null` items list reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Item>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Item>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ItemDocument {
    /// Appends an item and returns the positional id it now holds.
    pub fn push(&mut self, item: Item) -> ItemId {
        self.items.push(item);
        ItemId::from_position(self.items.len() - 1)
    }
}

/// An item paired with the positional id it held when it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemEntry {
    pub id: ItemId,
    pub item: Item,
}

impl ItemEntry {
    pub fn enumerate(items: Vec<Item>) -> Vec<ItemEntry> {
        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| ItemEntry {
                id: ItemId::from_position(index),
                item,
            })
            .collect()
    }
}
