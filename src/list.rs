//! Shopping list engine.

use crate::model::ShoppingListItem;

/// An insertion-ordered list of purchasable items with generated ids.
///
/// Adding never deduplicates: merging two recipes' needs yields two
/// entries rather than silently coalescing them. Items have no link back
/// to the recipe they were copied from.
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
    next_id: u64,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item and return a reference to it. Ids are unique for
    /// the life of the list and never reused.
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> &ShoppingListItem {
        let item = ShoppingListItem {
            id: self.next_id,
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.next_id += 1;
        self.items.push(item);
        self.items.last().expect("just pushed")
    }

    /// Remove the item with this id. Deleting an unknown id is a no-op;
    /// the view and the state can race benignly on double clicks.
    pub fn delete_item(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Set the count on the matching item. Unknown ids and non-finite
    /// counts (malformed text-field input) are ignored rather than
    /// corrupting state.
    pub fn update_count(&mut self, id: u64, new_count: f64) {
        if !new_count.is_finite() {
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.count = Some(new_count);
        }
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_item_preserves_insertion_order() {
        let mut list = ShoppingList::new();
        list.add_item(Some(2.0), "cup", "flour");
        list.add_item(None, "", "salt");
        list.add_item(Some(0.5), "tsp", "vanilla");

        let order: Vec<&str> = list.items().iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(order, vec!["flour", "salt", "vanilla"]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut list = ShoppingList::new();
        let first = list.add_item(Some(1.0), "cup", "milk").id;
        list.delete_item(first);
        let second = list.add_item(Some(1.0), "cup", "milk").id;
        assert_ne!(first, second);
    }

    #[test]
    fn test_update_count_ignores_non_finite() {
        let mut list = ShoppingList::new();
        let id = list.add_item(Some(2.0), "cup", "flour").id;
        list.update_count(id, f64::NAN);
        assert_eq!(list.items()[0].count, Some(2.0));
        list.update_count(id, 3.5);
        assert_eq!(list.items()[0].count, Some(3.5));
    }
}
