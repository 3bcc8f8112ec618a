use std::collections::HashMap;

use crate::entities::{Item, Weight};

/// Set of items to be transported, keyed by name.
///
/// Names are unique: inserting an existing name overwrites its weight, exactly as a
/// name → weight mapping would. Insertion order is remembered so that every
/// algorithm iterating the set does so deterministically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemSet {
    items: Vec<Item>,
    /// Position of every item in `items`, by name
    index: HashMap<String, usize>,
}

impl ItemSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an item, returning the weight it replaced if the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, weight: Weight) -> Option<Weight> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&i) => Some(std::mem::replace(&mut self.items[i].weight, weight)),
            None => {
                self.index.insert(name.clone(), self.items.len());
                self.items.push(Item::new(name, weight));
                None
            }
        }
    }

    pub fn weight(&self, name: &str) -> Option<Weight> {
        self.index.get(name).map(|&i| self.items[i].weight)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Combined weight of all items, `None` if it does not fit in a [`Weight`]
    pub fn total_weight(&self) -> Option<Weight> {
        self.items
            .iter()
            .try_fold(0 as Weight, |total, item| total.checked_add(item.weight))
    }
}

impl<S: Into<String>> FromIterator<(S, Weight)> for ItemSet {
    fn from_iter<I: IntoIterator<Item = (S, Weight)>>(iter: I) -> Self {
        let mut set = ItemSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<(S, Weight)> for ItemSet {
    fn extend<I: IntoIterator<Item = (S, Weight)>>(&mut self, iter: I) {
        for (name, weight) in iter {
            self.insert(name, weight);
        }
    }
}

impl<'a> IntoIterator for &'a ItemSet {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
