//! Ordered containers backing every tracker.
//!
//! [`UniqueList`] separates two notions of sameness. Identity
//! ([`SameIdentityAs`]) decides whether an add or edit would duplicate a
//! real-world record, while full equality ([`FullyEqualTo`]) picks the exact
//! element to edit or remove. [`NonUniqueList`] keeps only the latter.
use crate::core::error::{ModelError, ModelResult};
use std::fmt::Debug;
use std::ops::Deref;

/// A value that can be stored in a collection.
pub trait Record: Clone + PartialEq + Debug {
    /// Lower-case name of the record kind, used in error messages.
    const KIND: &'static str;
}

/// Domain rule for "is the same real-world thing", weaker than equality.
pub trait SameIdentityAs {
    fn same_identity_as(&self, other: &Self) -> bool;
}

/// Field-by-field equality.
pub trait FullyEqualTo {
    fn fully_equal_to(&self, other: &Self) -> bool;
}

impl<T: PartialEq> FullyEqualTo for T {
    fn fully_equal_to(&self, other: &Self) -> bool {
        self == other
    }
}

/// Order-preserving, read-only projection over a collection's contents.
#[derive(Debug, PartialEq)]
pub struct ReadOnlyView<'a, T>(&'a [T]);

impl<T> Clone for ReadOnlyView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ReadOnlyView<'_, T> {}

impl<'a, T> ReadOnlyView<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self(items)
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.0
    }
}

impl<T> Deref for ReadOnlyView<'_, T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a, T> IntoIterator for ReadOnlyView<'a, T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A list that never holds two identity-equal elements.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record + SameIdentityAs> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if an element identity-equal to `item` is present.
    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.same_identity_as(item))
    }

    pub fn add(&mut self, item: T) -> ModelResult<()> {
        if self.contains(&item) {
            return Err(ModelError::Duplicate(T::KIND));
        }
        self.items.push(item);
        Ok(())
    }

    /// Replaces `target` with `replacement`, keeping its position.
    ///
    /// `replacement` may share identity with `target` itself but not with any
    /// other element.
    pub fn set_item(&mut self, target: &T, replacement: T) -> ModelResult<()> {
        let index = self
            .position(target)
            .ok_or(ModelError::NotFound(T::KIND))?;
        let collides = self
            .items
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && existing.same_identity_as(&replacement));
        if collides {
            return Err(ModelError::Duplicate(T::KIND));
        }
        self.items[index] = replacement;
        Ok(())
    }

    pub fn remove(&mut self, item: &T) -> ModelResult<()> {
        let index = self.position(item).ok_or(ModelError::NotFound(T::KIND))?;
        self.items.remove(index);
        Ok(())
    }

    /// Replaces the whole contents. Leaves the list untouched if `items` holds
    /// identity-equal elements.
    pub fn replace_all(&mut self, items: Vec<T>) -> ModelResult<()> {
        let unique = items.iter().enumerate().all(|(i, item)| {
            items[i + 1..]
                .iter()
                .all(|other| !item.same_identity_as(other))
        });
        if !unique {
            return Err(ModelError::Duplicate(T::KIND));
        }
        self.items = items;
        Ok(())
    }

    /// Returns the first element matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|&item| predicate(item))
    }

    pub fn as_read_only_view(&self) -> ReadOnlyView<'_, T> {
        ReadOnlyView::new(&self.items)
    }

    /// Independent copy of every element, used for history snapshots.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing.fully_equal_to(item))
    }
}

/// A plain ordered list for records where duplicates are legitimate.
#[derive(Debug, Clone, PartialEq)]
pub struct NonUniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for NonUniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Record> NonUniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.fully_equal_to(item))
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn set_item(&mut self, target: &T, replacement: T) -> ModelResult<()> {
        let index = self
            .items
            .iter()
            .position(|existing| existing.fully_equal_to(target))
            .ok_or(ModelError::NotFound(T::KIND))?;
        self.items[index] = replacement;
        Ok(())
    }

    /// Removes the first element equal to `item`.
    pub fn remove(&mut self, item: &T) -> ModelResult<()> {
        let index = self
            .items
            .iter()
            .position(|existing| existing.fully_equal_to(item))
            .ok_or(ModelError::NotFound(T::KIND))?;
        self.items.remove(index);
        Ok(())
    }

    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn as_read_only_view(&self) -> ReadOnlyView<'_, T> {
        ReadOnlyView::new(&self.items)
    }

    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Contact {
        key: u32,
        label: &'static str,
    }

    impl Record for Contact {
        const KIND: &'static str = "contact";
    }

    impl SameIdentityAs for Contact {
        fn same_identity_as(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    fn contact(key: u32, label: &'static str) -> Contact {
        Contact { key, label }
    }

    #[test]
    fn test_add_then_contains() {
        let mut list = UniqueList::new();
        list.add(contact(1, "a")).unwrap();
        assert!(list.contains(&contact(1, "a")));
        // Identity, not equality, decides membership
        assert!(list.contains(&contact(1, "renamed")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_identity_duplicate_fails() {
        let mut list = UniqueList::new();
        list.add(contact(1, "a")).unwrap();
        let result = list.add(contact(1, "b"));
        assert_eq!(result, Err(ModelError::Duplicate("contact")));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_item_rules() {
        let mut list = UniqueList::new();
        list.add(contact(1, "a")).unwrap();
        list.add(contact(2, "b")).unwrap();

        // Same identity, new fields
        list.set_item(&contact(1, "a"), contact(1, "a2")).unwrap();
        assert_eq!(list.as_read_only_view()[0], contact(1, "a2"));

        // Collides with a different element
        assert_eq!(
            list.set_item(&contact(1, "a2"), contact(2, "x")),
            Err(ModelError::Duplicate("contact"))
        );

        // Target must match by full equality
        assert_eq!(
            list.set_item(&contact(1, "a"), contact(3, "c")),
            Err(ModelError::NotFound("contact"))
        );

        // Changing identity to a free key keeps the position
        list.set_item(&contact(1, "a2"), contact(3, "c")).unwrap();
        let labels: Vec<_> = list.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["c", "b"]);
    }

    #[test]
    fn test_remove_uses_full_equality() {
        let mut list = UniqueList::new();
        list.add(contact(1, "a")).unwrap();
        assert_eq!(
            list.remove(&contact(1, "other")),
            Err(ModelError::NotFound("contact"))
        );
        list.remove(&contact(1, "a")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_replace_all_rejects_internal_duplicates() {
        let mut list = UniqueList::new();
        list.add(contact(9, "keep")).unwrap();
        let result = list.replace_all(vec![contact(1, "a"), contact(2, "b"), contact(1, "c")]);
        assert_eq!(result, Err(ModelError::Duplicate("contact")));
        assert_eq!(list.as_read_only_view().as_slice(), &[contact(9, "keep")]);

        list.replace_all(vec![contact(2, "b"), contact(1, "a")]).unwrap();
        let keys: Vec<_> = list.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![2, 1]);
    }

    #[test]
    fn test_read_view_is_stable_without_mutation() {
        let mut list = UniqueList::new();
        list.add(contact(1, "a")).unwrap();
        list.add(contact(2, "b")).unwrap();
        assert_eq!(list.as_read_only_view(), list.as_read_only_view());
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let mut list = UniqueList::new();
        list.add(contact(1, "a")).unwrap();
        let mut copy = list.deep_copy();
        copy.add(contact(2, "b")).unwrap();
        copy.set_item(&contact(1, "a"), contact(1, "z")).unwrap();
        assert_eq!(list.as_read_only_view().as_slice(), &[contact(1, "a")]);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_non_unique_list_allows_duplicates() {
        let mut list = NonUniqueList::new();
        list.add(contact(1, "a"));
        list.add(contact(1, "a"));
        assert_eq!(list.len(), 2);

        list.remove(&contact(1, "a")).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(
            list.set_item(&contact(5, "x"), contact(6, "y")),
            Err(ModelError::NotFound("contact"))
        );
    }
}
