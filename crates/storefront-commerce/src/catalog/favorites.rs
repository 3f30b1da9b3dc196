//! Favorites list.

use crate::catalog::{Favorite, Product};
use crate::error::CommerceError;
use crate::ids::{FavoriteId, ProductId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of toggling a product's favorite state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    /// A favorite record was created.
    Added(Favorite),
    /// A favorite record was removed.
    Removed(Favorite),
}

/// The user's favorites list.
///
/// Keeps each product's `is_favorite`/`favorite_id` pair in step with the
/// records it holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Favorites {
    entries: Vec<Favorite>,
}

impl Favorites {
    /// Create an empty favorites list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records loaded from elsewhere.
    pub fn from_entries(entries: Vec<Favorite>) -> Self {
        Self { entries }
    }

    /// All records, in insertion order.
    pub fn entries(&self) -> &[Favorite] {
        &self.entries
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list has no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a favorite by its own id.
    pub fn get(&self, id: FavoriteId) -> Option<&Favorite> {
        self.entries.iter().find(|f| f.id == id)
    }

    /// Get the favorite pointing at a product.
    pub fn find_by_product(&self, product_id: ProductId) -> Option<&Favorite> {
        self.entries.iter().find(|f| f.parent_id == product_id)
    }

    /// Add a product to the favorites.
    ///
    /// A product that already has a record keeps it. Fails when no id is
    /// left to allocate.
    pub fn add(&mut self, product: &mut Product) -> Result<Favorite, CommerceError> {
        if let Some(index) = self.position_for(product) {
            let favorite = self.entries[index];
            product.mark_favorite(favorite.id);
            return Ok(favorite);
        }

        let favorite = Favorite::new(self.next_id()?, product.id());
        self.entries.push(favorite);
        product.mark_favorite(favorite.id);
        debug!(favorite_id = %favorite.id, product_id = %favorite.parent_id, "favorite added");
        Ok(favorite)
    }

    /// Remove a product from the favorites.
    ///
    /// Only a record whose `parent_id` is this product is removed. The
    /// product's favorite fields are cleared even when no record matched.
    pub fn remove(&mut self, product: &mut Product) -> Option<Favorite> {
        let index = self.position_for(product);
        product.clear_favorite();

        let favorite = self.entries.remove(index?);
        debug!(favorite_id = %favorite.id, product_id = %favorite.parent_id, "favorite removed");
        Some(favorite)
    }

    /// Remove the product's record if the list holds one, add one otherwise.
    pub fn toggle(&mut self, product: &mut Product) -> Result<FavoriteToggle, CommerceError> {
        match self.remove(product) {
            Some(favorite) => Ok(FavoriteToggle::Removed(favorite)),
            None => self.add(product).map(FavoriteToggle::Added),
        }
    }

    /// Index of the record belonging to `product`, preferring the one its
    /// `favorite_id` names.
    fn position_for(&self, product: &Product) -> Option<usize> {
        let product_id = product.id();
        product
            .favorite_id
            .and_then(|id| {
                self.entries
                    .iter()
                    .position(|f| f.id == id && f.parent_id == product_id)
            })
            .or_else(|| self.entries.iter().position(|f| f.parent_id == product_id))
    }

    fn next_id(&self) -> Result<FavoriteId, CommerceError> {
        let max = self.entries.iter().map(|f| f.id.get()).max().unwrap_or(0);
        max.checked_add(1)
            .map(FavoriteId::new)
            .ok_or(CommerceError::FavoriteIdsExhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product::new(ProductId::new(id), format!("Product {}", id), 10.0, "/p.png")
    }

    #[test]
    fn test_add_marks_product() {
        let mut favorites = Favorites::new();
        let mut p = product(1);

        let favorite = favorites.add(&mut p).unwrap();
        assert_eq!(favorite.id, FavoriteId::new(1));
        assert_eq!(favorite.parent_id, ProductId::new(1));
        assert!(p.is_favorite);
        assert_eq!(p.favorite_id, Some(favorite.id));
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_add_twice_keeps_one_record() {
        let mut favorites = Favorites::new();
        let mut p = product(1);

        let first = favorites.add(&mut p).unwrap();
        let second = favorites.add(&mut p).unwrap();
        assert_eq!(first, second);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_ids_continue_after_loaded_entries() {
        let mut favorites = Favorites::from_entries(vec![
            Favorite::new(FavoriteId::new(4), ProductId::new(7)),
            Favorite::new(FavoriteId::new(9), ProductId::new(8)),
        ]);
        let mut p = product(1);
        assert_eq!(favorites.add(&mut p).unwrap().id, FavoriteId::new(10));
    }

    #[test]
    fn test_add_fails_when_ids_exhausted() {
        let mut favorites = Favorites::from_entries(vec![Favorite::new(
            FavoriteId::new(u64::MAX),
            ProductId::new(2),
        )]);
        let mut p = product(1);

        assert_eq!(favorites.add(&mut p), Err(CommerceError::FavoriteIdsExhausted));
        assert_eq!(favorites.len(), 1);
        assert!(!p.is_favorite);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn test_remove_clears_product() {
        let mut favorites = Favorites::new();
        let mut p = product(1);
        let favorite = favorites.add(&mut p).unwrap();

        assert_eq!(favorites.remove(&mut p), Some(favorite));
        assert!(favorites.is_empty());
        assert!(!p.is_favorite);
        assert!(p.favorite_id.is_none());
    }

    #[test]
    fn test_remove_by_parent_when_id_missing() {
        let mut favorites =
            Favorites::from_entries(vec![Favorite::new(FavoriteId::new(3), ProductId::new(1))]);
        let mut p = product(1);

        let removed = favorites.remove(&mut p);
        assert_eq!(removed.map(|f| f.id), Some(FavoriteId::new(3)));
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_remove_ignores_other_products_record() {
        let other = Favorite::new(FavoriteId::new(5), ProductId::new(2));
        let mut favorites = Favorites::from_entries(vec![other]);
        let mut p = product(1);
        p.mark_favorite(FavoriteId::new(5));

        assert!(favorites.remove(&mut p).is_none());
        assert_eq!(favorites.entries(), &[other]);
        assert!(!p.is_favorite);
        assert!(p.favorite_id.is_none());
    }

    #[test]
    fn test_stale_favorite_id_falls_back_to_own_record() {
        let mut favorites = Favorites::from_entries(vec![
            Favorite::new(FavoriteId::new(5), ProductId::new(2)),
            Favorite::new(FavoriteId::new(6), ProductId::new(1)),
        ]);
        let mut p = product(1);
        p.mark_favorite(FavoriteId::new(5));

        let removed = favorites.remove(&mut p);
        assert_eq!(removed.map(|f| f.id), Some(FavoriteId::new(6)));
        assert_eq!(favorites.len(), 1);
        assert!(favorites.find_by_product(ProductId::new(2)).is_some());
    }

    #[test]
    fn test_remove_unknown_is_none() {
        let mut favorites = Favorites::new();
        let mut p = product(1);
        assert!(favorites.remove(&mut p).is_none());
    }

    #[test]
    fn test_toggle() {
        let mut favorites = Favorites::new();
        let mut p = product(2);

        assert!(matches!(favorites.toggle(&mut p), Ok(FavoriteToggle::Added(_))));
        assert!(p.is_favorite);
        assert!(matches!(favorites.toggle(&mut p), Ok(FavoriteToggle::Removed(_))));
        assert!(!p.is_favorite);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_toggle_removes_record_of_unflagged_product() {
        let record = Favorite::new(FavoriteId::new(3), ProductId::new(1));
        let mut favorites = Favorites::from_entries(vec![record]);
        let mut p = product(1);
        assert!(!p.is_favorite);

        assert_eq!(favorites.toggle(&mut p), Ok(FavoriteToggle::Removed(record)));
        assert!(favorites.is_empty());
        assert!(!p.is_favorite);
    }

    #[test]
    fn test_toggle_adds_when_flag_is_stale() {
        let mut favorites = Favorites::new();
        let mut p = product(1);
        p.mark_favorite(FavoriteId::new(9));

        let toggled = favorites.toggle(&mut p).unwrap();
        assert_eq!(
            toggled,
            FavoriteToggle::Added(Favorite::new(FavoriteId::new(1), ProductId::new(1)))
        );
        assert_eq!(p.favorite_id, Some(FavoriteId::new(1)));
    }

    #[test]
    fn test_json_is_plain_array() {
        let favorites =
            Favorites::from_entries(vec![Favorite::new(FavoriteId::new(5), ProductId::new(1))]);
        let text = serde_json::to_string(&favorites).unwrap();
        assert_eq!(text, r#"[{"id":5,"parentId":1}]"#);
        assert_eq!(serde_json::from_str::<Favorites>(&text).unwrap(), favorites);
    }
}
