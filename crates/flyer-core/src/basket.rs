//! Process-local basket of ads the user has picked.

use crate::ad::Ad;

/// Accumulates copies of ads selected by the user.
///
/// Basket entries are independent of the displayed ad list: they survive
/// refreshes and filter changes, grow only by explicit [`Basket::add`], and
/// are never deduplicated or pruned.
#[derive(Debug, Default)]
pub struct Basket {
    items: Vec<Ad>,
}

impl Basket {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a copy of `ad` to the basket.
    pub fn add(&mut self, ad: &Ad) {
        self.items.push(ad.clone());
    }

    #[must_use]
    pub fn items(&self) -> &[Ad] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ad::Price;

    fn sample_ad(product: &str) -> Ad {
        Ad {
            product: product.to_string(),
            price: Price::Number(2.0),
            store: "Kroger".to_string(),
            date: None,
            image_filename: None,
            image_base64: None,
            image_uri: None,
        }
    }

    #[test]
    fn add_copies_the_ad() {
        let mut basket = Basket::new();
        let ad = sample_ad("Eggs");
        basket.add(&ad);
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.items()[0], ad);
    }

    #[test]
    fn add_does_not_deduplicate() {
        let mut basket = Basket::new();
        let ad = sample_ad("Eggs");
        basket.add(&ad);
        basket.add(&ad);
        assert_eq!(basket.len(), 2);
    }

    #[test]
    fn entries_outlive_the_source_list() {
        let mut basket = Basket::new();
        {
            let ads = vec![sample_ad("Bread")];
            basket.add(&ads[0]);
        }
        assert_eq!(basket.items()[0].product, "Bread");
    }
}
