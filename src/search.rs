//! Debounced product search.
//!
//! The text box writes into `query` on every keystroke. The filtered view only
//! changes once the debouncer releases the latest query, and is always rebuilt
//! from the full catalogue.

use crate::debounce::Debouncer;
use crate::product::{filter_products, Product};
use std::time::{Duration, Instant};

pub struct ProductSearch {
    /// Live contents of the search box
    query: String,
    debouncer: Debouncer<String>,
    /// Indices into the catalogue, in catalogue order
    filtered: Vec<usize>,
    recomputations: usize,
}

impl ProductSearch {
    /// Start idle with every product visible.
    pub fn new(products: &[Product], delay: Duration) -> Self {
        Self {
            query: String::new(),
            debouncer: Debouncer::new(delay),
            filtered: (0..products.len()).collect(),
            recomputations: 0,
        }
    }

    #[cfg(test)]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Mutable access for the text box. Call [`Self::query_changed`] after an edit.
    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    /// Replace the query and restart the quiet period.
    #[cfg(test)]
    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        self.query_changed(now);
    }

    pub fn query_changed(&mut self, now: Instant) {
        self.debouncer.schedule(self.query.clone(), now);
    }

    /// Apply the debounced query if it is due. Returns true when the view changed.
    pub fn tick(&mut self, products: &[Product], now: Instant) -> bool {
        let Some(query) = self.debouncer.poll(now) else {
            return false;
        };

        let started = Instant::now();
        self.filtered = filter_products(products, &query);
        self.recomputations += 1;
        tracing::debug!(
            query = %query,
            matches = self.filtered.len(),
            recomputations = self.recomputations,
            elapsed_us = started.elapsed().as_micros() as u64,
            "Recomputed product filter"
        );
        true
    }

    /// Drop any pending recomputation.
    pub fn cancel(&mut self) -> bool {
        self.debouncer.cancel()
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_remaining(now)
    }

    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// Number of times the filtered view has been rebuilt.
    #[cfg(test)]
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}
