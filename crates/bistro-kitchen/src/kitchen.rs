//! Kitchen
//!
//! Owns every dish it holds and keeps two running aggregates in step with
//! the bag: the total preparation time and the number of elaborate dishes.
//! Both are updated only after the bag accepts an insertion or a removal, so
//! a refused `order` or `serve` leaves them untouched.

use std::path::Path;

use bistro_ingest::{read_menu_path, read_menu_str, IngestError};
use bistro_menu::{Cuisine, DietaryRequest, Dish};

use crate::bag::Bag;
use crate::config::{InvalidRecordPolicy, KitchenConfig};
use crate::report::KitchenReport;

/// A kitchen of owned dishes with cached aggregates
#[derive(Debug, Default)]
pub struct Kitchen {
    dishes: Bag<Dish>,
    total_prep_time: u64,
    elaborate_count: usize,
    config: KitchenConfig,
}

impl Kitchen {
    /// Create empty kitchen with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create empty kitchen
    #[must_use]
    pub fn with_config(config: KitchenConfig) -> Self {
        Self {
            dishes: Bag::with_policy(config.bag),
            total_prep_time: 0,
            elaborate_count: 0,
            config,
        }
    }

    /// Load a kitchen from a menu file
    ///
    /// A file that cannot be opened is logged and yields an empty kitchen.
    ///
    /// # Errors
    /// Returns the first undecodable record when the configuration says to
    /// abort on invalid records.
    pub fn load(path: impl AsRef<Path>, config: KitchenConfig) -> Result<Self, IngestError> {
        let path = path.as_ref();
        let mut kitchen = Self::with_config(config);
        match read_menu_path(path) {
            Ok(records) => {
                let ordered = kitchen.ingest(records)?;
                tracing::info!(path = %path.display(), ordered, "loaded menu");
            }
            Err(err) => {
                tracing::error!(%err, "menu unavailable, starting with an empty kitchen");
            }
        }
        Ok(kitchen)
    }

    /// Load a kitchen from menu text
    ///
    /// # Errors
    /// As [`Kitchen::load`]
    pub fn load_str(text: &str, config: KitchenConfig) -> Result<Self, IngestError> {
        let mut kitchen = Self::with_config(config);
        kitchen.ingest(read_menu_str(text))?;
        Ok(kitchen)
    }

    /// Order every decoded dish, in source order; returns how many were accepted
    fn ingest<I>(&mut self, records: I) -> Result<usize, IngestError>
    where
        I: IntoIterator<Item = Result<Dish, IngestError>>,
    {
        let mut ordered = 0;
        for record in records {
            match record {
                Ok(dish) => {
                    if self.order(dish) {
                        ordered += 1;
                    }
                }
                Err(err) if err.is_io() => {
                    tracing::error!(%err, "menu read failed, keeping dishes loaded so far");
                    break;
                }
                Err(err) => match self.config.on_invalid_record {
                    InvalidRecordPolicy::Skip => tracing::warn!(%err, "skipping record"),
                    InvalidRecordPolicy::Abort => return Err(err),
                },
            }
        }
        Ok(ordered)
    }

    /// Take ownership of `dish`
    ///
    /// Returns `false`, dropping the dish, when the bag refuses it.
    pub fn order(&mut self, dish: Dish) -> bool {
        let prep_time = dish.prep_time();
        let elaborate = dish.is_elaborate();
        match self.dishes.add(dish) {
            Ok(()) => {
                self.total_prep_time += u64::from(prep_time);
                if elaborate {
                    self.elaborate_count += 1;
                }
                true
            }
            Err(rejection) => {
                tracing::debug!(reason = %rejection, "order refused");
                false
            }
        }
    }

    /// Remove and drop one dish equal to `dish`
    pub fn serve(&mut self, dish: &Dish) -> bool {
        if self.dishes.is_empty() {
            return false;
        }
        let Some(served) = self.dishes.remove(dish) else {
            return false;
        };
        self.total_prep_time -= u64::from(served.prep_time());
        if served.is_elaborate() {
            self.elaborate_count -= 1;
        }
        tracing::debug!(dish = served.name(), "served");
        true
    }

    /// Number of held dishes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Whether no dish is held
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Whether an equal dish is held
    #[inline]
    #[must_use]
    pub fn contains(&self, dish: &Dish) -> bool {
        self.dishes.contains(dish)
    }

    /// Held dishes, in no particular order
    pub fn dishes(&self) -> impl Iterator<Item = &Dish> {
        self.dishes.iter()
    }

    /// Configuration the kitchen was built with
    #[inline]
    #[must_use]
    pub fn config(&self) -> &KitchenConfig {
        &self.config
    }

    /// Total preparation time of held dishes
    #[inline]
    #[must_use]
    pub fn prep_time_sum(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }
        self.total_prep_time
    }

    /// Mean preparation time, rounded half up to a whole minute
    #[must_use]
    pub fn average_prep_time(&self) -> u64 {
        let count = self.len() as u64;
        if count == 0 {
            return 0;
        }
        (2 * self.total_prep_time + count) / (2 * count)
    }

    /// Number of held elaborate dishes
    #[inline]
    #[must_use]
    pub fn elaborate_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.elaborate_count
    }

    /// Share of elaborate dishes as a percentage with two decimals
    ///
    /// Rounded in integer hundredths of a percent, so 7 of 13 is exactly
    /// `53.85`.
    #[must_use]
    pub fn elaborate_percentage(&self) -> f64 {
        self.elaborate_basis_points() as f64 / 100.0
    }

    /// Share of elaborate dishes in hundredths of a percent, rounded half up
    #[must_use]
    pub fn elaborate_basis_points(&self) -> u64 {
        let total = self.len() as u64;
        let elaborate = self.elaborate_count() as u64;
        if total == 0 || elaborate == 0 {
            return 0;
        }
        (2 * elaborate * 10_000 + total) / (2 * total)
    }

    /// Number of held dishes of the cuisine named by `token`
    ///
    /// A token naming no cuisine counts nothing.
    #[must_use]
    pub fn tally_cuisine(&self, token: &str) -> usize {
        token
            .parse::<Cuisine>()
            .map_or(0, |cuisine| self.count_cuisine(cuisine))
    }

    /// Number of held dishes of `cuisine`
    #[must_use]
    pub fn count_cuisine(&self, cuisine: Cuisine) -> usize {
        self.dishes.iter().filter(|d| d.cuisine() == cuisine).count()
    }

    /// Serve every dish prepared in under `threshold` minutes
    pub fn evict_below_prep_time(&mut self, threshold: u32) -> usize {
        let evicted = self.serve_matching(|dish| dish.prep_time() < threshold);
        tracing::info!(threshold, evicted, "evicted quick dishes");
        evicted
    }

    /// Serve every dish of the cuisine named by `token`
    ///
    /// A token naming no cuisine evicts nothing.
    pub fn evict_cuisine(&mut self, token: &str) -> usize {
        let Ok(cuisine) = token.parse::<Cuisine>() else {
            tracing::debug!(token, "unknown cuisine, nothing evicted");
            return 0;
        };
        let evicted = self.serve_matching(|dish| dish.cuisine() == cuisine);
        tracing::info!(%cuisine, evicted, "evicted cuisine");
        evicted
    }

    /// Serve every dish matching `predicate`, judged on a snapshot taken first
    fn serve_matching(&mut self, predicate: impl Fn(&Dish) -> bool) -> usize {
        let snapshot: Vec<Dish> = self.dishes.iter().filter(|&d| predicate(d)).cloned().collect();
        snapshot.iter().filter(|dish| self.serve(dish)).count()
    }

    /// Rewrite every held dish to honour `request`
    ///
    /// Accommodation can shrink an ingredient list, so each dish's elaborate
    /// status is re-checked and the cached count follows it.
    ///
    /// Dishes that differed only in what the request rewrites become equal,
    /// and stay held as duplicates whatever the bag policy says; serving one
    /// removes one.
    pub fn apply_dietary_adjustment(&mut self, request: &DietaryRequest) {
        for dish in self.dishes.iter_mut() {
            let was_elaborate = dish.is_elaborate();
            dish.dietary_accommodate(request);
            match (was_elaborate, dish.is_elaborate()) {
                (true, false) => self.elaborate_count -= 1,
                (false, true) => self.elaborate_count += 1,
                _ => {}
            }
        }
        tracing::info!(dishes = self.len(), ?request, "applied dietary adjustment");
    }

    /// Sum of preparation times, recomputed from the held dishes
    #[must_use]
    pub fn recompute_prep_time_sum(&self) -> u64 {
        self.dishes.iter().map(|d| u64::from(d.prep_time())).sum()
    }

    /// Number of elaborate dishes, recomputed from the held dishes
    #[must_use]
    pub fn recompute_elaborate_count(&self) -> usize {
        self.dishes.iter().filter(|d| d.is_elaborate()).count()
    }

    /// Every held dish rendered, in iteration order
    #[must_use]
    pub fn render_menu(&self) -> String {
        self.dishes.iter().map(Dish::render).collect()
    }

    /// Snapshot of cuisine tallies and aggregates
    #[must_use]
    pub fn summary(&self) -> KitchenReport {
        KitchenReport::from(self)
    }

    /// Cuisine tallies, average prep time and elaborate share as text
    #[must_use]
    pub fn report(&self) -> String {
        self.summary().to_string()
    }
}
