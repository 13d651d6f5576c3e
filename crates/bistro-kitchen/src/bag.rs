//! Equality-based bag
//!
//! Unordered collection of owned items. Membership, duplicate detection and
//! removal all go through `PartialEq`; nothing is hashed or ordered.

use serde::{Deserialize, Serialize};

/// Admission policy for a [`Bag`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BagPolicy {
    /// Maximum number of items; `None` is unbounded
    pub capacity: Option<usize>,
    /// Whether an item equal to one already held may be added
    ///
    /// Checked only on [`Bag::add`]. Items mutated in place through
    /// [`Bag::iter_mut`] can become equal to one another afterwards.
    pub allow_duplicates: bool,
}

impl BagPolicy {
    /// Unbounded bag that rejects duplicates
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With capacity limit
    #[inline]
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// With duplicate admission
    #[inline]
    #[must_use]
    pub fn with_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }
}

/// An item the bag refused, handed back to the caller
#[derive(Debug, thiserror::Error)]
pub enum BagRejection<T> {
    /// Bag already holds `capacity` items
    #[error("bag is full ({capacity} items)")]
    Full {
        /// The refused item
        item: T,
        /// Configured capacity
        capacity: usize,
    },

    /// An equal item is already held
    #[error("an equal item is already in the bag")]
    Duplicate {
        /// The refused item
        item: T,
    },
}

impl<T> BagRejection<T> {
    /// Recover the rejected item
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Full { item, .. } | Self::Duplicate { item } => item,
        }
    }
}

/// Unordered, equality-based collection
#[derive(Debug, Clone)]
pub struct Bag<T> {
    items: Vec<T>,
    policy: BagPolicy,
}

impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self::with_policy(BagPolicy::default())
    }
}

impl<T: PartialEq> Bag<T> {
    /// Create empty bag with default policy
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item
    ///
    /// # Errors
    /// Hands the item back when the bag is full, or when an equal item is
    /// held and duplicates are not allowed.
    pub fn add(&mut self, item: T) -> Result<(), BagRejection<T>> {
        if let Some(capacity) = self.policy.capacity {
            if self.items.len() >= capacity {
                return Err(BagRejection::Full { item, capacity });
            }
        }
        if !self.policy.allow_duplicates && self.items.contains(&item) {
            return Err(BagRejection::Duplicate { item });
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove one item equal to `item`, returning the owned value
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.items.iter().position(|held| held == item)?;
        Some(self.items.swap_remove(index))
    }

    /// Whether an equal item is held
    #[inline]
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Number of held items equal to `item`
    #[must_use]
    pub fn frequency_of(&self, item: &T) -> usize {
        self.items.iter().filter(|held| *held == item).count()
    }
}

impl<T> Bag<T> {
    /// Create empty bag with `policy`
    #[inline]
    #[must_use]
    pub fn with_policy(policy: BagPolicy) -> Self {
        Self {
            items: Vec::new(),
            policy,
        }
    }

    /// Admission policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> BagPolicy {
        self.policy
    }

    /// Number of held items
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is held
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate held items, in no particular order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate held items mutably, in no particular order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Drop every item
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, T> IntoIterator for &'a Bag<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
