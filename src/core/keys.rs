//! core::keys
//!
//! Monotonic primary-key generator shared by every entity kind.

use super::types::RecordId;

/// Issues strictly increasing [`RecordId`]s.
///
/// Owned by [`Storage`](crate::store::Storage); there is no process-global
/// counter. Keys are never reused, even after the record holding one is
/// deleted. Once `i64::MAX` has been issued the generator is exhausted and
/// issues nothing further.
///
/// # Example
///
/// ```
/// use recipebook::core::keys::KeyGenerator;
/// use recipebook::core::types::RecordId;
///
/// let mut keys = KeyGenerator::starting_at(RecordId::new(10));
/// assert_eq!(keys.next_key(), Some(RecordId::new(10)));
/// assert_eq!(keys.next_key(), Some(RecordId::new(11)));
/// assert_eq!(keys.peek(), Some(RecordId::new(12)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyGenerator {
    /// `None` once every key has been issued.
    next: Option<i64>,
}

impl Default for KeyGenerator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

impl KeyGenerator {
    /// Create a generator whose first key is `first`.
    pub fn starting_at(first: RecordId) -> Self {
        Self {
            next: Some(first.get()),
        }
    }

    /// Issue the next key, or `None` if the key space is used up.
    pub fn next_key(&mut self) -> Option<RecordId> {
        let key = self.next?;
        self.next = key.checked_add(1);
        Some(RecordId::new(key))
    }

    /// The key the next call to [`next_key`](Self::next_key) will return.
    pub fn peek(&self) -> Option<RecordId> {
        self.next.map(RecordId::new)
    }

    /// How many keys can still be issued.
    pub fn remaining(&self) -> u64 {
        match self.next {
            Some(next) => i64::MAX.abs_diff(next) + 1,
            None => 0,
        }
    }

    /// Move the generator past `key` if it has not already passed it.
    ///
    /// Used when records with externally chosen keys are loaded, so issued
    /// keys never collide with them. Reserving `i64::MAX` exhausts the
    /// generator.
    pub fn reserve_through(&mut self, key: RecordId) {
        if let Some(next) = self.next {
            if key.get() >= next {
                self.next = key.get().checked_add(1);
            }
        }
    }
}
