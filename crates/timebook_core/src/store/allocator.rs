//! Monotonic id allocation.
//!
//! # Invariants
//! - Issued ids strictly increase starting from 0.
//! - The counter never moves backwards, so removed ids are never reissued.
//! - `u64::MAX` is never issued: the watermark after it would not fit.

use crate::model::id::EntityId;
use crate::store::error::{StoreError, StoreResult};
use std::marker::PhantomData;

/// Per-kind id counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator<I> {
    next: u64,
    _kind: PhantomData<I>,
}

impl<I: EntityId> IdAllocator<I> {
    pub fn new() -> Self {
        Self {
            next: 0,
            _kind: PhantomData,
        }
    }

    /// Issues the next id and advances the counter.
    ///
    /// # Errors
    /// - `IdsExhausted` once the counter can no longer advance.
    pub fn next_id(&mut self) -> StoreResult<I> {
        let advanced = self
            .next
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted(I::KIND))?;
        let id = I::from_raw(self.next);
        self.next = advanced;
        Ok(id)
    }

    /// Id the next `next_id` call will return, without consuming it.
    pub fn peek(&self) -> I {
        I::from_raw(self.next)
    }

    /// Next-id watermark, as persisted.
    pub fn watermark(&self) -> u64 {
        self.next
    }

    /// Raises the counter to at least `watermark`. Lower values are ignored.
    pub fn resume_from(&mut self, watermark: u64) {
        self.next = self.next.max(watermark);
    }
}

impl<I: EntityId> Default for IdAllocator<I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::IdAllocator;
    use crate::model::id::PersonId;
    use crate::store::error::StoreError;

    #[test]
    fn issues_increasing_ids_from_zero() {
        let mut allocator = IdAllocator::<PersonId>::new();
        assert_eq!(allocator.next_id().unwrap(), PersonId::new(0));
        assert_eq!(allocator.next_id().unwrap(), PersonId::new(1));
        assert_eq!(allocator.peek(), PersonId::new(2));
        assert_eq!(allocator.watermark(), 2);
    }

    #[test]
    fn resume_from_never_lowers_counter() {
        let mut allocator = IdAllocator::<PersonId>::new();
        allocator.resume_from(10);
        assert_eq!(allocator.next_id().unwrap(), PersonId::new(10));
        allocator.resume_from(3);
        assert_eq!(allocator.next_id().unwrap(), PersonId::new(11));
    }

    #[test]
    fn exhausted_counter_errors_instead_of_wrapping() {
        let mut allocator = IdAllocator::<PersonId>::new();
        allocator.resume_from(u64::MAX - 1);
        assert_eq!(allocator.next_id().unwrap(), PersonId::new(u64::MAX - 1));
        assert_eq!(allocator.next_id(), Err(StoreError::IdsExhausted("person")));
        assert_eq!(allocator.watermark(), u64::MAX);
    }
}
