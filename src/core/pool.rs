// src/core/pool.rs

use num::BigInt;
use num::Zero;

/// LIFO recycling arena for big-integer scratch values.
///
/// The divide-and-conquer routines need a handful of temporaries per
/// recursion step; popping a previously used slot and overwriting it with
/// `clone_from` reuses its heap allocation instead of paying the allocator
/// on every call. A popped slot has arbitrary content. Every `pop` must be
/// balanced by exactly one `push` before the owning scope returns; results
/// returned to a caller carry their slot with them, and the caller pushes
/// the slot back once the value is no longer needed.
///
/// A pool is owned by a single recursion stack and is never shared across
/// threads; parallel tasks each build into their own pool.
pub struct IntegerPool {
    slots: Vec<BigInt>,
}

impl IntegerPool {
    pub fn new() -> Self {
        IntegerPool { slots: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        IntegerPool {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Takes a slot out of the pool, allocating a fresh one when the pool
    /// is empty. The returned value is arbitrary and must be overwritten.
    pub fn pop(&mut self) -> BigInt {
        self.slots.pop().unwrap_or_else(BigInt::zero)
    }

    /// Returns a slot to the pool for later reuse. The value is dead; only
    /// its storage survives.
    pub fn push(&mut self, slot: BigInt) {
        self.slots.push(slot);
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Frees all pooled storage.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl Default for IntegerPool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_on_empty_pool_allocates() {
        let mut pool = IntegerPool::new();
        let slot = pool.pop();
        assert_eq!(slot, BigInt::zero());
        assert!(pool.is_empty());
    }

    #[test]
    fn test_push_pop_recycles_last_slot() {
        let mut pool = IntegerPool::new();
        pool.push(BigInt::from(42));
        pool.push(BigInt::from(7));
        // LIFO: the most recently pushed slot comes back first.
        assert_eq!(pool.pop(), BigInt::from(7));
        assert_eq!(pool.pop(), BigInt::from(42));
        assert!(pool.is_empty());
    }

    #[test]
    fn test_clear_drops_all_slots() {
        let mut pool = IntegerPool::new();
        for i in 0..10 {
            pool.push(BigInt::from(i));
        }
        assert_eq!(pool.len(), 10);
        pool.clear();
        assert!(pool.is_empty());
    }
}
