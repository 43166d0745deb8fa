use super::{check_insert_pos, check_remove_pos, PositionalList};
use crate::error::{DexError, Result};
use tracing::trace;

/// Fixed-capacity list over a contiguous slot array.
///
/// Slots `[0, len)` are always occupied and slots `[len, capacity)` are
/// always empty; insert and remove rotate the affected range so the empty
/// slot moves to where it is needed.
#[derive(Debug)]
pub struct BoundedList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> BoundedList<T> {
    /// Allocates room for `capacity` elements up front.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| DexError::Allocation { capacity })?;
        slots.resize_with(capacity, || None);

        Ok(Self {
            slots: slots.into_boxed_slice(),
            len: 0,
        })
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }
}

impl<T: Clone> PositionalList<T> for BoundedList<T> {
    fn len(&self) -> usize {
        self.len
    }

    fn capacity(&self) -> Option<usize> {
        Some(self.slots.len())
    }

    fn insert(&mut self, item: &T, pos: usize) -> Result<()> {
        check_insert_pos(pos, self.len)?;
        if self.is_full() {
            return Err(DexError::CapacityExceeded {
                capacity: self.slots.len(),
            });
        }

        // Slot `len` is empty; rotating it to `pos` shifts [pos, len) right by one.
        self.slots[pos..=self.len].rotate_right(1);
        self.slots[pos] = Some(item.clone());
        self.len += 1;
        trace!(pos, len = self.len, "bounded insert");
        Ok(())
    }

    fn remove(&mut self, pos: usize) -> Result<T> {
        check_remove_pos(pos, self.len)?;

        let item = self.slots[pos].take();
        // The emptied slot ends up at `len - 1`, clearing the vacated tail.
        self.slots[pos..self.len].rotate_left(1);
        self.len -= 1;
        trace!(pos, len = self.len, "bounded remove");
        item.ok_or_else(|| DexError::invalid_position(pos, self.len + 1))
    }

    fn get(&self, pos: usize) -> Result<&T> {
        check_remove_pos(pos, self.len)?;
        self.slots[pos]
            .as_ref()
            .ok_or_else(|| DexError::invalid_position(pos, self.len))
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.slots[..self.len].iter().flatten())
    }

    fn clear(&mut self) {
        for slot in self.slots[..self.len].iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }
}
