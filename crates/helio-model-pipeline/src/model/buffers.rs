//! Model-owned buffer table
//!
//! Runtime primitives never hold the 2D position data they reference; they
//! keep a [`BufferHandle`] into a table owned by the model. Slots are reused
//! after removal, with a generation counter so a stale handle never resolves
//! to a newer buffer.

/// Handle into a [`BufferTable`]
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub struct BufferHandle {
    index: u32,
    generation: u32,
}

impl BufferHandle {
    pub fn index(&self) -> u32 {
        self.index
    }
}

struct Slot<T> {
    generation: u32,
    value: Option<T>,
}

/// Slot table of buffers addressed by generational handles
pub struct BufferTable<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> BufferTable<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    pub fn insert(&mut self, value: T) -> BufferHandle {
        self.len += 1;

        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.value = Some(value);
            return BufferHandle {
                index,
                generation: slot.generation,
            };
        }

        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            value: Some(value),
        });
        BufferHandle {
            index,
            generation: 0,
        }
    }

    pub fn get(&self, handle: BufferHandle) -> Option<&T> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.value.as_ref())
    }

    /// Remove and return the buffer; the handle is dead afterwards
    pub fn remove(&mut self, handle: BufferHandle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }

        let value = slot.value.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(handle.index);
        self.len -= 1;
        Some(value)
    }

    pub fn contains(&self, handle: BufferHandle) -> bool {
        self.get(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Default for BufferTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_get_remove() {
        let mut table = BufferTable::new();
        let a = table.insert(vec![1.0f32, 2.0]);
        let b = table.insert(vec![3.0f32]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get(a), Some(&vec![1.0, 2.0]));
        assert_eq!(table.remove(b), Some(vec![3.0]));
        assert_eq!(table.remove(b), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_stale_handle_does_not_alias_reused_slot() {
        let mut table = BufferTable::new();
        let old = table.insert("old");
        table.remove(old);

        let new = table.insert("new");
        assert_eq!(new.index(), old.index());
        assert_eq!(table.get(old), None);
        assert!(!table.contains(old));
        assert_eq!(table.get(new), Some(&"new"));
    }
}
