use slotmap::SlotMap;
use crate::core::{BodyHandle, ConstraintHandle};
use crate::error::SandboxError;
use crate::Result;

/// Generic storage trait for simulation objects.
///
/// Iteration follows slot order, which is the registry order the collision
/// resolver relies on.
pub trait Storage<T, H> {
    /// Creates a new empty storage
    fn new() -> Self;

    /// Adds an item to the storage and returns its handle
    fn add(&mut self, item: T) -> H;

    /// Gets a reference to an item by its handle
    fn get(&self, handle: H) -> Option<&T>;

    /// Gets a mutable reference to an item by its handle
    fn get_mut(&mut self, handle: H) -> Option<&mut T>;

    /// Removes an item from the storage
    fn remove(&mut self, handle: H) -> Option<T>;

    /// Returns whether the handle still resolves
    fn contains(&self, handle: H) -> bool;

    /// Returns the number of items in the storage
    fn len(&self) -> usize;

    /// Returns whether the storage is empty
    fn is_empty(&self) -> bool;

    /// Clears all items from the storage
    fn clear(&mut self);

    /// Returns all handles in registry order
    fn handles(&self) -> Vec<H>;

    /// Returns an iterator over all items
    fn iter<'a>(&'a self) -> impl Iterator<Item = (H, &'a T)> + 'a where T: 'a;

    /// Returns a mutable iterator over all items
    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (H, &'a mut T)> + 'a where T: 'a;
}

/// Slot-arena storage for bodies
#[derive(Debug, Clone)]
pub struct BodyStorage<T> {
    items: SlotMap<BodyHandle, T>,
}

impl<T> Storage<T, BodyHandle> for BodyStorage<T> {
    fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
        }
    }

    fn add(&mut self, item: T) -> BodyHandle {
        self.items.insert(item)
    }

    fn get(&self, handle: BodyHandle) -> Option<&T> {
        self.items.get(handle)
    }

    fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut T> {
        self.items.get_mut(handle)
    }

    fn remove(&mut self, handle: BodyHandle) -> Option<T> {
        self.items.remove(handle)
    }

    fn contains(&self, handle: BodyHandle) -> bool {
        self.items.contains_key(handle)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn handles(&self) -> Vec<BodyHandle> {
        self.items.keys().collect()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (BodyHandle, &'a T)> + 'a where T: 'a {
        self.items.iter()
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (BodyHandle, &'a mut T)> + 'a where T: 'a {
        self.items.iter_mut()
    }
}

impl<T> BodyStorage<T> {
    /// Gets a body by its handle, returning an error if not found
    pub fn get_body(&self, handle: BodyHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| SandboxError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if not found
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| SandboxError::ResourceNotFound(format!("Body with handle {:?} not found", handle)))
    }

    /// Borrows two distinct bodies mutably at once.
    ///
    /// Returns `None` if the handles are equal or either no longer resolves.
    pub fn get_pair_mut(&mut self, a: BodyHandle, b: BodyHandle) -> Option<[&mut T; 2]> {
        self.items.get_disjoint_mut([a, b])
    }
}

impl<T> Default for BodyStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot-arena storage for constraints
#[derive(Debug, Clone)]
pub struct ConstraintStorage<T> {
    items: SlotMap<ConstraintHandle, T>,
}

impl<T> Storage<T, ConstraintHandle> for ConstraintStorage<T> {
    fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
        }
    }

    fn add(&mut self, item: T) -> ConstraintHandle {
        self.items.insert(item)
    }

    fn get(&self, handle: ConstraintHandle) -> Option<&T> {
        self.items.get(handle)
    }

    fn get_mut(&mut self, handle: ConstraintHandle) -> Option<&mut T> {
        self.items.get_mut(handle)
    }

    fn remove(&mut self, handle: ConstraintHandle) -> Option<T> {
        self.items.remove(handle)
    }

    fn contains(&self, handle: ConstraintHandle) -> bool {
        self.items.contains_key(handle)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn handles(&self) -> Vec<ConstraintHandle> {
        self.items.keys().collect()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (ConstraintHandle, &'a T)> + 'a where T: 'a {
        self.items.iter()
    }

    fn iter_mut<'a>(&'a mut self) -> impl Iterator<Item = (ConstraintHandle, &'a mut T)> + 'a where T: 'a {
        self.items.iter_mut()
    }
}

impl<T> ConstraintStorage<T> {
    /// Gets a constraint by its handle, returning an error if not found
    pub fn get_constraint(&self, handle: ConstraintHandle) -> Result<&T> {
        self.get(handle)
            .ok_or_else(|| SandboxError::ResourceNotFound(format!("Constraint with handle {:?} not found", handle)))
    }

    /// Gets a mutable reference to a constraint by its handle, returning an error if not found
    pub fn get_constraint_mut(&mut self, handle: ConstraintHandle) -> Result<&mut T> {
        self.get_mut(handle)
            .ok_or_else(|| SandboxError::ResourceNotFound(format!("Constraint with handle {:?} not found", handle)))
    }

    /// Removes every constraint for which `keep` returns false and returns the
    /// removed handles
    pub fn retain<F>(&mut self, mut keep: F) -> Vec<ConstraintHandle>
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = Vec::new();
        self.items.retain(|handle, item| {
            let kept = keep(&*item);
            if !kept {
                removed.push(handle);
            }
            kept
        });
        removed
    }
}

impl<T> Default for ConstraintStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_handles_never_resolve_again() {
        let mut storage: BodyStorage<u32> = BodyStorage::new();
        let a = storage.add(1);
        storage.remove(a);
        let b = storage.add(2);

        assert_ne!(a, b);
        assert!(storage.get(a).is_none());
        assert!(storage.get_body(a).is_err());
        assert_eq!(storage.get(b), Some(&2));
    }

    #[test]
    fn pair_borrow_rejects_aliasing() {
        let mut storage: BodyStorage<u32> = BodyStorage::new();
        let a = storage.add(1);
        let b = storage.add(2);

        assert!(storage.get_pair_mut(a, a).is_none());
        if let Some([x, y]) = storage.get_pair_mut(a, b) {
            std::mem::swap(x, y);
        }
        assert_eq!(storage.get(a), Some(&2));
    }

    #[test]
    fn retain_reports_removed_handles() {
        let mut storage: ConstraintStorage<u32> = ConstraintStorage::new();
        let keep = storage.add(1);
        let drop = storage.add(2);

        let removed = storage.retain(|v| *v == 1);
        assert_eq!(removed, vec![drop]);
        assert!(storage.contains(keep));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn iteration_follows_insertion_order_without_removals() {
        let mut storage: BodyStorage<u32> = BodyStorage::new();
        let handles: Vec<_> = (0..5).map(|i| storage.add(i)).collect();
        assert_eq!(storage.handles(), handles);
    }
}
