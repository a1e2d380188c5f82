//=========================================================================
// Order Table
//=========================================================================
//
// Address → order map that remembers insertion order.
//
// Storage mirrors the old stack-based manager: a HashMap for lookups and
// a Vec of keys for deterministic iteration. Iteration order is the
// order in which addresses were first inserted; updating an existing
// entry keeps its position.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

//=== Internal Dependencies ===============================================

use crate::core::SceneAddress;

//=== OrderTable ==========================================================

/// Scene order values keyed by address, iterated in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct OrderTable {
    orders: HashMap<SceneAddress, i32>,
    insertion: Vec<SceneAddress>,
}

impl OrderTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order for `address`, appending it if new.
    ///
    /// Returns the previous order if the address was already present.
    pub fn set(&mut self, address: &SceneAddress, order: i32) -> Option<i32> {
        match self.orders.get_mut(address) {
            Some(slot) => Some(std::mem::replace(slot, order)),
            None => {
                self.orders.insert(address.clone(), order);
                self.insertion.push(address.clone());
                None
            }
        }
    }

    /// Inserts `order` only if the address has no entry yet.
    ///
    /// Returns true if an entry was created.
    pub fn insert_if_absent(&mut self, address: &SceneAddress, order: i32) -> bool {
        if self.orders.contains_key(address) {
            return false;
        }
        self.set(address, order);
        true
    }

    /// Removes `address`. Idempotent.
    pub fn remove(&mut self, address: &SceneAddress) -> Option<i32> {
        let removed = self.orders.remove(address)?;
        if let Some(pos) = self.insertion.iter().position(|a| a == address) {
            self.insertion.remove(pos);
        }
        Some(removed)
    }

    pub fn get(&self, address: &SceneAddress) -> Option<i32> {
        self.orders.get(address).copied()
    }

    pub fn contains(&self, address: &SceneAddress) -> bool {
        self.orders.contains_key(address)
    }

    pub fn len(&self) -> usize {
        self.insertion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&SceneAddress, i32)> + '_ {
        self.insertion
            .iter()
            .filter_map(move |address| self.orders.get(address).map(|&order| (address, order)))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
