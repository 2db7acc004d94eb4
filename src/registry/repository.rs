//! Registry - generic store of named models

use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::ops::Deref;

use crate::error::{Error, Result};

/// An entity that can be stored in a `Registry`.
pub trait Model {
    /// Human readable kind, used in `NotFound` errors.
    const KIND: &'static str;

    /// The unique key of this entity within its registry.
    fn name(&self) -> &str;
}

/// Result of a soft lookup.
///
/// Both arms dereference to `T`, so callers use the capability methods of the
/// model without checking whether anything was stored.
#[derive(Debug)]
pub enum Entry<'a, T> {
    Found(&'a T),
    /// A Null entity built by the registry's factory with configured defaults.
    Absent(T),
}

impl<'a, T> Entry<'a, T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Entry::Found(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Entry::Absent(_))
    }
}

impl<'a, T: Clone> Entry<'a, T> {
    pub fn into_owned(self) -> T {
        match self {
            Entry::Found(model) => model.clone(),
            Entry::Absent(model) => model,
        }
    }
}

impl<'a, T> Deref for Entry<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Entry::Found(model) => model,
            Entry::Absent(model) => model,
        }
    }
}

type NullFactory<T> = Box<dyn Fn(&str) -> T>;

/// Name-keyed store remembering registration order.
///
/// Not synchronised: all writes go through the owning `Screen`, which is
/// driven from a single main loop.
pub struct Registry<T: Model> {
    entries: HashMap<String, T>,
    /// Names in the order they were first stored
    order: Vec<String>,
    null: NullFactory<T>,
}

impl<T: Model> Registry<T> {
    /// Create an empty registry whose soft lookups fall back to `null`.
    pub fn new(null: impl Fn(&str) -> T + 'static) -> Self {
        Self {
            entries: HashMap::new(),
            order: Vec::new(),
            null: Box::new(null),
        }
    }

    /// Replace the Null factory (e.g. after the terminal was resized).
    pub fn set_null(&mut self, null: impl Fn(&str) -> T + 'static) {
        self.null = Box::new(null);
    }

    /// Insert or replace by the model's own name.
    ///
    /// Replacing keeps the original registration position.
    pub fn store(&mut self, model: T) -> &mut T {
        match self.entries.entry(model.name().to_string()) {
            hash_map::Entry::Occupied(mut slot) => {
                slot.insert(model);
                slot.into_mut()
            }
            hash_map::Entry::Vacant(slot) => {
                self.order.push(slot.key().clone());
                slot.insert(model)
            }
        }
    }

    /// Soft lookup; an absent name yields the Null model.
    pub fn by_name(&self, name: &str) -> Entry<'_, T> {
        match self.entries.get(name) {
            Some(model) => Entry::Found(model),
            None => Entry::Absent((self.null)(name)),
        }
    }

    /// Strict lookup.
    pub fn find(&self, name: &str) -> Result<&T> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::not_found(T::KIND, name))
    }

    /// Strict mutable lookup.
    pub fn find_mut(&mut self, name: &str) -> Result<&mut T> {
        self.entries
            .get_mut(name)
            .ok_or_else(|| Error::not_found(T::KIND, name))
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut T> {
        self.entries.get_mut(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names in registration order.
    pub fn registered(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Position of `name` in registration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n == name)
    }

    /// Models in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|name| self.entries.get(name))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.values_mut()
    }

    pub fn delete(&mut self, name: &str) -> Option<T> {
        let removed = self.entries.remove(name);
        if removed.is_some() {
            self.order.retain(|n| n != name);
        }
        removed
    }

    /// Remove every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Model + Default> Default for Registry<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T: Model> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("kind", &T::KIND)
            .field("registered", &self.order)
            .finish()
    }
}
