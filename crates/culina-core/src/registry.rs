//! Append-only identifier registries.
//!
//! Every domain definition (material, spice, effect) is registered once at
//! startup under a unique string name and addressed afterwards by a dense
//! `u32` id. Registration of a name that is already taken is a configuration
//! error and aborts context construction; lookup of an unknown name is not an
//! error and yields `None`. There is no removal: registries are frozen for
//! the process lifetime once wiring completes.

use std::collections::HashMap;

/// Implemented by the dense id newtypes that key a [`Registry`].
pub trait RegistryId: Copy {
    fn from_raw(raw: u32) -> Self;
    fn raw(self) -> u32;
}

macro_rules! impl_registry_id {
    ($($id:ty),*) => {
        $(impl RegistryId for $id {
            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }
            fn raw(self) -> u32 {
                self.0
            }
        })*
    };
}

impl_registry_id!(crate::id::MaterialId, crate::id::SpiceId, crate::id::EffectId);

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two definitions claimed the same name. Startup configuration error.
    #[error("duplicate identifier: {0}")]
    Duplicate(String),
}

/// An append-only registry mapping string names to definitions of type `T`,
/// with dense ids of type `I` assigned in registration order.
#[derive(Debug)]
pub struct Registry<I, T> {
    defs: Vec<T>,
    name_to_id: HashMap<String, I>,
}

impl<I: RegistryId, T> Registry<I, T> {
    pub fn new() -> Self {
        Self {
            defs: Vec::new(),
            name_to_id: HashMap::new(),
        }
    }

    /// Register a definition under `name`. Returns its id, or
    /// [`RegistryError::Duplicate`] if the name is already taken.
    pub fn register(&mut self, name: &str, value: T) -> Result<I, RegistryError> {
        if self.name_to_id.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        let id = I::from_raw(self.defs.len() as u32);
        self.defs.push(value);
        self.name_to_id.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up an id by name. Unknown names are an absence, never an error.
    pub fn lookup(&self, name: &str) -> Option<I> {
        self.name_to_id.get(name).copied()
    }

    /// Fetch a definition by id.
    pub fn get(&self, id: I) -> Option<&T> {
        self.defs.get(id.raw() as usize)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Iterate over all registered definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, def)| (I::from_raw(i as u32), def))
    }
}

impl<I: RegistryId, T> Default for Registry<I, T> {
    fn default() -> Self {
        Self::new()
    }
}
