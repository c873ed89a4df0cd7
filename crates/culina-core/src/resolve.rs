//! Resolution tables: host item/fluid identities to domain definitions.
//!
//! Three parallel lookup chains, one per target domain type:
//!
//! 1. Exact [`ItemKey`] (item kind + variant) match, tried first.
//! 2. Tag aliases -- a many-to-one map from host tag string to definition,
//!    first hit over the item's host-supplied tag list wins.
//! 3. For fluids, a direct [`FluidKind`] to spice map (no tag tier).
//!
//! Resolution is pure and never mutates the tables. Bindings are written
//! during one-time startup wiring and are last-write-wins.

use std::collections::HashMap;

use crate::id::{FluidKind, ItemKey, MaterialId, SpiceId};

/// A two-tier lookup chain: exact item keys first, then tag aliases.
#[derive(Debug)]
pub struct LookupChain<I> {
    exact: HashMap<ItemKey, I>,
    tags: HashMap<String, I>,
}

// Derived `Default` would bound `I: Default`, which the id newtypes
// deliberately do not implement. Empty tables need no `I` at all.
impl<I> Default for LookupChain<I> {
    fn default() -> Self {
        Self {
            exact: HashMap::new(),
            tags: HashMap::new(),
        }
    }
}

impl<I: Copy> LookupChain<I> {
    /// Bind an exact item key. Last write wins.
    pub fn bind_item(&mut self, key: ItemKey, id: I) {
        self.exact.insert(key, id);
    }

    /// Bind a tag alias. Last write wins.
    pub fn bind_tag(&mut self, tag: &str, id: I) {
        self.tags.insert(tag.to_string(), id);
    }

    /// Resolve an item against both tiers. Exact matches always win over
    /// tag aliases; among tags, the first hit in `tags` order wins.
    pub fn resolve(&self, key: ItemKey, tags: &[impl AsRef<str>]) -> Option<I> {
        if let Some(id) = self.exact.get(&key) {
            return Some(*id);
        }
        tags.iter()
            .find_map(|tag| self.tags.get(tag.as_ref()).copied())
    }

    /// Same precedence as [`resolve`](Self::resolve) without materializing
    /// the result. Used for cheap pre-checks.
    pub fn is_known(&self, key: ItemKey, tags: &[impl AsRef<str>]) -> bool {
        self.exact.contains_key(&key) || tags.iter().any(|tag| self.tags.contains_key(tag.as_ref()))
    }
}

/// The full set of resolution tables owned by a culinary context.
#[derive(Debug, Default)]
pub struct ResolutionTables {
    /// Item identity to material.
    pub materials: LookupChain<MaterialId>,
    /// Item identity to spice.
    pub spices: LookupChain<SpiceId>,
    /// Fluid identity to spice. Single-tier.
    fluid_spices: HashMap<FluidKind, SpiceId>,
}

impl ResolutionTables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a fluid kind to a spice. Last write wins.
    pub fn bind_fluid_spice(&mut self, fluid: FluidKind, spice: SpiceId) {
        self.fluid_spices.insert(fluid, spice);
    }

    pub fn find_fluid_spice(&self, fluid: FluidKind) -> Option<SpiceId> {
        self.fluid_spices.get(&fluid).copied()
    }

    pub fn is_known_fluid_spice(&self, fluid: FluidKind) -> bool {
        self.fluid_spices.contains_key(&fluid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_TAGS: &[&str] = &[];

    #[test]
    fn exact_match_wins_over_tag() {
        let mut chain: LookupChain<MaterialId> = LookupChain::default();
        let key = ItemKey::new(1, 0);
        chain.bind_item(key, MaterialId(0));
        chain.bind_tag("cropTomato", MaterialId(1));

        // Registered both ways: the exact binding must win.
        assert_eq!(chain.resolve(key, &["cropTomato"]), Some(MaterialId(0)));
    }

    #[test]
    fn tag_fallback_when_no_exact_match() {
        let mut chain: LookupChain<MaterialId> = LookupChain::default();
        chain.bind_tag("cropTomato", MaterialId(1));
        assert_eq!(
            chain.resolve(ItemKey::new(9, 9), &["cropTomato"]),
            Some(MaterialId(1))
        );
    }

    #[test]
    fn empty_tables_construct_without_default_ids() {
        // The id newtypes have no `Default`; empty tables must not need one.
        let tables = ResolutionTables::default();
        assert_eq!(tables.materials.resolve(ItemKey::new(1, 0), NO_TAGS), None);
        assert_eq!(tables.spices.resolve(ItemKey::new(1, 0), NO_TAGS), None);
    }

    #[test]
    fn unknown_resolves_to_none() {
        let chain: LookupChain<MaterialId> = LookupChain::default();
        assert_eq!(chain.resolve(ItemKey::new(1, 0), NO_TAGS), None);
        assert!(!chain.is_known(ItemKey::new(1, 0), NO_TAGS));
    }

    #[test]
    fn is_known_matches_resolve_precedence() {
        let mut chain: LookupChain<MaterialId> = LookupChain::default();
        let key = ItemKey::new(1, 0);
        chain.bind_item(key, MaterialId(0));
        chain.bind_tag("egg", MaterialId(2));

        assert!(chain.is_known(key, NO_TAGS));
        assert!(chain.is_known(ItemKey::new(5, 5), &["egg"]));
        assert!(!chain.is_known(ItemKey::new(5, 5), &["unrelated"]));
    }

    #[test]
    fn binding_is_last_write_wins() {
        let mut chain: LookupChain<MaterialId> = LookupChain::default();
        let key = ItemKey::new(1, 0);
        chain.bind_item(key, MaterialId(0));
        chain.bind_item(key, MaterialId(7));
        assert_eq!(chain.resolve(key, NO_TAGS), Some(MaterialId(7)));
    }

    #[test]
    fn fluid_lookup_has_no_tag_tier() {
        let mut tables = ResolutionTables::new();
        tables.bind_fluid_spice(FluidKind(3), SpiceId(1));
        assert_eq!(tables.find_fluid_spice(FluidKind(3)), Some(SpiceId(1)));
        assert_eq!(tables.find_fluid_spice(FluidKind(4)), None);
        assert!(tables.is_known_fluid_spice(FluidKind(3)));
        assert!(!tables.is_known_fluid_spice(FluidKind(4)));
    }

    #[test]
    fn variant_sensitivity() {
        // Same item kind, different variants resolve to different materials.
        let mut chain: LookupChain<MaterialId> = LookupChain::default();
        chain.bind_item(ItemKey::new(2, 0), MaterialId(10));
        chain.bind_item(ItemKey::new(2, 1), MaterialId(11));
        assert_eq!(chain.resolve(ItemKey::new(2, 0), NO_TAGS), Some(MaterialId(10)));
        assert_eq!(chain.resolve(ItemKey::new(2, 1), NO_TAGS), Some(MaterialId(11)));
    }
}
