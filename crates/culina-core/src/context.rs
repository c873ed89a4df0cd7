//! The culinary context: registries plus resolution tables.
//!
//! One `CulinaryContext` is constructed explicitly at process start, wired
//! with definitions and bindings, and then passed by shared reference to
//! every component that resolves or registers. After wiring it is
//! read-only; nothing in the engine writes to it past startup.

use crate::effect::Effect;
use crate::fixed::Fixed32;
use crate::id::{EffectId, FluidKind, ItemKey, MaterialId, SpiceId};
use crate::ingredient::Ingredient;
use crate::material::{Form, Material, Spice};
use crate::registry::{Registry, RegistryError};
use crate::resolve::ResolutionTables;

/// Registries and resolution tables for one game instance.
#[derive(Debug, Default)]
pub struct CulinaryContext {
    pub materials: Registry<MaterialId, Material>,
    pub spices: Registry<SpiceId, Spice>,
    pub effects: Registry<EffectId, Effect>,
    pub tables: ResolutionTables,
}

impl CulinaryContext {
    pub fn new() -> Self {
        Self::default()
    }

    // -- registration -------------------------------------------------------

    /// Register a material under its own name.
    pub fn register_material(&mut self, material: Material) -> Result<MaterialId, RegistryError> {
        let name = material.name.clone();
        self.materials.register(&name, material)
    }

    /// Register a spice under its own name.
    pub fn register_spice(&mut self, spice: Spice) -> Result<SpiceId, RegistryError> {
        let name = spice.name.clone();
        self.spices.register(&name, spice)
    }

    /// Register an effect under an explicit name.
    pub fn register_effect(&mut self, name: &str, effect: Effect) -> Result<EffectId, RegistryError> {
        self.effects.register(name, effect)
    }

    // -- resolution ---------------------------------------------------------

    /// Resolve a host item to a material: exact key first, then tag aliases.
    pub fn find_material(&self, key: ItemKey, tags: &[impl AsRef<str>]) -> Option<&Material> {
        self.tables
            .materials
            .resolve(key, tags)
            .and_then(|id| self.materials.get(id))
    }

    pub fn find_material_id(&self, key: ItemKey, tags: &[impl AsRef<str>]) -> Option<MaterialId> {
        self.tables.materials.resolve(key, tags)
    }

    pub fn is_known_material(&self, key: ItemKey, tags: &[impl AsRef<str>]) -> bool {
        self.tables.materials.is_known(key, tags)
    }

    /// Resolve a host item to a spice with the same precedence.
    pub fn find_spice(&self, key: ItemKey, tags: &[impl AsRef<str>]) -> Option<SpiceId> {
        self.tables.spices.resolve(key, tags)
    }

    pub fn is_known_spice(&self, key: ItemKey, tags: &[impl AsRef<str>]) -> bool {
        self.tables.spices.is_known(key, tags)
    }

    /// Resolve a host fluid to a spice. Single-tier.
    pub fn find_fluid_spice(&self, fluid: FluidKind) -> Option<SpiceId> {
        self.tables.find_fluid_spice(fluid)
    }

    pub fn is_known_fluid_spice(&self, fluid: FluidKind) -> bool {
        self.tables.is_known_fluid_spice(fluid)
    }

    // -- conversion ---------------------------------------------------------

    /// Build an ingredient from a recognized host item, in its whole form.
    /// `None` when the item does not resolve to a material.
    pub fn ingredient_from_item(
        &self,
        key: ItemKey,
        tags: &[impl AsRef<str>],
        size: Fixed32,
    ) -> Option<Ingredient> {
        let id = self.find_material_id(key, tags)?;
        Some(Ingredient::new(id, Form::Full, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::f64_to_fixed32;

    fn wired() -> (CulinaryContext, MaterialId, SpiceId) {
        let mut ctx = CulinaryContext::new();
        let tomato = ctx
            .register_material(Material::new("tomato", 0xFFD72E24, 1, Fixed32::ZERO))
            .unwrap();
        let salt = ctx.register_spice(Spice::new("salt", 0xFFF9FDFE)).unwrap();
        ctx.tables.materials.bind_item(ItemKey::new(1, 0), tomato);
        ctx.tables.materials.bind_tag("cropTomato", tomato);
        ctx.tables.spices.bind_tag("dustSalt", salt);
        ctx.tables.bind_fluid_spice(FluidKind(1), salt);
        (ctx, tomato, salt)
    }

    const NO_TAGS: &[&str] = &[];

    #[test]
    fn duplicate_material_registration_fails() {
        let mut ctx = CulinaryContext::new();
        ctx.register_material(Material::new("rice", 0, 1, Fixed32::ZERO))
            .unwrap();
        assert!(
            ctx.register_material(Material::new("rice", 0, 2, Fixed32::ZERO))
                .is_err()
        );
    }

    #[test]
    fn find_material_resolves_both_tiers() {
        let (ctx, tomato, _) = wired();
        assert_eq!(ctx.find_material_id(ItemKey::new(1, 0), NO_TAGS), Some(tomato));
        assert_eq!(
            ctx.find_material_id(ItemKey::new(8, 8), &["cropTomato"]),
            Some(tomato)
        );
        assert_eq!(ctx.find_material(ItemKey::new(1, 0), NO_TAGS).unwrap().name, "tomato");
    }

    #[test]
    fn spice_resolution_by_tag_and_fluid() {
        let (ctx, _, salt) = wired();
        assert_eq!(ctx.find_spice(ItemKey::new(9, 0), &["dustSalt"]), Some(salt));
        assert_eq!(ctx.find_fluid_spice(FluidKind(1)), Some(salt));
        assert!(ctx.is_known_fluid_spice(FluidKind(1)));
        assert!(!ctx.is_known_fluid_spice(FluidKind(2)));
    }

    #[test]
    fn ingredient_from_unknown_item_is_none() {
        let (ctx, _, _) = wired();
        assert!(
            ctx.ingredient_from_item(ItemKey::new(99, 0), NO_TAGS, f64_to_fixed32(1.0))
                .is_none()
        );
    }

    #[test]
    fn ingredient_from_item_starts_whole() {
        let (ctx, tomato, _) = wired();
        let ing = ctx
            .ingredient_from_item(ItemKey::new(1, 0), NO_TAGS, f64_to_fixed32(1.0))
            .unwrap();
        assert_eq!(ing.material, tomato);
        assert_eq!(ing.form, Form::Full);
    }
}
