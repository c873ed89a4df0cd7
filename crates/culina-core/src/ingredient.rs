//! Ingredients: sized, mutable material instances inside a dish.

use serde::{Deserialize, Serialize};

use crate::fixed::Fixed32;
use crate::id::MaterialId;
use crate::material::{Form, Material};

// ---------------------------------------------------------------------------
// Traits
// ---------------------------------------------------------------------------

/// A doneness tag on an ingredient. `Undercooked` and `Overcooked` are
/// mutually exclusive; the transition between them is one-directional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum IngredientTrait {
    Undercooked = 0,
    Overcooked,
}

impl IngredientTrait {
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// A set of ingredient traits, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSet(u8);

impl TraitSet {
    pub const EMPTY: TraitSet = TraitSet(0);

    pub fn insert(&mut self, t: IngredientTrait) {
        self.0 |= t.bit();
    }

    pub fn remove(&mut self, t: IngredientTrait) {
        self.0 &= !t.bit();
    }

    pub fn contains(&self, t: IngredientTrait) -> bool {
        self.0 & t.bit() != 0
    }
}

// ---------------------------------------------------------------------------
// Ingredient
// ---------------------------------------------------------------------------

/// A sized instance of a material contributed to a dish. Owned by exactly
/// one dish while uncooked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub material: MaterialId,
    pub form: Form,
    /// Size/quantity scalar. Contributions scale linearly with it.
    pub size: Fixed32,
    /// Accumulated heat from cooking passes.
    pub heat: i32,
    pub traits: TraitSet,
}

impl Ingredient {
    /// A fresh ingredient starts undercooked.
    pub fn new(material: MaterialId, form: Form, size: Fixed32) -> Self {
        let mut traits = TraitSet::EMPTY;
        traits.insert(IngredientTrait::Undercooked);
        Self {
            material,
            form,
            size,
            heat: 0,
            traits,
        }
    }

    /// Food level contributed to the dish, scaled by size.
    pub fn food_level(&self, material: &Material) -> i32 {
        (Fixed32::from_num(material.food_level) * self.size).to_num()
    }

    /// Saturation modifier contributed to the dish, scaled by size.
    pub fn saturation(&self, material: &Material) -> Fixed32 {
        material.saturation * self.size
    }

    /// Irreversibly flip undercooked to overcooked. The two traits never
    /// co-exist.
    pub fn mark_overcooked(&mut self) {
        self.traits.remove(IngredientTrait::Undercooked);
        self.traits.insert(IngredientTrait::Overcooked);
    }

    /// Drop the undercooked tag without marking overcooked (finished
    /// cooking normally).
    pub fn mark_done(&mut self) {
        self.traits.remove(IngredientTrait::Undercooked);
    }

    pub fn is_overcooked(&self) -> bool {
        self.traits.contains(IngredientTrait::Overcooked)
    }

    pub fn is_undercooked(&self) -> bool {
        self.traits.contains(IngredientTrait::Undercooked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::f64_to_fixed32;

    fn beef() -> Material {
        Material::new("beef", 0xFFCC3F34, 2, f64_to_fixed32(0.4))
    }

    #[test]
    fn new_ingredient_is_undercooked() {
        let ing = Ingredient::new(MaterialId(0), Form::Sliced, f64_to_fixed32(1.0));
        assert!(ing.is_undercooked());
        assert!(!ing.is_overcooked());
        assert_eq!(ing.heat, 0);
    }

    #[test]
    fn contributions_scale_with_size() {
        let mat = beef();
        let ing = Ingredient::new(MaterialId(0), Form::Full, f64_to_fixed32(2.0));
        assert_eq!(ing.food_level(&mat), 4);
        // Phrase the expectation as the same product the code computes:
        // 0.4 and 0.8 round to Q16.16 one bit apart.
        assert_eq!(
            ing.saturation(&mat),
            f64_to_fixed32(0.4) * f64_to_fixed32(2.0)
        );
    }

    #[test]
    fn overcook_is_exclusive_and_one_directional() {
        let mut ing = Ingredient::new(MaterialId(0), Form::Full, f64_to_fixed32(1.0));
        ing.mark_overcooked();
        assert!(ing.is_overcooked());
        assert!(!ing.is_undercooked());

        // Marking again changes nothing.
        ing.mark_overcooked();
        assert!(ing.is_overcooked());
        assert!(!ing.is_undercooked());
    }

    #[test]
    fn mark_done_clears_undercooked_only() {
        let mut ing = Ingredient::new(MaterialId(0), Form::Full, f64_to_fixed32(1.0));
        ing.mark_done();
        assert!(!ing.is_undercooked());
        assert!(!ing.is_overcooked());
    }

    #[test]
    fn serde_round_trip() {
        let mut ing = Ingredient::new(MaterialId(3), Form::Diced, f64_to_fixed32(0.5));
        ing.heat = 120;
        let json = serde_json::to_string(&ing).unwrap();
        let back: Ingredient = serde_json::from_str(&json).unwrap();
        assert_eq!(ing, back);
    }
}
