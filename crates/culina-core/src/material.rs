//! Material and spice definitions.
//!
//! A [`Material`] is the immutable identity of a raw foodstuff: what it
//! nourishes, which physical forms it can take, and (optionally) which
//! consumable effect it carries into a dish. A [`Spice`] is the immutable
//! identity of a seasoning agent. Both are registered once at startup and
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::fixed::Fixed32;
use crate::id::EffectId;

// ---------------------------------------------------------------------------
// Physical forms
// ---------------------------------------------------------------------------

/// A physical form an ingredient can be prepared into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum Form {
    Full = 0,
    Sliced,
    Cubed,
    Diced,
    Shredded,
    Minced,
    Paste,
    Juice,
}

impl Form {
    pub const ALL: [Form; 8] = [
        Form::Full,
        Form::Sliced,
        Form::Cubed,
        Form::Diced,
        Form::Shredded,
        Form::Minced,
        Form::Paste,
        Form::Juice,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// A set of valid forms, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSet(u16);

impl FormSet {
    pub const EMPTY: FormSet = FormSet(0);

    /// Every form except `Full` (the usual set for choppable produce).
    pub fn all_processed() -> Self {
        let mut set = FormSet::EMPTY;
        for form in Form::ALL {
            if form != Form::Full {
                set.insert(form);
            }
        }
        set
    }

    pub fn of(forms: &[Form]) -> Self {
        let mut set = FormSet::EMPTY;
        for &form in forms {
            set.insert(form);
        }
        set
    }

    pub fn insert(&mut self, form: Form) {
        self.0 |= form.bit();
    }

    pub fn contains(&self, form: Form) -> bool {
        self.0 & form.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Broad category tags on a material. A material belongs to at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u16)]
pub enum MaterialCategory {
    Vegetables = 0,
    Fruit,
    Grain,
    Meat,
    Fish,
    Protein,
    Nut,
    Supernatural,
    Unknown,
}

impl MaterialCategory {
    pub const ALL: [MaterialCategory; 9] = [
        MaterialCategory::Vegetables,
        MaterialCategory::Fruit,
        MaterialCategory::Grain,
        MaterialCategory::Meat,
        MaterialCategory::Fish,
        MaterialCategory::Protein,
        MaterialCategory::Nut,
        MaterialCategory::Supernatural,
        MaterialCategory::Unknown,
    ];

    fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// A set of material categories, stored as a bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet(u16);

impl CategorySet {
    pub const EMPTY: CategorySet = CategorySet(0);

    pub fn of(categories: &[MaterialCategory]) -> Self {
        let mut set = CategorySet::EMPTY;
        for &c in categories {
            set.insert(c);
        }
        set
    }

    pub fn insert(&mut self, category: MaterialCategory) {
        self.0 |= category.bit();
    }

    pub fn contains(&self, category: MaterialCategory) -> bool {
        self.0 & category.bit() != 0
    }
}

// ---------------------------------------------------------------------------
// Material
// ---------------------------------------------------------------------------

/// Immutable definition of a raw food identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique registration name.
    pub name: String,
    /// Display color (ARGB), consumed by renderers only.
    pub color: u32,
    /// Base food level contributed per unit of size.
    pub food_level: i32,
    /// Base saturation modifier contributed per unit of size.
    pub saturation: Fixed32,
    /// How well the material tolerates heat before degrading.
    pub heat_resilience: Fixed32,
    /// Category tags. At least one.
    pub categories: CategorySet,
    /// Which physical forms the material may be prepared into.
    /// `Full` is always implicitly valid.
    pub forms: FormSet,
    /// Optional consumable effect carried into any dish containing this
    /// material.
    pub effect: Option<EffectId>,
    /// Whether served dishes containing this material render a glowing
    /// overlay.
    pub glowing: bool,
}

impl Material {
    pub fn new(name: &str, color: u32, food_level: i32, saturation: Fixed32) -> Self {
        Self {
            name: name.to_string(),
            color,
            food_level,
            saturation,
            heat_resilience: Fixed32::ZERO,
            categories: CategorySet::EMPTY,
            forms: FormSet::EMPTY,
            effect: None,
            glowing: false,
        }
    }

    pub fn with_heat_resilience(mut self, resilience: Fixed32) -> Self {
        self.heat_resilience = resilience;
        self
    }

    pub fn with_categories(mut self, categories: &[MaterialCategory]) -> Self {
        self.categories = CategorySet::of(categories);
        self
    }

    pub fn with_forms(mut self, forms: FormSet) -> Self {
        self.forms = forms;
        self
    }

    pub fn with_effect(mut self, effect: EffectId) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn with_glow(mut self) -> Self {
        self.glowing = true;
        self
    }

    /// Whether the material may be prepared into `form`.
    pub fn is_valid_form(&self, form: Form) -> bool {
        form == Form::Full || self.forms.contains(form)
    }
}

// ---------------------------------------------------------------------------
// Spice
// ---------------------------------------------------------------------------

/// What a spice physically is. Fluid natures feed the vessel's water and
/// oil gauges when the spice is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiceNature {
    #[default]
    Powder,
    Water,
    Oil,
    Sauce,
}

/// Immutable definition of a seasoning agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spice {
    /// Unique registration name.
    pub name: String,
    /// Display color (ARGB).
    pub color: u32,
    pub nature: SpiceNature,
}

impl Spice {
    pub fn new(name: &str, color: u32) -> Self {
        Self {
            name: name.to_string(),
            color,
            nature: SpiceNature::Powder,
        }
    }

    pub fn with_nature(mut self, nature: SpiceNature) -> Self {
        self.nature = nature;
        self
    }
}
