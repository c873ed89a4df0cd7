//! Dishes: mutable compositions of ingredients and seasonings.
//!
//! A [`Dish`] accumulates ingredients while cooking, keeping its nutrition
//! totals incrementally so additions stay O(1). Serving freezes it into an
//! immutable [`ServedDish`] that carries everything consumption needs.

use serde::{Deserialize, Serialize};

use crate::collector::{EffectCollector, StatusCatalog};
use crate::context::CulinaryContext;
use crate::effect::{Consumer, Effect};
use crate::fixed::{Fixed32, f64_to_fixed32};
use crate::id::{EffectId, SpiceId};
use crate::ingredient::Ingredient;
use crate::material::MaterialCategory;
use crate::rng::SimRng;
use crate::strategy::{CookingStrategy, StrategyRun};
use crate::vessel::Vessel;

/// One application of a spice at a given potency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seasoning {
    pub spice: SpiceId,
    pub potency: u32,
}

impl Seasoning {
    pub fn new(spice: SpiceId) -> Self {
        Self { spice, potency: 1 }
    }

    pub fn with_potency(mut self, potency: u32) -> Self {
        self.potency = potency;
        self
    }
}

/// Presentation bucket of a dish, derived from its ingredient multiset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DishModelType {
    Empty,
    Meat,
    Seafood,
    Vegetable,
    Grain,
    Mixed,
}

fn default_max_size() -> Fixed32 {
    Dish::DEFAULT_MAX_SIZE
}

fn default_quality_bonus() -> Fixed32 {
    Fixed32::ONE
}

/// A dish under construction inside a vessel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    ingredients: Vec<Ingredient>,
    seasonings: Vec<Seasoning>,
    size: Fixed32,
    food_level: i32,
    saturation: Fixed32,
    #[serde(default = "default_quality_bonus")]
    quality_bonus: Fixed32,
    #[serde(default = "default_max_size")]
    max_size: Fixed32,
    category_tally: [u32; MaterialCategory::ALL.len()],
    #[serde(skip)]
    model_cache: Option<DishModelType>,
}

impl Default for Dish {
    fn default() -> Self {
        Self::new()
    }
}

impl Dish {
    /// Base capacity in size units. Skill gating tightens this at the
    /// vessel layer.
    pub const DEFAULT_MAX_SIZE: Fixed32 = Fixed32::from_bits(8 << 16);

    pub fn new() -> Self {
        Self {
            ingredients: Vec::new(),
            seasonings: Vec::new(),
            size: Fixed32::ZERO,
            food_level: 0,
            saturation: Fixed32::ZERO,
            quality_bonus: Fixed32::ONE,
            max_size: Self::DEFAULT_MAX_SIZE,
            category_tally: [0; MaterialCategory::ALL.len()],
            model_cache: None,
        }
    }

    // -- accessors ----------------------------------------------------------

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub(crate) fn ingredients_mut(&mut self) -> &mut [Ingredient] {
        &mut self.ingredients
    }

    pub fn seasonings(&self) -> &[Seasoning] {
        &self.seasonings
    }

    pub fn size(&self) -> Fixed32 {
        self.size
    }

    pub fn max_size(&self) -> Fixed32 {
        self.max_size
    }

    pub fn food_level(&self) -> i32 {
        self.food_level
    }

    pub fn saturation(&self) -> Fixed32 {
        self.saturation
    }

    pub fn quality_bonus(&self) -> Fixed32 {
        self.quality_bonus
    }

    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }

    // -- composition --------------------------------------------------------

    /// Whether the ingredient fits under the base capacity. Skill-gated
    /// limits are the vessel's concern.
    pub fn can_add(&self, ingredient: &Ingredient) -> bool {
        self.size + ingredient.size <= self.max_size
    }

    /// Add an ingredient, updating the running totals in O(1). Callers
    /// check [`Dish::can_add`] first; an over-capacity add is a no-op.
    pub fn add_ingredient(&mut self, ingredient: Ingredient, ctx: &CulinaryContext) {
        if !self.can_add(&ingredient) {
            return;
        }
        let Some(material) = ctx.materials.get(ingredient.material) else {
            log::error!("unregistered material id {:?}", ingredient.material);
            return;
        };
        self.food_level += ingredient.food_level(material);
        self.saturation += ingredient.saturation(material);
        self.size += ingredient.size;
        for category in MaterialCategory::ALL {
            if material.categories.contains(category) {
                self.category_tally[category as usize] += 1;
            }
        }
        self.ingredients.push(ingredient);
        self.model_cache = None;
    }

    /// Apply a seasoning: its contribution to the saturation score scales
    /// with potency. Fluid seasonings also feed the vessel's gauges, at the
    /// vessel layer.
    pub fn flavor_with(
        &mut self,
        seasoning: Seasoning,
        ctx: &CulinaryContext,
        _vessel: &dyn Vessel,
    ) {
        if ctx.spices.get(seasoning.spice).is_none() {
            log::error!("unregistered spice id {:?}", seasoning.spice);
            return;
        }
        self.saturation += f64_to_fixed32(0.1) * Fixed32::from_num(seasoning.potency);
        self.seasonings.push(seasoning);
    }

    /// Run one cooking pass over this dish. Ownership transfers through
    /// the strategy and back.
    pub fn apply(
        mut self,
        strategy: CookingStrategy,
        vessel: &dyn Vessel,
        rng: &mut SimRng,
    ) -> Dish {
        let mut run = StrategyRun::new(strategy);
        run.begin_cook(&self);
        run.pre_cook(None, vessel);
        for ingredient in &mut self.ingredients {
            run.cook(ingredient, vessel, rng);
        }
        run.post_cook(&mut self, vessel);
        run.end_cook();
        self.model_cache = None;
        self
    }

    // -- classification -----------------------------------------------------

    /// The presentation bucket for the current ingredient multiset.
    /// Memoized; additions invalidate the cache.
    pub fn model_type(&mut self) -> DishModelType {
        if let Some(model) = self.model_cache {
            return model;
        }
        let model = self.classify();
        self.model_cache = Some(model);
        model
    }

    fn classify(&self) -> DishModelType {
        if self.ingredients.is_empty() {
            return DishModelType::Empty;
        }
        let total = self.ingredients.len() as u32;
        let tally = |c: MaterialCategory| self.category_tally[c as usize];
        let buckets = [
            (DishModelType::Meat, tally(MaterialCategory::Meat)),
            (DishModelType::Seafood, tally(MaterialCategory::Fish)),
            (
                DishModelType::Vegetable,
                tally(MaterialCategory::Vegetables) + tally(MaterialCategory::Fruit),
            ),
            (DishModelType::Grain, tally(MaterialCategory::Grain)),
        ];
        for (model, count) in buckets {
            if count * 2 > total {
                return model;
            }
        }
        DishModelType::Mixed
    }

    // -- serving ------------------------------------------------------------

    /// Freeze this dish into its served form. Effects from overcooked
    /// ingredients are forfeited.
    pub fn serve(mut self, quality_bonus: Fixed32, ctx: &CulinaryContext) -> ServedDish {
        self.quality_bonus = quality_bonus;
        let model = self.model_type();
        let mut effects = Vec::new();
        let mut glowing = false;
        for ingredient in &self.ingredients {
            let Some(material) = ctx.materials.get(ingredient.material) else {
                continue;
            };
            glowing |= material.glowing;
            if !ingredient.is_overcooked() {
                if let Some(effect) = material.effect {
                    effects.push(effect);
                }
            }
        }
        ServedDish {
            model,
            food_level: self.food_level,
            saturation: self.saturation * self.quality_bonus,
            size: self.size,
            glowing,
            effects,
        }
    }

    // -- test hooks ---------------------------------------------------------

    /// Push an ingredient without touching nutrition totals. Test scaffolding
    /// for strategy-level checks that have no context wired.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn push_for_test(&mut self, ingredient: Ingredient) {
        self.size += ingredient.size;
        self.ingredients.push(ingredient);
        self.model_cache = None;
    }
}

// ---------------------------------------------------------------------------
// Served dishes
// ---------------------------------------------------------------------------

/// An immutable, finished dish. Everything consumption needs travels with
/// it; the originating context is only consulted to resolve effect ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServedDish {
    pub model: DishModelType,
    pub food_level: i32,
    pub saturation: Fixed32,
    pub size: Fixed32,
    pub glowing: bool,
    effects: Vec<EffectId>,
}

impl ServedDish {
    pub fn effects(&self) -> &[EffectId] {
        &self.effects
    }

    /// Whether the dish can be eaten regardless of the consumer's hunger.
    pub fn always_edible(&self, ctx: &CulinaryContext) -> bool {
        self.effects
            .iter()
            .any(|id| matches!(ctx.effects.get(*id), Some(Effect::AlwaysEdible)))
    }

    /// Expertise value of this dish: nutrition times saturation, truncated.
    pub fn expertise(&self) -> u32 {
        let score = Fixed32::from_num(self.food_level) * self.saturation;
        score.to_num::<i32>().max(0) as u32
    }

    /// Feed the dish to a consumer: every carried effect runs through one
    /// collector, which then applies the aggregate.
    pub fn consume(
        &self,
        ctx: &CulinaryContext,
        consumer: &mut dyn Consumer,
        catalog: &StatusCatalog,
    ) {
        let mut collector = EffectCollector::new();
        for id in &self.effects {
            if let Some(effect) = ctx.effects.get(*id) {
                effect.apply(&mut collector, consumer, catalog);
            }
        }
        collector.apply(consumer, catalog);
    }
}

// ---------------------------------------------------------------------------
