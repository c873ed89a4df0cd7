//! Cooking strategies.
//!
//! A strategy is one application of heat or agitation to a dish, run as a
//! fixed five-phase protocol: begin, pre-cook, one cook call per
//! ingredient, post-cook, end. Strategies are constructed fresh per
//! application and hold no vessel references afterwards; [`StrategyRun`]
//! enforces the phase ordering in debug builds.

use crate::dish::{Dish, Seasoning};
use crate::fixed::f64_to_fixed64;
use crate::ingredient::Ingredient;
use crate::rng::SimRng;
use crate::vessel::Vessel;

/// Heat above which each cook call risks overcooking an ingredient.
pub const OVERCOOK_HEAT: i32 = 250;

/// Tools the host can press against a working vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// Agitates the dish: stir-fry pass.
    Spatula,
    /// Serving tool. Carries no cooking strategy.
    Ladle,
}

// ---------------------------------------------------------------------------
// Strategy variants
// ---------------------------------------------------------------------------

/// The wok's ambient per-tick heat pass.
#[derive(Debug, Clone, Default)]
pub struct Heating {
    ingredient_count: usize,
    budget: i32,
    decrement: i32,
}

impl Heating {
    fn begin_cook(&mut self, dish: &Dish) {
        self.ingredient_count = dish.ingredients().len();
    }

    fn pre_cook(&mut self, _seasoning: Option<&Seasoning>, vessel: &dyn Vessel) {
        if self.ingredient_count == 0 {
            return;
        }
        self.budget = vessel.temperature();
        self.decrement = self.budget / self.ingredient_count as i32;
    }

    fn cook(&mut self, ingredient: &mut Ingredient, _vessel: &dyn Vessel, rng: &mut SimRng) {
        if self.ingredient_count == 0 {
            return;
        }
        let increment = (self.budget / 4).max(0);
        ingredient.heat += increment;
        roll_overcook(ingredient, rng);
        self.budget -= self.decrement;
    }
}

/// A spatula pass: gentler heating plus even heat redistribution.
#[derive(Debug, Clone, Default)]
pub struct StirFrying {
    ingredient_count: usize,
    budget: i32,
    decrement: i32,
}

impl StirFrying {
    fn begin_cook(&mut self, dish: &Dish) {
        self.ingredient_count = dish.ingredients().len();
    }

    fn pre_cook(&mut self, _seasoning: Option<&Seasoning>, vessel: &dyn Vessel) {
        if self.ingredient_count == 0 {
            return;
        }
        self.budget = vessel.temperature();
        self.decrement = self.budget / self.ingredient_count as i32;
    }

    fn cook(&mut self, ingredient: &mut Ingredient, _vessel: &dyn Vessel, rng: &mut SimRng) {
        if self.ingredient_count == 0 {
            return;
        }
        let increment = (self.budget / 8).max(0);
        ingredient.heat += increment;
        roll_overcook(ingredient, rng);
        self.budget -= self.decrement;
    }

    /// Agitation evens out heat across the dish, and ingredients past half
    /// the overcook threshold are no longer undercooked.
    fn post_cook(&mut self, dish: &mut Dish, _vessel: &dyn Vessel) {
        let ingredients = dish.ingredients_mut();
        if ingredients.is_empty() {
            return;
        }
        let total: i64 = ingredients.iter().map(|i| i64::from(i.heat)).sum();
        let average = (total / ingredients.len() as i64) as i32;
        for ingredient in ingredients.iter_mut() {
            ingredient.heat = average;
            if ingredient.heat >= OVERCOOK_HEAT / 2 {
                ingredient.mark_done();
            }
        }
    }
}

/// Past the overcook threshold, each cook call has a 1% chance of the
/// irreversible undercooked-to-overcooked transition.
fn roll_overcook(ingredient: &mut Ingredient, rng: &mut SimRng) {
    if ingredient.heat > OVERCOOK_HEAT && rng.chance(f64_to_fixed64(0.01)) {
        ingredient.mark_overcooked();
    }
}

// ---------------------------------------------------------------------------
// Closed strategy enum
// ---------------------------------------------------------------------------

/// Every way a dish can be cooked. Closed on purpose: the phase protocol
/// and the serialization story both depend on knowing the full set.
#[derive(Debug, Clone)]
pub enum CookingStrategy {
    Heating(Heating),
    StirFrying(StirFrying),
}

impl CookingStrategy {
    pub fn heating() -> Self {
        CookingStrategy::Heating(Heating::default())
    }

    pub fn stir_frying() -> Self {
        CookingStrategy::StirFrying(StirFrying::default())
    }

    /// The strategy a tool carries, if any.
    pub fn for_tool(tool: ToolKind) -> Option<CookingStrategy> {
        match tool {
            ToolKind::Spatula => Some(CookingStrategy::stir_frying()),
            ToolKind::Ladle => None,
        }
    }

    fn begin_cook(&mut self, dish: &Dish) {
        match self {
            CookingStrategy::Heating(s) => s.begin_cook(dish),
            CookingStrategy::StirFrying(s) => s.begin_cook(dish),
        }
    }

    fn pre_cook(&mut self, seasoning: Option<&Seasoning>, vessel: &dyn Vessel) {
        match self {
            CookingStrategy::Heating(s) => s.pre_cook(seasoning, vessel),
            CookingStrategy::StirFrying(s) => s.pre_cook(seasoning, vessel),
        }
    }

    fn cook(&mut self, ingredient: &mut Ingredient, vessel: &dyn Vessel, rng: &mut SimRng) {
        match self {
            CookingStrategy::Heating(s) => s.cook(ingredient, vessel, rng),
            CookingStrategy::StirFrying(s) => s.cook(ingredient, vessel, rng),
        }
    }

    fn post_cook(&mut self, dish: &mut Dish, vessel: &dyn Vessel) {
        match self {
            CookingStrategy::Heating(_) => {}
            CookingStrategy::StirFrying(s) => s.post_cook(dish, vessel),
        }
    }

    fn end_cook(&mut self) {}
}

// ---------------------------------------------------------------------------
// Phase driver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CookPhase {
    NotStarted,
    Begun,
    PreCooked,
    Cooking,
    PostCooked,
    Ended,
}

/// Drives one strategy application through the phase protocol in order.
/// Out-of-order calls are a caller bug and assert in debug builds.
#[derive(Debug)]
pub struct StrategyRun {
    strategy: CookingStrategy,
    phase: CookPhase,
}

impl StrategyRun {
    pub fn new(strategy: CookingStrategy) -> Self {
        Self {
            strategy,
            phase: CookPhase::NotStarted,
        }
    }

    pub fn begin_cook(&mut self, dish: &Dish) {
        debug_assert_eq!(self.phase, CookPhase::NotStarted);
        self.strategy.begin_cook(dish);
        self.phase = CookPhase::Begun;
    }

    pub fn pre_cook(&mut self, seasoning: Option<&Seasoning>, vessel: &dyn Vessel) {
        debug_assert_eq!(self.phase, CookPhase::Begun);
        self.strategy.pre_cook(seasoning, vessel);
        self.phase = CookPhase::PreCooked;
    }

    pub fn cook(&mut self, ingredient: &mut Ingredient, vessel: &dyn Vessel, rng: &mut SimRng) {
        debug_assert!(matches!(self.phase, CookPhase::PreCooked | CookPhase::Cooking));
        self.strategy.cook(ingredient, vessel, rng);
        self.phase = CookPhase::Cooking;
    }

    pub fn post_cook(&mut self, dish: &mut Dish, vessel: &dyn Vessel) {
        debug_assert!(matches!(self.phase, CookPhase::PreCooked | CookPhase::Cooking));
        self.strategy.post_cook(dish, vessel);
        self.phase = CookPhase::PostCooked;
    }

    pub fn end_cook(&mut self) {
        debug_assert_eq!(self.phase, CookPhase::PostCooked);
        self.strategy.end_cook();
        self.phase = CookPhase::Ended;
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::f64_to_fixed32;
    use crate::id::MaterialId;
    use crate::ingredient::Ingredient;
    use crate::material::Form;
    use crate::vessel::test_support::FixedVessel;

    fn ingredient(heat: i32) -> Ingredient {
        let mut ing = Ingredient::new(MaterialId(0), Form::Full, f64_to_fixed32(1.0));
        ing.heat = heat;
        ing
    }

    // -- heating ------------------------------------------------------------

    #[test]
    fn heating_splits_budget_across_ingredients() {
        let vessel = FixedVessel::at(200);
        let mut rng = SimRng::new(7);
        let mut dish = Dish::new();
        dish.push_for_test(ingredient(0));
        dish.push_for_test(ingredient(0));

        let mut strategy = CookingStrategy::heating();
        strategy.begin_cook(&dish);
        strategy.pre_cook(None, &vessel);
        let mut first = ingredient(0);
        let mut second = ingredient(0);
        strategy.cook(&mut first, &vessel, &mut rng);
        strategy.cook(&mut second, &vessel, &mut rng);

        // budget 200: first gets 200/4, second (200-100)/4.
        assert_eq!(first.heat, 50);
        assert_eq!(second.heat, 25);
    }

    #[test]
    fn heating_on_empty_dish_is_inert() {
        let vessel = FixedVessel::at(200);
        let mut strategy = CookingStrategy::heating();
        strategy.begin_cook(&Dish::new());
        strategy.pre_cook(None, &vessel);
        // No cook calls to make; the phase driver still completes.
        let mut run = StrategyRun::new(CookingStrategy::heating());
        let mut dish = Dish::new();
        run.begin_cook(&dish);
        run.pre_cook(None, &vessel);
        run.post_cook(&mut dish, &vessel);
        run.end_cook();
    }

    #[test]
    fn cold_vessel_never_heats() {
        let vessel = FixedVessel::at(0);
        let mut rng = SimRng::new(1);
        let mut dish = Dish::new();
        dish.push_for_test(ingredient(0));

        let mut strategy = CookingStrategy::heating();
        strategy.begin_cook(&dish);
        strategy.pre_cook(None, &vessel);
        let mut ing = ingredient(0);
        strategy.cook(&mut ing, &vessel, &mut rng);
        assert_eq!(ing.heat, 0);
        assert!(ing.is_undercooked());
    }

    #[test]
    fn overcook_never_fires_below_threshold() {
        let vessel = FixedVessel::at(100);
        let mut rng = SimRng::new(3);
        let mut dish = Dish::new();
        dish.push_for_test(ingredient(0));

        for _ in 0..1000 {
            let mut strategy = CookingStrategy::heating();
            strategy.begin_cook(&dish);
            strategy.pre_cook(None, &vessel);
            let mut ing = ingredient(0);
            strategy.cook(&mut ing, &vessel, &mut rng);
            assert!(!ing.is_overcooked());
        }
    }

    #[test]
    fn overcook_eventually_fires_past_threshold() {
        let vessel = FixedVessel::at(300);
        let mut rng = SimRng::new(11);
        let mut fired = false;
        for _ in 0..10_000 {
            let mut ing = ingredient(OVERCOOK_HEAT + 1);
            roll_overcook(&mut ing, &mut rng);
            if ing.is_overcooked() {
                fired = true;
                break;
            }
        }
        assert!(fired);
    }

    // -- stir-frying --------------------------------------------------------

    #[test]
    fn stir_fry_heats_more_gently_than_heating() {
        let vessel = FixedVessel::at(200);
        let mut rng = SimRng::new(5);
        let mut dish = Dish::new();
        dish.push_for_test(ingredient(0));

        let mut strategy = CookingStrategy::stir_frying();
        strategy.begin_cook(&dish);
        strategy.pre_cook(None, &vessel);
        let mut ing = ingredient(0);
        strategy.cook(&mut ing, &vessel, &mut rng);
        assert_eq!(ing.heat, 25); // 200 / 8
    }

    #[test]
    fn stir_fry_averages_heat_and_finishes_hot_ingredients() {
        let vessel = FixedVessel::at(0);
        let mut dish = Dish::new();
        dish.push_for_test(ingredient(200));
        dish.push_for_test(ingredient(100));

        let mut strategy = CookingStrategy::stir_frying();
        strategy.begin_cook(&dish);
        strategy.post_cook(&mut dish, &vessel);

        for ing in dish.ingredients() {
            assert_eq!(ing.heat, 150);
            assert!(!ing.is_undercooked()); // 150 >= 125
            assert!(!ing.is_overcooked());
        }
    }

    #[test]
    fn stir_fry_average_below_half_threshold_stays_undercooked() {
        let vessel = FixedVessel::at(0);
        let mut dish = Dish::new();
        dish.push_for_test(ingredient(60));
        dish.push_for_test(ingredient(40));

        let mut strategy = CookingStrategy::stir_frying();
        strategy.begin_cook(&dish);
        strategy.post_cook(&mut dish, &vessel);

        for ing in dish.ingredients() {
            assert_eq!(ing.heat, 50);
            assert!(ing.is_undercooked());
        }
    }

    // -- dispatch -----------------------------------------------------------

    #[test]
    fn spatula_carries_stir_fry_and_ladle_carries_nothing() {
        assert!(matches!(
            CookingStrategy::for_tool(ToolKind::Spatula),
            Some(CookingStrategy::StirFrying(_))
        ));
        assert!(CookingStrategy::for_tool(ToolKind::Ladle).is_none());
    }
}
