//! Cooking vessels.
//!
//! [`Vessel`] is the environment a strategy reads while cooking. [`Wok`]
//! is the tick-driven vessel that owns the dish during assembly: it heats
//! itself, runs an ambient heating pass on a fixed cadence, and hands the
//! dish out again when served.

use serde::{Deserialize, Serialize};

use crate::context::CulinaryContext;
use crate::dish::{Dish, Seasoning, ServedDish};
use crate::fixed::{Fixed32, Ticks};
use crate::ingredient::Ingredient;
use crate::material::SpiceNature;
use crate::rng::SimRng;
use crate::skill::{Skill, SkillGate, SkillPoint};
use crate::strategy::{CookingStrategy, ToolKind};

/// Environment readings a cooking strategy may consult.
pub trait Vessel {
    fn temperature(&self) -> i32;
    fn water_amount(&self) -> i32;
    fn oil_amount(&self) -> i32;
}

/// Why the wok refused an interaction. A rejection is a normal outcome the
/// host surfaces to the player, not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WokRejection {
    #[error("nothing is cooking")]
    NotCooking,
    #[error("the dish cannot hold any more")]
    CapacityExceeded,
    #[error("the dish is too large to work with this tool")]
    TooLarge,
    #[error("this tool has no cooking action")]
    NoStrategy,
    #[error("unrecognized spice")]
    UnknownSpice,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WokStatus {
    #[default]
    Idle,
    Working,
}

/// Capacity factor applied while `Skill::BiggerSize` is unlearned.
const THREE_QUARTERS: Fixed32 = Fixed32::from_bits(3 << 14);

/// A tick-driven wok.
#[derive(Debug, Serialize, Deserialize)]
pub struct Wok {
    status: WokStatus,
    /// Absent while idle. Tolerated as absent in persisted state.
    #[serde(default)]
    dish: Option<Dish>,
    temperature: i32,
    water: i32,
    oil: i32,
    #[serde(default)]
    ticks: Ticks,
}

impl Wok {
    /// Ambient heating stops once the wok reaches this temperature.
    pub const MAX_TEMPERATURE: i32 = 300;
    /// Upper bound (exclusive) on one tick's temperature gain.
    const HEAT_JITTER: u32 = 10;
    /// One-in-N chance per tick that the wok gains heat.
    const JITTER_ONE_IN: u32 = 5;
    /// Every N ticks the dish takes an ambient heating pass.
    const HEATING_PERIOD: Ticks = 20;
    /// One-in-N chance a tool use grants a bonus proficiency point.
    const PROFICIENCY_BONUS_ONE_IN: u32 = 5;

    pub fn new() -> Self {
        Self {
            status: WokStatus::Idle,
            dish: None,
            temperature: 0,
            water: 0,
            oil: 0,
            ticks: 0,
        }
    }

    pub fn status(&self) -> WokStatus {
        self.status
    }

    pub fn dish(&self) -> Option<&Dish> {
        self.dish.as_ref()
    }

    /// Advance one tick. Idle woks do nothing.
    pub fn tick(&mut self, rng: &mut SimRng) {
        if self.status != WokStatus::Working {
            return;
        }
        if self.temperature < Self::MAX_TEMPERATURE && rng.one_in(Self::JITTER_ONE_IN) {
            self.temperature += rng.next_below(Self::HEAT_JITTER) as i32;
        }
        self.ticks += 1;
        if self.ticks % Self::HEATING_PERIOD == 0 {
            if let Some(dish) = self.dish.take() {
                let cooked = dish.apply(CookingStrategy::heating(), &*self, rng);
                self.dish = Some(cooked);
            }
        }
    }

    /// Idle wok accepting its first input: fresh dish, cold pan.
    fn start_cooking(&mut self) {
        if self.status == WokStatus::Idle {
            self.dish = Some(Dish::new());
            self.temperature = 0;
            self.ticks = 0;
            self.status = WokStatus::Working;
        }
    }

    /// Drop an ingredient in, starting a dish if the wok was idle. Without
    /// `Skill::BiggerSize` only three quarters of the base capacity is
    /// usable.
    pub fn add_ingredient(
        &mut self,
        ingredient: Ingredient,
        ctx: &CulinaryContext,
        skills: &dyn SkillGate,
    ) -> Result<(), WokRejection> {
        self.start_cooking();
        let dish = self.dish.get_or_insert_with(Dish::new);
        let gated = !skills.has_learned(Skill::BiggerSize)
            && dish.size() + ingredient.size >= dish.max_size() * THREE_QUARTERS;
        if gated || !dish.can_add(&ingredient) {
            return Err(WokRejection::CapacityExceeded);
        }
        dish.add_ingredient(ingredient, ctx);
        Ok(())
    }

    /// Apply a seasoning, starting a dish if the wok was idle. Fluid
    /// seasonings raise the matching gauge.
    pub fn season(
        &mut self,
        seasoning: Seasoning,
        ctx: &CulinaryContext,
    ) -> Result<(), WokRejection> {
        let Some(spice) = ctx.spices.get(seasoning.spice) else {
            return Err(WokRejection::UnknownSpice);
        };
        match spice.nature {
            SpiceNature::Water => self.water += seasoning.potency as i32,
            SpiceNature::Oil => self.oil += seasoning.potency as i32,
            SpiceNature::Powder | SpiceNature::Sauce => {}
        }
        self.start_cooking();
        let mut dish = self.dish.take().unwrap_or_default();
        dish.flavor_with(seasoning, ctx, &*self);
        self.dish = Some(dish);
        Ok(())
    }

    /// Work the dish with a tool. Tool strategies refuse dishes past the
    /// skill-gated size limit; each use has a one-in-five chance of a bonus
    /// proficiency point.
    pub fn cook_with_tool(
        &mut self,
        tool: ToolKind,
        skills: &mut dyn SkillGate,
        rng: &mut SimRng,
    ) -> Result<(), WokRejection> {
        if self.status != WokStatus::Working {
            return Err(WokRejection::NotCooking);
        }
        let Some(dish) = self.dish.take() else {
            return Err(WokRejection::NotCooking);
        };
        let Some(strategy) = CookingStrategy::for_tool(tool) else {
            self.dish = Some(dish);
            return Err(WokRejection::NoStrategy);
        };
        let limit = if skills.has_learned(Skill::BiggerSize) {
            dish.max_size()
        } else {
            dish.max_size() * THREE_QUARTERS
        };
        if dish.size() > limit {
            self.dish = Some(dish);
            return Err(WokRejection::TooLarge);
        }
        let cooked = dish.apply(strategy, &*self, rng);
        self.dish = Some(cooked);
        if rng.one_in(Self::PROFICIENCY_BONUS_ONE_IN) {
            skills.award(SkillPoint::Proficiency, 1);
        }
        Ok(())
    }

    /// Take the finished dish out and return the wok to idle, awarding
    /// serving points. `None` with no state change when there is nothing
    /// to serve.
    pub fn serve_and_reset(
        &mut self,
        ctx: &CulinaryContext,
        skills: &mut dyn SkillGate,
    ) -> Option<ServedDish> {
        if self.status != WokStatus::Working {
            return None;
        }
        let dish = self.dish.take()?;
        // Seasoning alone starts a dish but does not make one worth serving.
        if dish.is_empty() {
            self.dish = Some(dish);
            return None;
        }
        let served = dish.serve(Fixed32::ONE, ctx);
        skills.award(SkillPoint::Expertise, served.expertise());
        skills.award(SkillPoint::Proficiency, 1);
        self.status = WokStatus::Idle;
        Some(served)
    }
}

impl Default for Wok {
    fn default() -> Self {
        Self::new()
    }
}

impl Vessel for Wok {
    fn temperature(&self) -> i32 {
        self.temperature
    }

    fn water_amount(&self) -> i32 {
        self.water
    }

    fn oil_amount(&self) -> i32 {
        self.oil
    }
}

// ---------------------------------------------------------------------------
// Test vessels
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use super::Vessel;

    /// A vessel pinned at one temperature, for strategy-level checks.
    #[derive(Debug, Clone, Copy)]
    pub struct FixedVessel {
        pub temperature: i32,
        pub water: i32,
        pub oil: i32,
    }

    impl FixedVessel {
        pub fn at(temperature: i32) -> Self {
            Self {
                temperature,
                water: 0,
                oil: 0,
            }
        }
    }

    impl Vessel for FixedVessel {
        fn temperature(&self) -> i32 {
            self.temperature
        }

        fn water_amount(&self) -> i32 {
            self.water
        }

        fn oil_amount(&self) -> i32 {
            self.oil
        }
    }
}

// ---------------------------------------------------------------------------
