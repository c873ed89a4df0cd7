//! Culina Core -- the culinary composition and effect-aggregation engine.
//!
//! This crate provides the ingredient and dish model, cooking strategies,
//! the tick-driven wok vessel, the effect collector, registries and
//! resolution tables, and deterministic fixed-point arithmetic that a
//! cooking-game host embeds.
//!
//! # Dish Lifecycle
//!
//! 1. **Compose** -- A [`vessel::Wok`] goes Idle→Working on first input;
//!    ingredients and seasonings accumulate into a [`dish::Dish`] under a
//!    skill-gated capacity limit.
//! 2. **Cook** -- Ambient [`strategy::CookingStrategy::Heating`] passes run
//!    on a 20-tick cadence; tools apply their own strategies through the
//!    five-phase protocol (begin, pre-cook, cook per ingredient, post-cook,
//!    end).
//! 3. **Serve** -- The dish freezes into a [`dish::ServedDish`]; serving
//!    awards skill points.
//! 4. **Consume** -- Every effect the dish carries runs through one
//!    [`collector::EffectCollector`], which merges same-kind statuses and
//!    applies the aggregate through the host's [`effect::Consumer`].
//!
//! # Key Types
//!
//! - [`context::CulinaryContext`] -- Registries plus resolution tables,
//!   wired once at startup and read-only afterwards.
//! - [`dish::Dish`] -- Mutable composition with O(1) running totals.
//! - [`strategy::CookingStrategy`] -- Closed enum of cooking passes:
//!   Heating and StirFrying.
//! - [`collector::EffectCollector`] -- Order-independent status merging
//!   with the doubling-per-amplifier duration scale.
//! - [`vessel::Wok`] -- Tick-driven vessel owning the dish during assembly.
//! - [`fixed::Fixed32`] -- Q16.16 fixed-point type for sizes and
//!   saturation.
//! - [`rng::SimRng`] -- Deterministic SplitMix64 generator; every chance
//!   roll is injected.

pub mod collector;
pub mod context;
pub mod dish;
pub mod effect;
pub mod fixed;
pub mod id;
pub mod ingredient;
pub mod material;
pub mod registry;
pub mod resolve;
pub mod rng;
pub mod skill;
pub mod strategy;
pub mod vessel;
