//! Consumable effect definitions.
//!
//! An [`Effect`] is what a material contributes to whoever eats the finished
//! dish. Variants form a closed enum so every consumption path is handled
//! exhaustively at compile time. Stackable variants (timed statuses) route
//! through the [`EffectCollector`](crate::collector::EffectCollector) and are
//! merged there; the rest act on the [`Consumer`] directly.

use serde::{Deserialize, Serialize};

use crate::collector::{CollectedEffect, EffectCollector, StatusCatalog};
use crate::id::StatusId;

/// Experience granted per `Experienced` material in a consumed dish.
pub const EXPERIENCE_PER_SERVING: u32 = 5;

// ---------------------------------------------------------------------------
// Timed status
// ---------------------------------------------------------------------------

/// A timed consumer status: the unit the collector merges on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusId,
    pub amplifier: u32,
    /// Remaining duration in ticks.
    pub duration: u32,
    pub show_particles: bool,
}

impl StatusEffect {
    pub fn new(kind: StatusId, amplifier: u32, duration: u32) -> Self {
        Self {
            kind,
            amplifier,
            duration,
            show_particles: true,
        }
    }

    pub fn hidden(mut self) -> Self {
        self.show_particles = false;
        self
    }
}

// ---------------------------------------------------------------------------
// Consumer interface
// ---------------------------------------------------------------------------

/// The external actor a finalized effect set is applied to. Implemented by
/// the host; the core only writes through it.
pub trait Consumer {
    /// Apply a timed status. `ambient` marks passive/background statuses
    /// (used by the post-consumption resistance cooldown).
    fn add_status(&mut self, effect: StatusEffect, ambient: bool);

    /// Whether a status of the given kind is currently active.
    fn has_active_status(&self, kind: StatusId) -> bool;

    /// Grant experience points.
    fn grant_experience(&mut self, amount: u32);

    /// Request a relocation (chorus-fruit style). The host decides where.
    fn request_teleport(&mut self);
}

// ---------------------------------------------------------------------------
// Effect variants
// ---------------------------------------------------------------------------

/// A consumable effect definition, registered once and referenced by
/// materials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// One or more timed statuses, merged per kind by the collector.
    Potions(Vec<StatusEffect>),
    /// Relocate the consumer.
    Teleport,
    /// Extend every beneficial status already gathered from the same dish.
    Harmony,
    /// Grant experience points.
    Experienced,
    /// Marker: the dish can be eaten at full hunger. Surfaced to the host
    /// via the collector.
    AlwaysEdible,
    /// Marker: seasoning stretches further. Surfaced to the host via the
    /// collector.
    FlavorEnhancer,
}

impl Effect {
    /// Contribute this effect to one consumption event. Stackable variants
    /// feed the collector; the rest act on the consumer immediately.
    pub fn apply(
        &self,
        collector: &mut EffectCollector,
        consumer: &mut dyn Consumer,
        catalog: &StatusCatalog,
    ) {
        match self {
            Effect::Potions(statuses) => {
                for status in statuses {
                    collector.add(CollectedEffect::Status(*status));
                }
            }
            Effect::Teleport => consumer.request_teleport(),
            Effect::Harmony => collector.harmonize(catalog),
            Effect::Experienced => consumer.grant_experience(EXPERIENCE_PER_SERVING),
            Effect::AlwaysEdible => collector.mark_always_edible(),
            Effect::FlavorEnhancer => collector.mark_flavor_enhanced(),
        }
    }
}
