//! Effect aggregation: merge-and-apply for one consumption event.
//!
//! An [`EffectCollector`] lives for exactly one "gather effects, apply to
//! consumer" operation. Ingredients and spices contribute heterogeneous
//! effect instances over the gather phase; same-kind timed statuses are
//! folded into a single accumulator using amplifier/duration merge
//! arithmetic, and the minimal non-redundant set is applied at the end.
//!
//! # Merge arithmetic (pinned)
//!
//! When a new instance merges into an existing accumulator:
//!
//! 1. If the new amplifier is strictly greater, the stored duration is
//!    rescaled by `2^(new - old)` and the stored amplifier raised.
//! 2. The incoming duration is then added, rescaled by `2^(stored - new)`
//!    using the stored amplifier as it stands after step 1.
//!
//! So an amp-0/100t status merged with an amp-1/50t status yields amp 1 and
//! `100*2 + 50 = 250` ticks, in either merge order. The stored amplifier
//! only ever increases, and particle visibility only ever downgrades.
//! Persisted game state depends on these exact numbers; see the pinned
//! tests below before "fixing" anything here.

use std::collections::{BTreeMap, BTreeSet};

use crate::effect::{Consumer, StatusEffect};
use crate::id::StatusId;

// ---------------------------------------------------------------------------
// Status catalog
// ---------------------------------------------------------------------------

/// Host-configured metadata about status kinds: which kind acts as the
/// post-consumption resistance cooldown, and which kinds are detrimental
/// (and therefore bypass resistance suppression).
#[derive(Debug, Clone)]
pub struct StatusCatalog {
    resistance: StatusId,
    detrimental: BTreeSet<StatusId>,
}

impl StatusCatalog {
    pub fn new(resistance: StatusId) -> Self {
        Self {
            resistance,
            detrimental: BTreeSet::new(),
        }
    }

    pub fn with_detrimental(mut self, kinds: &[StatusId]) -> Self {
        self.detrimental.extend(kinds.iter().copied());
        self
    }

    pub fn resistance(&self) -> StatusId {
        self.resistance
    }

    pub fn is_detrimental(&self, kind: StatusId) -> bool {
        self.detrimental.contains(&kind)
    }
}

// ---------------------------------------------------------------------------
// Channels and contributions
// ---------------------------------------------------------------------------

/// The accumulator channels a collector knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectChannel {
    /// Timed statuses. The only channel the collector accumulates.
    Status,
    /// Experience grants. Applied directly by the effect, never collected.
    Experience,
    /// Teleports. Applied directly by the effect, never collected.
    Teleport,
}

/// A single contributed effect instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectedEffect {
    Status(StatusEffect),
    Experience(u32),
    Teleport,
}

impl CollectedEffect {
    fn channel(&self) -> EffectChannel {
        match self {
            CollectedEffect::Status(_) => EffectChannel::Status,
            CollectedEffect::Experience(_) => EffectChannel::Experience,
            CollectedEffect::Teleport => EffectChannel::Teleport,
        }
    }
}

// ---------------------------------------------------------------------------
// Accumulator
// ---------------------------------------------------------------------------

/// Per-kind accumulator record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingStatus {
    amplifier: u32,
    duration: u32,
    show_particles: bool,
}

/// Rescale a duration by `2^exp`, saturating.
fn scale_up(duration: u32, exp: u32) -> u32 {
    if exp == 0 || duration == 0 {
        duration
    } else if exp >= 32 {
        u32::MAX
    } else {
        duration.saturating_mul(1u32 << exp)
    }
}

// ---------------------------------------------------------------------------
// Collector
// ---------------------------------------------------------------------------

/// Merge-and-apply engine for one consumption event. Create, gather, apply,
/// discard.
#[derive(Debug, Default)]
pub struct EffectCollector {
    pending: BTreeMap<StatusId, PendingStatus>,
    always_edible: bool,
    flavor_enhanced: bool,
}

impl EffectCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one contributed instance into the per-kind accumulators.
    ///
    /// Only the status channel accumulates; contributions on any other
    /// channel are rejected with a logged diagnostic and otherwise ignored,
    /// so unrecognized future kinds never break a consumption.
    pub fn add(&mut self, effect: CollectedEffect) {
        let CollectedEffect::Status(status) = effect else {
            log::error!(
                "effect collector cannot accumulate {:?} contributions: {effect:?}",
                effect.channel()
            );
            return;
        };
        self.add_status(status);
    }

    fn add_status(&mut self, status: StatusEffect) {
        let entry = self.pending.entry(status.kind).or_insert(PendingStatus {
            amplifier: status.amplifier,
            duration: 0,
            show_particles: status.show_particles,
        });

        if status.amplifier > entry.amplifier {
            entry.duration = scale_up(entry.duration, status.amplifier - entry.amplifier);
            entry.amplifier = status.amplifier;
        }
        if !status.show_particles {
            entry.show_particles = false;
        }
        // Normalize the incoming duration to the (possibly just raised)
        // stored amplifier. On the upgrade path this exponent is zero.
        let exp = entry.amplifier - status.amplifier;
        entry.duration = entry.duration.saturating_add(scale_up(status.duration, exp));
    }

    /// Discard all accumulators on a channel. Unsupported channels are
    /// rejected with a logged diagnostic.
    pub fn clear(&mut self, channel: EffectChannel) {
        if channel != EffectChannel::Status {
            log::error!("effect collector cannot clear channel {channel:?}");
            return;
        }
        self.pending.clear();
    }

    /// Re-contribute every pending non-detrimental status once more,
    /// extending beneficial effects via the normal merge rule. This is the
    /// harmony effect's capability.
    pub fn harmonize(&mut self, catalog: &StatusCatalog) {
        let beneficial: Vec<StatusEffect> = self
            .pending
            .iter()
            .filter(|(kind, _)| !catalog.is_detrimental(**kind))
            .map(|(kind, p)| StatusEffect {
                kind: *kind,
                amplifier: p.amplifier,
                duration: p.duration,
                show_particles: p.show_particles,
            })
            .collect();
        for status in beneficial {
            self.add_status(status);
        }
    }

    pub fn mark_always_edible(&mut self) {
        self.always_edible = true;
    }

    pub fn mark_flavor_enhanced(&mut self) {
        self.flavor_enhanced = true;
    }

    /// Whether an always-edible marker was gathered.
    pub fn always_edible(&self) -> bool {
        self.always_edible
    }

    /// Whether a flavor-enhancer marker was gathered.
    pub fn flavor_enhanced(&self) -> bool {
        self.flavor_enhanced
    }

    /// Number of distinct pending status kinds.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Apply the merged effect set to the consumer and discard the
    /// collector.
    ///
    /// While the consumer holds an active resistance status, beneficial
    /// accumulators are suppressed; detrimental ones always apply. If
    /// anything was applied, the consumer is granted a resistance status at
    /// twice the longest applied duration -- ambient, hidden, amplifier 0 --
    /// as a cooldown against effect stacking from repeated consumption. The
    /// bonus is exempt from the suppression rule.
    pub fn apply(self, consumer: &mut dyn Consumer, catalog: &StatusCatalog) {
        let resistance = consumer.has_active_status(catalog.resistance());

        let mut max_duration = 0u32;
        for (kind, p) in &self.pending {
            if !resistance || catalog.is_detrimental(*kind) {
                consumer.add_status(
                    StatusEffect {
                        kind: *kind,
                        amplifier: p.amplifier,
                        duration: p.duration,
                        show_particles: p.show_particles,
                    },
                    false,
                );
                max_duration = max_duration.max(p.duration);
            }
        }

        if max_duration > 0 {
            consumer.add_status(
                StatusEffect::new(catalog.resistance(), 0, max_duration.saturating_mul(2))
                    .hidden(),
                true,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Test support
// ---------------------------------------------------------------------------

#[cfg(any(test, feature = "test-utils"))]
pub mod test_support {
    use super::*;

    /// A consumer that records everything written through it.
    #[derive(Debug, Default)]
    pub struct RecordingConsumer {
        /// (effect, ambient) pairs in application order.
        pub statuses: Vec<(StatusEffect, bool)>,
        /// Kinds treated as already active for `has_active_status`.
        pub active: Vec<StatusId>,
        pub experience: u32,
        pub teleports: u32,
    }

    impl Consumer for RecordingConsumer {
        fn add_status(&mut self, effect: StatusEffect, ambient: bool) {
            self.statuses.push((effect, ambient));
        }

        fn has_active_status(&self, kind: StatusId) -> bool {
            self.active.contains(&kind)
        }

        fn grant_experience(&mut self, amount: u32) {
            self.experience += amount;
        }

        fn request_teleport(&mut self) {
            self.teleports += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::RecordingConsumer;
    use super::*;

    const RESISTANCE: StatusId = StatusId(0);
    const REGEN: StatusId = StatusId(1);
    const POISON: StatusId = StatusId(2);

    fn catalog() -> StatusCatalog {
        StatusCatalog::new(RESISTANCE).with_detrimental(&[POISON])
    }

    fn status(kind: StatusId, amplifier: u32, duration: u32) -> StatusEffect {
        StatusEffect::new(kind, amplifier, duration)
    }

    // -----------------------------------------------------------------------
    // Merge arithmetic (pinned behavior)
    // -----------------------------------------------------------------------

    #[test]
    fn first_instance_seeds_accumulator() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 2, 80)));
        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());
        let (applied, ambient) = consumer.statuses[0];
        assert_eq!(applied.amplifier, 2);
        assert_eq!(applied.duration, 80);
        assert!(!ambient);
    }

    #[test]
    fn amplifier_escalation_rescales_stored_duration() {
        // Pinned: amp0/100 + amp1/50 => amp1, 100*2 + 50 = 250.
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 0, 100)));
        c.add(CollectedEffect::Status(status(REGEN, 1, 50)));

        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());
        let applied = consumer.statuses[0].0;
        assert_eq!(applied.amplifier, 1);
        assert_eq!(applied.duration, 250);
    }

    #[test]
    fn weaker_instance_is_normalized_upward() {
        // Reverse order of the escalation case: amp1/50 + amp0/100 also
        // yields 50 + 100*2 = 250 at amp 1. The merge is order-independent.
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 1, 50)));
        c.add(CollectedEffect::Status(status(REGEN, 0, 100)));

        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());
        let applied = consumer.statuses[0].0;
        assert_eq!(applied.amplifier, 1);
        assert_eq!(applied.duration, 250);
    }

    #[test]
    fn same_amplifier_durations_are_additive() {
        // d1+d2+d3 regardless of order.
        for order in [[30, 50, 20], [20, 30, 50], [50, 20, 30]] {
            let mut c = EffectCollector::new();
            for d in order {
                c.add(CollectedEffect::Status(status(REGEN, 1, d)));
            }
            let mut consumer = RecordingConsumer::default();
            c.apply(&mut consumer, &catalog());
            assert_eq!(consumer.statuses[0].0.duration, 100);
        }
    }

    #[test]
    fn amplifier_never_decreases() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 3, 10)));
        c.add(CollectedEffect::Status(status(REGEN, 0, 10)));
        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());
        assert_eq!(consumer.statuses[0].0.amplifier, 3);
    }

    #[test]
    fn particle_visibility_only_downgrades() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 0, 10).hidden()));
        c.add(CollectedEffect::Status(status(REGEN, 0, 10)));
        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());
        assert!(!consumer.statuses[0].0.show_particles);
    }

    #[test]
    fn duration_rescale_saturates() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 0, u32::MAX / 2)));
        c.add(CollectedEffect::Status(status(REGEN, 4, 1)));
        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());
        assert_eq!(consumer.statuses[0].0.duration, u32::MAX);
    }

    // -----------------------------------------------------------------------
    // Channels
    // -----------------------------------------------------------------------

    #[test]
    fn unsupported_channel_is_logged_noop() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Experience(10));
        c.add(CollectedEffect::Teleport);
        assert_eq!(c.pending_count(), 0);
    }

    #[test]
    fn clear_discards_status_accumulators() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 0, 100)));
        c.clear(EffectChannel::Status);
        assert_eq!(c.pending_count(), 0);
    }

    #[test]
    fn clear_unsupported_channel_is_noop() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 0, 100)));
        c.clear(EffectChannel::Teleport);
        assert_eq!(c.pending_count(), 1);
    }

    // -----------------------------------------------------------------------
    // Application
    // -----------------------------------------------------------------------

    #[test]
    fn resistance_suppresses_beneficial_not_detrimental() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 0, 100)));
        c.add(CollectedEffect::Status(status(POISON, 0, 60)));

        let mut consumer = RecordingConsumer::default();
        consumer.active.push(RESISTANCE);
        c.apply(&mut consumer, &catalog());

        // Only the detrimental accumulator applied, plus the bonus
        // resistance keyed off it.
        let kinds: Vec<StatusId> = consumer.statuses.iter().map(|(s, _)| s.kind).collect();
        assert_eq!(kinds, vec![POISON, RESISTANCE]);
    }

    #[test]
    fn bonus_resistance_doubles_max_duration() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 0, 100)));
        c.add(CollectedEffect::Status(status(POISON, 0, 300)));

        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());

        let (bonus, ambient) = *consumer.statuses.last().unwrap();
        assert_eq!(bonus.kind, RESISTANCE);
        assert_eq!(bonus.duration, 600);
        assert_eq!(bonus.amplifier, 0);
        assert!(!bonus.show_particles);
        assert!(ambient);
    }

    #[test]
    fn empty_collector_applies_nothing() {
        let c = EffectCollector::new();
        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());
        assert!(consumer.statuses.is_empty());
    }

    #[test]
    fn fully_suppressed_batch_grants_no_bonus() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 0, 100)));

        let mut consumer = RecordingConsumer::default();
        consumer.active.push(RESISTANCE);
        c.apply(&mut consumer, &catalog());

        assert!(consumer.statuses.is_empty());
    }

    // -----------------------------------------------------------------------
    // Harmony
    // -----------------------------------------------------------------------

    #[test]
    fn harmonize_doubles_beneficial_durations_only() {
        let mut c = EffectCollector::new();
        c.add(CollectedEffect::Status(status(REGEN, 1, 100)));
        c.add(CollectedEffect::Status(status(POISON, 0, 40)));
        c.harmonize(&catalog());

        let mut consumer = RecordingConsumer::default();
        c.apply(&mut consumer, &catalog());

        let by_kind: std::collections::BTreeMap<StatusId, u32> = consumer
            .statuses
            .iter()
            .map(|(s, _)| (s.kind, s.duration))
            .collect();
        assert_eq!(by_kind[&REGEN], 200);
        assert_eq!(by_kind[&POISON], 40);
    }
}
