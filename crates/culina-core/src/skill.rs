//! Culinary skill/progression gate.
//!
//! Progression state (storage, leveling curves) lives with the host; the
//! engine only queries it to scale capacity limits and to award points when
//! dishes are cooked and served.

use serde::{Deserialize, Serialize};

/// Learnable skills the engine consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// Raises the effective dish capacity to the full base limit.
    /// Without it, only 3/4 of the base limit is usable.
    BiggerSize,
}

/// Point pools the engine awards into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillPoint {
    /// Awarded on serving, proportional to dish nutrition.
    Expertise,
    /// Awarded flat on serving and occasionally on tool use.
    Proficiency,
}

/// Read/award interface over the host's progression state.
pub trait SkillGate {
    fn has_learned(&self, skill: Skill) -> bool;

    fn level_of(&self, point: SkillPoint) -> u32;

    /// Grant points into a pool.
    fn award(&mut self, point: SkillPoint, amount: u32);
}

/// In-memory gate for tests and headless hosts.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct MemorySkills {
    pub learned: Vec<Skill>,
    pub expertise: u32,
    pub proficiency: u32,
}

impl MemorySkills {
    pub fn with_learned(skills: &[Skill]) -> Self {
        Self {
            learned: skills.to_vec(),
            ..Self::default()
        }
    }
}

impl SkillGate for MemorySkills {
    fn has_learned(&self, skill: Skill) -> bool {
        self.learned.contains(&skill)
    }

    fn level_of(&self, point: SkillPoint) -> u32 {
        match point {
            SkillPoint::Expertise => self.expertise,
            SkillPoint::Proficiency => self.proficiency,
        }
    }

    fn award(&mut self, point: SkillPoint, amount: u32) {
        match point {
            SkillPoint::Expertise => self.expertise += amount,
            SkillPoint::Proficiency => self.proficiency += amount,
        }
    }
}
