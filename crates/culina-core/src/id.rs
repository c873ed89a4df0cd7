use serde::{Deserialize, Serialize};

/// Identifies a registered material. Cheap to copy and compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub u32);

/// Identifies a registered spice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SpiceId(pub u32);

/// Identifies a registered consumable effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

/// Identifies a consumer status kind (the key the effect collector merges on).
/// Values are host-assigned; the core only compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StatusId(pub u32);

/// An opaque item identity supplied by the host: item kind plus variant
/// metadata. The core never constructs these, only uses them as lookup keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub kind: u32,
    pub variant: u32,
}

impl ItemKey {
    pub fn new(kind: u32, variant: u32) -> Self {
        Self { kind, variant }
    }
}

/// An opaque fluid identity supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FluidKind(pub u32);
