//! Host-facing identifier constants for the default content set.
//!
//! Status, item, and fluid identifiers live in the host's numbering space;
//! these constants pin the assignments the default content wires against.

pub mod status {
    use culina_core::id::StatusId;

    pub const REGENERATION: StatusId = StatusId(1);
    pub const ABSORPTION: StatusId = StatusId(2);
    pub const RESISTANCE: StatusId = StatusId(3);
    pub const FIRE_RESISTANCE: StatusId = StatusId(4);
    pub const JUMP_BOOST: StatusId = StatusId(5);
    pub const STRENGTH: StatusId = StatusId(6);
    pub const NIGHT_VISION: StatusId = StatusId(7);
    pub const POISON: StatusId = StatusId(8);
    pub const HUNGER: StatusId = StatusId(9);
    pub const NAUSEA: StatusId = StatusId(10);
    pub const WATER_BREATHING: StatusId = StatusId(11);
    pub const HOT: StatusId = StatusId(12);
    pub const DISPERSAL: StatusId = StatusId(13);
}

pub mod item {
    use culina_core::id::ItemKey;

    // Crop items share one kind, distinguished by variant.
    pub const GREEN_PEPPER: ItemKey = ItemKey { kind: 1, variant: 0 };
    pub const RED_PEPPER: ItemKey = ItemKey { kind: 1, variant: 1 };
    pub const BAMBOO_SHOOT: ItemKey = ItemKey { kind: 1, variant: 2 };

    pub const GOLDEN_APPLE: ItemKey = ItemKey { kind: 2, variant: 0 };
    pub const GOLDEN_APPLE_ENCHANTED: ItemKey = ItemKey { kind: 2, variant: 1 };
    pub const MELON: ItemKey = ItemKey { kind: 3, variant: 0 };
    pub const PUMPKIN: ItemKey = ItemKey { kind: 4, variant: 0 };
    pub const CARROT: ItemKey = ItemKey { kind: 5, variant: 0 };
    pub const POTATO: ItemKey = ItemKey { kind: 6, variant: 0 };
    pub const BEETROOT: ItemKey = ItemKey { kind: 7, variant: 0 };
    pub const BROWN_MUSHROOM: ItemKey = ItemKey { kind: 8, variant: 0 };
    pub const RED_MUSHROOM: ItemKey = ItemKey { kind: 9, variant: 0 };

    // Fish variants: cod, salmon, pufferfish.
    pub const COD: ItemKey = ItemKey { kind: 10, variant: 0 };
    pub const SALMON: ItemKey = ItemKey { kind: 10, variant: 1 };
    pub const PUFFERFISH: ItemKey = ItemKey { kind: 10, variant: 3 };

    pub const PICKLED_CUCUMBER: ItemKey = ItemKey { kind: 11, variant: 0 };
    pub const PICKLED_CABBAGE: ItemKey = ItemKey { kind: 11, variant: 1 };
    pub const PICKLED_PEPPER: ItemKey = ItemKey { kind: 11, variant: 2 };
    pub const PICKLED_TURNIP: ItemKey = ItemKey { kind: 11, variant: 3 };

    pub const CHILI_POWDER: ItemKey = ItemKey { kind: 12, variant: 0 };
    pub const SICHUAN_PEPPER_POWDER: ItemKey = ItemKey { kind: 12, variant: 1 };
    pub const SUGAR: ItemKey = ItemKey { kind: 13, variant: 0 };
}

pub mod fluid {
    use culina_core::id::FluidKind;

    pub const EDIBLE_OIL: FluidKind = FluidKind(1);
    pub const SESAME_OIL: FluidKind = FluidKind(2);
    pub const SOY_SAUCE: FluidKind = FluidKind(3);
    pub const RICE_VINEGAR: FluidKind = FluidKind(4);
    pub const FRUIT_VINEGAR: FluidKind = FluidKind(5);
    pub const WATER: FluidKind = FluidKind(6);
}
