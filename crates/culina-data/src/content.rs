//! The default culinary content set.
//!
//! Mirrors a kitchen-sink Chinese-cooking palette: grains, produce, meats,
//! the common spice shelf, and the consumable effects they carry. Hosts
//! that want their own content build a [`CulinaryContext`] by hand instead.

use culina_core::collector::StatusCatalog;
use culina_core::context::CulinaryContext;
use culina_core::effect::{Effect, StatusEffect};
use culina_core::fixed::f64_to_fixed32;
use culina_core::material::{Form, FormSet, Material, MaterialCategory, Spice, SpiceNature};
use culina_core::registry::RegistryError;

use crate::keys::{fluid, item, status};

/// Why the default content could not be wired. Always a startup-time fault.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("default content registration failed: {0}")]
    Registry(#[from] RegistryError),
}

/// Status kinds the default content treats as detrimental, and the
/// resistance kind consumption is gated on.
pub fn default_catalog() -> StatusCatalog {
    StatusCatalog::new(status::RESISTANCE).with_detrimental(&[
        status::POISON,
        status::HUNGER,
        status::NAUSEA,
    ])
}

/// Colors below come straight from the palette's signed ARGB literals.
const fn argb(raw: i32) -> u32 {
    raw as u32
}

fn potion(effects: &[(culina_core::id::StatusId, u32, u32)]) -> Effect {
    Effect::Potions(
        effects
            .iter()
            .map(|&(kind, amplifier, duration)| StatusEffect::new(kind, amplifier, duration))
            .collect(),
    )
}

/// Build a context carrying the full default content set: effects first
/// (materials reference them), then materials, spices, and the host
/// bindings.
pub fn default_context() -> Result<CulinaryContext, ContentError> {
    let mut ctx = CulinaryContext::new();

    // -- effects ------------------------------------------------------------

    ctx.register_effect("experienced", Effect::Experienced)?;
    let golden_apple = ctx.register_effect(
        "golden_apple",
        potion(&[
            (status::REGENERATION, 1, 100),
            (status::ABSORPTION, 0, 2400),
        ]),
    )?;
    let golden_apple_enchanted = ctx.register_effect(
        "golden_apple_enchanted",
        potion(&[
            (status::REGENERATION, 1, 400),
            (status::RESISTANCE, 0, 6000),
            (status::FIRE_RESISTANCE, 0, 6000),
            (status::ABSORPTION, 3, 2400),
        ]),
    )?;
    ctx.register_effect("flavor_enhancer", Effect::FlavorEnhancer)?;
    let harmony = ctx.register_effect("harmony", Effect::Harmony)?;
    let teleport = ctx.register_effect("teleport", Effect::Teleport)?;
    let always_edible = ctx.register_effect("always_edible", Effect::AlwaysEdible)?;
    let jump_boost =
        ctx.register_effect("jump_boost", potion(&[(status::JUMP_BOOST, 1, 400)]))?;
    let power = ctx.register_effect("power", potion(&[(status::STRENGTH, 1, 400)]))?;
    let night_vision =
        ctx.register_effect("night_vision", potion(&[(status::NIGHT_VISION, 0, 400)]))?;
    ctx.register_effect("hot", potion(&[(status::HOT, 0, 1200)]))?;
    let dispersal = ctx.register_effect("dispersal", potion(&[(status::DISPERSAL, 1, 400)]))?;
    let pufferfish_poison = ctx.register_effect(
        "pufferfish_poison",
        potion(&[
            (status::POISON, 3, 1200),
            (status::HUNGER, 2, 300),
            (status::NAUSEA, 1, 300),
        ]),
    )?;
    ctx.register_effect(
        "water_breathing",
        potion(&[(status::WATER_BREATHING, 0, 1500)]),
    )?;

    // -- materials ----------------------------------------------------------

    let chopped = |forms: &[Form]| FormSet::of(forms);
    let all = FormSet::all_processed();

    let veg = |name: &str, color: i32, sat: f64| {
        Material::new(name, argb(color), 1, f64_to_fixed32(sat))
            .with_categories(&[MaterialCategory::Vegetables])
    };
    let meat = |name: &str, color: i32, sat: f64| {
        Material::new(name, argb(color), 1, f64_to_fixed32(sat))
            .with_categories(&[MaterialCategory::Meat])
            .with_forms(all)
    };

    ctx.register_material(
        Material::new("peanut", argb(-8531), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Nut])
            .with_forms(chopped(&[Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(
        Material::new("sesame", argb(-15000805), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Grain]),
    )?;
    ctx.register_material(
        Material::new("soybean", argb(-2048665), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Grain]),
    )?;
    ctx.register_material(
        Material::new("rice", argb(-4671304), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Grain]),
    )?;
    ctx.register_material(veg("tomato", -2681308, 0.0).with_forms(all))?;
    ctx.register_material(
        veg("chili", -2878173, 0.0)
            .with_forms(chopped(&[Form::Cubed, Form::Shredded, Form::Minced]))
            .with_heat_resilience(f64_to_fixed32(0.5)),
    )?;
    ctx.register_material(
        veg("garlic", -32, 0.0)
            .with_effect(dispersal)
            .with_forms(chopped(&[Form::Diced, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(veg("ginger", -1828, 0.0).with_forms(all))?;
    ctx.register_material(
        Material::new("sichuan_pepper", argb(-8511203), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Unknown]),
    )?;
    ctx.register_material(
        veg("scallion", -12609717, 0.0)
            .with_forms(chopped(&[Form::Sliced, Form::Shredded, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(veg("turnip", -3557457, 0.0).with_forms(all))?;
    ctx.register_material(
        veg("chinese_cabbage", -1966111, 0.0)
            .with_forms(chopped(&[Form::Sliced, Form::Shredded, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(
        veg("lettuce", -14433485, 0.0)
            .with_forms(chopped(&[Form::Sliced, Form::Shredded, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(
        Material::new("corn", argb(-3227867), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Grain])
            .with_forms(chopped(&[Form::Minced])),
    )?;
    ctx.register_material(veg("cucumber", -15893221, 0.0).with_forms(all))?;
    ctx.register_material(
        veg("green_pepper", -15107820, 0.0)
            .with_forms(chopped(&[Form::Sliced, Form::Shredded, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(
        veg("red_pepper", -8581357, 0.0)
            .with_forms(chopped(&[Form::Sliced, Form::Shredded, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(
        veg("leek", -15100888, 0.0)
            .with_forms(chopped(&[Form::Cubed, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(veg("onion", -17409, 0.0).with_forms(all))?;
    ctx.register_material(veg("eggplant", -11461535, 0.0).with_forms(all))?;
    ctx.register_material(
        veg("spinach", -15831787, 0.1)
            .with_effect(power)
            .with_forms(chopped(&[Form::Sliced, Form::Shredded, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(
        Material::new("tofu", argb(-2311026), 1, f64_to_fixed32(0.4))
            .with_categories(&[MaterialCategory::Protein, MaterialCategory::Grain])
            .with_effect(harmony)
            .with_forms(chopped(&[Form::Cubed, Form::Sliced, Form::Diced, Form::Minced])),
    )?;
    ctx.register_material(
        Material::new("chorus_fruit", argb(-6271615), 1, f64_to_fixed32(-0.1))
            .with_categories(&[MaterialCategory::Fruit, MaterialCategory::Supernatural])
            .with_effect(teleport)
            .with_forms(all),
    )?;
    ctx.register_material(
        Material::new("apple", argb(-1296), 1, f64_to_fixed32(0.1))
            .with_categories(&[MaterialCategory::Fruit])
            .with_forms(all),
    )?;
    ctx.register_material(
        Material::new("golden_apple", argb(-1782472), 1, f64_to_fixed32(0.3))
            .with_categories(&[MaterialCategory::Fruit, MaterialCategory::Supernatural])
            .with_effect(golden_apple)
            .with_forms(all),
    )?;
    ctx.register_material(
        Material::new("golden_apple_enchanted", argb(-1782472), 1, f64_to_fixed32(0.3))
            .with_categories(&[MaterialCategory::Fruit, MaterialCategory::Supernatural])
            .with_effect(golden_apple_enchanted)
            .with_forms(all)
            .with_glow(),
    )?;
    ctx.register_material(
        Material::new("melon", argb(-769226), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Fruit])
            .with_forms(chopped(&[Form::Cubed, Form::Sliced, Form::Diced, Form::Minced, Form::Paste])),
    )?;
    ctx.register_material(veg("pumpkin", -663885, 0.0).with_forms(all))?;
    ctx.register_material(
        veg("carrot", -1538531, 0.1)
            .with_effect(night_vision)
            .with_forms(all),
    )?;
    ctx.register_material(
        Material::new("potato", argb(-3764682), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Grain])
            .with_forms(all),
    )?;
    ctx.register_material(veg("beetroot", -8442327, 0.0).with_forms(all))?;
    ctx.register_material(veg("mushroom", -10006976, 0.0).with_forms(all))?;
    ctx.register_material(
        Material::new("egg", argb(-3491187), 1, f64_to_fixed32(0.2))
            .with_categories(&[MaterialCategory::Protein]),
    )?;
    ctx.register_material(meat("chicken", -929599, 0.0))?;
    ctx.register_material(meat("beef", -3392460, 0.0))?;
    ctx.register_material(meat("pork", -2133904, 0.0))?;
    ctx.register_material(meat("mutton", -3917262, 0.0))?;
    ctx.register_material(meat("rabbit", -4882580, 0.1).with_effect(jump_boost))?;
    ctx.register_material(
        Material::new("fish", argb(-10583426), 1, f64_to_fixed32(0.0))
            .with_categories(&[MaterialCategory::Fish])
            .with_forms(all),
    )?;
    ctx.register_material(
        Material::new("pufferfish", 0xFFFFE1C4, 1, f64_to_fixed32(0.2))
            .with_categories(&[MaterialCategory::Fish])
            .with_effect(pufferfish_poison)
            .with_forms(all),
    )?;
    ctx.register_material(
        veg("pickled", -13784, 0.3)
            .with_effect(always_edible)
            .with_forms(all),
    )?;
    ctx.register_material(
        veg("bamboo_shoot", -15893221, 0.0)
            .with_effect(always_edible)
            .with_forms(all),
    )?;

    // -- spices -------------------------------------------------------------

    ctx.register_spice(Spice::new("edible_oil", 0).with_nature(SpiceNature::Oil))?;
    ctx.register_spice(Spice::new("sesame_oil", 0).with_nature(SpiceNature::Oil))?;
    ctx.register_spice(Spice::new("soy_sauce", 0).with_nature(SpiceNature::Sauce))?;
    ctx.register_spice(Spice::new("rice_vinegar", 0).with_nature(SpiceNature::Sauce))?;
    ctx.register_spice(Spice::new("fruit_vinegar", 0).with_nature(SpiceNature::Sauce))?;
    ctx.register_spice(Spice::new("water", 0).with_nature(SpiceNature::Water))?;
    ctx.register_spice(Spice::new("chili_powder", argb(11546150)))?;
    ctx.register_spice(Spice::new("sichuan_pepper_powder", argb(8606770)))?;
    ctx.register_spice(Spice::new("crude_salt", argb(4673362)))?;
    ctx.register_spice(Spice::new("salt", argb(16383998)))?;
    ctx.register_spice(Spice::new("sugar", argb(16383998)))?;

    wire_bindings(&mut ctx);
    Ok(ctx)
}

/// Exact-item, tag, and fluid bindings for the default content. Unwraps
/// here would hide wiring bugs; the lookups cannot miss because every name
/// was registered above.
fn wire_bindings(ctx: &mut CulinaryContext) {
    let material = |ctx: &CulinaryContext, name: &str| {
        ctx.materials
            .lookup(name)
            .unwrap_or_else(|| unreachable!("material {name} registered above"))
    };
    let spice = |ctx: &CulinaryContext, name: &str| {
        ctx.spices
            .lookup(name)
            .unwrap_or_else(|| unreachable!("spice {name} registered above"))
    };

    let exact_materials = [
        (item::GREEN_PEPPER, "green_pepper"),
        (item::RED_PEPPER, "red_pepper"),
        (item::BAMBOO_SHOOT, "bamboo_shoot"),
        (item::GOLDEN_APPLE, "golden_apple"),
        (item::GOLDEN_APPLE_ENCHANTED, "golden_apple_enchanted"),
        (item::MELON, "melon"),
        (item::PUMPKIN, "pumpkin"),
        (item::CARROT, "carrot"),
        (item::POTATO, "potato"),
        (item::BEETROOT, "beetroot"),
        (item::BROWN_MUSHROOM, "mushroom"),
        (item::RED_MUSHROOM, "mushroom"),
        (item::COD, "fish"),
        (item::SALMON, "fish"),
        (item::PUFFERFISH, "pufferfish"),
        (item::PICKLED_CUCUMBER, "pickled"),
        (item::PICKLED_CABBAGE, "pickled"),
        (item::PICKLED_PEPPER, "pickled"),
        (item::PICKLED_TURNIP, "pickled"),
    ];
    for (key, name) in exact_materials {
        let id = material(ctx, name);
        ctx.tables.materials.bind_item(key, id);
    }

    let tag_materials = [
        ("cropPeanut", "peanut"),
        ("cropSesame", "sesame"),
        ("cropSoybean", "soybean"),
        ("cropTomato", "tomato"),
        ("cropChilipepper", "chili"),
        ("foodWhiterice", "rice"),
        ("cropGarlic", "garlic"),
        ("cropGinger", "ginger"),
        ("cropSichuanpepper", "sichuan_pepper"),
        ("cropScallion", "scallion"),
        ("cropTurnip", "turnip"),
        ("cropCabbage", "chinese_cabbage"),
        ("cropLettuce", "lettuce"),
        ("cropCorn", "corn"),
        ("cropCucumber", "cucumber"),
        ("cropLeek", "leek"),
        ("cropOnion", "onion"),
        ("cropEggplant", "eggplant"),
        ("cropSpinach", "spinach"),
        ("foodFirmtofu", "tofu"),
        ("cropChorusfruit", "chorus_fruit"),
        ("cropApple", "apple"),
        ("egg", "egg"),
        ("listAllporkraw", "pork"),
        ("listAllmuttonraw", "mutton"),
        ("listAllbeefraw", "beef"),
        ("listAllchickenraw", "chicken"),
        ("listAllrabbitraw", "rabbit"),
        ("foodMushroom", "mushroom"),
    ];
    for (tag, name) in tag_materials {
        let id = material(ctx, name);
        ctx.tables.materials.bind_tag(tag, id);
    }

    let fluids = [
        (fluid::EDIBLE_OIL, "edible_oil"),
        (fluid::SESAME_OIL, "sesame_oil"),
        (fluid::SOY_SAUCE, "soy_sauce"),
        (fluid::RICE_VINEGAR, "rice_vinegar"),
        (fluid::FRUIT_VINEGAR, "fruit_vinegar"),
        (fluid::WATER, "water"),
    ];
    for (kind, name) in fluids {
        let id = spice(ctx, name);
        ctx.tables.bind_fluid_spice(kind, id);
    }

    let exact_spices = [
        (item::CHILI_POWDER, "chili_powder"),
        (item::SICHUAN_PEPPER_POWDER, "sichuan_pepper_powder"),
        (item::SUGAR, "sugar"),
    ];
    for (key, name) in exact_spices {
        let id = spice(ctx, name);
        ctx.tables.spices.bind_item(key, id);
    }

    let tag_spices = [("dustSalt", "salt"), ("dustCrudesalt", "crude_salt")];
    for (tag, name) in tag_spices {
        let id = spice(ctx, name);
        ctx.tables.spices.bind_tag(tag, id);
    }
}

// ---------------------------------------------------------------------------
