use fixed::types::{I16F16, I32F32};

/// Q32.32 fixed-point: 32 integer bits, 32 fractional bits.
/// Used for probabilities and anything fed to the RNG.
pub type Fixed64 = I32F32;

/// Q16.16 fixed-point for compact storage (sizes, saturation, quality).
pub type Fixed32 = I16F16;

/// Ticks are the atomic unit of simulation time.
pub type Ticks = u64;

/// Convert an f64 to Fixed32. Use only for initialization, never in sim math.
#[inline]
pub fn f64_to_fixed32(v: f64) -> Fixed32 {
    Fixed32::from_num(v)
}

/// Convert Fixed32 to f64. Use only for display, never in sim math.
#[inline]
pub fn fixed32_to_f64(v: Fixed32) -> f64 {
    v.to_num::<f64>()
}

/// Convert an f64 to Fixed64. Use only for initialization.
#[inline]
pub fn f64_to_fixed64(v: f64) -> Fixed64 {
    Fixed64::from_num(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed32_basic_arithmetic() {
        let a = f64_to_fixed32(1.5);
        let b = f64_to_fixed32(2.0);
        assert_eq!(fixed32_to_f64(a + b), 3.5);
    }

    #[test]
    fn fixed32_three_quarters_is_exact() {
        // The capacity-gate multiplier must not drift.
        let limit = f64_to_fixed32(8.0);
        let gated = limit * f64_to_fixed32(0.75);
        assert_eq!(fixed32_to_f64(gated), 6.0);
    }

    #[test]
    fn fixed32_determinism() {
        let a = f64_to_fixed32(1.0 / 3.0);
        let b = f64_to_fixed32(1.0 / 3.0);
        assert_eq!(a, b);
    }

    #[test]
    fn ticks_type() {
        let t: Ticks = 20;
        assert_eq!(t, 20u64);
    }
}
