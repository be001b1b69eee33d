//! XP bounds and the XP-to-level conversion curve.
//!
//! Experience is a saturating integer in `[XP_MIN, XP_MAX]` and levels span
//! `[LEVEL_MIN, LEVEL_MAX]`. The curve is linear: every write clamps XP into
//! range first, so `xp_to_level` never sees out-of-domain input from the
//! database, but it clamps its result anyway so arbitrary integers are safe.

/// Lowest XP a member can hold.
pub const XP_MIN: i32 = 0;

/// Highest XP a member can hold. Gains past this point are discarded.
pub const XP_MAX: i32 = 10_000;

/// Level of a member with `XP_MIN` experience.
pub const LEVEL_MIN: i32 = 1;

/// Level of a member with `XP_MAX` experience.
pub const LEVEL_MAX: i32 = 100;

/// Clamps an arbitrary XP amount into the storable `[XP_MIN, XP_MAX]` range.
///
/// Takes an `i64` so callers can pass raw arithmetic results (for example a
/// current value plus a large admin adjustment) without overflow concerns.
pub fn clamp_xp(value: i64) -> i32 {
    value.clamp(i64::from(XP_MIN), i64::from(XP_MAX)) as i32
}

/// Converts an XP total to its display level.
///
/// The mapping is `floor(xp * 99 / 10000) + 1`, clamped to
/// `[LEVEL_MIN, LEVEL_MAX]`: 0 XP is level 1, 10,000 XP is level 100, and
/// each level in between covers an equal ~101 XP band.
pub fn xp_to_level(xp: i32) -> i32 {
    let span = i64::from(LEVEL_MAX - LEVEL_MIN);
    let scaled = i64::from(xp.clamp(XP_MIN, XP_MAX)) * span / i64::from(XP_MAX);
    (scaled as i32 + LEVEL_MIN).clamp(LEVEL_MIN, LEVEL_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_xp_is_level_one() {
        assert_eq!(xp_to_level(0), 1);
    }

    #[test]
    fn max_xp_is_level_one_hundred() {
        assert_eq!(xp_to_level(XP_MAX), 100);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(xp_to_level(-50), 1);
        assert_eq!(xp_to_level(XP_MAX + 1), 100);
        assert_eq!(xp_to_level(i32::MAX), 100);
    }

    #[test]
    fn level_is_monotonic_over_the_full_domain() {
        let mut previous = xp_to_level(XP_MIN);
        for xp in (XP_MIN + 1)..=XP_MAX {
            let level = xp_to_level(xp);
            assert!(
                level >= previous,
                "level decreased from {} to {} at {} xp",
                previous,
                level,
                xp
            );
            previous = level;
        }
    }

    #[test]
    fn every_level_in_range_is_reachable() {
        let mut seen = [false; (LEVEL_MAX + 1) as usize];
        for xp in XP_MIN..=XP_MAX {
            seen[xp_to_level(xp) as usize] = true;
        }
        for level in LEVEL_MIN..=LEVEL_MAX {
            assert!(seen[level as usize], "no xp maps to level {}", level);
        }
    }

    #[test]
    fn clamp_xp_saturates_at_both_ends() {
        assert_eq!(clamp_xp(-1), 0);
        assert_eq!(clamp_xp(0), 0);
        assert_eq!(clamp_xp(5_000), 5_000);
        assert_eq!(clamp_xp(10_000), 10_000);
        assert_eq!(clamp_xp(10_001), 10_000);
        assert_eq!(clamp_xp(i64::MIN), 0);
        assert_eq!(clamp_xp(i64::MAX), 10_000);
    }
}
