//! Speed identifier conversion.
//!
//! RAPID names speeds with speeddata identifiers such as `v1000` or `vmax`.
//! The numeric part is taken as-is for linear moves and scaled to a
//! percentage for joint moves. This is a fixed heuristic, not a physical
//! unit conversion.

use super::ir::{Motion, Speed};

/// Value used when the identifier carries no digits (`vmax`).
pub const DEFAULT_SPEED: u64 = 1000;

/// Joint percentages never exceed this.
const MAX_PERCENT: u64 = 100;

/// Convert a speed identifier for the given motion kind.
///
/// Any digit run converts: linear speeds keep the decimal value however long
/// it is, joint speeds past `u64` saturate at 100%.
pub fn convert_speed(identifier: &str, motion: Motion) -> Speed {
    let digits = match first_digit_run(identifier) {
        Some(digits) => {
            let trimmed = digits.trim_start_matches('0');
            if trimmed.is_empty() { "0" } else { trimmed }
        }
        None => return default_speed(motion),
    };

    match motion {
        Motion::Linear => Speed::MillimetersPerSecond(digits.to_string()),
        Motion::Joint => {
            let percent = digits.parse::<u64>().map_or(MAX_PERCENT, |v| v / 10);
            Speed::Percent(percent.min(MAX_PERCENT))
        }
    }
}

fn default_speed(motion: Motion) -> Speed {
    match motion {
        Motion::Linear => Speed::MillimetersPerSecond(DEFAULT_SPEED.to_string()),
        Motion::Joint => Speed::Percent((DEFAULT_SPEED / 10).min(MAX_PERCENT)),
    }
}

fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let len = s[start..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len() - start);
    Some(&s[start..start + len])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joint(id: &str) -> Speed {
        convert_speed(id, Motion::Joint)
    }

    fn linear(id: &str) -> Speed {
        convert_speed(id, Motion::Linear)
    }

    fn mm(value: &str) -> Speed {
        Speed::MillimetersPerSecond(value.to_string())
    }

    #[test]
    fn test_joint_scales_to_percent() {
        assert_eq!(joint("v50"), Speed::Percent(5));
        assert_eq!(joint("v1000"), Speed::Percent(100));
        assert_eq!(joint("v5"), Speed::Percent(0));
    }

    #[test]
    fn test_joint_is_capped() {
        assert_eq!(joint("v1500"), Speed::Percent(100));
    }

    #[test]
    fn test_linear_keeps_value() {
        assert_eq!(linear("v200"), mm("200"));
        assert_eq!(linear("v0200"), mm("200"));
        assert_eq!(linear("v0"), mm("0"));
    }

    #[test]
    fn test_default_without_digits() {
        assert_eq!(linear("vmax"), mm("1000"));
        assert_eq!(joint("vmax"), Speed::Percent(100));
    }

    #[test]
    fn test_first_digit_run_only() {
        assert_eq!(linear("v2x300"), mm("2"));
        assert_eq!(linear("speed_400_fast"), mm("400"));
    }

    #[test]
    fn test_joint_saturates_past_u64() {
        assert_eq!(joint("v123456789012345678901234"), Speed::Percent(100));
    }

    #[test]
    fn test_linear_keeps_digits_past_u64() {
        assert_eq!(
            linear("v123456789012345678901234").to_string(),
            "123456789012345678901234mm/sec"
        );
    }
}
