//! Quaternion to W/P/R conversion.
//!
//! The quaternion is taken in the order it appears in the source,
//! `(q1, q2, q3, q4)`, with `q4` as the scalar part. Angles are extracted
//! from the rotation matrix in yaw-pitch-roll (Z-Y-X) order. Pitch uses
//! `atan2` rather than `asin`, so it never leaves its domain near ±90°;
//! the gimbal-lock ambiguity there is not resolved.

use super::ir::Orientation;

/// Convert quaternion components to yaw/pitch/roll in degrees.
pub fn quaternion_to_euler(q1: f64, q2: f64, q3: f64, q4: f64) -> Orientation {
    let r11 = 1.0 - 2.0 * (q2 * q2 + q3 * q3);
    let r21 = 2.0 * (q1 * q2 + q3 * q4);
    let r31 = 2.0 * (q1 * q3 - q2 * q4);
    let r32 = 2.0 * (q2 * q3 + q1 * q4);
    let r33 = 1.0 - 2.0 * (q1 * q1 + q2 * q2);

    let w = r21.atan2(r11);
    let p = (-r31).atan2((r32 * r32 + r33 * r33).sqrt());
    let r = r32.atan2(r33);

    Orientation {
        w: w.to_degrees(),
        p: p.to_degrees(),
        r: r.to_degrees(),
    }
}
