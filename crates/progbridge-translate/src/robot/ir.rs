//! Intermediate model for robot motion programs.

use std::collections::HashMap;

/// Orientation as yaw/pitch/roll in degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct Orientation {
    pub w: f64,
    pub p: f64,
    pub r: f64,
}

/// A named pose: position in millimetres plus orientation.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Point {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub orientation: Orientation,
}

impl Point {
    /// Pose at the origin with zero orientation.
    pub fn zero() -> Self {
        Self {
            name: String::new(),
            x: 0.0,
            y: 0.0,
            z: 0.0,
            orientation: Orientation::default(),
        }
    }
}

/// Points keyed by lowercase name.
///
/// Every lookup normalises its query the same way, so `P10` and `p10` always
/// resolve to the same record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointTable {
    points: HashMap<String, Point>,
}

impl PointTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point, replacing any earlier point with the same normalised name.
    pub fn insert(&mut self, point: Point) {
        self.points.insert(point.name.to_lowercase(), point);
    }

    pub fn get(&self, name: &str) -> Option<&Point> {
        self.points.get(&name.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Motion kind of an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Motion {
    Joint,
    Linear,
}

impl Motion {
    /// Single-letter tag used in the generated program.
    pub fn letter(&self) -> char {
        match self {
            Motion::Joint => 'J',
            Motion::Linear => 'L',
        }
    }
}

/// Speed already converted to the target's unit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum Speed {
    /// Joint speed as a percentage of maximum.
    Percent(u64),
    /// Linear TCP speed as decimal digits, unbounded.
    MillimetersPerSecond(String),
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Speed::Percent(v) => write!(f, "{v}%"),
            Speed::MillimetersPerSecond(v) => write!(f, "{v}mm/sec"),
        }
    }
}

/// A motion statement referencing a point by name.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Instruction {
    pub motion: Motion,
    /// Point name as written in the source; resolved during generation.
    pub point: String,
    pub speed: Speed,
}

/// A robot program: the point table plus the ordered motion instructions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RobotProgram {
    pub points: PointTable,
    pub instructions: Vec<Instruction>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(name: &str, x: f64) -> Point {
        Point {
            name: name.to_string(),
            x,
            ..Point::zero()
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        let mut table = PointTable::new();
        table.insert(point("pHome", 1.0));
        assert_eq!(table.get("pHome").map(|p| p.x), Some(1.0));
        assert_eq!(table.get("PHOME").map(|p| p.x), Some(1.0));
        assert!(table.get("pWork").is_none());
    }

    #[test]
    fn test_redeclaration_replaces() {
        let mut table = PointTable::new();
        table.insert(point("p1", 1.0));
        table.insert(point("P1", 2.0));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("p1").map(|p| p.x), Some(2.0));
    }

    #[test]
    fn test_speed_display() {
        assert_eq!(Speed::Percent(5).to_string(), "5%");
        assert_eq!(Speed::MillimetersPerSecond("200".into()).to_string(), "200mm/sec");
    }
}
