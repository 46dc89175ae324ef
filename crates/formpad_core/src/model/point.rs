//! Signature capture primitives.
//!
//! # Responsibility
//! - Represent one 2-D coordinate sampled during signature capture.
//! - Keep the ordered stroke sequence append-only during capture.
//!
//! # Invariants
//! - Point order is drawing order; the sequence is never reordered or
//!   deduplicated.
//! - Single points are never removed; the sequence only grows via `append`
//!   or is replaced wholesale via `replace`.

use serde::{Deserialize, Serialize};

/// One sampled coordinate of a hand-drawn signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Ordered sequence of points constituting a captured signature.
///
/// May be empty; an empty signature is a valid record state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature {
    points: Vec<Point>,
}

impl Signature {
    /// Creates an empty signature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a signature from already-captured points, preserving order.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Appends one point at the end of the stroke sequence.
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Read-only view of the sequence in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Replaces the whole sequence, used when a record is loaded or reset.
    pub fn replace(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
