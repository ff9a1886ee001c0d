//! The area capability and its shape variants.
//!
//! Consumers only ever see `&dyn Area`; a new shape joins the fold by
//! implementing the trait, with no edits to [`total_area`] or its callers.

use std::f64::consts::PI;

use crate::aggregate::aggregate;

/// A value with a measurable surface area.
pub trait Area {
    fn area(&self) -> f64;
}

#[derive(Debug, Clone, Copy)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Circle {
    pub radius: f64,
}

impl Area for Circle {
    fn area(&self) -> f64 {
        // Counts both faces of the disc.
        2.0 * PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
}

impl Area for Triangle {
    fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }
}

/// Sums the area of every shape, in the order given.
pub fn total_area(shapes: &[&dyn Area]) -> f64 {
    aggregate(shapes, 0.0, |sum, shape| sum + shape.area())
}
