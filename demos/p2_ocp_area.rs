//! Pattern 2: Open/Closed
//! Example: Area Aggregation Without Touching the Aggregator
//!
//! Run with: cargo run --example p2_ocp_area

use std::any::Any;

use capability_design_patterns::area::{total_area, Area, Circle, Rectangle, Triangle};

// Incorrect: the aggregator inspects concrete types. Every new shape
// means editing this function, and anything it does not recognize is
// silently dropped from the total.
fn total_area_by_downcast(shapes: &[&dyn Any]) -> f64 {
    let mut total = 0.0;
    for shape in shapes {
        if let Some(rect) = shape.downcast_ref::<Rectangle>() {
            total += rect.width * rect.height;
        } else if let Some(circle) = shape.downcast_ref::<Circle>() {
            total += 2.0 * std::f64::consts::PI * circle.radius * circle.radius;
        }
        // Triangles? Skipped without a word.
    }
    total
}

// A brand-new shape, defined outside the library. The library's
// aggregator takes it as-is.
struct RightTrapezoid {
    top: f64,
    bottom: f64,
    height: f64,
}

impl Area for RightTrapezoid {
    fn area(&self) -> f64 {
        0.5 * (self.top + self.bottom) * self.height
    }
}

fn main() {
    let rect = Rectangle {
        width: 25.3,
        height: 12.43,
    };
    let circle = Circle { radius: 10.0 };
    let triangle = Triangle {
        base: 8.0,
        height: 6.0,
    };

    println!("=== Incorrect: Downcast Dispatch ===");
    let opaque: Vec<&dyn Any> = vec![&rect, &circle, &triangle];
    println!(
        "Total (triangle silently dropped): {:.3}",
        total_area_by_downcast(&opaque)
    );

    println!("\n=== Correct: Fold Over the Capability ===");
    let shapes: Vec<&dyn Area> = vec![&rect, &circle, &triangle];
    println!("Total: {:.3}", total_area(&shapes));

    println!("\n=== Extending Without Edits ===");
    let trapezoid = RightTrapezoid {
        top: 3.0,
        bottom: 5.0,
        height: 4.0,
    };
    let extended: Vec<&dyn Area> = vec![&rect, &circle, &triangle, &trapezoid];
    println!("Total with a shape the library never heard of: {:.3}", total_area(&extended));
}
