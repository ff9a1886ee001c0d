//! Pattern 1: Single Responsibility
//! Example: Contact Data vs Contact Presentation
//!
//! Run with: cargo run --example p1_srp_contact

use capability_design_patterns::contact::{ContactCard, Person};

// Incorrect: one type stores the contact AND decides how it prints.
// Any change to the output format forces an edit to the data type.
struct SelfPrintingPerson {
    name: String,
    phone: String,
}

impl SelfPrintingPerson {
    fn print(&self) {
        println!("Name - {}", self.name);
        println!("Phone number - {}", self.phone);
    }
}

fn main() {
    println!("=== Incorrect: Data Type That Formats Itself ===");
    let tangled = SelfPrintingPerson {
        name: "John".to_string(),
        phone: "123-456-7890".to_string(),
    };
    tangled.print();

    println!("\n=== Correct: Separate Formatter ===");
    let person = Person {
        name: "John".to_string(),
        phone: "123-456-7890".to_string(),
    };
    println!("{}", ContactCard::render(&person));

    // The data type never changes when presentation does.
    println!("\n=== Swapping Presentation ===");
    println!("{} ({})", person.name, person.phone);
}
