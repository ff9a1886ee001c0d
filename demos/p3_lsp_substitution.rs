//! Pattern 3: Liskov Substitution
//! Example: Implementors That Stay Honest Under the Same Contract
//!
//! Run with: cargo run --example p3_lsp_substitution

use capability_design_patterns::booking::{book_stay, Bookable, BookingError, Hostel, HotelRoom};

// Incorrect: claims the Bookable contract but quietly caps every stay at
// one night. In-domain calls succeed while meaning something weaker, so
// code written against the capability gets different results depending on
// which implementor it happens to hold.
#[derive(Default)]
struct CappedRoom {
    nights: u32,
}

impl Bookable for CappedRoom {
    fn book(&mut self, nights: u32) -> Result<(), BookingError> {
        if nights == 0 {
            return Err(BookingError::EmptyStay);
        }
        self.nights = nights.min(1); // silent downgrade
        Ok(())
    }
}

fn main() {
    println!("=== Incorrect: Silent Downgrade ===");
    let mut capped = CappedRoom::default();
    capped.book(5).expect("in-domain stay");
    println!("Asked for 5 nights, got {} recorded", capped.nights);

    println!("\n=== Correct: Identical In-Domain Behavior ===");
    let mut room = HotelRoom::default();
    let mut hostel = Hostel::default();
    {
        let mut venues: [&mut dyn Bookable; 2] = [&mut room, &mut hostel];
        book_stay(&mut venues, 5).expect("in-domain stay");
    }
    println!("Hotel room reserved: {:?} nights", room.reserved_nights());
    println!("Hostel nights sold: {}", hostel.nights_sold());

    // Narrowing is only legal through the shared error channel.
    println!("\n=== Correct: Shared Rejection Channel ===");
    let mut fresh_room = HotelRoom::default();
    let mut fresh_hostel = Hostel::default();
    for (label, venue) in [
        ("hotel room", &mut fresh_room as &mut dyn Bookable),
        ("hostel", &mut fresh_hostel as &mut dyn Bookable),
    ] {
        match venue.book(0) {
            Err(err) => println!("{label}: rejected zero-night stay: {err}"),
            Ok(()) => println!("{label}: accepted?!"),
        }
    }
}
