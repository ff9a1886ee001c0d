//! Pattern 4: Interface Segregation
//! Example: Splitting Booking From Cancellation
//!
//! Run with: cargo run --example p4_isp_booking

use std::panic;

use capability_design_patterns::booking::{Bookable, BookingError, Cancelable, Hostel, HotelRoom};

// Incorrect: one broad desk interface. Every venue must carry `cancel`,
// even the ones that cannot honor it, so the hostel has nothing left to
// do but abort at call time.
trait ReservationDesk {
    fn book(&mut self, nights: u32) -> Result<(), BookingError>;
    fn cancel(&mut self) -> Result<(), BookingError>;
}

#[derive(Default)]
struct BroadHostel {
    nights_sold: u32,
}

impl ReservationDesk for BroadHostel {
    fn book(&mut self, nights: u32) -> Result<(), BookingError> {
        if nights == 0 {
            return Err(BookingError::EmptyStay);
        }
        self.nights_sold += nights;
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), BookingError> {
        unimplemented!("hostel beds are non-refundable")
    }
}

fn main() {
    println!("=== Incorrect: Broad Interface, Runtime Abort ===");
    let mut broad = BroadHostel::default();
    broad.book(2).expect("in-domain stay");
    println!("Booked 2 nights at the broad-interface hostel");
    let aborted = panic::catch_unwind(panic::AssertUnwindSafe(|| broad.cancel()));
    println!("Calling cancel() panicked: {}", aborted.is_err());

    println!("\n=== Correct: Only the Capabilities a Venue Honors ===");
    let mut room = HotelRoom::default();
    room.book(2).expect("in-domain stay");
    room.cancel().expect("active reservation");
    println!("Hotel room booked and cancelled without incident");

    let mut hostel = Hostel::default();
    hostel.book(2).expect("in-domain stay");
    println!("Hostel booked {} nights", hostel.nights_sold());
    // hostel.cancel(); // does not compile: Hostel never claims Cancelable
}
