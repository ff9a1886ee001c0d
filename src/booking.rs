//! Reservation capabilities, split so a variant only carries what it honors.
//!
//! `Bookable` and `Cancelable` are separate contracts. A non-refundable
//! venue implements `Bookable` alone, so a cancellation call against it is
//! a compile error rather than a runtime assertion. Every implementor
//! rejects out-of-domain input through [`BookingError`], never by silently
//! doing something weaker.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("a stay must cover at least one night")]
    EmptyStay,
    #[error("no active reservation to cancel")]
    NotBooked,
}

/// Accepts reservations for stays of one night or more.
pub trait Bookable {
    fn book(&mut self, nights: u32) -> Result<(), BookingError>;
}

/// Releases a previously made reservation.
pub trait Cancelable {
    fn cancel(&mut self) -> Result<(), BookingError>;
}

/// A refundable room: bookable and cancellable.
#[derive(Debug, Default)]
pub struct HotelRoom {
    reservation: Option<u32>,
}

impl HotelRoom {
    pub fn reserved_nights(&self) -> Option<u32> {
        self.reservation
    }
}

impl Bookable for HotelRoom {
    fn book(&mut self, nights: u32) -> Result<(), BookingError> {
        if nights == 0 {
            return Err(BookingError::EmptyStay);
        }
        self.reservation = Some(nights);
        Ok(())
    }
}

impl Cancelable for HotelRoom {
    fn cancel(&mut self) -> Result<(), BookingError> {
        match self.reservation.take() {
            Some(_) => Ok(()),
            None => Err(BookingError::NotBooked),
        }
    }
}

/// A non-refundable dormitory bed. Deliberately not `Cancelable`.
#[derive(Debug, Default)]
pub struct Hostel {
    nights_sold: u32,
}

impl Hostel {
    pub fn nights_sold(&self) -> u32 {
        self.nights_sold
    }
}

impl Bookable for Hostel {
    fn book(&mut self, nights: u32) -> Result<(), BookingError> {
        if nights == 0 {
            return Err(BookingError::EmptyStay);
        }
        self.nights_sold += nights;
        Ok(())
    }
}

/// Books every venue for the same stay, through the capability alone.
pub fn book_stay(venues: &mut [&mut dyn Bookable], nights: u32) -> Result<(), BookingError> {
    for venue in venues.iter_mut() {
        venue.book(nights)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hotel_room_books_and_cancels() {
        let mut room = HotelRoom::default();
        assert_eq!(room.book(3), Ok(()));
        assert_eq!(room.reserved_nights(), Some(3));
        assert_eq!(room.cancel(), Ok(()));
        assert_eq!(room.reserved_nights(), None);
    }

    #[test]
    fn cancelling_without_a_reservation_fails() {
        let mut room = HotelRoom::default();
        assert_eq!(room.cancel(), Err(BookingError::NotBooked));
    }

    #[test]
    fn hostel_accumulates_bookings() {
        let mut hostel = Hostel::default();
        assert_eq!(hostel.book(2), Ok(()));
        assert_eq!(hostel.book(1), Ok(()));
        assert_eq!(hostel.nights_sold(), 3);
    }

    // Both implementors reject the same out-of-domain input through the
    // same error channel.
    #[test]
    fn zero_night_stay_is_rejected_everywhere() {
        let mut room = HotelRoom::default();
        let mut hostel = Hostel::default();
        assert_eq!(room.book(0), Err(BookingError::EmptyStay));
        assert_eq!(hostel.book(0), Err(BookingError::EmptyStay));
    }

    #[test]
    fn book_stay_covers_every_venue() {
        let mut room = HotelRoom::default();
        let mut hostel = Hostel::default();
        {
            let mut venues: [&mut dyn Bookable; 2] = [&mut room, &mut hostel];
            assert_eq!(book_stay(&mut venues, 2), Ok(()));
        }
        assert_eq!(room.reserved_nights(), Some(2));
        assert_eq!(hostel.nights_sold(), 2);
    }

    #[test]
    fn book_stay_surfaces_the_first_rejection() {
        let mut room = HotelRoom::default();
        let mut venues: [&mut dyn Bookable; 1] = [&mut room];
        assert_eq!(book_stay(&mut venues, 0), Err(BookingError::EmptyStay));
    }
}
