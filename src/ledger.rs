use crate::models::booking::Booking;

/// In-memory record of accepted bookings for a single conference.
///
/// `remaining` always equals `total` minus the tickets held by `bookings`.
#[derive(Debug, Clone)]
pub struct Ledger {
    conference_name: String,
    total: u32,
    remaining: u32,
    bookings: Vec<Booking>,
}

impl Ledger {
    pub fn new(conference_name: impl Into<String>, total: u32) -> Self {
        Self {
            conference_name: conference_name.into(),
            total,
            remaining: total,
            bookings: Vec::new(),
        }
    }

    /// Records a booking and takes its tickets out of the remaining capacity.
    ///
    /// The caller must have validated `ticket_count <= remaining()`.
    ///
    /// # Panics
    ///
    /// Panics if `ticket_count` exceeds the remaining capacity.
    pub fn book(
        &mut self,
        ticket_count: u32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> &Booking {
        self.remaining = self
            .remaining
            .checked_sub(ticket_count)
            .expect("booking exceeds remaining tickets");

        let booking = Booking {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            ticket_count,
        };
        self.bookings.push(booking);

        log::info!(
            "booked {ticket_count} tickets for {}, {} remaining",
            self.conference_name,
            self.remaining
        );
        if log::log_enabled!(log::Level::Debug) {
            match serde_json::to_string(&self.bookings) {
                Ok(list) => log::debug!("list of bookings is {list}"),
                Err(e) => log::debug!("unable to serialize bookings: {e}"),
            }
        }

        match self.bookings.last() {
            Some(booking) => booking,
            None => unreachable!("booking was just pushed"),
        }
    }

    pub fn first_names(&self) -> Vec<&str> {
        self.bookings
            .iter()
            .map(|booking| booking.first_name.as_str())
            .collect()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn conference_name(&self) -> &str {
        &self.conference_name
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining == 0
    }
}
