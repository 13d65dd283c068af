use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::booking::Booking;

pub type EmailId = Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TicketEmail {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub ticket_count: u32,
}

impl TicketEmail {
    pub fn summary(&self) -> String {
        format!("{} tickets for {} {}", self.ticket_count, self.first_name, self.last_name)
    }
}

impl From<&Booking> for TicketEmail {
    fn from(booking: &Booking) -> Self {
        Self {
            first_name: booking.first_name.clone(),
            last_name: booking.last_name.clone(),
            email: booking.email.clone(),
            ticket_count: booking.ticket_count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SentTicket {
    pub email_id: EmailId,
    pub email: String,
    pub ticket_count: u32,
    pub sent_at: DateTime<Utc>,
}

impl SentTicket {
    pub fn for_ticket(ticket: &TicketEmail) -> Self {
        Self {
            email_id: EmailId::new_v4(),
            email: ticket.email.clone(),
            ticket_count: ticket.ticket_count,
            sent_at: Utc::now(),
        }
    }
}
