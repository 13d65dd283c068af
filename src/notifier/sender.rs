use crate::models::{
    error::DeliveryError,
    ticket::{SentTicket, TicketEmail},
};

/// Delivers a booking confirmation to the ticket holder.
#[async_trait::async_trait]
pub trait TicketSender: Send + Sync {
    async fn send_ticket(&self, ticket: TicketEmail) -> Result<SentTicket, DeliveryError>;
}
