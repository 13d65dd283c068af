pub mod blackhole;
pub mod console;
pub mod sender;

use std::sync::Arc;

use tokio::{spawn, task::JoinHandle};

use crate::models::{
    booking::Booking,
    error::DeliveryError,
    ticket::{SentTicket, TicketEmail},
};

use self::sender::TicketSender;

/// Launches one confirmation task per booking and keeps the handles until shutdown.
pub struct Notifier<S> {
    sender: Arc<S>,
    handles: Vec<JoinHandle<Result<SentTicket, DeliveryError>>>,
}

impl<S: TicketSender + 'static> Notifier<S> {
    pub fn new(sender: S) -> Self {
        Self {
            sender: Arc::new(sender),
            handles: Vec::new(),
        }
    }

    /// Must be called from within a tokio runtime.
    pub fn launch(&mut self, booking: &Booking) {
        let ticket = TicketEmail::from(booking);
        let sender = self.sender.clone();
        self.handles.push(spawn(async move { sender.send_ticket(ticket).await }));
    }

    pub fn pending(&self) -> usize {
        self.handles.len()
    }

    /// Waits for every launched task. Failed deliveries are logged and left out.
    pub async fn join_all(&mut self) -> Vec<SentTicket> {
        let handles = std::mem::take(&mut self.handles);
        let mut sent = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(Ok(ticket)) => sent.push(ticket),
                Ok(Err(e)) => log::error!("{e}"),
                Err(e) => log::error!("notification task failed: {e}"),
            }
        }
        sent
    }
}
