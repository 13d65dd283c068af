use std::{io::Write, time::Duration};

use tokio::time::sleep;

use crate::{
    models::{
        error::DeliveryError,
        ticket::{SentTicket, TicketEmail},
    },
    terminal::SharedWriter,
};

use super::sender::TicketSender;

const RULE: &str = "################";

/// Simulates an email gateway: waits out a fixed latency, then prints the ticket.
pub struct ConsoleSender<W> {
    out: SharedWriter<W>,
    delay: Duration,
}

impl<W> ConsoleSender<W> {
    pub fn new(out: SharedWriter<W>, delay: Duration) -> Self {
        Self { out, delay }
    }
}

impl<W> Clone for ConsoleSender<W> {
    fn clone(&self) -> Self {
        Self {
            out: self.out.clone(),
            delay: self.delay,
        }
    }
}

#[async_trait::async_trait]
impl<W: Write + Send + 'static> TicketSender for ConsoleSender<W> {
    async fn send_ticket(&self, ticket: TicketEmail) -> Result<SentTicket, DeliveryError> {
        log::trace!("sending ticket to {} in {:?}", ticket.email, self.delay);
        sleep(self.delay).await;

        {
            let mut out = self.out.lock().expect("output lock");
            writeln!(out, "{RULE}")?;
            writeln!(out, "Sending ticket:")?;
            writeln!(out, "{}", ticket.summary())?;
            writeln!(out, "to email address {}", ticket.email)?;
            writeln!(out, "{RULE}")?;
            out.flush()?;
        }

        let sent = SentTicket::for_ticket(&ticket);
        log::info!("sent ticket email {} to {}", sent.email_id, sent.email);
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[tokio::test]
    async fn test_prints_confirmation_block() {
        let out = Arc::new(Mutex::new(Vec::new()));
        let sender = ConsoleSender::new(out.clone(), Duration::from_millis(1));
        let ticket = TicketEmail {
            first_name: "Al".to_string(),
            last_name: "Li".to_string(),
            email: "al@x.com".to_string(),
            ticket_count: 3,
        };

        let sent = sender.send_ticket(ticket).await.unwrap();
        assert_eq!("al@x.com", sent.email);

        let printed = String::from_utf8(out.lock().unwrap().clone()).unwrap();
        assert_eq!(
            "################\nSending ticket:\n3 tickets for Al Li\n\
             to email address al@x.com\n################\n",
            printed
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_before_printing() {
        let out = Arc::new(Mutex::new(Vec::new()));
        let sender = ConsoleSender::new(out.clone(), Duration::from_secs(10));
        let ticket = TicketEmail {
            first_name: "Al".to_string(),
            last_name: "Li".to_string(),
            email: "al@x.com".to_string(),
            ticket_count: 3,
        };

        let task = tokio::spawn(async move { sender.send_ticket(ticket).await });
        tokio::time::sleep(Duration::from_secs(9)).await;
        assert!(out.lock().unwrap().is_empty());

        task.await.unwrap().unwrap();
        assert!(!out.lock().unwrap().is_empty());
    }
}
