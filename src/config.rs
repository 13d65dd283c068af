use std::time::Duration;

pub const DEFAULT_CONFERENCE_NAME: &str = "Go Conference";
pub const DEFAULT_TOTAL_TICKETS: u32 = 50;
pub const DEFAULT_NOTIFICATION_DELAY: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct Config {
    pub conference_name: String,
    pub total_tickets: u32,
    /// How long the simulated confirmation email takes to "send".
    pub notification_delay: Duration,
}

impl Config {
    pub fn new(conference_name: impl Into<String>, total_tickets: u32) -> Self {
        Self {
            conference_name: conference_name.into(),
            total_tickets,
            notification_delay: DEFAULT_NOTIFICATION_DELAY,
        }
    }

    #[must_use]
    pub fn with_notification_delay(mut self, delay: Duration) -> Self {
        self.notification_delay = delay;
        self
    }

    #[must_use]
    pub fn with_total_tickets(mut self, total_tickets: u32) -> Self {
        self.total_tickets = total_tickets;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_CONFERENCE_NAME, DEFAULT_TOTAL_TICKETS)
    }
}
