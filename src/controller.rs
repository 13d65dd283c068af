use std::{
    fmt,
    io::{BufRead, Write},
};

use crate::{
    config::Config,
    ledger::Ledger,
    models::{
        booking::{Booking, BookingRequest},
        error::{AppError, ValidationError},
        ticket::SentTicket,
    },
    notifier::{sender::TicketSender, Notifier},
    terminal::{prompt, InputReader, SharedWriter},
    validator::validate,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Booked(Booking),
    Rejected(Vec<ValidationError>),
}

#[derive(Debug)]
pub struct RunSummary {
    pub outcome: Outcome,
    pub remaining: u32,
    pub sent: Vec<SentTicket>,
}

/// Drives a single booking session: greet, collect, validate, book, notify.
///
/// The ledger is owned here and only mutated from `process`, so bookings are
/// serialized even when several requests go through one app.
pub struct BookingApp<R, W, S> {
    ledger: Ledger,
    notifier: Notifier<S>,
    input: InputReader<R>,
    out: SharedWriter<W>,
}

impl<R, W, S> BookingApp<R, W, S>
where
    R: BufRead,
    W: Write + Send + 'static,
    S: TicketSender + 'static,
{
    pub fn new(config: &Config, input: R, out: SharedWriter<W>, sender: S) -> Self {
        Self {
            ledger: Ledger::new(config.conference_name.clone(), config.total_tickets),
            notifier: Notifier::new(sender),
            input: InputReader::new(input),
            out,
        }
    }

    /// Runs one pass and returns only after every confirmation has been sent.
    pub async fn run(mut self) -> Result<RunSummary, AppError> {
        self.greet()?;
        let request = self.collect()?;
        let outcome = self.process(request)?;
        let sent = self.shutdown().await;
        Ok(RunSummary {
            outcome,
            remaining: self.ledger.remaining(),
            sent,
        })
    }

    pub fn greet(&self) -> Result<(), AppError> {
        self.say(format_args!(
            "Welcome to {} booking application!",
            self.ledger.conference_name()
        ))?;
        self.say(format_args!(
            "We have total of {} tickets and {} are still available!",
            self.ledger.total(),
            self.ledger.remaining()
        ))?;
        self.say("Get your tickets here to attend... :)")
    }

    pub fn collect(&mut self) -> Result<BookingRequest, AppError> {
        self.ask("Enter your first name")?;
        let first_name = self.input.read_text().map_err(AppError::Input)?;
        self.ask("Enter your last name")?;
        let last_name = self.input.read_text().map_err(AppError::Input)?;
        self.ask("Enter your email address")?;
        let email = self.input.read_text().map_err(AppError::Input)?;
        self.ask("Enter number of tickets")?;
        let ticket_count = self.input.read_count().map_err(AppError::Input)?;

        Ok(BookingRequest {
            first_name,
            last_name,
            email,
            ticket_count,
        })
    }

    /// Validates and, when valid, books the request and launches its confirmation.
    ///
    /// Must be called from within a tokio runtime.
    pub fn process(&mut self, request: BookingRequest) -> Result<Outcome, AppError> {
        let validation = validate(&request, self.ledger.remaining());
        log::trace!("validated request: {validation:?}");

        if !validation.is_valid() {
            let errors = validation.errors(request.ticket_count);
            for error in &errors {
                self.say(error)?;
            }
            return Ok(Outcome::Rejected(errors));
        }

        let BookingRequest {
            first_name,
            last_name,
            email,
            ticket_count,
        } = request;
        let booking = self
            .ledger
            .book(ticket_count, first_name, last_name, email)
            .clone();

        self.say(format_args!(
            "Thank you {} {} for booking {} tickets. You will receive a confirmation email at {}",
            booking.first_name, booking.last_name, booking.ticket_count, booking.email
        ))?;
        self.say(format_args!(
            "{} tickets remaining for {}",
            self.ledger.remaining(),
            self.ledger.conference_name()
        ))?;

        self.notifier.launch(&booking);

        self.say(format_args!(
            "The first names of bookings are : [{}]",
            self.ledger.first_names().join(" ")
        ))?;
        if self.ledger.is_sold_out() {
            self.say("Our conference is booked out! Please come back next year.")?;
        }

        Ok(Outcome::Booked(booking))
    }

    pub async fn shutdown(&mut self) -> Vec<SentTicket> {
        log::trace!("waiting for {} pending notifications", self.notifier.pending());
        self.notifier.join_all().await
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    fn ask(&self, label: &str) -> Result<(), AppError> {
        prompt(&self.out, label).map_err(AppError::Output)
    }

    fn say(&self, line: impl fmt::Display) -> Result<(), AppError> {
        let mut out = self.out.lock().expect("output lock");
        writeln!(out, "{line}").map_err(AppError::Output)
    }
}
