use std::{
    io,
    process::ExitCode,
    sync::{Arc, Mutex},
};

use booking_app::{config::Config, controller::BookingApp, notifier::console::ConsoleSender};

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let config = Config::default();
    let out = Arc::new(Mutex::new(io::stdout()));
    let sender = ConsoleSender::new(out.clone(), config.notification_delay);
    let app = BookingApp::new(&config, io::stdin().lock(), out, sender);

    match app.run().await {
        Ok(summary) => {
            log::debug!(
                "finished with {} tickets remaining, {} confirmations sent",
                summary.remaining,
                summary.sent.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
