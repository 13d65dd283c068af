pub mod config;
pub mod controller;
pub mod ledger;
pub mod models;
pub mod notifier;
pub mod terminal;
pub mod validator;
