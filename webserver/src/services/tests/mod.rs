//! Service tests for the webserver

mod lead_store;
mod notifier;
