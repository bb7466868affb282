//! Portfolio page entry point

use std::sync::OnceLock;
use zoon::*;

/// Stores the main application task handle to prevent it from being dropped.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod animations;
mod app;
mod banner;
mod config;
mod dom;
mod interactions;
mod navigation;
mod platform;

pub fn main() {
    let handle = Task::start_droppable(async {
        match crate::app::PortfolioApp::new() {
            Some(app) => app.run().await,
            None => zoon::eprintln!("[Portfolio] No window or document, nothing to wire"),
        }
    });
    let _ = MAIN_TASK.set(handle);
}
