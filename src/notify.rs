use log::{info, warn};

/// Where user-facing notices go. Fire-and-forget: implementations must not block.
pub trait Notifier {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Sends notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }
}
