/// Receives the one warning a generation can emit.
pub trait WarningSink {
    fn warn(&self, message: &str);
}

/// Default sink; forwards to the `log` facade.
#[derive(Debug, Default)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
