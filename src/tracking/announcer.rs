use crate::info;

/// Speaks short status phrases to the operator.
pub trait Announcer: Send + Sync {
    fn say(&self, text: &str);
}

/// Writes phrases to the log instead of a speaker.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn say(&self, text: &str) { info!("Announcing: {text}"); }
}
