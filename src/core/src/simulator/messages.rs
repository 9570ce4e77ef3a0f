use crate::simulator::GameDate;
use serde::{Deserialize, Serialize};

/// Inbox item produced by a day advance. Opaque text for the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeMessage {
    pub date: GameDate,
    pub sender: String,
    pub subject: String,
    pub body: String,
}

impl NarrativeMessage {
    pub fn new(date: GameDate, sender: &str, subject: String, body: String) -> Self {
        NarrativeMessage {
            date,
            sender: sender.to_string(),
            subject,
            body,
        }
    }
}
