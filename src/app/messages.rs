//! AppMessage enum for async communication within the application.

/// Messages posted to the event loop by spawned tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The assistant reply timer for `request_id` elapsed
    AssistantReplied { request_id: u64 },
}
