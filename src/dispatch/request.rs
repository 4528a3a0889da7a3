//! Request / Response payload types for the slash-command boundary.

use serde::{Deserialize, Serialize};

/// An inbound slash-command invocation.
///
/// Maps to the form payload a chat platform posts for a slash command:
///
/// ```text
/// command=/lock&text=lock kings-landing&user_name=khaleesi
/// ```
///
/// Unknown platform fields (team_id, channel_id, …) are ignored on
/// deserialization; a missing `text` defaults to empty and routes to help.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlashRequest {
    /// The configured command name, e.g. `/lock`. Echoed in the help text.
    pub command: String,
    /// Everything the user typed after the command name.
    #[serde(default)]
    pub text: String,
    /// Requester identity. Trusted as-is; there is no further authentication.
    pub user_name: String,
}

/// The response rendered back to the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlashResponse {
    pub text: String,
}

impl SlashResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
