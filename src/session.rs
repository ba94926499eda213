use crate::agent::Executor;
use crate::error::ChatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Message {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Per-process chat state: the append-only transcript and the current agent
/// session, if any. Owned by the chat loop and passed explicitly to every
/// handler; lives until the process exits.
#[derive(Default)]
pub struct ChatSessionState {
    pub transcript: Vec<Message>,
    session: Option<Box<dyn Executor>>,
}

impl ChatSessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    /// Installs a freshly constructed session, discarding the previous one.
    /// Only called after construction succeeds, so a failed reconnect leaves
    /// the prior session in place.
    pub fn replace_session(&mut self, session: Box<dyn Executor>) {
        self.session = Some(session);
    }

    /// Runs one chat turn. Appends the User message, invokes the executor and
    /// appends the Assistant reply on success. A failed turn leaves the User
    /// message in the transcript without a paired reply; with no session the
    /// transcript is not touched at all.
    pub async fn dispatch(&mut self, user_text: &str) -> Result<(), ChatError> {
        let Some(session) = self.session.as_deref() else {
            return Err(ChatError::NotConnected);
        };

        self.transcript.push(Message::user(user_text));

        let reply = session.run(user_text).await?;

        self.transcript.push(Message::assistant(reply));
        Ok(())
    }
}
