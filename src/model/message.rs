//! Message and transcript types.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human participant.
    User,
    /// The assistant.
    Ai,
}

impl Sender {
    /// Display label used in export output.
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "You",
            Sender::Ai => "AI",
        }
    }
}

/// A pointer from an assistant answer back to a source document page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// Display name of the originating document.
    pub source_name: String,

    /// 1-indexed page in the source document.
    pub page_number: u32,
}

impl Citation {
    /// Create a new citation.
    pub fn new(source_name: impl Into<String>, page_number: u32) -> Self {
        Self {
            source_name: source_name.into(),
            page_number,
        }
    }
}

/// One chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message author.
    pub sender: Sender,

    /// Raw body text in the restricted Markdown dialect.
    pub text: String,

    /// Source citations. Only meaningful for [`Sender::Ai`] messages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<Citation>,
}

impl Message {
    /// Create a user message.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
            citations: Vec::new(),
        }
    }

    /// Create an assistant message.
    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
            citations: Vec::new(),
        }
    }

    /// Attach citations to the message.
    pub fn with_citations(mut self, citations: Vec<Citation>) -> Self {
        self.citations = citations;
        self
    }

    /// Check if the message carries at least one citation.
    pub fn has_citations(&self) -> bool {
        !self.citations.is_empty()
    }
}

/// An ordered chat session: title plus messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Session title, used for headers and artifact filenames.
    pub title: String,

    /// Messages in conversation order.
    pub messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            messages: Vec::new(),
        }
    }

    /// Append a message.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Builder-style variant of [`add_message`](Self::add_message).
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Number of messages.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Total number of citations across all messages.
    pub fn citation_count(&self) -> usize {
        self.messages.iter().map(|m| m.citations.len()).sum()
    }

    /// Check if the transcript has no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.label(), "You");
        assert_eq!(Sender::Ai.label(), "AI");
    }

    #[test]
    fn test_message_constructors() {
        let msg = Message::user("hello");
        assert_eq!(msg.sender, Sender::User);
        assert!(!msg.has_citations());

        let msg = Message::ai("answer").with_citations(vec![Citation::new("report.pdf", 3)]);
        assert_eq!(msg.sender, Sender::Ai);
        assert!(msg.has_citations());
        assert_eq!(msg.citations[0].page_number, 3);
    }

    #[test]
    fn test_transcript_counts() {
        let transcript = Transcript::new("Session")
            .with_message(Message::user("q"))
            .with_message(Message::ai("a").with_citations(vec![
                Citation::new("a.pdf", 1),
                Citation::new("b.pdf", 2),
            ]));

        assert_eq!(transcript.message_count(), 2);
        assert_eq!(transcript.citation_count(), 2);
        assert!(!transcript.is_empty());
    }

    #[test]
    fn test_transcript_json_round_trip() {
        let transcript = Transcript::new("Round Trip")
            .with_message(Message::user("**bold** question"))
            .with_message(Message::ai("answer").with_citations(vec![Citation::new("doc.pdf", 7)]));

        let json = serde_json::to_string(&transcript).unwrap();
        let back: Transcript = serde_json::from_str(&json).unwrap();
        assert_eq!(back, transcript);
    }

    #[test]
    fn test_message_deserialize_missing_citations() {
        let msg: Message = serde_json::from_str(r#"{"sender":"user","text":"hi"}"#).unwrap();
        assert_eq!(msg.sender, Sender::User);
        assert!(msg.citations.is_empty());
    }
}
