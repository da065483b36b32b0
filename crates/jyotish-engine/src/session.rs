//! The append-only chat session log.
//!
//! The only session state the engine touches. Messages are appended by the
//! single processing path and never edited; the whole log can be cleared on
//! demand (the UI "Clear Chat" action). Never persisted.

use chrono::{DateTime, Utc};
use jyotish_core::language::Language;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  User,
  Assistant,
}

/// One chat message. Never edited after being appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
  pub role:        Role,
  pub content:     String,
  pub recorded_at: DateTime<Utc>,
}

/// An in-memory, append-only chat log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  pub session_id: Uuid,
  messages:       Vec<Message>,
}

impl Session {
  /// Start a session opened by the language-appropriate welcome message.
  pub fn new(language: Language) -> Session {
    let mut session = Session {
      session_id: Uuid::new_v4(),
      messages:   Vec::new(),
    };
    session.push(Role::Assistant, welcome(language));
    session
  }

  /// Start a session with no welcome message.
  pub fn empty() -> Session {
    Session {
      session_id: Uuid::new_v4(),
      messages:   Vec::new(),
    }
  }

  pub fn push(&mut self, role: Role, content: impl Into<String>) {
    self.messages.push(Message {
      role,
      content: content.into(),
      recorded_at: Utc::now(),
    });
  }

  pub fn messages(&self) -> &[Message] {
    &self.messages
  }

  /// Drop the whole history.
  pub fn clear(&mut self) {
    self.messages.clear();
  }
}

/// The canned greeting the assistant opens with.
pub fn welcome(language: Language) -> &'static str {
  match language {
    Language::English => {
      "Namaste! Ask anything — try `hi` or `2004-06-11, career?`"
    }
    Language::Nepali => "नमस्ते! `hi` वा `2004-06-11, करियर?` सोध्नुहोस्",
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_session_opens_with_welcome() {
    let s = Session::new(Language::English);
    assert_eq!(s.messages().len(), 1);
    assert_eq!(s.messages()[0].role, Role::Assistant);
    assert_eq!(s.messages()[0].content, welcome(Language::English));
  }

  #[test]
  fn push_appends_in_order() {
    let mut s = Session::empty();
    s.push(Role::User, "hi");
    s.push(Role::Assistant, "hello");
    let roles: Vec<Role> = s.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant]);
  }

  #[test]
  fn clear_empties_the_log() {
    let mut s = Session::new(Language::Nepali);
    s.push(Role::User, "नमस्ते");
    s.clear();
    assert!(s.messages().is_empty());
  }

  #[test]
  fn session_serialises_round_trip() {
    let mut s = Session::new(Language::English);
    s.push(Role::User, "2004-06-11, career?");
    let json = serde_json::to_string(&s).unwrap();
    let back: Session = serde_json::from_str(&json).unwrap();
    assert_eq!(back.session_id, s.session_id);
    assert_eq!(back.messages().len(), s.messages().len());
  }
}
