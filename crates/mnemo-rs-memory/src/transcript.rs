//! Short-term memory: the session's ordered turn buffer.

use crate::model::{Role, Turn};
use log::debug;

/// Append-only buffer of the current session's turns.
///
/// Unbounded by default; an optional cap evicts the oldest turns in
/// exchange pairs so the buffer never splits a user/assistant pair.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
    max_turns: Option<usize>,
}

impl Transcript {
    /// Create an unbounded transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transcript that retains at most `max_turns` turns.
    pub fn with_max_turns(max_turns: usize) -> Self {
        Self {
            turns: Vec::new(),
            max_turns: Some(max_turns),
        }
    }

    /// Append one exchange: a user turn followed by an assistant turn.
    pub fn append(&mut self, user_text: &str, assistant_text: &str) {
        self.turns.push(Turn::now(Role::User, user_text));
        self.turns.push(Turn::now(Role::Assistant, assistant_text));
        if let Some(max_turns) = self.max_turns {
            while self.turns.len() > max_turns {
                self.turns.drain(..2);
                debug!(
                    "evicted oldest exchange from transcript (retained={})",
                    self.turns.len()
                );
            }
        }
    }

    /// Render all turns in insertion order, one labeled line per turn.
    ///
    /// Empty string when no turns exist.
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(|turn| format!("{}: {}", turn.role.label(), turn.text))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Drop all turns.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Ordered view of the retained turns.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of retained turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the transcript holds no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Transcript;
    use crate::model::Role;
    use pretty_assertions::assert_eq;

    #[test]
    fn render_labels_turns_in_order() {
        let mut transcript = Transcript::new();
        transcript.append("Hello", "Hi there!");
        transcript.append("How are you?", "Doing well.");

        assert_eq!(
            transcript.render(),
            "Human: Hello\nAI: Hi there!\nHuman: How are you?\nAI: Doing well."
        );
        assert_eq!(transcript.len(), 4);
    }

    #[test]
    fn render_is_empty_for_fresh_buffer() {
        let transcript = Transcript::new();
        assert_eq!(transcript.render(), "");
        assert!(transcript.is_empty());
    }

    #[test]
    fn clear_drops_all_turns() {
        let mut transcript = Transcript::new();
        transcript.append("Hello", "Hi!");
        transcript.clear();
        assert_eq!(transcript.render(), "");

        // clearing an empty buffer is a no-op
        transcript.clear();
        assert!(transcript.is_empty());
    }

    #[test]
    fn cap_evicts_whole_exchanges_oldest_first() {
        let mut transcript = Transcript::with_max_turns(4);
        transcript.append("one", "1");
        transcript.append("two", "2");
        transcript.append("three", "3");

        assert_eq!(transcript.len(), 4);
        assert_eq!(transcript.turns()[0].text, "two");
        assert_eq!(transcript.turns()[0].role, Role::User);
        assert_eq!(transcript.turns()[3].text, "3");
    }

    #[test]
    fn odd_cap_still_keeps_pairs_intact() {
        let mut transcript = Transcript::with_max_turns(3);
        transcript.append("one", "1");
        transcript.append("two", "2");

        // a cap of 3 can hold at most one full exchange
        assert_eq!(transcript.render(), "Human: two\nAI: 2");
    }
}
