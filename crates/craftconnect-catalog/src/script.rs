//! The hearts game message script.
//!
//! Entry `n` is shown once the player's score reaches `n`; the final message
//! replaces it when the score reaches the script length.

use serde::Serialize;

/// Display category of a scripted message, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageCategory {
    Intro,
    Sweet,
    Playful,
    Heartfelt,
    Final,
}

/// One line of the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptedMessage {
    pub text: String,
    pub category: MessageCategory,
}

impl ScriptedMessage {
    #[must_use]
    pub fn new(text: impl Into<String>, category: MessageCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }
}

/// An ordered, non-empty message script plus the closing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageScript {
    entries: Vec<ScriptedMessage>,
    finale: ScriptedMessage,
}

impl MessageScript {
    /// Builds a script. Returns `None` for an empty entry list, which would
    /// leave nothing to show on start.
    #[must_use]
    pub fn new(entries: Vec<ScriptedMessage>, finale: ScriptedMessage) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        Some(Self { entries, finale })
    }

    /// Number of entries; reaching this score finishes the game.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the script has no entries. `MessageScript::new` rejects an empty
    /// list, so this is `false` for every constructed script.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry for `score`, or `None` once the script is exhausted.
    #[must_use]
    pub fn entry(&self, score: usize) -> Option<&ScriptedMessage> {
        self.entries.get(score)
    }

    /// The opening entry.
    #[must_use]
    pub fn first(&self) -> &ScriptedMessage {
        &self.entries[0]
    }

    /// The message shown when the game finishes.
    #[must_use]
    pub fn finale(&self) -> &ScriptedMessage {
        &self.finale
    }
}

impl Default for MessageScript {
    fn default() -> Self {
        use MessageCategory::{Final, Heartfelt, Intro, Playful, Sweet};

        let entries = vec![
            ScriptedMessage::new("Catch the falling hearts!", Intro),
            ScriptedMessage::new("One heart caught. Keep going!", Sweet),
            ScriptedMessage::new("You have quick hands.", Playful),
            ScriptedMessage::new("Every heart you catch is a thank-you.", Sweet),
            ScriptedMessage::new("Halfway there, don't let them drop!", Playful),
            ScriptedMessage::new("Thank you for always showing up.", Heartfelt),
            ScriptedMessage::new("Thank you for the patience and the laughs.", Heartfelt),
            ScriptedMessage::new("Not many hearts left now.", Playful),
            ScriptedMessage::new("You make every day a little brighter.", Sweet),
            ScriptedMessage::new("Just one more heart...", Heartfelt),
        ];
        let finale = ScriptedMessage::new("You caught them all. Thank you for everything!", Final);

        Self { entries, finale }
    }
}
