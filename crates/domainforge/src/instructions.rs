//! Custom prompt instructions and the local edit buffer.
//!
//! Instructions are capped at [`MAX_INSTRUCTION_CHARS`] Unicode scalar values.
//! The cap is enforced where input enters the buffer: a keystroke that would
//! exceed it is rejected, never truncated after the fact.

/// Maximum length of custom instructions, in chars.
pub const MAX_INSTRUCTION_CHARS: usize = 280;

/// Check that committed instructions respect the length cap.
pub fn validate_instructions(text: &str) -> Result<(), String> {
    let count = text.chars().count();
    if count > MAX_INSTRUCTION_CHARS {
        return Err(format!(
            "custom instructions are {count} chars (max {MAX_INSTRUCTION_CHARS})"
        ));
    }
    Ok(())
}

/// In-progress, not-yet-committed copy of the custom instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionDraft {
    text: String,
    // Cached so every keystroke doesn't rescan the buffer.
    chars: usize,
}

impl InstructionDraft {
    /// Seed a draft from a committed value.
    ///
    /// Seeding is not user input, so the cap is not applied here: an
    /// over-cap seed is kept whole and can only shrink until it fits.
    pub fn seeded(seed: &str) -> Self {
        Self {
            text: seed.to_string(),
            chars: seed.chars().count(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn char_count(&self) -> usize {
        self.chars
    }

    /// Chars that can still be typed before the cap.
    pub fn remaining(&self) -> usize {
        MAX_INSTRUCTION_CHARS.saturating_sub(self.chars)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.chars >= MAX_INSTRUCTION_CHARS
    }

    /// Append one char. Returns `false` (and leaves the draft alone) at the cap.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.push(c);
        self.chars += 1;
        true
    }

    /// Append pasted text, accepting chars until the cap is reached.
    ///
    /// Returns how many chars were accepted; the rest are dropped.
    pub fn push_str(&mut self, s: &str) -> usize {
        let mut accepted = 0;
        for c in s.chars() {
            if !self.push_char(c) {
                break;
            }
            accepted += 1;
        }
        accepted
    }

    /// Remove the last char, if any.
    pub fn backspace(&mut self) -> Option<char> {
        let removed = self.text.pop();
        if removed.is_some() {
            self.chars -= 1;
        }
        removed
    }

    /// Replace the whole draft. Over-cap values are rejected unchanged.
    pub fn replace(&mut self, text: &str) -> Result<(), String> {
        validate_instructions(text)?;
        self.text = text.to_string();
        self.chars = text.chars().count();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.chars = 0;
    }
}
