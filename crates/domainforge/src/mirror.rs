//! Edit-then-save mirror over an owner's prompt settings.
//!
//! [`SettingsMirror`] keeps a local draft of the custom instructions and
//! writes back to the owner only when the user saves. The domain style is
//! not buffered: picking a style commits it on the spot.
//!
//! ```text
//! keystrokes ──▶ draft ──save──▶ owner.set_custom_instructions
//! style pick ─────────────────▶ owner.set_domain_style
//!                 │
//!                 └──▶ notifier (2s toast)
//! ```

use crate::instructions::{InstructionDraft, MAX_INSTRUCTION_CHARS};
use crate::notify::{Notification, Notifier};
use crate::owner::SettingsOwner;
use crate::style::{DomainStyle, style_description};

/// Local edit state for the prompt settings dialog.
pub struct SettingsMirror<O, N> {
    owner: O,
    notifier: N,
    draft: InstructionDraft,
    /// Owner value the draft was last seeded from or saved to.
    seen_committed: String,
}

impl<O: SettingsOwner, N: Notifier> SettingsMirror<O, N> {
    /// Create a mirror whose draft starts as the owner's committed instructions.
    pub fn new(owner: O, notifier: N) -> Self {
        let committed = owner.custom_instructions();
        Self {
            owner,
            notifier,
            draft: InstructionDraft::seeded(&committed),
            seen_committed: committed,
        }
    }

    // ── Style ──

    /// The fixed, ordered style options.
    pub fn style_options(&self) -> &'static [DomainStyle] {
        &DomainStyle::ALL
    }

    /// Raw committed style tag.
    pub fn domain_style(&self) -> String {
        self.owner.domain_style()
    }

    /// Committed style, if its tag is a known one.
    pub fn selected_style(&self) -> Option<DomainStyle> {
        DomainStyle::from_tag(&self.owner.domain_style())
    }

    /// Description for the committed style. `None` for unknown tags.
    pub fn style_description(&self) -> Option<&'static str> {
        style_description(&self.owner.domain_style())
    }

    /// Commit a style immediately and announce it.
    pub fn select_style(&mut self, style: DomainStyle) {
        self.owner.set_domain_style(style.tag());
        self.notifier
            .notify(Notification::style_updated(style.tag()));
    }

    // ── Instructions draft ──

    pub fn draft(&self) -> &str {
        self.draft.as_str()
    }

    pub fn draft_chars(&self) -> usize {
        self.draft.char_count()
    }

    /// Chars that can still be typed before the cap.
    pub fn draft_remaining(&self) -> usize {
        self.draft.remaining()
    }

    /// An over-cap seed stays in the draft until it is trimmed to fit.
    pub fn draft_over_cap(&self) -> bool {
        self.draft.char_count() > MAX_INSTRUCTION_CHARS
    }

    pub fn committed_instructions(&self) -> String {
        self.owner.custom_instructions()
    }

    /// Type one char into the draft. Rejected at the length cap.
    pub fn push_char(&mut self, c: char) -> bool {
        self.draft.push_char(c)
    }

    /// Paste into the draft. Returns how many chars fit.
    pub fn push_str(&mut self, s: &str) -> usize {
        self.draft.push_str(s)
    }

    pub fn backspace(&mut self) -> Option<char> {
        self.draft.backspace()
    }

    /// Replace the whole draft, as a text field's change event would.
    pub fn replace_draft(&mut self, text: &str) -> Result<(), String> {
        self.draft.replace(text)
    }

    // ── Actions ──

    /// Save is offered only when the draft differs from the committed value
    /// and fits the length cap.
    pub fn can_save(&self) -> bool {
        !self.draft_over_cap() && self.draft.as_str() != self.committed_instructions()
    }

    /// Commit the draft. Returns `false` without side effects when disabled.
    pub fn save(&mut self) -> bool {
        if !self.can_save() {
            return false;
        }
        let value = self.draft.as_str().to_string();
        self.owner.set_custom_instructions(&value);
        self.seen_committed = value;
        self.notifier.notify(Notification::instructions_saved());
        true
    }

    /// Reset is offered only when the draft has content.
    pub fn can_reset(&self) -> bool {
        !self.draft.is_empty()
    }

    /// Clear the draft. The committed value is left for a later save.
    ///
    /// Returns `false` without side effects when disabled.
    pub fn reset(&mut self) -> bool {
        if !self.can_reset() {
            return false;
        }
        self.draft.clear();
        self.notifier.notify(Notification::instructions_reset());
        true
    }

    /// Re-seed the draft if the owner's value changed behind our back.
    ///
    /// Call once per frame/event turn. Returns `true` when the draft was
    /// replaced; any unsaved edits are discarded in that case.
    pub fn sync(&mut self) -> bool {
        let committed = self.owner.custom_instructions();
        if committed == self.seen_committed {
            return false;
        }
        self.draft = InstructionDraft::seeded(&committed);
        self.seen_committed = committed;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoNotifier;
    use crate::owner::{PromptSettings, SettingsStore};

    fn mirror_with(instructions: &str) -> (SettingsStore, SettingsMirror<SettingsStore, NoNotifier>) {
        let store = SettingsStore::new(PromptSettings {
            custom_instructions: instructions.into(),
            ..Default::default()
        });
        let mirror = SettingsMirror::new(store.clone(), NoNotifier);
        (store, mirror)
    }

    #[test]
    fn draft_is_seeded_from_owner() {
        let (_store, mirror) = mirror_with("only .com");
        assert_eq!(mirror.draft(), "only .com");
        assert!(!mirror.can_save());
        assert!(mirror.can_reset());
    }

    #[test]
    fn edits_stay_local_until_save() {
        let (store, mut mirror) = mirror_with("");
        mirror.push_str("apple");
        assert_eq!(store.custom_instructions(), "");
        assert!(mirror.can_save());

        assert!(mirror.save());
        assert_eq!(store.custom_instructions(), "apple");
        assert!(!mirror.can_save());
    }

    #[test]
    fn save_when_disabled_is_noop() {
        let (store, mut mirror) = mirror_with("same");
        assert!(!mirror.save());
        assert_eq!(store.custom_instructions(), "same");
    }

    #[test]
    fn editing_back_to_committed_disables_save() {
        let (_store, mut mirror) = mirror_with("ab");
        mirror.push_char('c');
        assert!(mirror.can_save());
        mirror.backspace();
        assert!(!mirror.can_save());
    }

    #[test]
    fn reset_clears_draft_only() {
        let (store, mut mirror) = mirror_with("keep me");
        assert!(mirror.reset());
        assert_eq!(mirror.draft(), "");
        assert_eq!(store.custom_instructions(), "keep me");
        assert!(!mirror.can_reset());
        // Committed value is non-empty, so the cleared draft can be saved.
        assert!(mirror.can_save());
        assert!(!mirror.reset());
    }

    #[test]
    fn typing_never_exceeds_cap() {
        let (_store, mut mirror) = mirror_with("");
        for i in 0..400 {
            mirror.push_char(char::from(b'a' + (i % 26) as u8));
            assert!(mirror.draft_chars() <= MAX_INSTRUCTION_CHARS);
        }
        assert_eq!(mirror.draft_chars(), MAX_INSTRUCTION_CHARS);
        assert!(mirror.replace_draft(&"q".repeat(MAX_INSTRUCTION_CHARS + 1)).is_err());
        assert_eq!(mirror.draft_chars(), MAX_INSTRUCTION_CHARS);
    }

    #[test]
    fn over_cap_seed_cannot_be_saved_until_it_fits() {
        let (store, mut mirror) = mirror_with(&"a".repeat(MAX_INSTRUCTION_CHARS + 10));
        assert!(mirror.draft_over_cap());

        mirror.backspace();
        assert_eq!(mirror.draft_chars(), MAX_INSTRUCTION_CHARS + 9);
        assert!(!mirror.can_save());
        assert!(!mirror.save());
        assert_eq!(store.custom_instructions().chars().count(), MAX_INSTRUCTION_CHARS + 10);

        for _ in 0..9 {
            mirror.backspace();
        }
        assert!(!mirror.draft_over_cap());
        assert_eq!(mirror.draft_remaining(), 0);
        assert!(mirror.save());
        assert_eq!(store.custom_instructions().chars().count(), MAX_INSTRUCTION_CHARS);
    }

    #[test]
    fn over_cap_seed_can_still_be_reset_and_saved_empty() {
        let (store, mut mirror) = mirror_with(&"b".repeat(MAX_INSTRUCTION_CHARS + 1));
        assert!(mirror.reset());
        assert!(mirror.save());
        assert_eq!(store.custom_instructions(), "");
    }

    #[test]
    fn sync_reseeds_on_external_change() {
        let (store, mut mirror) = mirror_with("old");
        mirror.push_str(" unsaved");
        assert!(!mirror.sync());
        assert_eq!(mirror.draft(), "old unsaved");

        store.set_custom_instructions("replaced elsewhere");
        assert!(mirror.sync());
        assert_eq!(mirror.draft(), "replaced elsewhere");
        assert!(!mirror.can_save());
        assert!(!mirror.sync());
    }

    #[test]
    fn own_save_does_not_trigger_reseed() {
        let (_store, mut mirror) = mirror_with("");
        mirror.push_str("fresh");
        mirror.save();
        mirror.push_char('!');
        assert!(!mirror.sync());
        assert_eq!(mirror.draft(), "fresh!");
    }

    #[test]
    fn style_commits_immediately() {
        let (store, mut mirror) = mirror_with("");
        assert_eq!(mirror.selected_style(), Some(DomainStyle::Pun));
        mirror.select_style(DomainStyle::Descriptive);
        assert_eq!(store.domain_style(), "descriptive");
        assert_eq!(
            mirror.style_description(),
            Some(DomainStyle::Descriptive.description())
        );
    }

    #[test]
    fn unknown_owner_style_has_no_description() {
        let store = SettingsStore::new(PromptSettings {
            domain_style: "limerick".into(),
            ..Default::default()
        });
        let mirror = SettingsMirror::new(store, NoNotifier);
        assert_eq!(mirror.domain_style(), "limerick");
        assert_eq!(mirror.selected_style(), None);
        assert_eq!(mirror.style_description(), None);
    }
}
