//! End-to-end behaviour of the settings mirror against a recording owner
//! and notifier.

use std::cell::RefCell;
use std::time::Duration;

use domainforge::prelude::*;

/// Owner that records every commit call.
#[derive(Default)]
struct RecordingOwner {
    instructions: RefCell<String>,
    style: RefCell<String>,
    instruction_commits: RefCell<Vec<String>>,
    style_commits: RefCell<Vec<String>>,
}

impl RecordingOwner {
    fn new(instructions: &str, style: &str) -> Self {
        Self {
            instructions: RefCell::new(instructions.to_string()),
            style: RefCell::new(style.to_string()),
            ..Default::default()
        }
    }
}

impl SettingsOwner for RecordingOwner {
    fn custom_instructions(&self) -> String {
        self.instructions.borrow().clone()
    }
    fn set_custom_instructions(&self, value: &str) {
        *self.instructions.borrow_mut() = value.to_string();
        self.instruction_commits.borrow_mut().push(value.to_string());
    }
    fn domain_style(&self) -> String {
        self.style.borrow().clone()
    }
    fn set_domain_style(&self, value: &str) {
        *self.style.borrow_mut() = value.to_string();
        self.style_commits.borrow_mut().push(value.to_string());
    }
}

#[derive(Default)]
struct RecordingNotifier(RefCell<Vec<Notification>>);

impl RecordingNotifier {
    fn titles(&self) -> Vec<String> {
        self.0.borrow().iter().map(|n| n.title.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.0.borrow_mut().push(notification);
    }
}

#[test]
fn type_and_save_scenario() {
    let owner = RecordingOwner::new("", "pun");
    let notifier = RecordingNotifier::default();
    let mut mirror = SettingsMirror::new(&owner, &notifier);

    assert!(!mirror.can_save());

    for c in "apple".chars() {
        assert!(mirror.push_char(c));
    }
    assert!(mirror.can_save());
    assert_eq!(mirror.draft(), "apple");
    assert!(owner.instruction_commits.borrow().is_empty());

    assert!(mirror.save());
    assert_eq!(*owner.instruction_commits.borrow(), vec!["apple".to_string()]);
    assert_eq!(notifier.titles(), vec!["Custom Instructions Updated"]);
    assert!(!mirror.can_save());

    let sent = notifier.0.borrow();
    let saved = &sent[0];
    assert_eq!(saved.description, "Custom prompt instructions updated.");
    assert_eq!(saved.duration, Duration::from_millis(2000));
}

#[test]
fn reset_scenario_leaves_committed_value() {
    let owner = RecordingOwner::new("committed", "pun");
    let notifier = RecordingNotifier::default();
    let mut mirror = SettingsMirror::new(&owner, &notifier);
    mirror.replace_draft("apple").unwrap();

    assert!(mirror.can_reset());
    assert!(mirror.reset());

    assert_eq!(mirror.draft(), "");
    assert!(!mirror.can_reset());
    assert_eq!(owner.custom_instructions(), "committed");
    assert!(owner.instruction_commits.borrow().is_empty());
    assert_eq!(notifier.titles(), vec!["Custom Instructions Reset"]);
}

#[test]
fn select_style_scenario() {
    let owner = RecordingOwner::new("", "pun");
    let notifier = RecordingNotifier::default();
    let mut mirror = SettingsMirror::new(&owner, &notifier);

    mirror.select_style(DomainStyle::Abstract);

    assert_eq!(*owner.style_commits.borrow(), vec!["abstract".to_string()]);
    assert_eq!(
        mirror.style_description(),
        Some("Memorable and brandable names that don't necessarily relate directly to the business.")
    );
    let sent = notifier.0.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "Style Updated");
    assert!(sent[0].description.contains("abstract"));
}

#[test]
fn every_style_commits_its_exact_tag() {
    let owner = RecordingOwner::new("", "pun");
    let mut mirror = SettingsMirror::new(&owner, NoNotifier);

    for style in DomainStyle::ALL {
        mirror.select_style(style);
        assert_eq!(owner.domain_style(), style.tag());
        assert_eq!(mirror.style_description(), Some(style.description()));
    }
    assert_eq!(
        *owner.style_commits.borrow(),
        vec!["compound", "pun", "descriptive", "abstract"]
    );
}

#[test]
fn reselecting_current_style_still_commits() {
    let owner = RecordingOwner::new("", "pun");
    let mut mirror = SettingsMirror::new(&owner, NoNotifier);
    mirror.select_style(DomainStyle::Pun);
    assert_eq!(owner.style_commits.borrow().len(), 1);
}

#[test]
fn disabled_actions_do_not_notify() {
    let owner = RecordingOwner::new("", "pun");
    let notifier = RecordingNotifier::default();
    let mut mirror = SettingsMirror::new(&owner, &notifier);

    assert!(!mirror.save());
    assert!(!mirror.reset());
    assert!(notifier.0.borrow().is_empty());
    assert!(owner.instruction_commits.borrow().is_empty());
}

#[test]
fn reset_then_save_clears_committed_value() {
    let owner = RecordingOwner::new("old rule", "pun");
    let mut mirror = SettingsMirror::new(&owner, NoNotifier);

    mirror.reset();
    assert_eq!(owner.custom_instructions(), "old rule");
    assert!(mirror.save());
    assert_eq!(owner.custom_instructions(), "");
}

#[test]
fn toast_queue_receives_mirror_notifications() {
    let store = SettingsStore::default();
    let toasts = ToastQueue::new();
    let mut mirror = SettingsMirror::new(store, toasts.clone());

    mirror.select_style(DomainStyle::Compound);
    mirror.push_str("short names");
    mirror.save();

    let visible = toasts.visible(std::time::Instant::now());
    let titles: Vec<&str> = visible
        .iter()
        .map(|t| t.notification.title.as_str())
        .collect();
    assert_eq!(titles, ["Style Updated", "Custom Instructions Updated"]);
}
