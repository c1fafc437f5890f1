//! Story action model.
//!
//! An [`Actions`] value describes which operations are available on a story
//! (edit, delete, join, ...) plus the optional viewers text shown for private
//! stories. Rendering walks [`ActionKind::ORDER`], so the order of the row is
//! fixed no matter how the configuration was built or which order its JSON
//! keys came in.

use std::fmt;

use anyhow::Context;
use dioxus::{
    logger::tracing::debug,
    prelude::{Callback, MouseEvent},
};
use serde::Deserialize;

use crate::ui::icon::Glyph;

/// The eight kinds of entries a story action row can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Join,
    AddToGoogleCal,
    RemoveFromGoogleCal,
    Edit,
    Leave,
    Delete,
    Report,
    Viewers,
}

impl ActionKind {
    /// Render order of the row.
    pub const ORDER: [ActionKind; 8] = [
        ActionKind::Join,
        ActionKind::AddToGoogleCal,
        ActionKind::RemoveFromGoogleCal,
        ActionKind::Edit,
        ActionKind::Leave,
        ActionKind::Delete,
        ActionKind::Report,
        ActionKind::Viewers,
    ];

    /// Configuration key, as it appears in serialized props.
    pub fn key(self) -> &'static str {
        match self {
            ActionKind::Join => "join",
            ActionKind::AddToGoogleCal => "add_to_google_cal",
            ActionKind::RemoveFromGoogleCal => "remove_from_google_cal",
            ActionKind::Edit => "edit",
            ActionKind::Leave => "leave",
            ActionKind::Delete => "delete",
            ActionKind::Report => "report",
            ActionKind::Viewers => "viewers",
        }
    }

    pub fn from_key(key: &str) -> Option<ActionKind> {
        Self::ORDER.into_iter().find(|kind| kind.key() == key)
    }

    pub fn glyph(self) -> Glyph {
        match self {
            ActionKind::Join => Glyph::DoorOpen,
            ActionKind::AddToGoogleCal => Glyph::CalendarPlus,
            ActionKind::RemoveFromGoogleCal => Glyph::CalendarMinus,
            ActionKind::Edit => Glyph::PencilAlt,
            ActionKind::Leave => Glyph::DoorClosed,
            ActionKind::Delete => Glyph::Trash,
            ActionKind::Report => Glyph::ExclamationTriangle,
            ActionKind::Viewers => Glyph::Lock,
        }
    }

    /// Class of the wrapper element, e.g. `storyActionsEdit`.
    pub fn class_name(self) -> String {
        format!("storyActions{}", title_case(self.key()))
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Upper-cases the first character and leaves the rest untouched.
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Payload handed to an intercepting click handler.
#[derive(Debug, Clone)]
pub struct ActionClick<E = MouseEvent> {
    pub event: E,
    pub link: Option<String>,
}

/// What happens when an action anchor is activated.
///
/// `Navigate` leaves the anchor alone, so the browser (or a UJS style link
/// handler picking up `data-method`/`data-confirm`) does its default thing.
/// `Intercept` hands the event and the action's link to the caller.
pub enum ClickBehavior<E: 'static = MouseEvent> {
    Navigate,
    Intercept(Callback<ActionClick<E>>),
}

impl<E: 'static> ClickBehavior<E> {
    /// Runs the behavior for one activation. Returns `true` when a caller
    /// callback was invoked.
    pub fn activate(&self, event: E, link: Option<String>) -> bool {
        match self {
            ClickBehavior::Navigate => false,
            ClickBehavior::Intercept(callback) => {
                callback.call(ActionClick { event, link });
                true
            }
        }
    }

    pub fn is_intercepted(&self) -> bool {
        matches!(self, ClickBehavior::Intercept(_))
    }
}

impl<E: 'static> Default for ClickBehavior<E> {
    fn default() -> Self {
        ClickBehavior::Navigate
    }
}

impl<E: 'static> Clone for ClickBehavior<E> {
    fn clone(&self) -> Self {
        match self {
            ClickBehavior::Navigate => ClickBehavior::Navigate,
            ClickBehavior::Intercept(callback) => ClickBehavior::Intercept(*callback),
        }
    }
}

impl<E: 'static> PartialEq for ClickBehavior<E> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ClickBehavior::Navigate, ClickBehavior::Navigate) => true,
            (ClickBehavior::Intercept(a), ClickBehavior::Intercept(b)) => a == b,
            _ => false,
        }
    }
}

impl<E: 'static> fmt::Debug for ClickBehavior<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClickBehavior::Navigate => f.write_str("Navigate"),
            ClickBehavior::Intercept(_) => f.write_str("Intercept(..)"),
        }
    }
}

/// A single user-triggerable operation on a story.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Action {
    /// Tooltip text and accessible label.
    pub name: String,
    pub link: Option<String>,
    /// HTTP verb hint for the anchor (`data-method`).
    pub data_method: Option<String>,
    /// Confirmation prompt (`data-confirm`).
    pub data_confirm: Option<String>,
    #[serde(skip)]
    pub on_click: ClickBehavior,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.data_method = Some(method.into());
        self
    }

    pub fn with_confirm(mut self, prompt: impl Into<String>) -> Self {
        self.data_confirm = Some(prompt.into());
        self
    }

    pub fn on_click(mut self, callback: Callback<ActionClick>) -> Self {
        self.on_click = ClickBehavior::Intercept(callback);
        self
    }
}

/// One renderable entry of the row.
#[derive(Debug, Clone, PartialEq)]
pub enum StoryAction<'a> {
    Link { kind: ActionKind, action: &'a Action },
    Viewers(&'a str),
}

impl StoryAction<'_> {
    pub fn kind(&self) -> ActionKind {
        match self {
            StoryAction::Link { kind, .. } => *kind,
            StoryAction::Viewers(_) => ActionKind::Viewers,
        }
    }
}

/// The set of actions available on a story.
///
/// Deserializes from the props object the server renders; keys outside the
/// recognised set are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Actions {
    pub edit: Option<Action>,
    pub delete: Option<Action>,
    pub join: Option<Action>,
    pub leave: Option<Action>,
    pub report: Option<Action>,
    pub add_to_google_cal: Option<Action>,
    pub remove_from_google_cal: Option<Action>,
    /// Names of the users who can see a private story.
    pub viewers: Option<String>,
}

impl Actions {
    /// Parses an actions object. Unrecognised keys are dropped.
    pub fn from_json(json: &str) -> anyhow::Result<Actions> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("actions config is not valid JSON")?;
        if let Some(map) = value.as_object() {
            let unknown: Vec<&str> = map
                .keys()
                .map(String::as_str)
                .filter(|k| ActionKind::from_key(k).is_none())
                .collect();
            if !unknown.is_empty() {
                debug!("ignoring unrecognised story actions: {unknown:?}");
            }
        }
        let actions = serde_json::from_value(value).context("invalid story actions config")?;
        Ok(actions)
    }

    /// Sets the entry for `kind`. For `ActionKind::Viewers` the action's name
    /// becomes the viewers text.
    pub fn with(mut self, kind: ActionKind, action: Action) -> Self {
        match kind {
            ActionKind::Join => self.join = Some(action),
            ActionKind::AddToGoogleCal => self.add_to_google_cal = Some(action),
            ActionKind::RemoveFromGoogleCal => self.remove_from_google_cal = Some(action),
            ActionKind::Edit => self.edit = Some(action),
            ActionKind::Leave => self.leave = Some(action),
            ActionKind::Delete => self.delete = Some(action),
            ActionKind::Report => self.report = Some(action),
            ActionKind::Viewers => self.viewers = Some(action.name),
        }
        self
    }

    pub fn with_viewers(mut self, viewers: impl Into<String>) -> Self {
        self.viewers = Some(viewers.into());
        self
    }

    /// The entry for `kind`, if present. An empty viewers string counts as
    /// absent.
    pub fn get(&self, kind: ActionKind) -> Option<StoryAction<'_>> {
        let slot = match kind {
            ActionKind::Join => &self.join,
            ActionKind::AddToGoogleCal => &self.add_to_google_cal,
            ActionKind::RemoveFromGoogleCal => &self.remove_from_google_cal,
            ActionKind::Edit => &self.edit,
            ActionKind::Leave => &self.leave,
            ActionKind::Delete => &self.delete,
            ActionKind::Report => &self.report,
            ActionKind::Viewers => {
                return self
                    .viewers
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(StoryAction::Viewers);
            }
        };
        slot.as_ref().map(|action| StoryAction::Link { kind, action })
    }

    /// Present entries in render order.
    pub fn entries(&self) -> impl Iterator<Item = StoryAction<'_>> {
        ActionKind::ORDER.into_iter().filter_map(|kind| self.get(kind))
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn kinds(actions: &Actions) -> Vec<ActionKind> {
        actions.entries().map(|e| e.kind()).collect()
    }

    #[test]
    fn title_case_only_touches_first_char() {
        assert_eq!(title_case("edit"), "Edit");
        assert_eq!(title_case("add_to_google_cal"), "Add_to_google_cal");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn class_names() {
        assert_eq!(ActionKind::Edit.class_name(), "storyActionsEdit");
        assert_eq!(ActionKind::Viewers.class_name(), "storyActionsViewers");
        assert_eq!(
            ActionKind::RemoveFromGoogleCal.class_name(),
            "storyActionsRemove_from_google_cal"
        );
    }

    #[test]
    fn keys_round_trip_through_from_key() {
        for kind in ActionKind::ORDER {
            assert_eq!(ActionKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ActionKind::from_key("share"), None);
    }

    #[test]
    fn every_kind_has_its_own_glyph() {
        let glyphs: HashSet<Glyph> = ActionKind::ORDER.iter().map(|k| k.glyph()).collect();
        assert_eq!(glyphs.len(), 8);
        assert_eq!(ActionKind::Viewers.glyph(), Glyph::Lock);
        assert_eq!(ActionKind::Delete.glyph(), Glyph::Trash);
    }

    #[test]
    fn entries_follow_fixed_order() {
        let actions = Actions::default()
            .with_viewers("Alice")
            .with(ActionKind::Report, Action::new("Report"))
            .with(ActionKind::Edit, Action::new("Edit"))
            .with(ActionKind::Join, Action::new("Join"));
        assert_eq!(
            kinds(&actions),
            vec![
                ActionKind::Join,
                ActionKind::Edit,
                ActionKind::Report,
                ActionKind::Viewers
            ]
        );
    }

    #[test]
    fn json_key_order_does_not_matter() {
        let a = Actions::from_json(
            r#"{"viewers": "Bob", "delete": {"name": "Delete"}, "leave": {"name": "Leave"}}"#,
        )
        .unwrap();
        let b = Actions::from_json(
            r#"{"leave": {"name": "Leave"}, "viewers": "Bob", "delete": {"name": "Delete"}}"#,
        )
        .unwrap();
        assert_eq!(a, b);
        assert_eq!(
            kinds(&a),
            vec![ActionKind::Leave, ActionKind::Delete, ActionKind::Viewers]
        );
    }

    #[test]
    fn json_fields_use_camel_case() {
        let actions = Actions::from_json(
            r#"{"delete": {"name": "Delete", "link": "/s/1", "dataMethod": "delete", "dataConfirm": "Sure?"}}"#,
        )
        .unwrap();
        let delete = actions.delete.unwrap();
        assert_eq!(delete.name, "Delete");
        assert_eq!(delete.link.as_deref(), Some("/s/1"));
        assert_eq!(delete.data_method.as_deref(), Some("delete"));
        assert_eq!(delete.data_confirm.as_deref(), Some("Sure?"));
        assert_eq!(delete.on_click, ClickBehavior::Navigate);
    }

    #[test]
    fn unknown_and_null_keys_are_dropped() {
        let actions = Actions::from_json(
            r#"{"share": {"name": "Share"}, "edit": null, "report": {"name": "Report"}}"#,
        )
        .unwrap();
        assert_eq!(kinds(&actions), vec![ActionKind::Report]);
    }

    #[test]
    fn missing_name_is_empty() {
        let actions = Actions::from_json(r#"{"edit": {"link": "/s/1/edit"}}"#).unwrap();
        assert_eq!(actions.edit.unwrap().name, "");
    }

    #[test]
    fn empty_viewers_counts_as_absent() {
        let actions = Actions::default().with_viewers("");
        assert!(actions.is_empty());
        assert!(Actions::default().is_empty());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Actions::from_json("{").is_err());
        assert!(Actions::from_json(r#"{"viewers": 3}"#).is_err());
    }

    #[test]
    fn navigate_does_not_delegate() {
        let behavior: ClickBehavior<()> = ClickBehavior::Navigate;
        assert!(!behavior.activate((), Some("/s/1".into())));
        assert!(!behavior.is_intercepted());
    }
}
