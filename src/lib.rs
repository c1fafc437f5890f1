//! Contextual action icons for story items.
//!
//! Build an [`Actions`] value (in code or from server rendered JSON) and hand
//! it to the [`StoryActions`] component:
//!
//! ```ignore
//! let actions = Actions::default()
//!     .with(ActionKind::Edit, Action::new("Edit").with_link("/stories/1/edit"))
//!     .with_viewers("Alice, Bob");
//! rsx! { StoryActions { actions, has_story: true } }
//! ```

pub mod actions;
pub mod i18n;
pub mod ui;

pub use actions::{Action, ActionClick, ActionKind, Actions, ClickBehavior, StoryAction};
pub use i18n::I18n;
pub use ui::icon::{Glyph, Icon};
pub use ui::story_actions::{StoryActions, StoryActionsProps};
pub use ui::tooltip::Tooltip;
