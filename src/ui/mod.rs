//! User interface components for the story actions row.
//!
//! `StoryActions` is the entry point; `Tooltip` and `Icon` are the small
//! collaborators it renders through.

pub mod icon;           // Font Awesome glyph renderer
pub mod story_actions;  // The action row itself
pub mod tooltip;        // Hover/focus tooltip wrapper
