use dioxus::prelude::*;

/// Font Awesome solid glyphs used by the story actions row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    PencilAlt,
    Trash,
    Lock,
    DoorOpen,
    DoorClosed,
    ExclamationTriangle,
    CalendarPlus,
    CalendarMinus,
}

impl Glyph {
    pub fn name(self) -> &'static str {
        match self {
            Glyph::PencilAlt => "pencil-alt",
            Glyph::Trash => "trash",
            Glyph::Lock => "lock",
            Glyph::DoorOpen => "door-open",
            Glyph::DoorClosed => "door-closed",
            Glyph::ExclamationTriangle => "exclamation-triangle",
            Glyph::CalendarPlus => "calendar-plus",
            Glyph::CalendarMinus => "calendar-minus",
        }
    }
}

/// Icon class for the light or dark theme.
pub fn icon_class(dark: bool) -> &'static str {
    if dark { "actionDark" } else { "action" }
}

/// Renders a glyph. Unlabelled icons are hidden from assistive tech.
#[component]
pub fn Icon(
    glyph: Glyph,
    class: String,
    tab_index: Option<i64>,
    aria_label: Option<String>,
) -> Element {
    let name = glyph.name();
    let tabindex = tab_index.map(|i| i.to_string());
    let (role, aria_hidden) = match aria_label {
        Some(_) => (Some("img"), None),
        None => (None, Some("true")),
    };
    rsx! {
        i {
            class: "fas fa-{name} {class}",
            role,
            aria_hidden,
            aria_label,
            tabindex,
        }
    }
}
