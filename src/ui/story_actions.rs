//! The row of action icons shown on a story.

use dioxus::prelude::*;

use crate::{
    actions::{Action, ActionKind, Actions, ClickBehavior, StoryAction},
    i18n::{I18n, VIEWERS_PLURAL},
    ui::{
        icon::{Icon, icon_class},
        tooltip::Tooltip,
    },
};

#[derive(Props, Clone, PartialEq)]
pub struct StoryActionsProps {
    /// Which actions are available
    pub actions: Actions,
    /// Rendered inside a story card; tooltips open to the right
    #[props(default)]
    pub has_story: bool,
    /// Use the dark icon theme
    #[props(default)]
    pub dark: bool,
}

/// Renders one node per present action in fixed order inside `div.actions`.
#[component]
pub fn StoryActions(props: StoryActionsProps) -> Element {
    let i18n = try_use_context::<I18n>().unwrap_or_default();
    let right = props.has_story;
    let dark = props.dark;
    rsx! {
        div { class: "actions",
            for entry in props.actions.entries() {
                div { key: "{entry.kind()}", class: entry.kind().class_name(),
                    {
                        match entry.clone() {
                            StoryAction::Viewers(text) => viewers_tooltip(text, right, dark, &i18n),
                            StoryAction::Link { kind, action } => link_tooltip(kind, action, right, dark),
                        }
                    }
                }
            }
        }
    }
}

fn viewers_tooltip(text: &str, right: bool, dark: bool, i18n: &I18n) -> Element {
    let label = i18n.t(VIEWERS_PLURAL);
    rsx! {
        Tooltip {
            class: "storyActionsViewer".to_string(),
            element: rsx! {
                Icon {
                    glyph: ActionKind::Viewers.glyph(),
                    class: icon_class(dark).to_string(),
                    tab_index: 0,
                    aria_label: label,
                }
            },
            text: text.to_string(),
            right,
        }
    }
}

fn link_tooltip(kind: ActionKind, action: &Action, right: bool, dark: bool) -> Element {
    let link = action.link.clone();
    let data_method = action.data_method.clone();
    let data_confirm = action.data_confirm.clone();
    let label = action.name.clone();
    let icon = rsx! {
        Icon { glyph: kind.glyph(), class: icon_class(dark).to_string() }
    };
    // Navigate anchors get no listener so they stay plain links.
    let anchor = match action.on_click.clone() {
        behavior @ ClickBehavior::Intercept(_) => {
            let on_link = link.clone();
            rsx! {
                a {
                    href: link,
                    "data-method": data_method,
                    "data-confirm": data_confirm,
                    aria_label: label,
                    onclick: move |e: MouseEvent| {
                        behavior.activate(e, on_link.clone());
                    },
                    {icon}
                }
            }
        }
        ClickBehavior::Navigate => rsx! {
            a {
                href: link,
                "data-method": data_method,
                "data-confirm": data_confirm,
                aria_label: label,
                {icon}
            }
        },
    };
    rsx! {
        Tooltip {
            element: anchor,
            text: action.name.clone(),
            right,
        }
    }
}
