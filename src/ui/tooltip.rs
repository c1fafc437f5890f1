use dioxus::prelude::*;

/// Wraps `element` and shows `text` in a bubble on hover or keyboard focus.
#[component]
pub fn Tooltip(
    element: Element,
    text: String,
    #[props(default)] right: bool,
    class: Option<String>,
) -> Element {
    let mut open = use_signal(|| false);
    let class = class.map(|c| format!(" {c}")).unwrap_or_default();
    let side = if right { " tooltipRight" } else { "" };
    let visible = if open() { " tooltipVisible" } else { "" };
    rsx! {
        div {
            class: "tooltip{class}",
            onmouseenter: move |_e| open.set(true),
            onmouseleave: move |_e| open.set(false),
            onfocusin: move |_e| open.set(true),
            onfocusout: move |_e| open.set(false),
            {element}
            span {
                class: "tooltipInfo{side}{visible}",
                role: "tooltip",
                "{text}"
            }
        }
    }
}
