use dioxus::{
    logger::tracing::{Level, info, warn},
    prelude::*,
};

use story_actions::{Action, ActionClick, ActionKind, Actions, I18n, StoryActions};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const FONT_AWESOME: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/5.15.4/css/all.min.css";
const DEMO_ACTIONS: &str = include_str!("../assets/demo_actions.json");
const DEMO_LOCALE: &str = include_str!("../assets/en.json");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| match I18n::from_json(DEMO_LOCALE) {
        Ok(i18n) => i18n,
        Err(e) => {
            warn!("Could not load locale: {e:?}");
            I18n::default()
        }
    });
    let loaded = use_hook(|| match Actions::from_json(DEMO_ACTIONS) {
        Ok(actions) => actions,
        Err(e) => {
            warn!("Could not load demo actions: {e:?}");
            Actions::default()
        }
    });
    let report = use_callback(|click: ActionClick| {
        info!("report requested for {:?}", click.link);
        click.event.prevent_default();
    });
    let actions = loaded.with(
        ActionKind::Report,
        Action::new("Report").with_link("/stories/1/report").on_click(report),
    );

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: FONT_AWESOME }
        div { class: "demo",
            h2 { "Story" }
            StoryActions { actions: actions.clone(), has_story: true }
        }
        div { class: "demo demoDark",
            h2 { "Story (dark)" }
            StoryActions { actions, dark: true }
        }
    }
}
