use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::AppState,
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{CuttingDaysPage, NotFoundPage, OrdersPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_persisted_state, save_persisted_state},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    CuttingDays {},
    #[route("/commandes")]
    Orders {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_persisted_state() {
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Writes the current state snapshot to disk; failures surface as a toast
/// instead of interrupting the interaction that triggered the save.
pub fn persist_user_state(state: &Signal<AppState>, toasts: Signal<Vec<ToastMessage>>) {
    let snapshot = state.with(|st| st.to_persisted());
    if let Err(err) = save_persisted_state(&snapshot) {
        push_toast(
            toasts,
            ToastKind::Error,
            format!("Échec de l'enregistrement : {err}"),
        );
    }
}

#[component]
pub fn CuttingDays() -> Element {
    rsx! { Shell { CuttingDaysPage {} } }
}

#[component]
pub fn Orders() -> Element {
    rsx! { Shell { OrdersPage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    rsx! { Shell { NotFoundPage { segments } } }
}
