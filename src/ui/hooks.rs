//! Context accessors for the shared application state.
//!
//! `App` installs a single `Signal<AppState>` context; these wrappers give
//! each page a named entry point and a clear failure message when a
//! component is mounted outside the provider.

use dioxus::prelude::*;

use crate::domain::AppState;

/// Accessor for the cutting-day collection. Panics with a descriptive
/// message when called outside `App` (programmer error, not a runtime path).
pub fn use_cutting_days() -> Signal<AppState> {
    use_hook(|| {
        try_consume_context::<Signal<AppState>>()
            .expect("use_cutting_days must be called under App, which provides Signal<AppState>")
    })
}

/// Accessor for the order collection. Same contract as [`use_cutting_days`].
pub fn use_orders() -> Signal<AppState> {
    use_hook(|| {
        try_consume_context::<Signal<AppState>>()
            .expect("use_orders must be called under App, which provides Signal<AppState>")
    })
}
