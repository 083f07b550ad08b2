//! Main explorer component.
//!
//! ## Layout
//!
//! Header (bucket + search), path bar, error line, file list, pager.

use bucketview_core::NavEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::{FileList, Header, Pager, PathBar};
use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Bucket explorer view component.
#[component]
pub fn Explorer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // First page at the root is loaded once, after mount
    let initialized = StoredValue::new(false);
    Effect::new(move || {
        if !initialized.get_value() {
            initialized.set_value(true);
            ctx.explorer.dispatch(NavEvent::Initialize);
        }
    });

    view! {
        <div class=css::explorer>
            <Header />
            <PathBar />
            <ErrorLine />
            <div class=css::body>
                <FileList />
            </div>
            <Pager />
        </div>
    }
}

/// Last listing failure, if any. The previous page stays visible below it.
#[component]
fn ErrorLine() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let error = ctx.explorer.error;

    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class=css::errorLine role="alert">
                <span class=css::errorText>
                    "Could not load listing: "{move || error.get().unwrap_or_default()}
                </span>
                <button
                    class=css::errorDismiss
                    on:click=move |_| ctx.explorer.dismiss_error()
                    title="Dismiss"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
        </Show>
    }
}
