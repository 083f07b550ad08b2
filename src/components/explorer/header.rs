//! Explorer header component.
//!
//! Contains the bucket title, current folder name and the search box.

use bucketview_core::NavEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{BRAND_PREFIX, SEARCH_PLACEHOLDER};

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Explorer header with bucket title and search.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let nav = ctx.explorer.nav;

    let bucket = nav.with_untracked(|n| n.config().bucket.clone());
    let query = Signal::derive(move || nav.with(|n| n.query().to_string()));

    // Derive current location name for header title
    let current_name = Memo::new(move |_| {
        nav.with(|n| n.path().name().map(str::to_string))
            .unwrap_or_else(|| "/".to_string())
    });

    // Every keystroke restarts the listing at page 1
    let on_input = move |ev: leptos::ev::Event| {
        ctx.explorer
            .dispatch(NavEvent::SetSearchQuery(event_target_value(&ev)));
    };

    view! {
        <header class=css::header>
            <div class=css::brand>
                <span class=css::brandIcon><Icon icon=ic::NETWORK /></span>
                <span class=css::brandLabel>{format!("{} {}", BRAND_PREFIX, bucket)}</span>
            </div>

            <div class=css::title>
                <span class=css::titleIcon>
                    {move || {
                        let icon = if current_name.get() == "/" { ic::HOME } else { ic::FOLDER };
                        view! { <Icon icon=icon /> }
                    }}
                </span>
                <span class=css::titleLabel>{move || current_name.get()}</span>
            </div>

            <label class=css::search>
                <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
                <input
                    class=css::searchInput
                    type="search"
                    placeholder=SEARCH_PLACEHOLDER
                    aria-label="Search by name prefix"
                    prop:value=move || query.get()
                    on:input=on_input
                />
            </label>
        </header>
    }
}
