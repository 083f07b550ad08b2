//! Page controls below the file list.

use bucketview_core::NavEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/explorer.module.css");

/// Previous/next buttons, the page number and the loading indicator.
#[component]
pub fn Pager() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let nav = ctx.explorer.nav;

    let can_previous = Signal::derive(move || nav.with(|n| n.can_go_previous()));
    let can_next = Signal::derive(move || nav.with(|n| n.can_go_next()));
    let page_number = Signal::derive(move || nav.with(|n| n.page_number()));
    let loading = Signal::derive(move || ctx.explorer.is_loading());

    view! {
        <footer class=css::pager>
            <button
                class=css::pagerButton
                disabled=move || !can_previous.get()
                on:click=move |_| ctx.explorer.dispatch(NavEvent::PreviousPage)
                aria-label="Previous page"
            >
                <Icon icon=ic::CHEVRON_LEFT />
                <span>"Previous"</span>
            </button>

            <span class=css::pageNumber>{move || format!("Page {}", page_number.get())}</span>

            <button
                class=css::pagerButton
                disabled=move || !can_next.get()
                on:click=move |_| ctx.explorer.dispatch(NavEvent::NextPage)
                aria-label="Next page"
            >
                <span>"Next"</span>
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>

            <Show when=move || loading.get()>
                <span class=css::loading role="status">"Loading…"</span>
            </Show>
        </footer>
    }
}
