//! Path bar component.
//!
//! Shows the current folder as clickable segments, starting at the bucket root.

use bucketview_core::NavEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/explorer/pathbar.module.css");

/// Label of the bucket root segment.
const ROOT_LABEL: &str = "root";

/// Path bar with the root link followed by one link per folder segment.
#[component]
pub fn PathBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let nav = ctx.explorer.nav;

    let segments = Memo::new(move |_| nav.with(|n| n.path().segments().to_vec()));

    view! {
        <nav class=css::pathbar aria-label="Folder path">
            <SegmentLink
                icon=ic::HOME
                label=ROOT_LABEL.to_string()
                current=Signal::derive(move || segments.with(Vec::is_empty))
                on_click=move || ctx.explorer.dispatch(NavEvent::OpenGroup(String::new()))
            />
            {move || {
                let segments = segments.get();
                let last = segments.len().saturating_sub(1);
                segments
                    .into_iter()
                    .enumerate()
                    .map(|(idx, label)| {
                        view! {
                            <span class=css::separator>
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </span>
                            <SegmentLink
                                icon=ic::FOLDER
                                label=label
                                current=Signal::stored(idx == last)
                                on_click=move || ctx.explorer.dispatch(NavEvent::OpenBreadcrumb(idx))
                            />
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}

/// Path segment. The current folder is rendered but still clickable, which
/// reloads its first page.
#[component]
fn SegmentLink<F>(
    icon: icondata::Icon,
    label: String,
    #[prop(into)] current: Signal<bool>,
    on_click: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    let class = move || {
        if current.get() {
            format!("{} {}", css::segment, css::segmentCurrent)
        } else {
            css::segment.to_string()
        }
    };

    view! {
        <button
            class=class
            on:click=move |_| on_click()
            aria-current=move || current.get().then_some("location")
        >
            <span class=css::icon><Icon icon=icon /></span>
            <span class=css::label>{label}</span>
        </button>
    }
}
