//! Root application module.
//!
//! Contains the main App component, AppContext definition, ExplorerState,
//! and application-level setup logic following Leptos conventions.

use bucketview_core::{
    Applied, ConfigError, ExplorerConfig, ListRequest, ListingService, NavEvent, Navigator,
};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::explorer::Explorer;
use crate::core::S3ListingService;
use crate::utils::log;

// ============================================================================
// ExplorerState
// ============================================================================

/// Explorer state managed with Leptos signals.
///
/// Wraps the [`Navigator`] state machine: navigation events go through
/// [`ExplorerState::dispatch`], which applies the transition and sends the
/// resulting listing request. Responses are applied as they resolve.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals or stored
/// values, which are cheap handles into the reactive arena.
#[derive(Clone, Copy)]
pub struct ExplorerState {
    /// Navigation state (path, query, token chain, current page).
    pub nav: RwSignal<Navigator>,
    /// Number of listing requests still in flight.
    pub pending: RwSignal<usize>,
    /// Message of the last failed request, cleared by the next success.
    pub error: RwSignal<Option<String>>,
    service: StoredValue<S3ListingService>,
}

impl ExplorerState {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            service: StoredValue::new(S3ListingService::new(config.clone())),
            nav: RwSignal::new(Navigator::new(config)),
            pending: RwSignal::new(0),
            error: RwSignal::new(None),
        }
    }

    /// Apply a navigation event and fetch the page it asks for.
    ///
    /// Events that are no-ops for the navigator (next on the last page,
    /// previous without enough tokens) send nothing.
    pub fn dispatch(&self, event: NavEvent) {
        if let Some(request) = self.nav.try_update(|nav| nav.handle(event)).flatten() {
            self.send(request);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.get() > 0
    }

    pub fn dismiss_error(&self) {
        self.error.set(None);
    }

    fn send(&self, request: ListRequest) {
        let state = *self;
        let service = self.service.get_value();

        log::info(&format!(
            "Listing s3://{}/{} (page {})",
            request.bucket,
            request.prefix,
            request.page_number()
        ));
        state.pending.update(|n| *n += 1);

        spawn_local(async move {
            let result = service.list(&request).await;
            state.pending.update(|n| *n = n.saturating_sub(1));

            match state.nav.try_update(|nav| nav.apply(&request, result)) {
                Some(Ok(Applied::Updated)) => state.error.set(None),
                Some(Ok(Applied::Stale)) => {
                    log::warn(&format!("Dropped stale listing response #{}", request.seq));
                }
                Some(Err(e)) => {
                    log::error(&format!("Error fetching files from S3: {}", e));
                    state.error.set(Some(e.to_string()));
                }
                None => {}
            }
        });
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component using `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Explorer navigation and listing state.
    pub explorer: ExplorerState,
}

impl AppContext {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            explorer: ExplorerState::new(config),
        }
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Reads the bucket configuration from host globals
/// - Creates and provides the global AppContext
/// - Wraps the explorer in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    let config = match crate::config::load_explorer_config() {
        Ok(config) => config,
        Err(e) => {
            log::error(&format!("Invalid configuration: {}", e));
            return view! { <ConfigErrorPanel error=e /> }.into_any();
        }
    };

    log::info(&format!(
        "{} for bucket '{}' ({} keys per page, {:?})",
        crate::config::APP_NAME,
        config.bucket,
        config.page_size,
        config.ordering
    ));
    provide_context(AppContext::new(config));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="fatal">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Explorer />
        </ErrorBoundary>
    }
    .into_any()
}

/// Shown instead of the explorer when the host page is misconfigured.
#[component]
fn ConfigErrorPanel(error: ConfigError) -> impl IntoView {
    view! {
        <div class="fatal">
            <h1>"Explorer is not configured"</h1>
            <p>{error.to_string()}</p>
            <p>
                "Define "<code>"window.BUCKET_NAME"</code>
                " (and optionally "<code>"PAGE_SIZE"</code>", "<code>"REGION"</code>
                ") before loading the app."
            </p>
        </div>
    }
}
