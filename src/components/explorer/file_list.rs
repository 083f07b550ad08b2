//! File list component for explorer view.
//!
//! Folders come first as buttons that open them; objects are links to the
//! object URL, opened in a new tab.

use bucketview_core::{Entry, NavEvent};
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::format::{format_date, format_size};

stylance::import_crate_style!(css, "src/components/explorer/file_list.module.css");

/// Display data for one list row, built from an [`Entry`].
#[derive(Clone, Debug, PartialEq)]
struct Row {
    /// Folder prefix the row was listed under; part of the row identity.
    folder: String,
    /// Full object key or group prefix.
    key: String,
    /// Name relative to the current folder.
    name: String,
    kind: RowKind,
}

#[derive(Clone, Debug, PartialEq)]
enum RowKind {
    Group,
    Leaf { size: String, modified: String },
}

impl Row {
    fn new(entry: &Entry, folder: &str) -> Self {
        let kind = match entry {
            Entry::Group(_) => RowKind::Group,
            Entry::Leaf(leaf) => RowKind::Leaf {
                size: format_size(leaf.size),
                modified: format_date(leaf.last_modified),
            },
        };
        Self {
            folder: folder.to_string(),
            key: entry.key().to_string(),
            name: entry.name_in(folder).to_string(),
            kind,
        }
    }
}

/// Get icon for a row based on its kind and file extension.
fn get_icon(row: &Row) -> IconData {
    if matches!(row.kind, RowKind::Group) {
        return ic::FOLDER;
    }
    let extension = row
        .name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "md" | "txt" | "csv" | "json" | "log" | "xml" | "yaml" | "yml" => ic::FILE_TEXT,
        "pdf" => ic::FILE_PDF,
        "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "bmp" | "ico" => ic::FILE_IMAGE,
        _ => ic::FILE,
    }
}

#[component]
pub fn FileList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let nav = ctx.explorer.nav;

    let rows = Memo::new(move |_| {
        nav.with(|n| {
            let folder = n.path().folder_prefix();
            n.visible_entries()
                .map(|entry| Row::new(entry, &folder))
                .collect::<Vec<_>>()
        })
    });
    let is_empty = Signal::derive(move || rows.with(Vec::is_empty) && !ctx.explorer.is_loading());

    view! {
        <div class=css::list role="grid" aria-label="File list">
            // Column header (desktop only, hidden on mobile via CSS)
            <div class=css::listHeader role="row">
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerSize>"Size"</span>
                <span class=css::headerChevron></span>
            </div>
            <For
                each=move || rows.get()
                key=|row| (row.folder.clone(), row.key.clone())
                children=move |row| {
                    view! { <FileListItem row=row /> }
                }
            />
            <Show when=move || is_empty.get()>
                <div class=css::empty>"No files here."</div>
            </Show>
        </div>
    }
}

#[component]
fn FileListItem(row: Row) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let icon = get_icon(&row);
    let label = match row.kind {
        RowKind::Group => format!("Folder: {}", row.name),
        RowKind::Leaf { .. } => format!("File: {}", row.name),
    };

    match row.kind {
        RowKind::Group => {
            let prefix = row.key.clone();
            let open = move |_: leptos::ev::MouseEvent| {
                ctx.explorer.dispatch(NavEvent::OpenGroup(prefix.clone()));
            };
            view! {
                <button
                    class=css::listItem
                    on:click=open
                    role="row"
                    title=row.key
                    aria-label=label
                >
                    <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                    <span class=format!("{} {}", css::name, css::nameDir)>{row.name}</span>
                    <span class=css::itemDate></span>
                    <span class=css::size></span>
                    <span class=css::chevron aria-hidden="true">
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </span>
                </button>
            }
            .into_any()
        }
        RowKind::Leaf { size, modified } => {
            let href = ctx
                .explorer
                .nav
                .with_untracked(|n| n.config().object_url(&row.key));
            view! {
                <a
                    class=css::listItem
                    href=href
                    target="_blank"
                    rel="noreferrer"
                    role="row"
                    title=row.key
                    aria-label=label
                >
                    <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
                    <span class=format!("{} {}", css::name, css::nameFile)>{row.name}</span>
                    <span class=css::itemDate>{modified}</span>
                    <span class=css::size>{size}</span>
                    <span class=css::chevron aria-hidden="true">
                        <Icon icon=ic::EXTERNAL_LINK />
                    </span>
                </a>
            }
            .into_any()
        }
    }
}
