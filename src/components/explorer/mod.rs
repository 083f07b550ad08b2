//! Bucket explorer UI components.
//!
//! Components:
//! - [`Explorer`] - Main explorer view
//! - [`FileList`] - Objects and folders of the current page
//! - `Header` - Bucket title and search box
//! - `PathBar` - Breadcrumbs for the current folder
//! - `Pager` - Previous/next page controls

#[allow(clippy::module_inception)]
mod explorer;
mod file_list;
mod header;
mod pager;
mod pathbar;

pub use explorer::Explorer;
pub use file_list::FileList;
use header::Header;
use pager::Pager;
use pathbar::PathBar;
