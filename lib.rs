//! Page interactions for the Kanana Construction website: mobile menu, project filtering,
//! "load more" placeholder projects, scroll animations and screen reader announcements.
//!
//! The interaction logic is written against [`View`] so it runs on the browser document
//! (`WebView`, wasm32 only) as well as on [`MemoryView`].

mod result;
pub use result::*;

mod animation;
mod announce;
mod bootstrap;
mod config;
mod filter;
mod html;
mod menu;
mod pagination;
mod project;
pub mod view;

pub use animation::*;
pub use announce::*;
pub use bootstrap::*;
pub use config::*;
pub use filter::*;
pub use html::*;
pub use menu::*;
pub use pagination::*;
pub use project::*;
pub use view::*;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::*;

pub use tracing::{debug, error, info, trace, warn};
