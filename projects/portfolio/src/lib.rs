//! Populates portfolio page elements with GitHub repository descriptions
//!
//! - Page/element model and JSON page files in `page/`
//! - Element selection in `selector`
//! - Loading marker, description matcher and loader in `descriptions/`
//! - No authentication: only public repositories of the given user are read

pub mod config;
pub mod descriptions;
pub mod page;
pub mod selector;
