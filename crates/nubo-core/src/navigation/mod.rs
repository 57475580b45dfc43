//! Navigation domain module.
//!
//! The side-bar menu tree and the breadcrumb trail derived from it.

mod menu;

pub use menu::{NavItem, Navigation};
