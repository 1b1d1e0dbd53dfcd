//! Page window calculator for table paginators.
//!
//! Given a row count, page size, current page and window size, works out
//! which page-number buttons to show, where the two skip markers go and how
//! activating a button moves the current page. See [`paginator`].

pub mod cli;
pub mod config;
pub mod error;
pub mod paginator;

pub use config::PaginatorConfig;
pub use error::{PaginatorError, PaginatorResult};
pub use paginator::{
    ButtonDescriptor, Command, HostChange, PageEvent, PaginationState, Paginator, RenderPlan,
    SkipDirection,
};
