//! Windowed page-button calculation for a table paginator.
//!
//! [`Paginator`] owns a [`PaginationState`], keeps its visible page window in
//! step with the cursor and describes the buttons to draw. Drawing itself is
//! left to the host; [`strip`] offers a terminal rendering.

pub mod keys;
pub mod label;
pub mod options;
pub mod protocol;
pub mod state;
pub mod strip;
pub mod window;


pub use label::RangeLabel;
pub use protocol::{Command, FollowUps, HostChange, PageEvent, Paginator};
pub use state::{PaginationState, WindowSize};
pub use window::{
    descriptors, recompute_range, shows_skip, Affordance, Affordances, ButtonDescriptor,
    RenderPlan, SkipDirection, SKIP_LABEL,
};
