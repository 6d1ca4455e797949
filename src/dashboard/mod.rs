//! Dashboard filter normalization.
//!
//! The only place raw query parameters enter the core. Parsing is total:
//! anything malformed degrades to the "show everything" default instead
//! of erroring, and the builder writes back minimal, internally
//! consistent parameter sets.

pub mod filters;
pub mod model;

pub use filters::{build_dashboard_search_params, parse_dashboard_filters};
pub use model::{DashboardFilters, FilterPatch, QueryParams, StatusFilter};
