#![forbid(unsafe_code)]

//! Page sub-models.
//!
//! Each listing page owns its remote data and, where the page is
//! filterable, a `FilterSync` bound to the shared history. Filter edits
//! are ignored while the page's data is still pending.

pub mod exhibitors;
pub mod home;
pub mod opportunities;
pub mod schedule;

pub use exhibitors::ExhibitorsPage;
pub use home::HomePage;
pub use opportunities::OpportunitiesPage;
pub use schedule::SchedulePage;
