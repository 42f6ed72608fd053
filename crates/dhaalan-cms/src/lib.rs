#![forbid(unsafe_code)]

//! Mock CMS collaborator for the Dhaalan expo.
//!
//! All site content is static and served through [`CmsClient`], which
//! simulates network latency and can be told to fail, so pages exercise
//! their loading, empty, and error states against realistic timing. The
//! [`Remote`] wrapper keeps "still pending" and "resolved with nothing"
//! distinct — they render differently.
//!
//! This crate deliberately has no knowledge of filters, overlays, or
//! state; it is the external collaborator the rest of the workspace is
//! written against.

pub mod client;
pub mod data;
pub mod remote;
pub mod types;

pub use client::{CmsClient, CmsError};
pub use remote::Remote;
pub use types::{
    Announcement, Exhibitor, GalleryImage, ImportantInfo, Localized, NewsArticle, Opportunity,
    OpportunityType, Resource, ResourceCategory, ResourceType, Session, SessionType, Speaker,
    Sponsor, SponsorTier, Update, UpdateCategory, UpdateStatus, UpdateType, Zone,
};
