//! Read/write orchestration over the stores and calculators.

pub mod organizer_dashboard;
pub mod seller_portal;

pub use organizer_dashboard::{CampaignOverview, OrganizerDashboard};
pub use seller_portal::{PortalError, SalesSource, SellerPortal, SellerStats};
