//! Static site surface: page descriptors, the route table, layouts and the
//! robots policy.

pub mod descriptor;
pub mod layout;
pub mod pages;
pub mod registry;
pub mod robots;

pub use descriptor::{CardKind, PageDescriptor, SocialPreview};
pub use layout::{Layout, Node};
pub use registry::{RouteEntry, RouteRegistry};
pub use robots::CrawlPolicy;

pub const SITE_NAME: &str = "TimeMeaning";
pub const SITE_URL: &str = "https://timemeaning.com";
