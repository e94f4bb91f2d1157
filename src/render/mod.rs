//! HTML and XML rendering for registered routes.

pub mod document;
pub mod head;
pub mod sitemap;

pub use document::document;
pub use head::head_tags;
pub use sitemap::sitemap_xml;
