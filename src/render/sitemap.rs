use crate::site::layout::escape_html;
use crate::site::RouteRegistry;

/// `urlset` listing every canonical URL in registration order.
pub fn sitemap_xml(registry: &RouteRegistry) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for url in registry.entries().filter_map(|e| e.descriptor.canonical_url) {
        out.push_str("  <url><loc>");
        out.push_str(&escape_html(url));
        out.push_str("</loc></url>\n");
    }
    out.push_str("</urlset>\n");
    out
}
