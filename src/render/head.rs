use crate::site::layout::escape_html;
use crate::site::PageDescriptor;

fn tag(out: &mut String, open: &str, key: &str, value_attr: &str, value: &str) {
    out.push_str(open);
    out.push_str(key);
    out.push_str("\" ");
    out.push_str(value_attr);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push_str("\">");
}

fn meta_name(out: &mut String, name: &str, content: &str) {
    tag(out, "<meta name=\"", name, "content", content);
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    tag(out, "<meta property=\"", property, "content", content);
}

/// Head tags derived from a page descriptor.
///
/// The canonical link and `og:url` are only emitted when the descriptor
/// declares a canonical URL; Twitter card tags only when it declares a
/// social preview.
pub fn head_tags(page: &PageDescriptor) -> String {
    let mut out = String::with_capacity(1024);

    out.push_str("<title>");
    out.push_str(&escape_html(page.title));
    out.push_str("</title>");
    meta_name(&mut out, "description", page.description);

    if let Some(url) = page.canonical_url {
        tag(&mut out, "<link rel=\"", "canonical", "href", url);
    }

    meta_property(&mut out, "og:title", page.og_title());
    meta_property(&mut out, "og:description", page.og_description());
    if let Some(url) = page.canonical_url {
        meta_property(&mut out, "og:url", url);
    }
    meta_property(&mut out, "og:type", "website");
    meta_property(&mut out, "og:site_name", page.site_name());

    if let Some(social) = &page.social {
        meta_name(&mut out, "twitter:card", social.kind.as_str());
        meta_name(&mut out, "twitter:title", social.title);
        meta_name(&mut out, "twitter:description", social.description);
    }

    out
}
