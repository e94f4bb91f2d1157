use crate::site::RouteEntry;
use super::head::head_tags;

/// Renders a full HTML document for a registered route.
pub fn document(entry: &RouteEntry) -> String {
    let head = head_tags(&entry.descriptor);
    let body = entry.body().render();

    let mut out = String::with_capacity(head.len() + body.len() + 160);
    out.push_str("<!DOCTYPE html><html lang=\"en\"><head>");
    out.push_str("<meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    out.push_str(&head);
    out.push_str("</head><body>");
    out.push_str(&body);
    out.push_str("</body></html>");
    out
}
