use once_cell::sync::Lazy;
use serde::Serialize;

/// Crawl rules served at `/robots.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrawlPolicy {
    pub user_agent: &'static str,
    pub allow: &'static [&'static str],
    pub disallow: &'static [&'static str],
    pub sitemap: &'static str,
}

const SITE_POLICY: CrawlPolicy = CrawlPolicy {
    user_agent: "*",
    allow: &["/"],
    disallow: &[
        // shareable result pages, generated per request and never canonical
        "/r/",
        // only for registered API users
        "/developers/spec",
    ],
    sitemap: "https://timemeaning.com/sitemap.xml",
};

static SITE_ROBOTS_TXT: Lazy<String> = Lazy::new(|| SITE_POLICY.to_robots_txt());

pub fn crawl_policy() -> CrawlPolicy {
    SITE_POLICY
}

/// The serialized site policy, built once per process.
pub fn robots_txt() -> &'static str {
    &SITE_ROBOTS_TXT
}

impl CrawlPolicy {
    pub fn to_robots_txt(&self) -> String {
        let mut out = String::with_capacity(128);
        out.push_str("User-agent: ");
        out.push_str(self.user_agent);
        out.push('\n');
        for path in self.allow {
            out.push_str("Allow: ");
            out.push_str(path);
            out.push('\n');
        }
        for path in self.disallow {
            out.push_str("Disallow: ");
            out.push_str(path);
            out.push('\n');
        }
        out.push('\n');
        out.push_str("Sitemap: ");
        out.push_str(self.sitemap);
        out.push('\n');
        out
    }
}
