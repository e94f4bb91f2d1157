use std::collections::HashSet;

use crate::error::{AppError, Result};
use super::descriptor::PageDescriptor;
use super::layout::{self, Layout, Node};
use super::pages;

/// One row of the route table.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub path: &'static str,
    pub descriptor: PageDescriptor,
    pub layout: Layout,
    /// Renders the route's content; routes without one show the loading placeholder.
    pub content: Option<fn() -> Node>,
}

impl RouteEntry {
    pub const fn new(path: &'static str, descriptor: PageDescriptor) -> Self {
        RouteEntry {
            path,
            descriptor,
            layout: layout::passthrough,
            content: None,
        }
    }

    pub fn with_content(mut self, content: fn() -> Node) -> Self {
        self.content = Some(content);
        self
    }

    pub fn body(&self) -> Node {
        let children = match self.content {
            Some(render) => render(),
            None => layout::loading(),
        };
        (self.layout)(children)
    }
}

const SITE_ROUTES: [RouteEntry; 5] = [
    RouteEntry::new("/contact", pages::CONTACT),
    RouteEntry::new("/privacy", pages::PRIVACY),
    RouteEntry::new("/stats", pages::STATS),
    RouteEntry::new("/tools", pages::TOOLS),
    RouteEntry::new("/tools/unix-birthday", pages::UNIX_BIRTHDAY),
];

/// Pages are mounted by exact path, so segments must be literal: no router
/// captures or wildcards, no empty segments.
fn check_path(path: &str) -> Result<()> {
    let Some(rest) = path.strip_prefix('/') else {
        return Err(AppError::Config(format!("route path '{}' must start with '/'", path)));
    };
    if rest.is_empty() {
        return Ok(());
    }
    for segment in rest.split('/') {
        if segment.is_empty() {
            return Err(AppError::Config(format!("route path '{}' has an empty segment", path)));
        }
        if segment.starts_with(':')
            || segment.starts_with('*')
            || segment.contains('{')
            || segment.contains('}')
        {
            return Err(AppError::Config(format!(
                "route path '{}' has a non-literal segment '{}'",
                path, segment
            )));
        }
    }
    Ok(())
}

/// Explicit mapping from route path to page metadata and layout.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    entries: Vec<RouteEntry>,
}

impl RouteRegistry {
    pub fn from_entries(entries: Vec<RouteEntry>) -> Result<Self> {
        let mut paths = HashSet::new();
        let mut titles = HashSet::new();

        for entry in &entries {
            check_path(entry.path)?;
            if !paths.insert(entry.path) {
                return Err(AppError::Config(format!("route '{}' registered twice", entry.path)));
            }
            if !titles.insert(entry.descriptor.title) {
                return Err(AppError::Config(format!(
                    "title '{}' of route '{}' is already used",
                    entry.descriptor.title, entry.path
                )));
            }
            entry.descriptor.validate()?;
        }

        Ok(RouteRegistry { entries })
    }

    /// The TimeMeaning route table.
    pub fn site() -> Result<Self> {
        Self::from_entries(SITE_ROUTES.to_vec())
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lookup(&self, path: &str) -> Option<&RouteEntry> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        self.entries.iter().find(|entry| entry.path == path)
    }
}
