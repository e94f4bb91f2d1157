use serde::{Deserialize, Serialize};

use crate::site::PageDescriptor;

#[derive(Deserialize)]
pub struct MetaQuery {
    pub path: String,
}

#[derive(Serialize)]
pub struct MetaResponse {
    pub path: &'static str,
    #[serde(flatten)]
    pub descriptor: PageDescriptor,
    pub site_name: &'static str,
}

impl MetaResponse {
    pub fn new(path: &'static str, descriptor: PageDescriptor) -> Self {
        MetaResponse {
            path,
            site_name: descriptor.site_name(),
            descriptor,
        }
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub addr: String,
    pub routes: usize,
}
