/// Web Request Object
/// One outbound GET against the war API, resolved against the API root before it reaches the
/// gateway.
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use derivative::Derivative;
use getset::{CopyGetters, Getters};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use url::Url;

/// The six resources fetched every cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    WarId,
    WarSummary,
    Assignments,
    Campaigns,
    Dispatches,
    Planets,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::WarId,
        Resource::WarSummary,
        Resource::Assignments,
        Resource::Campaigns,
        Resource::Dispatches,
        Resource::Planets,
    ];

    /// Path relative to the API root.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::WarId => "raw/api/WarSeason/current/WarID",
            Resource::WarSummary => "api/v1/war",
            Resource::Assignments => "api/v1/assignments",
            Resource::Campaigns => "api/v1/campaigns",
            Resource::Dispatches => "api/v1/dispatches",
            Resource::Planets => "api/v1/planets",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resource::WarId => "war-id",
            Resource::WarSummary => "war-summary",
            Resource::Assignments => "assignments",
            Resource::Campaigns => "campaigns",
            Resource::Dispatches => "dispatches",
            Resource::Planets => "planets",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Derivative, Getters, CopyGetters)]
#[derivative(Debug, PartialEq, Eq, Clone)]
pub struct ApiRequest {
    #[getset(get_copy = "pub")]
    resource: Resource,
    #[getset(get = "pub")]
    url: Url,
    #[getset(get = "pub")]
    headers: HashMap<String, String>,
}

impl ApiRequest {
    pub fn new(resource: Resource, url: Url, headers: HashMap<String, String>) -> Self {
        Self {
            resource,
            url,
            headers,
        }
    }
}

/// Converts the request headers, dropping names or values that are not valid HTTP.
pub fn build_headers(header_map: &HashMap<String, String>) -> HeaderMap {
    header_map
        .iter()
        .filter_map(|(name, val)| {
            let name = HeaderName::from_str(name.to_lowercase().as_str()).ok()?;
            let val = HeaderValue::from_str(val.as_str()).ok()?;
            Some((name, val))
        })
        .collect()
}
