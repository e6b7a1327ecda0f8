//! Deep-linking: offering the platform one resource link per game difficulty.
//!
//! The response built here is unsigned. The gateway wraps it in a signed JWT and posts it to the platform's return URL.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    launch::{DeepLinkSettings, LaunchContext},
    lti_types::Difficulty,
    tool_api::errors::ToolApiError,
};

pub const RESOURCE_LINK_TYPE: &str = "ltiResourceLink";

/// A content item of type `ltiResourceLink`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkResource {
    #[serde(rename = "type")]
    pub item_type: String,
    pub title: String,
    pub url: String,
    pub custom: BTreeMap<String, String>,
}

/// Builds the resource link for one difficulty of the game.
pub fn build_deep_link_resource(launch_url: &str, difficulty: Difficulty) -> DeepLinkResource {
    let mut custom = BTreeMap::new();
    custom.insert("difficulty".to_string(), difficulty.to_string());
    DeepLinkResource {
        item_type: RESOURCE_LINK_TYPE.to_string(),
        title: format!("Breakout {difficulty} mode!"),
        url: format!("{launch_url}?difficulty={difficulty}"),
        custom,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkResponse {
    pub deep_link_return_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    pub content_items: Vec<DeepLinkResource>,
}

impl DeepLinkResponse {
    pub fn new(settings: &DeepLinkSettings, content_items: Vec<DeepLinkResource>) -> Self {
        Self {
            deep_link_return_url: settings.deep_link_return_url.clone(),
            data: settings.data.clone(),
            content_items,
        }
    }
}

/// The deep-linking settings of `context`, or an authorization error if this was not a deep-linking launch.
pub fn require_deep_link(context: &LaunchContext) -> Result<&DeepLinkSettings, ToolApiError> {
    match (&context.deep_link, context.is_deep_link_launch()) {
        (Some(settings), true) => Ok(settings),
        _ => Err(ToolApiError::Authorization("Must be a deep link!".to_string())),
    }
}

/// Builds the complete deep-link response for `difficulty` on a deep-linking launch.
pub fn configure_deep_link(
    context: &LaunchContext,
    launch_url: &str,
    difficulty: Difficulty,
) -> Result<DeepLinkResponse, ToolApiError> {
    let settings = require_deep_link(context)?;
    let resource = build_deep_link_resource(launch_url, difficulty);
    Ok(DeepLinkResponse::new(settings, vec![resource]))
}
