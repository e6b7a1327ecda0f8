use serde_json::{json, Value};

use crate::{
    launch::{LaunchClaims, LaunchContext, AGS_SCOPE_LINEITEM, AGS_SCOPE_RESULT_READONLY, AGS_SCOPE_SCORE},
    lti_types::LaunchId,
};

/// The claims of a resource-link launch with AGS and NRPS access, for resource link `rl-1` in course `course-1`.
pub fn resource_link_claims(sub: &str, name: &str) -> Value {
    json!({
        "iss": "https://lms.example.com",
        "aud": "breakout-tool",
        "sub": sub,
        "name": name,
        "https://purl.imsglobal.org/spec/lti/claim/message_type": "LtiResourceLinkRequest",
        "https://purl.imsglobal.org/spec/lti/claim/version": "1.3.0",
        "https://purl.imsglobal.org/spec/lti/claim/deployment_id": "deployment-1",
        "https://purl.imsglobal.org/spec/lti/claim/target_link_uri": "https://tool.example.com/launch/",
        "https://purl.imsglobal.org/spec/lti/claim/resource_link": { "id": "rl-1", "title": "Breakout" },
        "https://purl.imsglobal.org/spec/lti/claim/roles": [
            "http://purl.imsglobal.org/vocab/lis/v2/membership#Learner"
        ],
        "https://purl.imsglobal.org/spec/lti/claim/context": { "id": "course-1", "label": "GAME101", "title": "Games" },
        "https://purl.imsglobal.org/spec/lti-ags/claim/endpoint": {
            "scope": [AGS_SCOPE_LINEITEM, AGS_SCOPE_RESULT_READONLY, AGS_SCOPE_SCORE],
            "lineitems": "https://lms.example.com/api/lti/courses/1/line_items"
        },
        "https://purl.imsglobal.org/spec/lti-nrps/claim/namesroleservice": {
            "context_memberships_url": "https://lms.example.com/api/lti/courses/1/names_and_roles",
            "service_versions": ["2.0"]
        }
    })
}

/// The claims of a deep-linking launch (no AGS or NRPS access).
pub fn deep_link_claims(sub: &str) -> Value {
    json!({
        "iss": "https://lms.example.com",
        "aud": "breakout-tool",
        "sub": sub,
        "name": "Instructor",
        "https://purl.imsglobal.org/spec/lti/claim/message_type": "LtiDeepLinkingRequest",
        "https://purl.imsglobal.org/spec/lti/claim/version": "1.3.0",
        "https://purl.imsglobal.org/spec/lti/claim/deployment_id": "deployment-1",
        "https://purl.imsglobal.org/spec/lti/claim/roles": [
            "http://purl.imsglobal.org/vocab/lis/v2/membership#Instructor"
        ],
        "https://purl.imsglobal.org/spec/lti-dl/claim/deep_linking_settings": {
            "deep_link_return_url": "https://lms.example.com/deep_links",
            "accept_types": ["ltiResourceLink"],
            "accept_presentation_document_targets": ["iframe", "window"],
            "data": "opaque-data"
        }
    })
}

pub fn resource_link_context(launch_id: &str, sub: &str, name: &str) -> LaunchContext {
    context_from(launch_id, resource_link_claims(sub, name))
}

pub fn deep_link_context(launch_id: &str, sub: &str) -> LaunchContext {
    context_from(launch_id, deep_link_claims(sub))
}

pub fn without_ags(mut context: LaunchContext) -> LaunchContext {
    context.ags = None;
    context
}

pub fn without_nrps(mut context: LaunchContext) -> LaunchContext {
    context.nrps = None;
    context
}

fn context_from(launch_id: &str, claims: Value) -> LaunchContext {
    let claims = LaunchClaims::from_json(claims).expect("Test claims are malformed");
    LaunchContext::from_claims(LaunchId::from(launch_id), claims).expect("Test claims are invalid")
}
