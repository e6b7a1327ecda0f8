//! Assignment and Grade Service.
//!
//! Every operation first resolves a [`LineItemSpec`] to the URL of a concrete line item: an existing one with the same
//! tag (and resource id), or a newly created one. When the launch grants neither, only the score column may fall back
//! to the single line item named in the launch. Every other tag fails, so no two columns share a line item.
use log::*;
use lti_engine::{
    launch::AgsEndpoint,
    lti_types::{GradeRecord, GradeResult, LineItemSpec, SubmissionResult, SCORE_TAG},
    traits::{GradeService, GradeServiceError},
};

use crate::{
    data_objects::{
        LineItem,
        LINE_ITEM_CONTAINER_CONTENT_TYPE,
        LINE_ITEM_CONTENT_TYPE,
        RESULT_CONTAINER_CONTENT_TYPE,
        SCORE_CONTENT_TYPE,
    },
    helpers::service_url,
    PlatformApiError,
    PlatformClient,
};

impl PlatformClient {
    pub async fn find_line_item(
        &self,
        lineitems_url: &str,
        spec: &LineItemSpec,
    ) -> Result<Option<LineItem>, PlatformApiError> {
        let mut params = vec![("tag", spec.tag.as_str())];
        if let Some(resource_id) = &spec.resource_id {
            params.push(("resource_id", resource_id.as_str()));
        }
        let pages =
            self.get_all_pages::<Vec<LineItem>>(lineitems_url, &params, LINE_ITEM_CONTAINER_CONTENT_TYPE).await?;
        let found = pages
            .into_iter()
            .flatten()
            .find(|item| spec.matches(item.tag.as_deref(), item.resource_id.as_deref()));
        Ok(found)
    }

    pub async fn create_line_item(&self, lineitems_url: &str, spec: &LineItemSpec) -> Result<LineItem, PlatformApiError> {
        debug!("🎓️ Creating '{}' line item at {lineitems_url}", spec.tag);
        let item = self.post_for::<LineItem, _>(lineitems_url, spec, LINE_ITEM_CONTENT_TYPE).await?;
        info!("🎓️ Created '{}' line item {}", spec.tag, item.id);
        Ok(item)
    }

    /// Returns the URL of the line item described by `spec`, creating it on the platform if necessary.
    pub async fn find_or_create_line_item(
        &self,
        endpoint: &AgsEndpoint,
        spec: &LineItemSpec,
    ) -> Result<String, PlatformApiError> {
        let Some(lineitems_url) = endpoint.lineitems.as_deref() else {
            trace!("🎓️ No line item container for '{}'. Trying the launch's own line item.", spec.tag);
            return launch_line_item(endpoint, spec).ok_or(PlatformApiError::NoLineItemEndpoint);
        };
        if !endpoint.can_find_line_items() {
            return launch_line_item(endpoint, spec)
                .ok_or_else(|| PlatformApiError::MissingScope("lineitem or lineitem.readonly".to_string()));
        }
        if let Some(item) = self.find_line_item(lineitems_url, spec).await? {
            trace!("🎓️ Found '{}' line item {}", spec.tag, item.id);
            return Ok(item.id);
        }
        if !endpoint.can_create_line_items() {
            return Err(PlatformApiError::MissingScope("lineitem".to_string()));
        }
        Ok(self.create_line_item(lineitems_url, spec).await?.id)
    }

    pub async fn put_grade(
        &self,
        endpoint: &AgsEndpoint,
        line_item: &LineItemSpec,
        grade: &GradeRecord,
    ) -> Result<SubmissionResult, PlatformApiError> {
        if !grade.is_in_range() || grade.score_given > line_item.score_maximum {
            return Err(PlatformApiError::ScoreOutOfRange {
                given: grade.score_given,
                maximum: line_item.score_maximum,
            });
        }
        if !endpoint.can_submit_scores() {
            return Err(PlatformApiError::MissingScope("score".to_string()));
        }
        let lineitem_url = self.find_or_create_line_item(endpoint, line_item).await?;
        let scores_url = service_url(&lineitem_url, "scores")?;
        let (status, body) = self.post_json(&scores_url, grade, SCORE_CONTENT_TYPE).await?;
        debug!("🎓️ Posted '{}' score for {} ({status})", line_item.tag, grade.user_id);
        Ok(SubmissionResult { status, body })
    }

    pub async fn get_grades(
        &self,
        endpoint: &AgsEndpoint,
        line_item: &LineItemSpec,
    ) -> Result<Vec<GradeResult>, PlatformApiError> {
        if !endpoint.can_read_results() {
            return Err(PlatformApiError::MissingScope("result.readonly".to_string()));
        }
        let lineitem_url = self.find_or_create_line_item(endpoint, line_item).await?;
        let results_url = service_url(&lineitem_url, "results")?;
        let pages = self.get_all_pages::<Vec<GradeResult>>(&results_url, &[], RESULT_CONTAINER_CONTENT_TYPE).await?;
        let results = pages.into_iter().flatten().collect::<Vec<_>>();
        debug!("🎓️ Fetched {} '{}' results", results.len(), line_item.tag);
        Ok(results)
    }
}

/// The launch's own line item stands in for the score column only.
fn launch_line_item(endpoint: &AgsEndpoint, spec: &LineItemSpec) -> Option<String> {
    if spec.tag == SCORE_TAG {
        endpoint.lineitem.clone()
    } else {
        None
    }
}

impl GradeService for PlatformClient {
    async fn submit_grade(
        &self,
        endpoint: &AgsEndpoint,
        line_item: &LineItemSpec,
        grade: &GradeRecord,
    ) -> Result<SubmissionResult, GradeServiceError> {
        Ok(self.put_grade(endpoint, line_item, grade).await?)
    }

    async fn fetch_grades(
        &self,
        endpoint: &AgsEndpoint,
        line_item: &LineItemSpec,
    ) -> Result<Vec<GradeResult>, GradeServiceError> {
        Ok(self.get_grades(endpoint, line_item).await?)
    }
}
