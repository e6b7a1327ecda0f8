use lti_engine::{
    launch::{AgsEndpoint, LaunchContext, NrpsEndpoint},
    lti_types::{GradeRecord, GradeResult, LaunchId, LineItemSpec, RosterMember, SubmissionResult},
    traits::{GradeService, GradeServiceError, LaunchCache, LaunchCacheError, RosterService, RosterServiceError},
};
use mockall::mock;

mock! {
    pub LaunchStore {}
    impl LaunchCache for LaunchStore {
        async fn resolve(&self, launch_id: &LaunchId) -> Result<LaunchContext, LaunchCacheError>;
        async fn store(&self, context: LaunchContext) -> Result<(), LaunchCacheError>;
        async fn purge_expired(&self) -> Result<usize, LaunchCacheError>;
    }
}

mock! {
    pub Gradebook {}
    impl GradeService for Gradebook {
        async fn submit_grade(&self, endpoint: &AgsEndpoint, line_item: &LineItemSpec, grade: &GradeRecord) -> Result<SubmissionResult, GradeServiceError>;
        async fn fetch_grades(&self, endpoint: &AgsEndpoint, line_item: &LineItemSpec) -> Result<Vec<GradeResult>, GradeServiceError>;
    }
}

mock! {
    pub Roster {}
    impl RosterService for Roster {
        async fn list_members(&self, endpoint: &NrpsEndpoint) -> Result<Vec<RosterMember>, RosterServiceError>;
    }
}
