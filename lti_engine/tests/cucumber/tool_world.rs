use cucumber::World;
use lti_engine::{
    lti_types::{GradeSubmission, ScoreboardRow},
    test_utils::fake_platform::FakePlatform,
    DeepLinkResponse,
    GradebookApi,
    LaunchApi,
    LaunchContext,
    MemoryLaunchCache,
    ScoreboardApi,
    ToolApiError,
};

#[derive(Debug, Default, World)]
pub struct ToolWorld {
    pub platform: FakePlatform,
    pub cache: MemoryLaunchCache,
    pub context: Option<LaunchContext>,
    pub submission: Option<Result<GradeSubmission, ToolApiError>>,
    pub scoreboard: Option<Result<Vec<ScoreboardRow>, ToolApiError>>,
    pub deep_link: Option<Result<DeepLinkResponse, ToolApiError>>,
}

impl ToolWorld {
    pub fn launches(&self) -> LaunchApi<MemoryLaunchCache> {
        LaunchApi::new(self.cache.clone())
    }

    pub fn gradebook(&self) -> GradebookApi<FakePlatform> {
        GradebookApi::new(self.platform.clone())
    }

    pub fn scoreboard_api(&self) -> ScoreboardApi<FakePlatform, FakePlatform> {
        ScoreboardApi::new(self.platform.clone(), self.platform.clone())
    }

    pub fn context(&self) -> &LaunchContext {
        self.context.as_ref().expect("No launch has taken place")
    }

    pub fn context_mut(&mut self) -> &mut LaunchContext {
        self.context.as_mut().expect("No launch has taken place")
    }

    /// The most recent error from whichever operation ran last.
    pub fn last_error(&self) -> &ToolApiError {
        if let Some(Err(e)) = &self.submission {
            return e;
        }
        if let Some(Err(e)) = &self.scoreboard {
            return e;
        }
        if let Some(Err(e)) = &self.deep_link {
            return e;
        }
        panic!("The last operation did not fail");
    }
}
