//! The game page served at the end of a launch.
use lti_engine::{lti_types::Difficulty, LaunchContext};

use crate::helpers::escape_html;

const GAME_TEMPLATE: &str = include_str!("./templates/game.html");
pub const GAME_TITLE: &str = "Game Example";

#[derive(Debug, Clone)]
pub struct GamePage {
    pub title: String,
    pub launch_id: String,
    pub user_name: String,
    pub difficulty: Difficulty,
    pub is_deep_link: bool,
}

impl GamePage {
    /// `difficulty_param` is the `?difficulty=` value on the request, used when the launch carries no custom
    /// difficulty.
    pub fn for_launch(context: &LaunchContext, difficulty_param: Option<&str>) -> Self {
        Self {
            title: GAME_TITLE.to_string(),
            launch_id: context.launch_id.to_string(),
            user_name: context.name.clone(),
            difficulty: context.difficulty(difficulty_param),
            is_deep_link: context.is_deep_link_launch(),
        }
    }

    pub fn render(&self) -> String {
        let launch_id = escape_html(&self.launch_id);
        let choices = if self.is_deep_link { deep_link_choices(&launch_id) } else { String::new() };
        GAME_TEMPLATE
            .replace("{{deep_link_choices}}", &choices)
            .replace("{{title}}", &escape_html(&self.title))
            .replace("{{launch_id}}", &launch_id)
            .replace("{{difficulty}}", self.difficulty.as_str())
            .replace("{{is_deep_link}}", if self.is_deep_link { "true" } else { "false" })
            // Last, so that placeholders in a learner's name are left alone
            .replace("{{user_name}}", &escape_html(&self.user_name))
    }
}

fn deep_link_choices(launch_id: &str) -> String {
    let items = Difficulty::ALL
        .iter()
        .map(|d| format!(r#"<li><a href="/configure/{launch_id}/{d}/">{d}</a></li>"#))
        .collect::<Vec<_>>()
        .join("");
    format!(r#"<p>Pick a difficulty for this activity:</p><ul class="difficulties">{items}</ul>"#)
}
