use std::path::PathBuf;

use url::Url;

use crate::edit::SelectionState;

#[derive(Debug, serde::Deserialize)]
pub struct Config {
    pub api: Api,
    #[serde(default)]
    pub user: User,
    #[serde(default = "default_dropdowns")]
    pub dropdowns: Vec<Dropdown>,
    #[serde(default)]
    pub notifications: Notifications,
}

#[derive(serde::Deserialize)]
pub struct Api {
    pub url: Url,
    pub token: Option<String>,
    pub token_file: Option<PathBuf>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub password_file: Option<PathBuf>,
}

impl core::fmt::Debug for Api {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Api")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<hidden>"))
            .field("token_file", &self.token_file)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<hidden>"))
            .field("password_file", &self.password_file)
            .finish()
    }
}

/// The signed in user, in place of an auth context.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub videos: Vec<String>,
    pub selected: Option<String>,
}

impl User {
    /// The explicitly selected video, else the first of the user's videos.
    pub fn target_video(&self) -> String {
        self.selected
            .as_ref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.videos.first())
            .cloned()
            .unwrap_or_default()
    }
}

/// A labeled dropdown, a dropdown without options has nothing to expand.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Dropdown {
    pub label: String,
    pub options: Option<Vec<String>>,
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct Notifications {
    /// Seconds until a notification disappears
    #[serde(default = "default_notification_timeout")]
    pub timeout: u64,
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            timeout: default_notification_timeout(),
        }
    }
}

impl Config {
    /// Selection state for the configured dropdowns.
    ///
    /// # Errors
    /// Fails if a label does not name an editable field.
    pub fn selection(&self) -> Result<SelectionState, crate::edit::UnknownLabel> {
        SelectionState::new(self.dropdowns.iter().map(|dropdown| dropdown.label.as_str()))
    }
}

pub fn init(path: PathBuf) -> Result<Config, Box<dyn std::error::Error>> {
    let string = std::fs::read_to_string(path)?;

    parse(&string)
}

fn parse(string: &str) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config: Config = toml::from_str(string)?;

    if let Some(file) = &config.api.token_file {
        let token = std::fs::read_to_string(file)?;

        config.api.token = Some(token);
    }

    if let Some(file) = &config.api.password_file {
        let password = std::fs::read_to_string(file)?;

        config.api.password = Some(password);
    }

    config.selection()?;

    Ok(config)
}

fn default_dropdowns() -> Vec<Dropdown> {
    let options = |list: &[&str]| Some(list.iter().map(ToString::to_string).collect());

    vec![
        Dropdown {
            label: "Category".to_owned(),
            options: options(&[
                "Music",
                "Gaming",
                "Education",
                "Entertainment",
                "Sports",
                "News",
                "Pets",
                "Travel",
                "Other",
            ]),
        },
        Dropdown {
            label: "Visibility".to_owned(),
            options: options(&["Public", "Private", "Unlisted"]),
        },
    ]
}

const fn default_notification_timeout() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = parse(
            r#"
            [api]
            url = "http://localhost:8080/api/"

            [user]
            id = "u1"
            videos = ["v1", "v2"]
            "#,
        )
        .unwrap();

        assert_eq!(config.notifications.timeout, 5);
        assert_eq!(
            config.dropdowns.iter().map(|d| d.label.as_str()).collect::<Vec<_>>(),
            ["Category", "Visibility"]
        );
        assert_eq!(config.user.target_video(), "v1");
    }

    #[test]
    fn dropdowns_without_options_are_allowed() {
        let config = parse(
            r#"
            [api]
            url = "http://localhost:8080/api/"

            [user]
            id = "u1"

            [[dropdowns]]
            label = "Visibility"
            "#,
        )
        .unwrap();

        assert_eq!(config.dropdowns[0].options, None);
        assert_eq!(config.user.target_video(), "");
    }

    #[test]
    fn dropdown_labels_must_name_a_field() {
        let result = parse(
            r#"
            [api]
            url = "http://localhost:8080/api/"

            [user]
            id = "u1"

            [[dropdowns]]
            label = "Tags"
            options = ["a"]
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn selected_video_wins_over_the_first() {
        let user = User {
            id: "u1".to_owned(),
            videos: vec!["v1".to_owned(), "v2".to_owned()],
            selected: Some("v2".to_owned()),
        };

        assert_eq!(user.target_video(), "v2");
    }

    #[test]
    fn secrets_are_hidden_from_debug() {
        let config = parse(
            r#"
            [api]
            url = "http://localhost/"
            token = "secret"

            [user]
            id = "u1"
            "#,
        )
        .unwrap();

        assert!(!format!("{:?}", config.api).contains("secret"));
    }
}
