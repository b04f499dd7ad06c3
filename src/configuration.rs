use crate::api_client::PostsApiClient;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub target: TargetSettings,
    pub suite: SuiteSettings,
}

/// Where the API under test lives and how long we wait for it.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct TargetSettings {
    pub base_url: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl TargetSettings {
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<PostsApiClient, reqwest::Error> {
        PostsApiClient::new(self.base_url.clone(), self.timeout())
    }
}

/// Inputs that depend on the state of the backing store rather than on the fixture.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct SuiteSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_start: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub page_end: usize,
    /// Posts that must already exist before the run starts.
    pub known_post_ids: Vec<u64>,
    /// Owner segment of the protected `/{owner}/posts` route.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub protected_owner_id: u64,
    /// Restricts the run to these scenario names when set.
    #[serde(default)]
    pub only: Option<Vec<String>>,
}

impl SuiteSettings {
    pub fn expected_page_len(&self) -> usize {
        self.page_end.saturating_sub(self.page_start)
    }

    /// Rejects settings under which a scenario would pass without checking anything.
    pub fn validate(&self) -> Result<(), String> {
        if self.known_post_ids.is_empty() {
            return Err("`suite.known_post_ids` must list at least one seeded post id".into());
        }
        Ok(())
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_TARGET__BASE_URL=http://api.local:3000` would set `Settings.target.base_url`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("suite.known_post_ids")
                .with_list_parse_key("suite.only"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;
    settings
        .suite
        .validate()
        .map_err(config::ConfigError::Message)?;
    Ok(settings)
}

/// The possible runtime environments for the suite.
#[derive(Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Ci,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Ci => "ci",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ci" => Ok(Self::Ci),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `ci`.",
                other
            )),
        }
    }
}
