//! Environment configuration.
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file. Variables already set in the environment take precedence
//! over the file. Empty values count as unset.
//!
//! Reading the configuration never fails. Values are validated where they
//! are used: the token before anything else, each database id when its
//! target is processed.

use std::path::Path;

use anyhow::{Context, Result};

use notion_core::{ApiUrl, IntegrationToken, PurgePlan};

/// Integration token (required).
pub const TOKEN_VAR: &str = "NOTION_TOKEN";
/// Activities database.
pub const ACTIVITIES_VAR: &str = "NOTION_DB_ID";
/// Daily Steps database.
pub const STEPS_VAR: &str = "NOTION_STEPS_DB_ID";
/// Sleep Data database.
pub const SLEEP_VAR: &str = "NOTION_SLEEP_DB_ID";
/// Override for the API base URL.
pub const API_URL_VAR: &str = "NOTION_API_URL";

/// Runtime configuration, built once at startup.
#[derive(Clone)]
pub struct Config {
    token: Option<String>,
    api_url: Option<String>,
    pub activities: Option<String>,
    pub steps: Option<String>,
    pub sleep: Option<String>,
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            token: get(TOKEN_VAR),
            api_url: get(API_URL_VAR),
            activities: get(ACTIVITIES_VAR),
            steps: get(STEPS_VAR),
            sleep: get(SLEEP_VAR),
        }
    }

    /// The integration token: `None` if unset, an error if malformed.
    pub fn token(&self) -> Option<notion_core::Result<IntegrationToken>> {
        self.token.as_deref().map(IntegrationToken::new)
    }

    /// The API base URL, or the public endpoint if unset.
    pub fn api(&self) -> Result<ApiUrl> {
        match &self.api_url {
            Some(url) => ApiUrl::new(url).with_context(|| format!("Invalid {}", API_URL_VAR)),
            None => Ok(ApiUrl::default()),
        }
    }

    /// The configured databases in purge order.
    pub fn plan(&self) -> PurgePlan {
        PurgePlan::new()
            .with_target("Activities", self.activities.clone())
            .with_target("Daily Steps", self.steps.clone())
            .with_target("Sleep Data", self.sleep.clone())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("api_url", &self.api_url)
            .field("activities", &self.activities)
            .field("steps", &self.steps)
            .field("sleep", &self.sleep)
            .finish()
    }
}

/// Load variables from `path`, or from `./.env` if it exists.
///
/// An explicit path must exist; the implicit `./.env` is optional.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
        }
        None => {
            if let Err(e) = dotenvy::dotenv()
                && !e.not_found()
            {
                return Err(e).context("Failed to load .env");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    fn labels(plan: &PurgePlan) -> Vec<&str> {
        plan.targets().iter().map(|t| t.label.as_str()).collect()
    }

    #[test]
    fn full_configuration() {
        let config = config(&[
            (TOKEN_VAR, "secret_abc"),
            (ACTIVITIES_VAR, "act"),
            (STEPS_VAR, "steps"),
            (SLEEP_VAR, "sleep"),
        ]);

        assert_eq!(config.token().unwrap().unwrap().expose(), "secret_abc");
        assert_eq!(config.api().unwrap(), ApiUrl::default());
        assert_eq!(config.activities.as_deref(), Some("act"));
    }

    #[test]
    fn plan_is_in_fixed_order() {
        let config = config(&[
            (SLEEP_VAR, "sleep"),
            (STEPS_VAR, "steps"),
            (ACTIVITIES_VAR, "act"),
        ]);

        assert_eq!(
            labels(&config.plan()),
            vec!["Activities", "Daily Steps", "Sleep Data"]
        );
    }

    #[test]
    fn missing_and_empty_values_are_unset() {
        let config = config(&[(TOKEN_VAR, ""), (ACTIVITIES_VAR, "  "), (SLEEP_VAR, "sleep")]);

        assert!(config.token().is_none());
        assert!(config.activities.is_none());
        assert!(config.steps.is_none());
        assert_eq!(labels(&config.plan()), vec!["Sleep Data"]);
    }

    #[test]
    fn malformed_database_id_stays_in_the_plan() {
        let config = config(&[(ACTIVITIES_VAR, "a/b"), (STEPS_VAR, "steps")]);

        let plan = config.plan();
        assert_eq!(labels(&plan), vec!["Activities", "Daily Steps"]);
        assert!(plan.targets()[0].database().is_err());
        assert!(plan.targets()[1].database().is_ok());
        assert!(config.token().is_none());
    }

    #[test]
    fn malformed_token_is_reported_on_use() {
        let config = config(&[(TOKEN_VAR, "two words")]);
        assert!(config.token().unwrap().is_err());
    }

    #[test]
    fn api_url_override() {
        let config = config(&[(API_URL_VAR, "http://127.0.0.1:9999")]);
        assert_eq!(config.api().unwrap().host(), Some("127.0.0.1"));
    }

    #[test]
    fn malformed_api_url_names_the_variable() {
        let err = config(&[(API_URL_VAR, "http://example.com")])
            .api()
            .unwrap_err();
        assert!(format!("{err:#}").contains(API_URL_VAR));
    }

    #[test]
    fn debug_hides_token() {
        let config = config(&[(TOKEN_VAR, "secret_abc")]);
        assert!(!format!("{:?}", config).contains("secret_abc"));
    }
}
