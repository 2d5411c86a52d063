use std::fmt;

use reqwest::Client;
use semver::Version;
use serde::Deserialize;
use thiserror::Error;

pub const APP_NAME: &str = "Découpe Planner";
pub const APP_REPO_URL: &str = "https://github.com/atelier-decoupe/decoupe_planner";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

const GITHUB_OWNER: &str = "atelier-decoupe";
const GITHUB_REPO: &str = "decoupe_planner";

#[derive(Clone, Debug)]
pub struct UpdateInfo {
    pub current: Version,
    pub latest_tag: Option<String>,
    pub latest: Option<Version>,
}

impl UpdateInfo {
    pub fn update_available(&self) -> bool {
        self.latest
            .as_ref()
            .map(|candidate| candidate > &self.current)
            .unwrap_or(false)
    }
}

#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("failed to build HTTP client: {0}")]
    BuildClient(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("failed to decode response: {0}")]
    Decode(String),
    #[error("invalid version format: {0}")]
    InvalidVersion(String),
}

#[derive(Deserialize)]
struct LatestRelease {
    tag_name: String,
}

/// Compares the running version against the latest GitHub release.
pub async fn check_for_update() -> Result<UpdateInfo, UpdateError> {
    let user_agent = format!("{}/{} (+{})", GITHUB_REPO, version_label(), APP_REPO_URL);
    let client = Client::builder()
        .user_agent(user_agent)
        .build()
        .map_err(|err| UpdateError::BuildClient(err.to_string()))?;

    let current = current_version()?;
    let release = fetch_latest_release(&client).await?;
    let latest = parse_version_str(&release.tag_name).ok();

    Ok(UpdateInfo {
        current,
        latest_tag: Some(release.tag_name),
        latest,
    })
}

async fn fetch_latest_release(client: &Client) -> Result<LatestRelease, UpdateError> {
    let url = format!(
        "https://api.github.com/repos/{GITHUB_OWNER}/{GITHUB_REPO}/releases/latest"
    );

    client
        .get(&url)
        .send()
        .await
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .error_for_status()
        .map_err(|err| UpdateError::Request(err.to_string()))?
        .json::<LatestRelease>()
        .await
        .map_err(|err| UpdateError::Decode(err.to_string()))
}

fn parse_version_str(input: &str) -> Result<Version, UpdateError> {
    let trimmed = input.trim_start_matches(|ch| ch == 'v' || ch == 'V');
    Version::parse(trimmed).map_err(|err| UpdateError::InvalidVersion(err.to_string()))
}

pub fn current_version() -> Result<Version, UpdateError> {
    if let Some(tag) = GIT_TAG {
        return parse_version_str(tag);
    }

    parse_version_str(APP_VERSION)
}

/// Version string shown in the shell footer.
pub fn version_label() -> String {
    if let Some(tag) = GIT_TAG {
        tag.to_string()
    } else {
        format!("v{}", APP_VERSION)
    }
}

impl fmt::Display for UpdateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.latest_tag, self.update_available()) {
            (Some(tag), true) => write!(
                f,
                "Nouvelle version disponible : {tag} (actuelle {})",
                self.current
            ),
            (Some(tag), false) => write!(f, "À jour ({tag})"),
            (None, _) => write!(f, "Aucune information de version"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_strings_accept_v_prefix() {
        assert_eq!(
            parse_version_str("v1.2.3").unwrap(),
            Version::new(1, 2, 3)
        );
        assert_eq!(parse_version_str("1.0.0").unwrap(), Version::new(1, 0, 0));
        assert!(parse_version_str("release-1").is_err());
    }

    #[test]
    fn update_available_requires_newer_release() {
        let info = UpdateInfo {
            current: Version::new(1, 1, 0),
            latest_tag: Some("v1.2.0".to_string()),
            latest: Some(Version::new(1, 2, 0)),
        };
        assert!(info.update_available());

        let same = UpdateInfo {
            current: Version::new(1, 2, 0),
            latest_tag: Some("v1.2.0".to_string()),
            latest: Some(Version::new(1, 2, 0)),
        };
        assert!(!same.update_available());
    }
}
