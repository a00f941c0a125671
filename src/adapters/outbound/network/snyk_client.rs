use crate::adapters::outbound::network::pagination::{
    collect_pages, FetchOutcome, PageFetcher, RateLimitPolicy,
};
use crate::config::ApiSettings;
use crate::ports::outbound::{ProjectRegistry, TagOutcome};
use crate::shared::Result;
use crate::tagging::domain::{ComponentTag, Project, Target};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};

/// Page size requested from every listing endpoint
const PAGE_LIMIT: u32 = 100;

const STATUS_OK: u16 = 200;
const STATUS_RATE_LIMIT: u16 = 429;
const STATUS_ALREADY_TAGGED: u16 = 422;

/// Snyk API client
///
/// Implements the ProjectRegistry port over two vendor APIs: the paged
/// REST listing API (targets, projects) and the legacy V1 tagging
/// endpoint. Hardcoded to this one vendor by design; no generalized API
/// client is intended.
///
/// All requests are blocking and sequential. Listings walk every page
/// through the pagination engine; the only retry anywhere is the
/// fixed-delay rate-limit retry inside that walk.
pub struct SnykClient {
    client: reqwest::blocking::Client,
    token: String,
    settings: ApiSettings,
    policy: RateLimitPolicy,
}

impl SnykClient {
    /// Creates a client with the given token and resolved settings.
    pub fn new(token: String, settings: ApiSettings) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("snyk-component-tagger/{}", version);
        let client = reqwest::blocking::Client::builder()
            .timeout(settings.timeout)
            .user_agent(user_agent)
            .build()?;
        let policy = RateLimitPolicy::new(settings.rate_limit_backoff);

        Ok(Self {
            client,
            token,
            settings,
            policy,
        })
    }

    /// Replaces the rate-limit policy. For tests that must not sleep.
    pub fn with_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn auth_header(&self) -> String {
        format!("token {}", self.token)
    }

    fn targets_url(&self, org_id: &str, source_types: Option<&str>) -> String {
        let mut url = format!(
            "{}/rest/orgs/{}/targets?version={}&limit={}&exclude_empty=false",
            self.settings.rest_api_base_url,
            urlencoding::encode(org_id),
            self.settings.api_version,
            PAGE_LIMIT,
        );
        if let Some(types) = source_types {
            if !types.is_empty() {
                // Each value is encoded on its own; the separating comma
                // stays literal on the wire.
                let encoded: Vec<String> = types
                    .split(',')
                    .map(|t| urlencoding::encode(t).into_owned())
                    .collect();
                url.push_str("&source_types=");
                url.push_str(&encoded.join(","));
            }
        }
        url
    }

    fn projects_url(&self, org_id: &str, target_id: &str) -> String {
        format!(
            "{}/rest/orgs/{}/projects?version={}&limit={}&target_id={}",
            self.settings.rest_api_base_url,
            urlencoding::encode(org_id),
            self.settings.api_version,
            PAGE_LIMIT,
            urlencoding::encode(target_id),
        )
    }

    fn tags_url(&self, org_id: &str, project_id: &str) -> String {
        format!(
            "{}/org/{}/project/{}/tags",
            self.settings.v1_api_base_url,
            urlencoding::encode(org_id),
            urlencoding::encode(project_id),
        )
    }
}

impl PageFetcher for SnykClient {
    fn fetch(&self, url: &str) -> Result<FetchOutcome> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, self.auth_header())
            .send()?;

        match response.status().as_u16() {
            STATUS_OK => Ok(FetchOutcome::Success(response.text()?)),
            STATUS_RATE_LIMIT => Ok(FetchOutcome::RateLimited),
            status => Ok(FetchOutcome::Failed { status }),
        }
    }
}

impl ProjectRegistry for SnykClient {
    fn list_targets(&self, org_id: &str, source_types: Option<&str>) -> Result<Vec<Target>> {
        let url = self.targets_url(org_id, source_types);
        let resources: Vec<TargetResource> = collect_pages(
            self,
            &self.settings.rest_api_base_url,
            &url,
            &self.policy,
        )?;
        Ok(resources.into_iter().map(Target::from).collect())
    }

    fn list_projects(&self, org_id: &str, target_id: &str) -> Result<Vec<Project>> {
        let url = self.projects_url(org_id, target_id);
        let resources: Vec<ProjectResource> = collect_pages(
            self,
            &self.settings.rest_api_base_url,
            &url,
            &self.policy,
        )?;
        Ok(resources.into_iter().map(Project::from).collect())
    }

    fn apply_tag(
        &self,
        org_id: &str,
        project_id: &str,
        tag: &ComponentTag,
    ) -> Result<TagOutcome> {
        let body = TagRequestBody {
            key: tag.key(),
            value: tag.value(),
        };

        let response = self
            .client
            .post(self.tags_url(org_id, project_id))
            .header(AUTHORIZATION, self.auth_header())
            .json(&body)
            .send()?;

        match response.status().as_u16() {
            STATUS_OK => Ok(TagOutcome::Applied),
            STATUS_ALREADY_TAGGED => Ok(TagOutcome::AlreadyApplied),
            status => Ok(TagOutcome::Rejected { status }),
        }
    }
}

// Snyk API request/response structures

#[derive(Debug, Serialize)]
struct TagRequestBody<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Debug, Deserialize)]
struct TargetResource {
    id: String,
    attributes: TargetAttributes,
}

#[derive(Debug, Deserialize)]
struct TargetAttributes {
    display_name: String,
    #[serde(default)]
    source_type: Option<String>,
}

impl From<TargetResource> for Target {
    fn from(resource: TargetResource) -> Self {
        Target::new(
            resource.id,
            resource.attributes.display_name,
            resource.attributes.source_type,
        )
    }
}

#[derive(Debug, Deserialize)]
struct ProjectResource {
    id: String,
    attributes: ProjectAttributes,
}

#[derive(Debug, Deserialize)]
struct ProjectAttributes {
    name: String,
    #[serde(default)]
    origin: Option<String>,
    #[serde(default)]
    target_reference: Option<String>,
}

impl From<ProjectResource> for Project {
    fn from(resource: ProjectResource) -> Self {
        Project::new(
            resource.id,
            resource.attributes.name,
            resource.attributes.origin,
            resource.attributes.target_reference,
        )
    }
}
