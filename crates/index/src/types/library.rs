//! Library record types.
//!
//! [`LibraryRecord`] mirrors the objects kept in the search index. Every
//! attribute besides `name` is optional so that an unset value stays
//! distinguishable from an empty one all the way to the response.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A library as stored in the search index.
///
/// Attributes the API does not know about (index-only data such as
/// `maintainers` or `repositories`) are kept in [`LibraryRecord::extra`] so
/// that backends can still search them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryRecord {
    /// Unique library name.
    pub name: String,

    /// Default file of the latest version.
    pub filename: Option<String>,

    /// Short description.
    pub description: Option<String>,

    /// Latest version.
    pub version: Option<String>,

    /// Keywords, `None` when the library declares none.
    pub keywords: Option<Vec<String>>,

    /// Other names the library is known by. A stored `null` reads as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub alternative_names: Vec<String>,

    /// File type of the default file (e.g. `js`, `css`).
    pub file_type: Option<String>,

    /// GitHub repository information.
    pub github: Option<GithubInfo>,

    /// SPDX license identifier.
    pub license: Option<String>,

    /// Project homepage.
    pub homepage: Option<String>,

    /// Source repository.
    pub repository: Option<RepositoryInfo>,

    /// Author string.
    pub author: Option<String>,

    /// Name in the upstream package registry.
    pub original_name: Option<String>,

    /// Subresource-integrity hash of the default file.
    pub sri: Option<String>,

    /// Primary key of the object in the search index.
    #[serde(rename = "objectID")]
    pub object_id: Option<String>,

    /// Attributes stored in the index but not exposed by the API.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// GitHub repository information of a library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GithubInfo {
    /// Repository owner.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Repository name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,

    /// Provider-supplied extras (star counts and the like).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Source repository of a library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// VCS type, usually `git`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Repository URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Any further repository attributes kept by the index.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LibraryRecord {
    /// Creates a record with only a name set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the default file.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Sets the keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the GitHub owner and repository.
    pub fn with_github(mut self, user: impl Into<String>, repo: impl Into<String>) -> Self {
        self.github = Some(GithubInfo {
            user: Some(user.into()),
            repo: Some(repo.into()),
            extra: Map::new(),
        });
        self
    }

    /// Returns the CDN URL of the default file of the latest version.
    ///
    /// `None` when either the version or the default file is missing, since
    /// there is then nothing to link to.
    pub fn latest_url(&self, cdn_base: &str) -> Option<String> {
        let version = self.version.as_deref().filter(|v| !v.is_empty())?;
        let filename = self.filename.as_deref().filter(|f| !f.is_empty())?;
        Some(format!(
            "{}/{}/{}/{}",
            cdn_base.trim_end_matches('/'),
            self.name,
            version,
            filename
        ))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
