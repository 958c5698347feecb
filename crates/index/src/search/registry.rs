//! Field registry.
//!
//! The registry is the single table of record paths the API knows about. Each
//! path is eligible for searching, for projection into responses, or both.
//! Searchable paths may point inside nested or index-only attributes
//! (`github.user`, `maintainers.name`) that are never returned as-is.
//!
//! The table is static: it is built at compile time and shared by every
//! request without synchronisation.

use serde::Serialize;

/// Value type of a registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A plain string.
    String,
    /// An ordered list of strings.
    StringList,
    /// A structured object.
    Object,
    /// A URL string.
    Url,
}

/// A single registered record path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDefinition {
    /// Dotted path of the field (e.g. `github.user`).
    pub path: &'static str,
    /// Value type.
    pub kind: FieldKind,
    /// Whether the field can be used in `search_fields`.
    pub searchable: bool,
    /// Whether the field can be requested through `fields`.
    pub projectable: bool,
}

impl FieldDefinition {
    const fn projected(path: &'static str, kind: FieldKind) -> Self {
        Self {
            path,
            kind,
            searchable: false,
            projectable: true,
        }
    }

    const fn searched(path: &'static str, kind: FieldKind) -> Self {
        Self {
            path,
            kind,
            searchable: true,
            projectable: false,
        }
    }

    const fn both(path: &'static str, kind: FieldKind) -> Self {
        Self {
            path,
            kind,
            searchable: true,
            projectable: true,
        }
    }
}

// Projectable fields appear in response order; searchable fields in ranking
// priority order.
const FIELDS: &[FieldDefinition] = &[
    FieldDefinition::both("name", FieldKind::String),
    FieldDefinition::projected("latest", FieldKind::Url),
    FieldDefinition::both("filename", FieldKind::String),
    FieldDefinition::both("description", FieldKind::String),
    FieldDefinition::projected("version", FieldKind::String),
    FieldDefinition::both("keywords", FieldKind::StringList),
    FieldDefinition::both("alternativeNames", FieldKind::StringList),
    FieldDefinition::projected("fileType", FieldKind::String),
    FieldDefinition::projected("github", FieldKind::Object),
    FieldDefinition::projected("license", FieldKind::String),
    FieldDefinition::projected("homepage", FieldKind::Url),
    FieldDefinition::projected("repository", FieldKind::Object),
    FieldDefinition::projected("author", FieldKind::String),
    FieldDefinition::projected("originalName", FieldKind::String),
    FieldDefinition::projected("sri", FieldKind::String),
    FieldDefinition::projected("objectID", FieldKind::String),
    FieldDefinition::searched("github.repo", FieldKind::String),
    FieldDefinition::searched("repositories.url", FieldKind::Url),
    FieldDefinition::searched("github.user", FieldKind::String),
    FieldDefinition::searched("maintainers.name", FieldKind::String),
];

// Order in which searchable attributes are weighted when ranking.
const SEARCH_PRIORITY: &[&str] = &[
    "name",
    "alternativeNames",
    "github.repo",
    "description",
    "keywords",
    "filename",
    "repositories.url",
    "github.user",
    "maintainers.name",
];

static REGISTRY: FieldRegistry = FieldRegistry {
    fields: FIELDS,
    search_priority: SEARCH_PRIORITY,
};

/// Lookup table of the record paths the API accepts.
#[derive(Debug)]
pub struct FieldRegistry {
    fields: &'static [FieldDefinition],
    search_priority: &'static [&'static str],
}

impl FieldRegistry {
    /// Returns the process-wide registry.
    pub fn global() -> &'static FieldRegistry {
        &REGISTRY
    }

    /// Returns the definition of a path, if registered.
    pub fn get(&self, path: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.path == path)
    }

    /// Returns true if the path may be used to restrict a search.
    pub fn is_searchable(&self, path: &str) -> bool {
        self.get(path).is_some_and(|f| f.searchable)
    }

    /// Returns true if the path may be requested in responses.
    pub fn is_projectable(&self, path: &str) -> bool {
        self.get(path).is_some_and(|f| f.projectable)
    }

    /// Returns every registered path.
    pub fn all_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.path)
    }

    /// Returns the projectable paths in response order.
    pub fn projectable_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.projectable).map(|f| f.path)
    }

    /// Returns the searchable paths, highest ranking priority first.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.search_priority.iter().copied()
    }
}
