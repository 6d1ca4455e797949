use serde::{Deserialize, Serialize};

use crate::draft::SubmissionStatus;

/// Order-preserving query-parameter set.
///
/// Keys this module does not know about pass through builds untouched
/// and in their original position, so pagination or UI state owned by
/// other features survives a filter change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// First value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the first occurrence in place (keeping its position) and
    /// drop any duplicates; append when the key is new.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let mut found = false;
        self.pairs.retain_mut(|(k, v)| {
            if k == key {
                if found {
                    return false;
                }
                *v = value.clone();
                found = true;
            }
            true
        });
        if !found {
            self.pairs.push((key.to_string(), value));
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Status facet of the dashboard: a concrete status or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(SubmissionStatus),
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(status) => status.as_str(),
        }
    }
}

/// Canonical, always fully populated filter record.
///
/// Invariants held by construction: `search` is trimmed, `desa_id` is a
/// positive-integer string or empty, dates are `YYYY-MM-DD` or empty,
/// and when both dates are set the range is non-decreasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardFilters {
    pub search: String,
    #[serde(skip, default = "default_status")]
    pub status: StatusFilter,
    pub desa_id: String,
    /// Legacy free-text region filter, superseded by `desa_id`.
    pub kecamatan: String,
    pub date_from: String,
    pub date_to: String,
}

fn default_status() -> StatusFilter {
    StatusFilter::All
}

impl DashboardFilters {
    /// Full patch form of this record, for rebuilding a parameter set.
    pub fn to_patch(&self) -> FilterPatch {
        FilterPatch {
            search: Some(self.search.clone()),
            status: Some(self.status),
            desa_id: Some(self.desa_id.clone()),
            kecamatan: Some(self.kecamatan.clone()),
            date_from: Some(self.date_from.clone()),
            date_to: Some(self.date_to.clone()),
        }
    }
}

/// Partial filter update. `None` leaves the existing parameter alone;
/// `Some` with the default sentinel (empty string, `All`) deletes it.
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub status: Option<StatusFilter>,
    pub desa_id: Option<String>,
    pub kecamatan: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
}
