use serde::{Deserialize, Serialize};

/// Bookable artist listed in the directory
///
/// Reference data: the catalog is fixed for the lifetime of the process,
/// artists are never created or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    /// Category identifiers (e.g. "singers"), not display names
    #[serde(default)]
    pub categories: Vec<String>,
    pub bio: String,
    #[serde(rename = "priceRange")]
    pub price_range: String,
    pub location: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
}

/// Selectable artist category, also the join table between category
/// identifiers and their display names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub count: u32,
}

/// Structured (non-text) directory filter criteria
///
/// An empty category set or a `None` field always means "unconstrained",
/// never "match nothing".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSelection {
    /// Selected category identifiers, OR semantics across entries
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<String>,
}

impl FilterSelection {
    /// Selection constrained to a single category, used by the
    /// `?category=` deep link into the directory
    pub fn for_category(category_id: impl Into<String>) -> Self {
        Self {
            categories: vec![category_id.into()],
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.location.is_none() && self.price_range.is_none()
    }

    /// One-click filter reset
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Review state of an artist submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// Artist submission row on the manager dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub name: String,
    pub category: String,
    pub city: String,
    pub fee: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::NaiveDate,
    pub status: SubmissionStatus,
    pub experience: String,
    #[serde(default)]
    pub languages: Vec<String>,
    pub email: String,
    pub phone: String,
}

/// Dashboard filter over the submission table
///
/// `None` means unconstrained (the UI's "All Status" / "All Categories"
/// choices); the free-text query is unconstrained when empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionFilter {
    pub query: String,
    pub status: Option<SubmissionStatus>,
    pub category: Option<String>,
}

/// Outcome of a status change, rendered as a toast by the caller
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusNotice {
    #[serde(rename = "submissionId")]
    pub submission_id: String,
    pub status: SubmissionStatus,
    pub message: String,
}
