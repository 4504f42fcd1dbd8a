use serde::{Deserialize, Serialize};

// ============ Pagination ============

/// Fixed page size of the people listing endpoint.
pub const PAGE_SIZE: u32 = 10;

/// Number of pages needed to hold `total_count` items at [`PAGE_SIZE`] per page.
///
/// A count of zero yields zero pages.
pub fn total_pages(total_count: u32) -> u32 {
    total_count.div_ceil(PAGE_SIZE)
}

/// A paginated response wrapper.
///
/// Contains the current page of items along with pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items in the current page.
    pub items: Vec<T>,
    /// Current page number (1-indexed).
    pub page: u32,
    /// Total number of items across all pages, as reported by the API.
    pub total_count: u32,
    /// Total number of pages, derived from `total_count`.
    pub total_pages: u32,
    /// Whether there are more pages after this one.
    pub has_more: bool,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response, computing [`total_pages`](Self::total_pages)
    /// and [`has_more`](Self::has_more).
    pub fn new(items: Vec<T>, page: u32, total_count: u32) -> Self {
        let total_pages = total_pages(total_count);
        Self {
            items,
            page,
            total_count,
            total_pages,
            has_more: page < total_pages,
        }
    }
}

// ============ Wire Types ============

/// Body of `GET /people/?page=N`.
#[derive(Debug, Clone, Deserialize)]
pub struct PeopleListResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Person>,
}

/// A character record from the people endpoint.
///
/// Height and mass are numeric-as-text (`"172"`, `"1,358"`, `"unknown"`) and
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub height: String,
    #[serde(default)]
    pub mass: String,
    #[serde(default)]
    pub birth_year: String,
    /// Film resource URIs.
    #[serde(default)]
    pub films: Vec<String>,
    /// Species resource URIs. Empty for humans in older API snapshots.
    #[serde(default)]
    pub species: Vec<String>,
    /// Homeworld planet URI.
    #[serde(default)]
    pub homeworld: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eye_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Person {
    /// Case-insensitive substring match on the name.
    ///
    /// An empty query matches everything.
    pub fn name_matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// A planet resource, followed from [`Person::homeworld`].
///
/// Only `name` is required; the rest is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub climate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
