//! Translation of catalog search requests into storage-agnostic query specs.
//!
//! Everything here is pure: the repository layer compiles a [`QuerySpec`]
//! into SQL, and the service layer combines the returned count and page slice
//! into a [`crate::pagination::PageResult`].

use regex::{Regex, RegexBuilder};

/// Number of products returned per search page.
pub const PAGE_SIZE: i64 = 9;

/// Highest page whose offset still fits in an `i64`.
pub const MAX_PAGE: i64 = i64::MAX / PAGE_SIZE;

/// Upper bound on the compiled size of a user supplied search pattern.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Text columns a search term is matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    Title,
    Description,
}

/// Columns a search can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortField {
    Price,
}

/// Requested ordering as received from the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortDirection {
    /// Parses the raw `sort` query value. Anything but `asc`/`desc` means no sort.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortDirection::Ascending,
            Some("desc") => SortDirection::Descending,
            _ => SortDirection::None,
        }
    }
}

/// Case-insensitive pattern match against a single text column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMatch {
    pub field: TextField,
    pub pattern: String,
}

impl FieldMatch {
    pub fn new(field: TextField, pattern: impl Into<String>) -> Self {
        Self {
            field,
            pattern: pattern.into(),
        }
    }

    /// Tests a column value against the pattern.
    ///
    /// An invalid pattern matches nothing.
    pub fn matches(&self, value: &str) -> bool {
        compile_pattern(&self.pattern)
            .map(|re| re.is_match(value))
            .unwrap_or(false)
    }
}

/// Filter selecting which products a search returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Predicate {
    MatchAll,
    Or(FieldMatch, FieldMatch),
}

impl Predicate {
    /// Compiles every pattern in the predicate and reports the first failure.
    pub fn validate(&self) -> Result<(), regex::Error> {
        match self {
            Predicate::MatchAll => Ok(()),
            Predicate::Or(left, right) => {
                compile_pattern(&left.pattern)?;
                compile_pattern(&right.pattern)?;
                Ok(())
            }
        }
    }

    /// Evaluates the predicate against a product's text fields.
    pub fn matches(&self, title: &str, description: &str) -> bool {
        let field_value = |m: &FieldMatch| match m.field {
            TextField::Title => m.matches(title),
            TextField::Description => m.matches(description),
        };
        match self {
            Predicate::MatchAll => true,
            Predicate::Or(left, right) => field_value(left) || field_value(right),
        }
    }
}

/// Direction of an explicit ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

/// Normalized search input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: Option<String>,
    pub sort_direction: SortDirection,
    /// 1-based page number within `1..=MAX_PAGE`.
    pub page: i64,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            term: None,
            sort_direction: SortDirection::None,
            page: 1,
        }
    }
}

impl SearchRequest {
    /// Builds a request from raw query string values.
    ///
    /// A missing or unparsable page becomes 1, as does any page below 1.
    /// Pages past [`MAX_PAGE`] are capped to it.
    pub fn from_params(term: Option<String>, sort: Option<&str>, page: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1)
            .clamp(1, MAX_PAGE);

        Self {
            term: term.filter(|t| !t.is_empty()),
            sort_direction: SortDirection::from_param(sort),
            page,
        }
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        let term: String = term.into();
        self.term = Some(term).filter(|t| !t.is_empty());
        self
    }

    pub fn sort(mut self, direction: SortDirection) -> Self {
        self.sort_direction = direction;
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = page.clamp(1, MAX_PAGE);
        self
    }
}

/// Storage-agnostic description of one search page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuerySpec {
    pub filter: Predicate,
    pub sort: Option<SortSpec>,
    pub skip: i64,
    pub limit: i64,
}

impl QuerySpec {
    pub fn from_request(request: &SearchRequest) -> Self {
        Self {
            filter: build_filter(request.term.as_deref()),
            sort: build_sort(request.sort_direction),
            skip: compute_skip(request.page, PAGE_SIZE),
            limit: PAGE_SIZE,
        }
    }
}

/// Compiles a search term as a case-insensitive, unanchored pattern.
///
/// The term is not escaped: `shoe|boot` matches either word.
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
}

pub fn build_filter(term: Option<&str>) -> Predicate {
    match term {
        Some(term) if !term.is_empty() => Predicate::Or(
            FieldMatch::new(TextField::Title, term),
            FieldMatch::new(TextField::Description, term),
        ),
        _ => Predicate::MatchAll,
    }
}

pub fn build_sort(direction: SortDirection) -> Option<SortSpec> {
    let order = match direction {
        SortDirection::Ascending => SortOrder::Asc,
        SortDirection::Descending => SortOrder::Desc,
        SortDirection::None => return None,
    };
    Some(SortSpec {
        field: SortField::Price,
        order,
    })
}

/// Offset of the first record on `page`. Pages below 1 are treated as page 1
/// and the result saturates at `i64::MAX`.
pub fn compute_skip(page: i64, page_size: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(page_size)
}

/// Number of pages needed to hold `total` records.
pub fn compute_last_page(total: i64, page_size: i64) -> i64 {
    if total <= 0 || page_size <= 0 {
        return 0;
    }
    (total - 1) / page_size + 1
}
