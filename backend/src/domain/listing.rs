//! The listing query specification.
//!
//! Translates raw request parameters into a validated selection: a trimmed
//! search term, a sort column and direction drawn from fixed enumerations,
//! a page window, and optional inclusive range bounds on the numeric
//! attributes. Enumerated parameters degrade silently to their defaults on
//! unrecognised input; numeric parameters do not (the inbound adapter rejects
//! them before this module is reached).

use serde::Serialize;

use super::error::Error;

/// Page requested when the caller does not say otherwise.
pub const DEFAULT_PAGE: u32 = 1;
/// Page size used when the caller does not say otherwise.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Columns a listing may be ordered by.
///
/// Resolving a sort parameter is a fixed mapping over this enumeration; an
/// unrecognised value falls back to [`SortColumn::Name`] rather than failing
/// the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// Order by display name (the default).
    #[default]
    Name,
    /// Order by base experience points.
    BaseExperience,
    /// Order by height.
    Height,
    /// Order by weight.
    Weight,
}

impl SortColumn {
    /// Resolve a raw `sort` parameter, falling back to [`SortColumn::Name`].
    ///
    /// Matching is exact: `"base_experience"` resolves,
    /// `"Base_Experience"` falls back.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("name") => Self::Name,
            Some("base_experience") => Self::BaseExperience,
            Some("height") => Self::Height,
            Some("weight") => Self::Weight,
            _ => Self::default(),
        }
    }

    /// Wire name of the column, echoed back in responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::BaseExperience => "base_experience",
            Self::Height => "height",
            Self::Weight => "weight",
        }
    }
}

/// Direction a listing is ordered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Ascending (the default).
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl SortOrder {
    /// Resolve a raw `order` parameter, falling back to [`SortOrder::Asc`].
    ///
    /// Matching is case-insensitive, so `"DESC"` resolves to descending.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some(value) if value.eq_ignore_ascii_case("asc") => Self::Asc,
            Some(value) if value.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::default(),
        }
    }

    /// Wire name of the direction, echoed back in responses.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Inclusive bounds on one numeric attribute, each independently optional.
///
/// A record whose attribute is absent never satisfies a present bound:
/// comparisons against NULL are "not matched", in the store and in any
/// in-memory evaluation alike.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeFilter {
    /// Lower inclusive bound.
    pub min: Option<i32>,
    /// Upper inclusive bound.
    pub max: Option<i32>,
}

impl RangeFilter {
    /// True when neither bound is present.
    pub fn is_unbounded(self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Evaluate the filter against an attribute value under ternary logic.
    pub fn matches(self, value: Option<i32>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

/// Raw listing parameters as received from the caller, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    /// Requested page, 1-based.
    pub page: Option<u32>,
    /// Requested page size.
    pub per_page: Option<u32>,
    /// Free-text name search.
    pub search: Option<String>,
    /// Raw sort column parameter.
    pub sort: Option<String>,
    /// Raw sort direction parameter.
    pub order: Option<String>,
    /// Lower bound on base experience.
    pub base_experience_min: Option<i32>,
    /// Upper bound on base experience.
    pub base_experience_max: Option<i32>,
    /// Lower bound on height.
    pub height_min: Option<i32>,
    /// Upper bound on height.
    pub height_max: Option<i32>,
    /// Lower bound on weight.
    pub weight_min: Option<i32>,
    /// Upper bound on weight.
    pub weight_max: Option<i32>,
}

/// A validated listing selection ready for execution against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSelection {
    page: u32,
    per_page: u32,
    search: Option<String>,
    sort: SortColumn,
    order: SortOrder,
    base_experience: RangeFilter,
    height: RangeFilter,
    weight: RangeFilter,
}

impl Default for ListingSelection {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            sort: SortColumn::default(),
            order: SortOrder::default(),
            base_experience: RangeFilter::default(),
            height: RangeFilter::default(),
            weight: RangeFilter::default(),
        }
    }
}

impl ListingSelection {
    /// Validate raw parameters into a selection.
    ///
    /// The search term is trimmed and dropped when empty. Sort column and
    /// direction fall back to their defaults on unrecognised input.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] with [`crate::domain::ErrorCode::InvalidRequest`]
    /// when `page` or `per_page` is zero; both are typed as positive
    /// integers.
    pub fn from_params(params: ListingParams) -> Result<Self, Error> {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        if page == 0 {
            return Err(Error::invalid_request("page must be a positive integer"));
        }
        let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page == 0 {
            return Err(Error::invalid_request(
                "per_page must be a positive integer",
            ));
        }

        let search = params
            .search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_owned);

        Ok(Self {
            page,
            per_page,
            search,
            sort: SortColumn::from_param(params.sort.as_deref()),
            order: SortOrder::from_param(params.order.as_deref()),
            base_experience: RangeFilter {
                min: params.base_experience_min,
                max: params.base_experience_max,
            },
            height: RangeFilter {
                min: params.height_min,
                max: params.height_max,
            },
            weight: RangeFilter {
                min: params.weight_min,
                max: params.weight_max,
            },
        })
    }

    /// Requested page, 1-based, always >= 1.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size, always >= 1.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Trimmed, non-empty search term, when one was supplied.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Validated sort column actually used.
    pub fn sort(&self) -> SortColumn {
        self.sort
    }

    /// Validated sort direction actually used.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Range bounds on base experience.
    pub fn base_experience(&self) -> RangeFilter {
        self.base_experience
    }

    /// Range bounds on height.
    pub fn height(&self) -> RangeFilter {
        self.height
    }

    /// Range bounds on weight.
    pub fn weight(&self) -> RangeFilter {
        self.weight
    }

    /// Rows to skip before the page window.
    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.per_page)
    }

    /// Rows in the page window.
    pub fn limit(&self) -> i64 {
        i64::from(self.per_page)
    }
}

/// Pagination metadata computed before ordering and windowing are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMetadata {
    /// Records matching every filter, counted before pagination.
    pub total_items: u64,
    /// `ceil(total_items / per_page)`.
    pub total_pages: u64,
}

impl PageMetadata {
    /// Compute metadata for a filtered count and a validated page size.
    pub fn new(total_items: u64, per_page: u32) -> Self {
        Self {
            total_items,
            total_pages: total_items.div_ceil(u64::from(per_page)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn defaults_apply_when_no_parameters_given() {
        let selection = ListingSelection::from_params(ListingParams::default()).expect("valid");
        assert_eq!(selection.page(), 1);
        assert_eq!(selection.per_page(), 10);
        assert_eq!(selection.search(), None);
        assert_eq!(selection.sort(), SortColumn::Name);
        assert_eq!(selection.order(), SortOrder::Asc);
        assert!(selection.base_experience().is_unbounded());
    }

    #[rstest]
    #[case(Some(0), None)]
    #[case(None, Some(0))]
    fn zero_page_or_per_page_is_rejected(#[case] page: Option<u32>, #[case] per_page: Option<u32>) {
        let result = ListingSelection::from_params(ListingParams {
            page,
            per_page,
            ..ListingParams::default()
        });
        assert!(result.is_err());
    }

    #[rstest]
    #[case(Some("  char  "), Some("char"))]
    #[case(Some("   "), None)]
    #[case(Some(""), None)]
    #[case(None, None)]
    fn search_is_trimmed_and_dropped_when_empty(
        #[case] raw: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let selection = ListingSelection::from_params(ListingParams {
            search: raw.map(str::to_owned),
            ..ListingParams::default()
        })
        .expect("valid");
        assert_eq!(selection.search(), expected);
    }

    #[rstest]
    #[case(Some("weight"), SortColumn::Weight)]
    #[case(Some("base_experience"), SortColumn::BaseExperience)]
    #[case(Some("Weight"), SortColumn::Name)]
    #[case(Some("favourite_colour"), SortColumn::Name)]
    #[case(None, SortColumn::Name)]
    fn sort_column_falls_back_on_unrecognised_input(
        #[case] raw: Option<&str>,
        #[case] expected: SortColumn,
    ) {
        assert_eq!(SortColumn::from_param(raw), expected);
    }

    #[rstest]
    #[case(Some("desc"), SortOrder::Desc)]
    #[case(Some("DESC"), SortOrder::Desc)]
    #[case(Some("Asc"), SortOrder::Asc)]
    #[case(Some("sideways"), SortOrder::Asc)]
    #[case(None, SortOrder::Asc)]
    fn sort_order_is_case_insensitive_with_fallback(
        #[case] raw: Option<&str>,
        #[case] expected: SortOrder,
    ) {
        assert_eq!(SortOrder::from_param(raw), expected);
    }

    #[rstest]
    fn wire_names_match_the_accepted_parameters() {
        for column in [
            SortColumn::Name,
            SortColumn::BaseExperience,
            SortColumn::Height,
            SortColumn::Weight,
        ] {
            // A column's wire name must resolve back to the same column.
            assert_eq!(SortColumn::from_param(Some(column.as_str())), column);
        }
        assert_eq!(SortOrder::from_param(Some(SortOrder::Desc.as_str())), SortOrder::Desc);
        assert_eq!(SortOrder::Asc.as_str(), "asc");
    }

    #[rstest]
    fn offset_skips_earlier_pages() {
        let selection = ListingSelection::from_params(ListingParams {
            page: Some(3),
            per_page: Some(25),
            ..ListingParams::default()
        })
        .expect("valid");
        assert_eq!(selection.offset(), 50);
        assert_eq!(selection.limit(), 25);
    }

    #[rstest]
    #[case(0, 10, 0)]
    #[case(1, 10, 1)]
    #[case(10, 10, 1)]
    #[case(11, 10, 2)]
    #[case(25, 10, 3)]
    fn total_pages_is_ceiling_of_items_over_page_size(
        #[case] total_items: u64,
        #[case] per_page: u32,
        #[case] expected: u64,
    ) {
        assert_eq!(
            PageMetadata::new(total_items, per_page).total_pages,
            expected
        );
    }

    #[rstest]
    fn absent_value_never_matches_a_bounded_range() {
        let filter = RangeFilter {
            min: Some(50),
            max: None,
        };
        assert!(!filter.matches(None));
        assert!(filter.matches(Some(50)));
        assert!(!filter.matches(Some(49)));
    }

    #[rstest]
    fn unbounded_range_matches_absent_values() {
        assert!(RangeFilter::default().matches(None));
    }

    #[rstest]
    fn range_with_both_bounds_is_inclusive() {
        let filter = RangeFilter {
            min: Some(50),
            max: Some(100),
        };
        assert!(filter.matches(Some(50)));
        assert!(filter.matches(Some(100)));
        assert!(!filter.matches(Some(101)));
    }
}
