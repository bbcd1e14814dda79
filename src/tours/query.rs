//! Typed listing query, parsed from `/tours` query-string parameters.
//!
//! Parsing never fails. Integer parameters use only their leading integer,
//! and an unusable `page` or `pageSize` falls back to its default. A price
//! bound that is present but not a number never matches.

use std::collections::HashMap;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct TourQuery {
    /// Case-insensitive substring of `country`.
    pub country: Option<String>,
    /// Case-insensitive substring of `region`.
    pub region: Option<String>,
    pub price: Option<PriceRange>,
    pub sort: Option<SortSpec>,
    /// 1-based.
    pub page: usize,
    pub page_size: usize,
}

/// Inclusive bounds on `price`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl Default for TourQuery {
    fn default() -> Self {
        Self {
            country: None,
            region: None,
            price: None,
            sort: None,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TourQuery {
    /// Builds a query from decoded query-string pairs.
    ///
    /// The price range is only set when both `minPrice` and `maxPrice` are
    /// present; a lone bound is ignored. A bound that is not a number is NaN,
    /// so the range matches nothing.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str).filter(|v| !v.is_empty());

        let min = get("minPrice").map(parse_number);
        let max = get("maxPrice").map(parse_number);

        Self {
            country: get("country").map(str::to_owned),
            region: get("region").map(str::to_owned),
            price: min.zip(max).map(|(min, max)| PriceRange { min, max }),
            sort: get("sortBy").map(SortSpec::parse),
            page: get("page").and_then(parse_positive).unwrap_or(DEFAULT_PAGE),
            page_size: get("pageSize").and_then(parse_positive).unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

impl SortSpec {
    /// Parses `"<field>,<order>"`. Only `desc` selects descending order;
    /// pieces after the second comma are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut pieces = raw.split(',');
        let field = pieces.next().unwrap_or_default().to_owned();
        let direction = match pieces.next() {
            Some("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        };
        Self { field, direction }
    }
}

fn parse_number(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

fn parse_positive(raw: &str) -> Option<usize> {
    parse_leading_int(raw)
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
}

/// Reads the integer at the start of `raw`: leading whitespace, an optional
/// sign, then digits. Anything after the digits is ignored, so `"2abc"` and
/// `"2.9"` both read as 2. `None` when there are no digits or the value
/// overflows `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let sign_len = s.len() - unsigned.len();
    let digits = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}
