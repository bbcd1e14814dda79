//! The listing pipeline: filter, then sort, then paginate.
//!
//! Every stage works on references into the store; the loaded tours are
//! never touched.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

use crate::tours::query::{SortDirection, SortSpec, TourQuery};
use crate::tours::record::Tour;

/// One page of a listing.
#[derive(Debug, Serialize)]
pub struct Page<'a> {
    pub tours: Vec<&'a Tour>,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// Runs the full pipeline over `tours`.
pub fn run<'a>(tours: &'a [Tour], query: &TourQuery) -> Page<'a> {
    let mut matched = filter(tours, query);
    if let Some(spec) = &query.sort {
        sort(&mut matched, spec);
    }

    Page {
        total_pages: total_pages(matched.len(), query.page_size),
        tours: paginate(&matched, query.page, query.page_size).to_vec(),
    }
}

/// Tours satisfying every active predicate, in input order.
///
/// A tour lacking a field that an active predicate examines does not match.
pub fn filter<'a>(tours: &'a [Tour], query: &TourQuery) -> Vec<&'a Tour> {
    let country = query.country.as_deref().map(str::to_lowercase);
    let region = query.region.as_deref().map(str::to_lowercase);

    tours.iter()
        .filter(|t| country.as_deref().is_none_or(|needle| contains_ignore_case(t.country(), needle)))
        .filter(|t| region.as_deref().is_none_or(|needle| contains_ignore_case(t.region(), needle)))
        .filter(|t| query.price.is_none_or(|range| t.price().is_some_and(|p| range.contains(p))))
        .collect()
}

fn contains_ignore_case(haystack: Option<&str>, lowered_needle: &str) -> bool {
    haystack.is_some_and(|h| h.to_lowercase().contains(lowered_needle))
}

/// Stable sort on `spec.field`. Ties keep their input order.
pub fn sort(tours: &mut [&Tour], spec: &SortSpec) {
    tours.sort_by(|a, b| {
        let ordering = compare_values(a.field(&spec.field), b.field(&spec.field));
        match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Total order over optional JSON values.
///
/// Values of the same kind use their natural ordering. Different kinds
/// order by kind: missing < null < bool < number < string < array < object.
/// Arrays and objects are equal among themselves.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: Option<&Value>) -> u8 {
        match v {
            None => 0,
            Some(Value::Null) => 1,
            Some(Value::Bool(_)) => 2,
            Some(Value::Number(_)) => 3,
            Some(Value::String(_)) => 4,
            Some(Value::Array(_)) => 5,
            Some(Value::Object(_)) => 6,
        }
    }

    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.total_cmp(&y)
        }
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

/// The `page`-th slice of `page_size` items (1-based), clamped to `items`.
/// Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// `ceil(len / page_size)`; zero for an empty result.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::tours::query::PriceRange;

    fn tours(values: Vec<Value>) -> Vec<Tour> {
        values.into_iter().map(|v| serde_json::from_value(v).unwrap()).collect()
    }

    fn ids(tours: &[&Tour]) -> Vec<i64> {
        tours.iter().filter_map(|t| t.id()).collect()
    }

    fn sample() -> Vec<Tour> {
        tours(vec![
            json!({"id": 1, "country": "France", "region": "Provence", "price": 100}),
            json!({"id": 2, "country": "Spain", "region": "Andalusia", "price": 200}),
            json!({"id": 3, "country": "france", "region": "Alsace", "price": 150}),
        ])
    }

    fn sortable() -> Vec<Tour> {
        tours(vec![
            json!({"id": 1, "rating": 4, "title": "b"}),
            json!({"id": 2, "rating": 5, "title": "a"}),
            json!({"id": 3, "rating": 4, "title": "c"}),
            json!({"id": 4, "rating": 3.5, "title": "a"}),
            json!({"id": 5, "rating": 5, "title": "d"}),
        ])
    }

    fn spec(raw: &str) -> SortSpec {
        SortSpec::parse(raw)
    }

    #[test]
    fn country_filter_is_case_insensitive_substring() {
        let data = sample();
        let q = TourQuery { country: Some("FRAN".into()), ..Default::default() };
        assert_eq!(ids(&filter(&data, &q)), vec![1, 3]);

        let q = TourQuery { country: Some("ain".into()), ..Default::default() };
        assert_eq!(ids(&filter(&data, &q)), vec![2]);
    }

    #[test]
    fn region_filter_is_case_insensitive_substring() {
        let data = sample();
        let q = TourQuery { region: Some("aLs".into()), ..Default::default() };
        assert_eq!(ids(&filter(&data, &q)), vec![3]);
    }

    #[test]
    fn price_filter_is_inclusive() {
        let data = sample();
        let q = TourQuery { price: Some(PriceRange { min: 100.0, max: 150.0 }), ..Default::default() };
        assert_eq!(ids(&filter(&data, &q)), vec![1, 3]);
    }

    #[test]
    fn tours_missing_a_filtered_field_are_excluded() {
        let data = tours(vec![json!({"id": 1}), json!({"id": 2, "country": "Chile", "price": "n/a"})]);
        let q = TourQuery { country: Some("chile".into()), ..Default::default() };
        assert_eq!(ids(&filter(&data, &q)), vec![2]);

        let q = TourQuery { price: Some(PriceRange { min: 0.0, max: 1e9 }), ..Default::default() };
        assert!(filter(&data, &q).is_empty());
    }

    #[test]
    fn adding_a_filter_never_widens_the_result() {
        let data = sample();
        let base = TourQuery { country: Some("fr".into()), ..Default::default() };
        let narrower = TourQuery { region: Some("alsace".into()), ..base.clone() };
        let narrowest = TourQuery { price: Some(PriceRange { min: 0.0, max: 120.0 }), ..narrower.clone() };

        let counts: Vec<_> = [TourQuery::default(), base, narrower, narrowest]
            .iter()
            .map(|q| filter(&data, q).len())
            .collect();
        assert!(counts.windows(2).all(|w| w[1] <= w[0]), "{counts:?}");
    }

    #[test]
    fn scenario_country_then_price_desc() {
        let data = sample();
        let q = TourQuery {
            country: Some("france".into()),
            sort: Some(spec("price,desc")),
            ..Default::default()
        };
        let page = run(&data, &q);
        assert_eq!(ids(&page.tours), vec![3, 1]);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn sort_numbers_ascending_is_stable() {
        let data = sortable();
        let mut refs: Vec<&Tour> = data.iter().collect();
        sort(&mut refs, &spec("rating,asc"));
        assert_eq!(ids(&refs), vec![4, 1, 3, 2, 5]);
    }

    #[test]
    fn sort_descending_keeps_ties_in_input_order() {
        let data = sortable();
        let mut refs: Vec<&Tour> = data.iter().collect();
        sort(&mut refs, &spec("rating,desc"));
        assert_eq!(ids(&refs), vec![2, 5, 1, 3, 4]);
    }

    #[test]
    fn sort_strings_lexicographically() {
        let data = sortable();
        let mut refs: Vec<&Tour> = data.iter().collect();
        sort(&mut refs, &spec("title"));
        assert_eq!(ids(&refs), vec![2, 4, 1, 3, 5]);
    }

    #[test]
    fn sort_is_idempotent() {
        let data = sortable();
        let mut once: Vec<&Tour> = data.iter().collect();
        sort(&mut once, &spec("rating,desc"));
        let mut twice = once.clone();
        sort(&mut twice, &spec("rating,desc"));
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn sort_on_absent_field_keeps_input_order() {
        let data = sortable();
        let mut refs: Vec<&Tour> = data.iter().collect();
        sort(&mut refs, &spec("duration,desc"));
        assert_eq!(ids(&refs), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sort_with_mixed_kinds_orders_by_kind() {
        let data = tours(vec![
            json!({"id": 1, "k": "x"}),
            json!({"id": 2, "k": 10}),
            json!({"id": 3}),
            json!({"id": 4, "k": 2}),
            json!({"id": 5, "k": null}),
        ]);
        let mut refs: Vec<&Tour> = data.iter().collect();
        sort(&mut refs, &spec("k,asc"));
        assert_eq!(ids(&refs), vec![3, 5, 4, 2, 1]);
    }

    #[test]
    fn pages_are_disjoint_and_contiguous() {
        let items: Vec<u32> = (0..15).collect();
        let first = paginate(&items, 1, 6);
        let second = paginate(&items, 2, 6);
        assert_eq!(first, &items[..6]);
        assert_eq!([first, second].concat(), items[..12].to_vec());
        assert_eq!(paginate(&items, 3, 6), &items[12..]);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..5).collect();
        assert!(paginate(&items, 2, 5).is_empty());
        assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }

    #[test]
    fn run_reports_total_pages_beyond_the_last_page() {
        let data = sortable();
        let q = TourQuery { page: 4, page_size: 2, ..Default::default() };
        let page = run(&data, &q);
        assert!(page.tours.is_empty());
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn empty_dataset_serializes_to_empty_page() {
        let page = run(&[], &TourQuery::default());
        assert_eq!(serde_json::to_value(&page).unwrap(), json!({"tours": [], "totalPages": 0}));
    }
}
