//! Per-month best-seller table tests.

mod common;

use dine_metrics::{DineMetrics, DineMetricsError, PeriodHighlights};

#[test]
fn top_products_in_table_order() {
    let (metrics, _tmp) = common::setup_sample_data();

    let top = metrics.insights().top_products("April", 3).unwrap();
    let names: Vec<&str> = top.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Cappuccino", "Butter Croissant", "Alfredo"]);
    assert_eq!(top[0].units_sold, 567);
    assert_eq!(top[1].share_pct, 2.3);
}

#[test]
fn limit_larger_than_table_returns_all() {
    let (metrics, _tmp) = common::setup_sample_data();

    assert_eq!(metrics.insights().top_products("march", 3).unwrap().len(), 1);
    assert!(metrics.insights().top_categories("march", 3).unwrap().is_empty());
    assert_eq!(metrics.insights().top_categories("april", 2).unwrap().len(), 2);
}

#[test]
fn highlights_for_unknown_month_is_not_found() {
    let (metrics, _tmp) = common::setup_sample_data();

    let err = metrics.insights().highlights("week").unwrap_err();
    assert!(matches!(err, DineMetricsError::NotFound(_)));
}

#[test]
fn month_lookup_is_case_insensitive() {
    let (metrics, _tmp) = common::setup_sample_data();

    let april = metrics.insights().highlights(" APRIL ").unwrap();
    assert_eq!(april.month, "april");
    assert_eq!(april.top_categories[0].name, "Sandwiches & Burgers");
}

#[test]
fn injected_highlights_replace_the_file() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_sample_datasets(tmp.path());

    let metrics = DineMetrics::builder()
        .data_dir(tmp.path())
        .highlights(vec![PeriodHighlights {
            month: "may".to_string(),
            top_products: Vec::new(),
            top_categories: Vec::new(),
        }])
        .build()
        .unwrap();

    assert_eq!(metrics.insights().months(), vec!["may"]);
    assert!(matches!(
        metrics.insights().highlights("april"),
        Err(DineMetricsError::NotFound(_))
    ));
}
