//! Async wrapper tests (requires the `async` feature).

#![cfg(feature = "async")]

mod common;

use dine_metrics::{AsyncDineMetrics, DineMetricsError, Segment};

#[tokio::test]
async fn build_and_query_on_blocking_pool() {
    let tmp = tempfile::tempdir().unwrap();
    common::write_sample_datasets(tmp.path());

    let metrics = AsyncDineMetrics::builder()
        .data_dir(tmp.path())
        .build()
        .await
        .unwrap();

    let results = metrics.search("cappuccino", Segment::Premium).await.unwrap();
    assert_eq!(results.competitors[0].name, "Roastery Coffee House");

    let summary = metrics.summary("week").await.unwrap();
    assert_eq!(summary.total_sales, 3500.0);
}

#[tokio::test]
async fn errors_propagate_through_run() {
    let (sync_metrics, _tmp) = common::setup_sample_data();
    let metrics = AsyncDineMetrics::from(sync_metrics);

    let err = metrics.search(" ", Segment::Budget).await.unwrap_err();
    assert!(matches!(err, DineMetricsError::InvalidQuery(_)));

    let err = metrics.summary("december").await.unwrap_err();
    assert!(matches!(err, DineMetricsError::NotFound(_)));
}

#[tokio::test]
async fn clones_share_the_datasets() {
    let (sync_metrics, _tmp) = common::setup_sample_data();
    let metrics = AsyncDineMetrics::from(sync_metrics);
    let other = metrics.clone();

    let (a, b) = tokio::join!(
        metrics.search("Latte", Segment::Premium),
        other.search("Latte", Segment::Premium)
    );
    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(
        other.run(|m| Ok(m.restaurants().len())).await.unwrap(),
        metrics.inner().restaurants().len()
    );
}
