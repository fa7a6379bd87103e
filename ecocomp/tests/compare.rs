mod helpers;

use std::time::Duration;

use ecocomp::{CompareError, FetchMode};
use ecocomp_core::{ComparisonRequest, is_sorted_desc};
use ecocomp_mock::{CallEvent, MockBehavior};
use helpers::*;

#[tokio::test]
async fn fixtures_come_back_sorted_descending() {
    let c = with_fixtures().build().unwrap();
    let out = c.compare(&page_request("sweden", "MEXICO")).await.unwrap();
    assert_eq!(out.country1.len(), 3);
    assert_eq!(out.country2.len(), 3);
    assert!(is_sorted_desc(&out.country1));
    assert!(is_sorted_desc(&out.country2));
    assert_eq!(
        out.country1[0].extra.get("Country"),
        Some(&serde_json::json!("Sweden"))
    );
}

#[tokio::test]
async fn unknown_country_is_rejected_with_allow_list_message() {
    let c = with_fixtures().build().unwrap();
    let err = c
        .compare(&page_request("France", "Mexico"))
        .await
        .unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(
        err.to_string(),
        "Only Sweden, Mexico, New Zealand, and Thailand are allowed for free users (got \"France\")."
    );
}

#[tokio::test]
async fn new_zealand_is_forwarded_with_canonical_spelling() {
    let (builder, ctrl) = scripted();
    ctrl.set_behavior(
        series_req("New Zealand", GDP),
        MockBehavior::Return(vec![rec(2021, 1, 1, 1.0, "nz")]),
    )
    .await;
    ctrl.set_behavior(series_req(MEXICO, INFLATION), MockBehavior::Return(vec![]))
        .await;

    let c = builder.build().unwrap();
    let out = c
        .compare(&page_request("new zealand", "mexico"))
        .await
        .unwrap();
    assert_eq!(tags(&out.country1), ["nz"]);
    assert!(out.country2.is_empty());
}

#[tokio::test]
async fn ties_keep_provider_order() {
    let (builder, ctrl) = scripted();
    ctrl.set_behavior(
        series_req(SWEDEN, GDP),
        MockBehavior::Return(vec![
            rec(2019, 1, 1, 1.0, "old"),
            rec(2021, 1, 1, 2.0, "tie-a"),
            rec(2020, 1, 1, 3.0, "mid"),
            rec(2021, 1, 1, 4.0, "tie-b"),
        ]),
    )
    .await;
    ctrl.set_behavior(series_req(MEXICO, INFLATION), MockBehavior::Return(vec![]))
        .await;

    let out = builder
        .build()
        .unwrap()
        .compare(&page_request(SWEDEN, MEXICO))
        .await
        .unwrap();
    assert_eq!(tags(&out.country1), ["tie-a", "tie-b", "mid", "old"]);
}

#[tokio::test]
async fn either_failure_fails_the_whole_comparison() {
    let c = with_fixtures().build().unwrap();
    let err = c
        .compare(&ComparisonRequest::new(SWEDEN, MEXICO, GDP, "FAIL"))
        .await
        .unwrap_err();
    assert!(err.is_upstream());
    assert!(err.payload().is_some());

    let err = c
        .compare(&ComparisonRequest::new(SWEDEN, MEXICO, "FAIL", GDP))
        .await
        .unwrap_err();
    assert!(err.is_upstream());
}

#[tokio::test]
async fn both_failing_reports_country1() {
    let (builder, ctrl) = scripted();
    ctrl.set_behavior(
        series_req(SWEDEN, GDP),
        MockBehavior::Fail(CompareError::upstream("dynamic-mock", "sweden down")),
    )
    .await;
    ctrl.set_behavior(
        series_req(MEXICO, INFLATION),
        MockBehavior::Fail(CompareError::upstream("dynamic-mock", "mexico down")),
    )
    .await;

    let err = builder
        .build()
        .unwrap()
        .compare(&page_request(SWEDEN, MEXICO))
        .await
        .unwrap_err();
    match err {
        CompareError::Upstream { msg, .. } => assert_eq!(msg, "sweden down"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn sequential_mode_fetches_country1_first() {
    let (builder, ctrl) = scripted();
    // country1 is slower; concurrent fetches would finish country2 first.
    ctrl.set_behavior(
        series_req(SWEDEN, GDP),
        MockBehavior::Delayed(Duration::from_millis(500), vec![]),
    )
    .await;
    ctrl.set_behavior(series_req(MEXICO, INFLATION), MockBehavior::Return(vec![]))
        .await;

    let c = builder
        .fetch_mode(FetchMode::Sequential)
        .fetch_delay(Duration::from_secs(1))
        .build()
        .unwrap();
    c.compare(&page_request(SWEDEN, MEXICO)).await.unwrap();

    assert_eq!(
        ctrl.events().await,
        vec![
            CallEvent::Started("Sweden/GDP".into()),
            CallEvent::Finished("Sweden/GDP".into()),
            CallEvent::Started("Mexico/Inflation Rate".into()),
            CallEvent::Finished("Mexico/Inflation Rate".into()),
        ]
    );
}

#[tokio::test]
async fn sequential_mode_stops_after_country1_failure() {
    let (builder, ctrl) = scripted();
    ctrl.set_behavior(
        series_req(SWEDEN, GDP),
        MockBehavior::Fail(CompareError::upstream("dynamic-mock", "sweden down")),
    )
    .await;
    ctrl.set_behavior(series_req(MEXICO, INFLATION), MockBehavior::Return(vec![]))
        .await;

    let err = builder
        .fetch_mode(FetchMode::Sequential)
        .build()
        .unwrap()
        .compare(&page_request(SWEDEN, MEXICO))
        .await
        .unwrap_err();
    assert!(err.is_upstream());

    let events = ctrl.events().await;
    assert_eq!(
        events,
        vec![
            CallEvent::Started("Sweden/GDP".into()),
            CallEvent::Finished("Sweden/GDP".into()),
        ]
    );
    assert!(!events.contains(&CallEvent::Started("Mexico/Inflation Rate".into())));
}

#[tokio::test]
async fn every_fetch_mode_compares() {
    for mode in [FetchMode::Concurrent, FetchMode::Sequential] {
        let expected_calls = match mode {
            FetchMode::Concurrent | FetchMode::Sequential => 2,
        };
        let (builder, ctrl) = scripted();
        ctrl.set_behavior(series_req(SWEDEN, GDP), MockBehavior::Return(vec![]))
            .await;
        ctrl.set_behavior(series_req(MEXICO, INFLATION), MockBehavior::Return(vec![]))
            .await;
        let out = builder
            .fetch_mode(mode)
            .build()
            .unwrap()
            .compare(&page_request(SWEDEN, MEXICO))
            .await
            .unwrap();
        assert!(out.country1.is_empty() && out.country2.is_empty());
        assert_eq!(ctrl.call_count().await, expected_calls);
    }
}

#[tokio::test(start_paused = true)]
async fn concurrent_mode_overlaps_fetches() {
    let (builder, ctrl) = scripted();
    ctrl.set_behavior(
        series_req(SWEDEN, GDP),
        MockBehavior::Delayed(Duration::from_millis(500), vec![]),
    )
    .await;
    ctrl.set_behavior(series_req(MEXICO, INFLATION), MockBehavior::Return(vec![]))
        .await;

    builder
        .build()
        .unwrap()
        .compare(&page_request(SWEDEN, MEXICO))
        .await
        .unwrap();

    let events = ctrl.events().await;
    assert_eq!(events[0], CallEvent::Started("Sweden/GDP".into()));
    assert_eq!(events[1], CallEvent::Started("Mexico/Inflation Rate".into()));
    assert_eq!(events[3], CallEvent::Finished("Sweden/GDP".into()));
}

#[tokio::test(start_paused = true)]
async fn hanging_provider_times_out() {
    let (builder, ctrl) = scripted();
    ctrl.set_behavior(series_req(SWEDEN, GDP), MockBehavior::Return(vec![]))
        .await;
    ctrl.set_behavior(series_req(MEXICO, INFLATION), MockBehavior::Hang)
        .await;

    let c = builder.provider_timeout(Duration::from_secs(2)).build().unwrap();
    let started = tokio::time::Instant::now();
    let err = c
        .compare(&page_request(SWEDEN, MEXICO))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CompareError::provider_timeout("dynamic-mock", "Mexico/Inflation Rate")
    );
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[tokio::test(start_paused = true)]
async fn slow_fixture_trips_provider_timeout() {
    let c = with_fixtures()
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let err = c
        .compare(&ComparisonRequest::new(SWEDEN, MEXICO, "TIMEOUT", GDP))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CompareError::provider_timeout("ecocomp-mock", "Sweden/TIMEOUT")
    );
}

#[tokio::test(start_paused = true)]
async fn slow_fixture_within_timeout_succeeds() {
    let c = with_fixtures()
        .provider_timeout(Duration::from_secs(1))
        .build()
        .unwrap();
    let out = c
        .compare(&ComparisonRequest::new(SWEDEN, MEXICO, "TIMEOUT", GDP))
        .await
        .unwrap();
    assert!(out.country1.is_empty());
    assert_eq!(out.country2.len(), 3);
}

#[tokio::test(start_paused = true)]
async fn request_deadline_covers_fetch_delays() {
    let (builder, ctrl) = scripted();
    ctrl.set_behavior(series_req(SWEDEN, GDP), MockBehavior::Return(vec![]))
        .await;
    ctrl.set_behavior(series_req(MEXICO, INFLATION), MockBehavior::Return(vec![]))
        .await;

    let c = builder
        .fetch_mode(FetchMode::Sequential)
        .fetch_delay(Duration::from_secs(1))
        .request_timeout(Duration::from_millis(1500))
        .build()
        .unwrap();
    let err = c
        .compare(&page_request(SWEDEN, MEXICO))
        .await
        .unwrap_err();
    assert_eq!(err, CompareError::request_timeout("compare"));
}

#[test]
fn compare_is_usable_from_blocking_code() {
    let c = with_fixtures().build().unwrap();
    let out = tokio_test::block_on(c.compare(&page_request("thailand", "new zealand"))).unwrap();
    assert_eq!(out.country1.len(), 3);
    assert!(is_sorted_desc(&out.country2));
}
