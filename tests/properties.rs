//! Property-based invariants for recognizers, the scroll monitor and the
//! persisted view state.
//!
//! Verifies:
//! 1. Sidebar toggles persist: a fresh store sees the parity of the toggles
//! 2. A start/end pair under the swipe thresholds never yields a gesture
//! 3. Pull-to-refresh fires exactly once iff travel reaches the threshold
//! 4. The navbar hide signal fires at most once per hide intent and never
//!    before its delay
//! 5. Any JSON value round-trips through every degraded storage chain

use campusnav::app::ViewStateStore;
use campusnav::domain::Role;
use campusnav::gesture::swipe::{classify, SwipeConfig};
use campusnav::gesture::{PullRelease, PullToRefresh, ScrollMetrics, SwipeRecognizer, TouchPoint};
use campusnav::scroll::{ChromeSignal, ScrollDirectionMonitor, ScrollSample};
use campusnav::storage::{DisabledStore, FallbackStorage, MemoryStore, Tier};
use proptest::prelude::*;
use serde_json::Value;

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Student), Just(Role::Teacher), Just(Role::Admin)]
}

fn flaky_chain() -> FallbackStorage {
    FallbackStorage::new(vec![
        Box::new(DisabledStore::new(Tier::Durable, "blocked")),
        Box::new(MemoryStore::new().as_tier(Tier::Session)),
        Box::new(MemoryStore::new()),
    ])
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<u64>().prop_map(Value::from),
        (-1_000_000i64..1_000_000).prop_map(|n| Value::from(n as f64 / 8.0)),
        any::<String>().prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map(any::<String>(), inner, 0..6)
                .prop_map(|fields| Value::Object(fields.into_iter().collect())),
        ]
    })
}

/// Durable-disabled, session-disabled and both-disabled chains.
fn degraded_chains() -> Vec<FallbackStorage> {
    vec![
        FallbackStorage::new(vec![
            Box::new(DisabledStore::new(Tier::Durable, "blocked")),
            Box::new(MemoryStore::new().as_tier(Tier::Session)),
            Box::new(MemoryStore::new()),
        ]),
        FallbackStorage::new(vec![
            Box::new(MemoryStore::new().as_tier(Tier::Durable)),
            Box::new(DisabledStore::new(Tier::Session, "blocked")),
            Box::new(MemoryStore::new()),
        ]),
        FallbackStorage::new(vec![
            Box::new(DisabledStore::new(Tier::Durable, "blocked")),
            Box::new(DisabledStore::new(Tier::Session, "blocked")),
            Box::new(MemoryStore::new()),
        ]),
    ]
}

proptest! {
    #[test]
    fn json_values_round_trip_on_degraded_chains(key in "[a-zA-Z]{1,16}", value in arb_json()) {
        for mut storage in degraded_chains() {
            storage.set_json(&key, &value);
            prop_assert_eq!(storage.get_json::<Value>(&key), Some(value.clone()));
        }
    }

    #[test]
    fn sidebar_toggles_persist_parity(role in arb_role(), toggles in 0usize..24, width in 800.0f64..2000.0) {
        let mut storage = flaky_chain();
        let mut store = ViewStateStore::restore(role, &storage, width, 768.0, true);
        for _ in 0..toggles {
            store.toggle_sidebar(&mut storage);
        }

        let reloaded = ViewStateStore::restore(role, &storage, width, 768.0, true);
        prop_assert_eq!(reloaded.state().sidebar_collapsed, toggles % 2 == 1);
    }

    #[test]
    fn short_horizontal_travel_is_not_a_swipe(
        x in 0.0f64..400.0,
        y in 0.0f64..800.0,
        dx in -75.0f64..=75.0,
        dy in -300.0f64..300.0,
    ) {
        let config = SwipeConfig::default();
        let start = TouchPoint::new(x, y, 0);
        let end = TouchPoint::new(x + dx, y + dy, 120);
        prop_assert_eq!(classify(start, end, &config), None);

        let mut recognizer = SwipeRecognizer::new(config);
        recognizer.touch_start(start);
        prop_assert!(recognizer.touch_end(end).is_none());
    }

    #[test]
    fn steep_travel_is_not_a_swipe(dx in -400.0f64..400.0, dy in prop_oneof![50.0f64..300.0, -300.0f64..=-50.0]) {
        let start = TouchPoint::new(200.0, 400.0, 0);
        let end = TouchPoint::new(200.0 + dx, 400.0 + dy, 80);
        prop_assert_eq!(classify(start, end, &SwipeConfig::default()), None);
    }

    #[test]
    fn pull_refreshes_exactly_once_past_threshold(travel in prop_oneof![0.0f64..79.0, 81.0f64..600.0]) {
        let mut pull = PullToRefresh::default();
        let top = ScrollMetrics { scroll_y: 0.0, content_height: 3_000.0, viewport_height: 800.0 };
        prop_assert!(pull.touch_start(TouchPoint::new(120.0, 40.0, 0), top));
        pull.touch_move(TouchPoint::new(120.0, 40.0 + travel / 2.0, 30));

        let release = pull.touch_end(TouchPoint::new(120.0, 40.0 + travel, 60));
        let refreshed = matches!(release, PullRelease::Refresh(_));
        prop_assert_eq!(refreshed, travel >= 80.0);

        let second = pull.touch_end(TouchPoint::new(120.0, 40.0 + travel, 90));
        prop_assert!(!matches!(second, PullRelease::Refresh(_)));
    }

    #[test]
    fn navbar_hides_at_most_once_per_intent(
        steps in prop::collection::vec((0.0f64..3_000.0, 1u64..120, any::<bool>()), 1..60),
    ) {
        let mut monitor = ScrollDirectionMonitor::default();
        let mut now = 0u64;
        let mut scheduled: Option<u64> = None;
        let mut visible = true;

        for (y, gap, deliver_timer) in steps {
            now += gap;
            monitor.on_scroll(ScrollSample { scroll_y: y, timestamp_ms: now });
            let outcome = monitor.on_frame(now);

            if let Some(at) = outcome.hide_at_ms {
                prop_assert!(visible, "hide scheduled while already hidden");
                prop_assert_eq!(at, now + 150);
                scheduled = Some(at);
            }

            let mut signals = vec![outcome.signal];
            if deliver_timer {
                signals.push(monitor.on_timer(now));
            }
            for signal in signals.into_iter().flatten() {
                match signal {
                    ChromeSignal::Show => {
                        prop_assert!(!visible, "shown twice");
                        visible = true;
                    }
                    ChromeSignal::Hide => {
                        prop_assert!(visible, "hidden twice");
                        prop_assert!(scheduled.is_some_and(|d| now >= d), "hidden before the delay");
                        visible = false;
                        scheduled = None;
                    }
                }
            }
            prop_assert_eq!(monitor.is_visible(), visible);
        }
    }
}
