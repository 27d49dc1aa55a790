//! End-to-end controller scenarios driven through `handle_event`.

use campusnav::app::{handle_event, Action, DomInventory, Event, MobileMenuState, ViewportClass};
use campusnav::domain::{Role, UserProfile};
use campusnav::gesture::{ScrollMetrics, TouchPoint};
use campusnav::storage::{keys, FallbackStorage};
use campusnav::{initialize, Config, NavigationController};

fn signed_in() -> FallbackStorage {
    let mut storage = FallbackStorage::in_memory();
    storage.set(keys::TOKEN, "session-token");
    storage
}

fn mounted(width: f64, sections: &[&str]) -> NavigationController {
    let mut nav = initialize(Config::default(), signed_in());
    send(
        &mut nav,
        Event::Mount {
            inventory: DomInventory::complete(sections),
            path: "/student-dashboard.html".into(),
            width,
            scroll: ScrollMetrics::default(),
        },
    );
    nav
}

fn send(nav: &mut NavigationController, event: Event) -> Vec<Action> {
    handle_event(nav, &event).unwrap().1
}

fn swipe(nav: &mut NavigationController, from: TouchPoint, to: TouchPoint) -> Vec<Action> {
    send(
        nav,
        Event::TouchStart {
            point: from,
            scroll: ScrollMetrics::default(),
        },
    );
    send(nav, Event::TouchEnd { point: to })
}

#[test]
fn resize_to_mobile_then_hamburger_opens_menu() {
    let mut nav = mounted(1200.0, &["dashboard"]);

    send(&mut nav, Event::HamburgerTap);
    assert!(nav.view_state().sidebar_collapsed, "desktop tap collapses the sidebar");

    send(&mut nav, Event::Resize { width: 600.0 });
    assert_eq!(nav.view_state().viewport, ViewportClass::Mobile);
    assert!(nav.view_state().sidebar_collapsed);
    assert!(!nav.view_state().mobile_menu_open());

    let actions = send(&mut nav, Event::HamburgerTap);
    assert!(nav.view_state().mobile_menu_open());
    assert!(actions.contains(&Action::SetAriaExpanded { expanded: true }));
    assert!(actions.contains(&Action::LockBodyScroll { locked: true }));

    send(&mut nav, Event::TransitionEnd);
    assert_eq!(nav.view_state().menu, MobileMenuState::Open);
}

#[test]
fn two_left_swipes_reach_third_section() {
    let mut nav = mounted(390.0, &["dashboard", "attendance", "grades"]);

    let first = swipe(&mut nav, TouchPoint::new(250.0, 400.0, 0), TouchPoint::new(130.0, 410.0, 75));
    assert!(first.contains(&Action::ScrollToSection {
        id: "attendance".into(),
        index: 1
    }));

    let second = swipe(&mut nav, TouchPoint::new(250.0, 400.0, 150), TouchPoint::new(130.0, 410.0, 225));
    assert!(second.contains(&Action::ScrollToSection {
        id: "grades".into(),
        index: 2
    }));
    assert_eq!(nav.view_state().active_section_index, 2);

    let third = swipe(&mut nav, TouchPoint::new(250.0, 400.0, 300), TouchPoint::new(130.0, 410.0, 375));
    assert!(third.is_empty(), "already on the last section");
}

#[test]
fn edge_swipe_opens_and_left_swipe_closes_menu() {
    let mut nav = mounted(390.0, &["dashboard", "attendance"]);

    swipe(&mut nav, TouchPoint::new(10.0, 300.0, 0), TouchPoint::new(150.0, 305.0, 90));
    assert!(nav.view_state().mobile_menu_open());

    let actions = swipe(&mut nav, TouchPoint::new(250.0, 300.0, 200), TouchPoint::new(100.0, 300.0, 290));
    assert!(!nav.view_state().mobile_menu_open());
    assert_eq!(nav.view_state().active_section_index, 0, "closing swipe does not step");
    assert!(actions.contains(&Action::SetAriaExpanded { expanded: false }));
}

#[test]
fn pull_refreshes_once_and_waits_for_completion() {
    let mut nav = mounted(390.0, &["dashboard"]);
    let top = ScrollMetrics {
        scroll_y: 0.0,
        content_height: 2_000.0,
        viewport_height: 700.0,
    };

    send(
        &mut nav,
        Event::TouchStart {
            point: TouchPoint::new(150.0, 100.0, 0),
            scroll: top,
        },
    );
    let moved = send(
        &mut nav,
        Event::TouchMove {
            point: TouchPoint::new(150.0, 160.0, 40),
        },
    );
    assert!(moved.contains(&Action::PreventDefault));

    let released = send(
        &mut nav,
        Event::TouchEnd {
            point: TouchPoint::new(152.0, 200.0, 80),
        },
    );
    assert_eq!(released.iter().filter(|a| **a == Action::Refresh).count(), 1);
    assert!(nav.is_refreshing());

    send(
        &mut nav,
        Event::TouchStart {
            point: TouchPoint::new(150.0, 100.0, 100),
            scroll: top,
        },
    );
    let again = send(
        &mut nav,
        Event::TouchEnd {
            point: TouchPoint::new(150.0, 300.0, 180),
        },
    );
    assert!(!again.contains(&Action::Refresh), "no second refresh while one is running");

    let done = send(&mut nav, Event::RefreshCompleted { now_ms: 1_000 });
    assert_eq!(done, vec![Action::ResetPullIndicator { animate: true }]);
    assert!(!nav.is_refreshing());
}

#[test]
fn short_pull_snaps_back() {
    let mut nav = mounted(390.0, &["dashboard"]);
    let top = ScrollMetrics {
        scroll_y: 0.0,
        content_height: 2_000.0,
        viewport_height: 700.0,
    };

    send(
        &mut nav,
        Event::TouchStart {
            point: TouchPoint::new(150.0, 100.0, 0),
            scroll: top,
        },
    );
    let released = send(
        &mut nav,
        Event::TouchEnd {
            point: TouchPoint::new(150.0, 150.0, 60),
        },
    );
    assert!(!released.contains(&Action::Refresh));
    assert!(released.contains(&Action::ResetPullIndicator { animate: true }));
}

#[test]
fn escape_closes_open_menu_and_unlocks_body() {
    let mut nav = mounted(390.0, &["dashboard"]);
    send(&mut nav, Event::HamburgerTap);

    let actions = send(&mut nav, Event::KeyPress { key: "Escape".into() });
    assert!(!nav.view_state().mobile_menu_open());
    assert!(actions.contains(&Action::LockBodyScroll { locked: false }));

    let ignored = send(&mut nav, Event::KeyPress { key: "Enter".into() });
    assert!(ignored.is_empty());
}

#[test]
fn unmount_removes_every_listener() {
    let mut nav = initialize(Config::default(), signed_in());
    let added = send(
        &mut nav,
        Event::Mount {
            inventory: DomInventory::complete(&["dashboard"]),
            path: "/student-dashboard.html".into(),
            width: 390.0,
            scroll: ScrollMetrics::default(),
        },
    )
    .iter()
    .filter(|a| matches!(a, Action::AddListener { .. }))
    .count();
    assert!(added > 0);
    assert_eq!(nav.listeners().active_count(), added);

    let removed = send(&mut nav, Event::Unmount)
        .iter()
        .filter(|a| matches!(a, Action::RemoveListener { .. }))
        .count();
    assert_eq!(removed, added);
    assert_eq!(nav.listeners().active_count(), 0);
    assert!(handle_event(&mut nav, &Event::HamburgerTap).is_err());
}

#[test]
fn signed_out_visitor_is_sent_to_login() {
    let mut nav = initialize(Config::default(), FallbackStorage::in_memory());
    let actions = send(
        &mut nav,
        Event::Mount {
            inventory: DomInventory::complete(&["dashboard"]),
            path: "/student-dashboard.html".into(),
            width: 1280.0,
            scroll: ScrollMetrics::default(),
        },
    );

    assert!(actions.contains(&Action::NavigateTo { url: "login.html".into() }));
    assert!(!actions.iter().any(|a| matches!(a, Action::AddListener { .. })));
    assert!(nav.compute_viewmodel().empty_state.is_some());
}

#[test]
fn user_of_another_role_is_sent_to_their_dashboard() {
    let mut storage = signed_in();
    storage.set_json(keys::USER, &UserProfile::new("Dana Reyes", Role::Admin));

    let mut nav = initialize(Config::default(), storage);
    let actions = send(
        &mut nav,
        Event::Mount {
            inventory: DomInventory::complete(&["dashboard"]),
            path: "/student-dashboard.html".into(),
            width: 1280.0,
            scroll: ScrollMetrics::default(),
        },
    );
    assert!(actions.contains(&Action::NavigateTo {
        url: "admin-dashboard.html".into()
    }));
}
