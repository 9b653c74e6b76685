//! End-to-end scenarios driving the app through its public surface

use crate::components::{Action, Button, Pressable};
use crate::screens::{ContentScreen, HomeScreen, Screen};
use crate::{App, AppConfig, AppError, Route, View};
use kinetic_animation::{AnimationScheduler, EntrancePhase, MotionFrame};
use kinetic_core::{NullSink, RecordingSink, TraceEvent};
use kinetic_theme::Theme;
use std::sync::Arc;

fn app() -> App {
    App::new(AppConfig::default(), Theme::midnight(), Arc::new(NullSink)).unwrap()
}

fn recorded_app() -> (App, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let app = App::new(AppConfig::default(), Theme::midnight(), sink.clone()).unwrap();
    (app, sink)
}

fn motion_of(view: &View, key: &str) -> MotionFrame {
    view.find(key).unwrap().motion
}

#[test]
fn test_launches_at_home() {
    let app = app();
    assert_eq!(app.current_route(), Route::Home);
    assert_eq!(app.screen().name(), "HomeScreen");
    assert!(app.is_animating());
}

#[test]
fn test_launch_route_from_config() {
    let mut config = AppConfig::default();
    config.app.initial_route = "/content".into();
    let app = App::new(config, Theme::midnight(), Arc::new(NullSink)).unwrap();
    assert_eq!(app.current_route(), Route::Content);

    let mut config = AppConfig::default();
    config.app.initial_route = "/cart".into();
    let err = App::new(config, Theme::midnight(), Arc::new(NullSink)).unwrap_err();
    assert!(matches!(err, AppError::UnknownRoute(_)));
}

#[test]
fn test_back_returns_to_prior_screen() {
    let mut app = app();
    app.click("feature:2").unwrap();
    assert_eq!(app.current_route(), Route::Settings);

    app.click("setting:4").unwrap();
    assert_eq!(app.current_route(), Route::Profile);

    app.click("back").unwrap();
    assert_eq!(app.current_route(), Route::Settings);
    app.click("back").unwrap();
    assert_eq!(app.current_route(), Route::Home);

    assert!(!app.back());
    assert_eq!(app.current_route(), Route::Home);
    assert_eq!(app.navigator().depth(), 1);
}

#[test]
fn test_back_from_every_secondary_screen() {
    for route in [Route::Profile, Route::Content, Route::Settings] {
        let mut app = app();
        app.navigate_to(route.as_path()).unwrap();
        app.advance_ms(100.0);
        assert_eq!(app.click("back").unwrap(), Some(Action::Back));
        assert_eq!(app.current_route(), Route::Home, "back from {route}");
    }
}

#[test]
fn test_navigation_is_traced() {
    let (mut app, sink) = recorded_app();
    app.navigate_to("content").unwrap();
    app.back();
    let navigations: Vec<TraceEvent> = sink
        .events()
        .into_iter()
        .filter(|e| matches!(e, TraceEvent::Navigated { .. }))
        .collect();
    assert_eq!(
        navigations,
        vec![
            TraceEvent::navigated("/", "/content"),
            TraceEvent::navigated("/content", "/"),
        ]
    );
}

#[test]
fn test_dark_mode_toggle_twice_restores() {
    let mut app = app();
    app.navigate_to("/settings").unwrap();
    assert_eq!(app.toggle_value("dark_mode"), Some(true));

    assert!(!app.toggle("dark_mode").unwrap());
    assert!(!app.render().find_switch("switch:dark_mode").unwrap().value);
    assert!(app.toggle("dark_mode").unwrap());
    assert_eq!(app.toggle_value("dark_mode"), Some(true));
}

#[test]
fn test_settings_do_not_survive_restart() {
    let mut app = app();
    app.navigate_to("/settings").unwrap();
    app.toggle("dark_mode").unwrap();
    app.toggle("auto_sync").unwrap();

    app.restart().unwrap();
    assert_eq!(app.current_route(), Route::Home);
    assert_eq!(app.scheduler().now_ms(), 0.0);

    app.navigate_to("/settings").unwrap();
    assert_eq!(app.toggle_value("dark_mode"), Some(true));
    assert_eq!(app.toggle_value("auto_sync"), Some(false));
    assert_eq!(app.toggle_value("notifications"), Some(true));
}

#[test]
fn test_settings_state_belongs_to_the_screen_instance() {
    let mut app = app();
    app.navigate_to("/settings").unwrap();
    app.toggle("notifications").unwrap();

    // pushing another screen keeps the instance alive underneath
    app.navigate_to("/profile").unwrap();
    app.back();
    assert_eq!(app.toggle_value("notifications"), Some(false));

    // leaving and re-entering builds a new one
    app.back();
    app.navigate_to("/settings").unwrap();
    assert_eq!(app.toggle_value("notifications"), Some(true));
}

#[test]
fn test_toggle_outside_settings() {
    let mut app = app();
    let err = app.toggle("dark_mode").unwrap_err();
    assert!(matches!(err, AppError::UnknownToggle { screen: "HomeScreen", .. }));
}

#[test]
fn test_toggle_rows_ignore_presses() {
    let mut app = app();
    app.navigate_to("/settings").unwrap();
    assert!(!app.pointer_down("setting:1").unwrap());
    assert_eq!(app.pointer_up("setting:1").unwrap(), None);
    assert_eq!(app.toggle_value("dark_mode"), Some(true));
    assert_eq!(app.current_route(), Route::Settings);
}

#[test]
fn test_shorter_delay_starts_strictly_first() {
    let scheduler = AnimationScheduler::new();
    let mut screen = ContentScreen::new(scheduler.handle());
    screen.mount();

    let first = screen.cards()[0].motion().entrance().unwrap();
    let third = screen.cards()[2].motion().entrance().unwrap();
    assert_eq!(first.config().delay_ms, 100);
    assert_eq!(third.config().delay_ms, 300);

    for _ in 0..13 {
        scheduler.advance_ms(16.0);
    }
    assert_eq!(first.phase(), EntrancePhase::Running);
    assert_eq!(third.phase(), EntrancePhase::Pending);

    for _ in 0..13 {
        scheduler.advance_ms(16.0);
    }
    let (a, b) = (first.started_at().unwrap(), third.started_at().unwrap());
    assert_eq!(a, 100.0);
    assert_eq!(b, 300.0);
    assert!(a < b);
}

#[test]
fn test_staggered_cards_are_visible_in_order() {
    let mut app = app();
    app.navigate_to("/content").unwrap();
    app.advance_ms(200.0);
    let view = app.render();
    assert!(motion_of(&view, "article:0").opacity > 0.0);
    assert_eq!(motion_of(&view, "article:2").opacity, 0.0);
    assert_eq!(motion_of(&view, "article:2").translate_y, 50.0);
}

#[test]
fn test_entrance_is_reproduced_on_remount() {
    fn trajectory(app: &mut App) -> Vec<MotionFrame> {
        (0..150)
            .map(|_| {
                app.advance_ms(16.0);
                motion_of(&app.render(), "article:0")
            })
            .collect()
    }

    let mut app = app();
    app.advance_ms(48.0);
    app.navigate_to("/content").unwrap();
    let first = trajectory(&mut app);

    app.back();
    app.navigate_to("/content").unwrap();
    let second = trajectory(&mut app);

    assert_eq!(first, second);
    assert_eq!(first.last(), Some(&MotionFrame::REST));
}

#[test]
fn test_leaving_before_delay_cancels_entrances() {
    let mut app = app();
    for _ in 0..50 {
        app.advance_ms(16.0);
    }
    let values = app.scheduler().value_count();
    assert_eq!(app.scheduler().pending_count(), 0);

    app.navigate_to("/content").unwrap();
    assert!(app.scheduler().pending_count() > 0);
    app.back();

    assert_eq!(app.scheduler().pending_count(), 0);
    assert_eq!(app.scheduler().value_count(), values);
    for _ in 0..100 {
        app.advance_ms(16.0);
    }
}

#[test]
fn test_rerender_does_not_restart_entrance() {
    let scheduler = AnimationScheduler::new();
    let mut home = HomeScreen::new(scheduler.handle());
    let theme = Theme::midnight();
    let cx = crate::RenderContext::new(&theme, &NullSink);

    home.mount();
    let pending = scheduler.pending_count();
    for _ in 0..150 {
        scheduler.advance_ms(16.0);
    }
    let settled = home.render(&cx);
    assert_eq!(motion_of(&settled, "feature:2"), MotionFrame::REST);

    home.mount();
    assert_eq!(pending, 4);
    assert_eq!(scheduler.pending_count(), 0);
    for _ in 0..3 {
        assert_eq!(motion_of(&home.render(&cx), "feature:2"), MotionFrame::REST);
    }
    assert!(home
        .features()
        .iter()
        .all(|card| card.motion().entrance_phase() == Some(EntrancePhase::Settled)));
}

#[test]
fn test_feature_delays_never_decrease() {
    let scheduler = AnimationScheduler::new();
    let home = HomeScreen::new(scheduler.handle());
    let delays: Vec<u32> = home
        .features()
        .iter()
        .filter_map(|card| card.motion().entrance().map(|e| e.config().delay_ms))
        .collect();
    assert_eq!(delays, vec![200, 400, 600]);
    assert!(delays.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_press_then_release_returns_to_rest() {
    let mut app = app();
    for _ in 0..150 {
        app.advance_ms(16.0);
    }
    assert!(app.pointer_down("feature:0").unwrap());
    for _ in 0..60 {
        app.advance_ms(16.0);
    }
    let pressed = motion_of(&app.render(), "feature:0");
    assert!((pressed.scale - 0.95).abs() < 1e-3);
    assert_eq!(pressed.opacity, 1.0);

    app.pointer_cancel("feature:0").unwrap();
    for _ in 0..100 {
        app.advance_ms(16.0);
    }
    assert_eq!(motion_of(&app.render(), "feature:0"), MotionFrame::REST);
    assert_eq!(app.current_route(), Route::Home);
}

#[test]
fn test_release_without_press_does_not_activate() {
    let mut app = app();
    assert_eq!(app.pointer_up("feature:0").unwrap(), None);

    app.pointer_down("feature:0").unwrap();
    assert_eq!(app.pointer_up("feature:1").unwrap(), None);
    assert_eq!(app.current_route(), Route::Home);

    app.pointer_down("get-started").unwrap();
    app.pointer_cancel("get-started").unwrap();
    assert_eq!(app.pointer_up("get-started").unwrap(), None);
    assert_eq!(app.current_route(), Route::Home);
}

#[test]
fn test_disabled_press_changes_nothing() {
    let scheduler = AnimationScheduler::new();
    let mut button = Button::new(scheduler.handle(), "save", "Save", Action::Back);
    button.set_disabled(true);

    assert!(!button.press_in());
    for _ in 0..20 {
        scheduler.advance_ms(16.0);
    }
    assert_eq!(button.frame(), MotionFrame::REST);
    assert_eq!(button.action(), None);
}

#[test]
fn test_disabling_held_button_releases_it() {
    let scheduler = AnimationScheduler::new();
    let mut button = Button::new(scheduler.handle(), "save", "Save", Action::Back);
    button.press_in();
    for _ in 0..10 {
        scheduler.advance_ms(16.0);
    }
    assert!(button.frame().scale < 1.0);

    button.set_disabled(true);
    assert!(!button.is_pressed());
    for _ in 0..100 {
        scheduler.advance_ms(16.0);
    }
    assert_eq!(button.frame(), MotionFrame::REST);
}

#[test]
fn test_stub_actions_are_traced() {
    let (mut app, sink) = recorded_app();

    app.navigate_to("/content").unwrap();
    app.click("article:1").unwrap();
    app.click("search").unwrap();
    app.back();

    app.navigate_to("/profile").unwrap();
    app.click("edit-profile").unwrap();
    app.back();

    app.navigate_to("/settings").unwrap();
    app.click("setting:3").unwrap();
    app.click("setting:5").unwrap();
    app.click("setting:6").unwrap();
    app.click("sign-out").unwrap();

    assert_eq!(
        sink.actions(),
        vec![
            "Pressed: Advanced Animation Techniques",
            "Search pressed",
            "Edit profile pressed",
            "Privacy settings pressed",
            "Help pressed",
            "About pressed",
            "Sign out pressed",
        ]
    );
    assert_eq!(app.current_route(), Route::Settings);
}

#[test]
fn test_render_reports_screen_and_buttons() {
    let (app, sink) = recorded_app();
    let view = app.render();
    assert!(view.contains_text("Welcome to Your App"));
    assert_eq!(
        sink.events(),
        vec![
            TraceEvent::screen("HomeScreen"),
            TraceEvent::button("Get Started"),
        ]
    );
}

#[test]
fn test_every_screen_renders_its_content() {
    let cases = [
        (Route::Home, "Get Started"),
        (Route::Profile, "john.doe@example.com"),
        (Route::Content, "State Management Solutions"),
        (Route::Settings, "Version 1.0.0"),
    ];
    for (route, expected) in cases {
        let mut app = app();
        if route != Route::Home {
            app.push(route);
        }
        let view = app.render();
        assert!(view.contains_text(expected), "{route} missing {expected:?}");
    }
}

#[test]
fn test_unknown_element() {
    let mut app = app();
    let err = app.pointer_down("article:0").unwrap_err();
    assert!(matches!(
        err,
        AppError::UnknownElement { screen: "HomeScreen", ref key } if key == "article:0"
    ));
    assert!(app.navigate_to("/nowhere").is_err());
}
