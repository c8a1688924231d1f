//! End-to-end behavior of a mounted accessory view driven through host channels.

use std::rc::Rc;

use keyboard_accessory::{
    AccessoryConfig, AccessoryView, AnimationType, DimensionsEvent, GestureEvent, Host,
    KeyboardEasing, KeyboardEvent, LayoutEvent, Platform, Pointer, RecordingAnimator,
    SafeAreaInsets, SafeAreaProvider, WindowSize, MIN_LAYOUT_ANIMATION_DURATION_MS,
};

struct Harness {
    host: Host,
    safe_area: SafeAreaProvider,
    animator: RecordingAnimator,
    view: AccessoryView,
}

fn mount(platform: Platform, config: AccessoryConfig) -> Harness {
    let host = Host::new(platform, WindowSize::new(390.0, 844.0));
    let safe_area = SafeAreaProvider::new(SafeAreaInsets::new(47.0, 34.0, 0.0, 0.0));
    let animator = RecordingAnimator::new();
    let view = AccessoryView::mount(&host, &safe_area, config, Rc::new(animator.clone()))
        .expect("valid config");
    Harness { host, safe_area, animator, view }
}

fn chat_config() -> AccessoryConfig {
    AccessoryConfig::default()
        .with_content_offset_keyboard_closed(20.0)
        .with_content_offset_keyboard_opened(20.0)
        .with_space_between_keyboard_and_accessory_view(10.0)
}

#[test]
fn translation_clears_keyboard_and_gap() {
    let h = mount(Platform::Ios, chat_config());

    h.host.keyboard_will_change_frame().emit(&KeyboardEvent::new(300.0));
    assert_eq!(h.view.offsets().translate_y, -310.0);

    h.host.keyboard_will_change_frame().emit(&KeyboardEvent::new(0.0));
    assert_eq!(h.view.offsets().translate_y, 0.0);
}

#[test]
fn translation_zero_regardless_of_prior_drag() {
    let h = mount(Platform::Ios, chat_config());

    h.host.gestures().emit(&GestureEvent::Grant(Pointer::at(0.0, 300.0)));
    h.host.gestures().emit(&GestureEvent::Move(Pointer::at(0.0, 420.0)));
    h.host.gestures().emit(&GestureEvent::Release(Pointer::at(0.0, 420.0)));

    assert_eq!(h.view.drag_state().position_y, 120.0);
    assert_eq!(h.view.offsets().translate_y, 0.0);
}

#[test]
fn content_padding_closed_and_open() {
    let h = mount(Platform::Ios, chat_config());
    h.view.on_panel_layout(&LayoutEvent { width: 390.0, height: 80.0 });

    assert_eq!(h.view.offsets().content_padding_bottom, 100.0);

    h.host.keyboard_will_change_frame().emit(&KeyboardEvent::new(300.0));
    assert_eq!(h.view.offsets().content_padding_bottom, 66.0);
}

#[test]
fn drag_sequence_holds_last_position() {
    let h = mount(Platform::Ios, chat_config());
    let gestures = h.host.gestures();

    gestures.emit(&GestureEvent::Grant(Pointer::at(20.0, 500.0)));
    gestures.emit(&GestureEvent::Move(Pointer::at(20.0, 515.0)));
    gestures.emit(&GestureEvent::Move(Pointer::at(20.0, 525.0)));
    gestures.emit(&GestureEvent::Release(Pointer::at(20.0, 525.0)));

    let state = h.view.drag_state();
    assert_eq!(state.position_y, 25.0);
    assert!(!state.active);

    gestures.emit(&GestureEvent::Move(Pointer::at(20.0, 600.0)));
    assert_eq!(h.view.drag_state().position_y, 25.0);
}

#[test]
fn event_without_timing_applies_instantly() {
    let h = mount(Platform::Ios, chat_config());

    h.host.keyboard_will_change_frame().emit(&KeyboardEvent::new(300.0));

    assert!(h.view.keyboard_state().visible);
    assert_eq!(h.animator.count(), 0);
}

#[test]
fn animated_event_floors_duration() {
    let h = mount(Platform::Ios, chat_config());

    h.host
        .keyboard_will_change_frame()
        .emit(&KeyboardEvent::animated(300.0, 1.0, KeyboardEasing::EaseInEaseOut));

    let configured = h.animator.configured();
    assert_eq!(configured.len(), 1);
    assert_eq!(configured[0].duration_ms, MIN_LAYOUT_ANIMATION_DURATION_MS);
    assert_eq!(configured[0].animation, AnimationType::EaseInEaseOut);
}

#[test]
fn easing_name_from_platform() {
    let h = mount(Platform::Ios, chat_config());

    let event = KeyboardEvent::new(300.0).with_easing_name("keyboard");
    let event = KeyboardEvent { duration: Some(250.0), ..event };
    h.host.keyboard_will_change_frame().emit(&event);

    assert_eq!(h.animator.configured()[0].animation, AnimationType::Keyboard);
}

#[test]
fn rotation_relayouts_without_touching_keyboard() {
    let h = mount(Platform::Ios, chat_config());
    h.host.keyboard_will_change_frame().emit(&KeyboardEvent::new(300.0));

    h.host.dimensions_change().emit(&DimensionsEvent { window: WindowSize::new(844.0, 390.0) });
    h.safe_area.set_insets(SafeAreaInsets::new(0.0, 21.0, 47.0, 47.0));

    assert_eq!(h.view.keyboard_state().height, 300.0);

    let frames = h.view.layout(60.0).expect("layout");
    assert_eq!(frames.root.width, 844.0);
    assert_eq!(frames.panel_content.x, 47.0);
    assert_eq!(frames.panel_content.width, 750.0);
}

#[test]
fn layout_converges_after_first_measurement() {
    let h = mount(Platform::Android, chat_config());

    let first = h.view.layout(80.0).expect("layout");
    assert_eq!(first.scrollable_padding_bottom, 20.0);

    let second = h.view.layout(80.0).expect("layout");
    assert_eq!(second.scrollable_padding_bottom, 100.0);
    assert_eq!(h.view.layout(80.0).expect("layout"), second);
}

#[test]
fn unmount_mid_animation_stops_everything() {
    let mut h = mount(Platform::Ios, chat_config());
    h.host
        .keyboard_will_change_frame()
        .emit(&KeyboardEvent::animated(300.0, 250.0, KeyboardEasing::Keyboard));

    h.view.unmount();

    h.host
        .keyboard_will_change_frame()
        .emit(&KeyboardEvent::animated(0.0, 250.0, KeyboardEasing::Keyboard));
    h.host.gestures().emit(&GestureEvent::Grant(Pointer::at(0.0, 0.0)));

    assert_eq!(h.view.keyboard_state().height, 300.0);
    assert!(!h.view.drag_state().active);
    assert_eq!(h.animator.count(), 1);
    assert!(h.host.active_channels().is_empty());
}

#[test]
fn config_from_toml_mounts() {
    let config = AccessoryConfig::from_toml_str(
        r#"
        content_offset_keyboard_closed = 20.0
        content_offset_keyboard_opened = 20.0
        space_between_keyboard_and_accessory_view = 10.0
        use_listeners_on_android = true
        "#,
    )
    .expect("config");
    let h = mount(Platform::Android, config);

    h.host.keyboard_did_show().emit(&KeyboardEvent::new(300.0));
    assert_eq!(h.view.offsets().translate_y, -310.0);
}
