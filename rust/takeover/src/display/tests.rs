use super::{DISPLAY_TIMEOUT_FRAMES, DISPLAY_TICK_FRAMES, DisplayFocus};
use crate::Change;

fn change(value: f32) -> Change<char> {
    Change { param: 'x', value }
}

#[test]
fn starts_inactive() {
    let display = DisplayFocus::<char>::default();
    assert!(!display.is_active());
    assert_eq!(display.active(), None);
}

#[test]
fn shows_truncated_value() {
    let mut display = DisplayFocus::default();
    display.activate(change(632.9));
    assert_eq!(display.active(), Some(('x', 632)));
    display.activate(change(-12.7));
    assert_eq!(display.active(), Some(('x', -12)));
}

#[test]
fn times_out_after_default_frames() {
    let mut display = DisplayFocus::default();
    display.activate(change(1.0));
    let ticks = DISPLAY_TIMEOUT_FRAMES / DISPLAY_TICK_FRAMES;
    for _ in 0..ticks - 1 {
        display.tick();
        assert!(display.is_active());
    }
    display.tick();
    assert!(!display.is_active());
    assert_eq!(display.active(), None);
}

#[test]
fn activity_restarts_countdown() {
    let mut display = DisplayFocus::new(256, 128);
    display.activate(change(1.0));
    display.tick();
    display.activate(change(2.0));
    display.tick();
    assert_eq!(display.active(), Some(('x', 2)));
    display.tick();
    assert!(!display.is_active());
}

#[test]
fn ticking_inactive_display_is_harmless() {
    let mut display = DisplayFocus::<char>::new(256, 128);
    for _ in 0..10 {
        display.tick();
    }
    assert!(!display.is_active());
}
