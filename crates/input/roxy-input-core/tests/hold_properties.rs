use roxy_input_core::{
    classify, Button, ButtonEvent, ButtonTracker, HoldPolicy, InputManager, RawButtonFrame,
};

/// Press once, hold for `held` more frames, release. Returns per-frame
/// events and counts.
fn press_hold_release(
    policy: &HoldPolicy,
    button: Button,
    held: u32,
) -> Vec<(Option<ButtonEvent>, u32)> {
    let mut tracker = ButtonTracker::new();
    let mut out = Vec::new();
    let mut step = |frame: RawButtonFrame| {
        let event = tracker.process(button, &frame, policy).map(|s| s.event);
        out.push((event, tracker.hold_count(button)));
    };
    step(RawButtonFrame::idle().with_pressed(button));
    for _ in 0..held {
        step(RawButtonFrame::idle().with_held(button));
    }
    step(RawButtonFrame::idle().with_released(button));
    out
}

fn expected_event(count: u32, policy: &HoldPolicy) -> Option<ButtonEvent> {
    if count == policy.custom_hold_threshold {
        Some(ButtonEvent::CustomHeld)
    } else if count >= policy.continuous_hold_buffer {
        Some(ButtonEvent::PressedContinuously)
    } else {
        None
    }
}

#[test]
fn press_hold_release_sequences() {
    let policies = [
        HoldPolicy::default(),
        HoldPolicy::new(3, 5).unwrap(),
        HoldPolicy::new(1, 1).unwrap(),
        HoldPolicy::new(6, 2).unwrap(),
    ];
    for policy in &policies {
        for held in 0..30 {
            let run = press_hold_release(policy, Button::B, held);
            assert_eq!(run.len() as u32, held + 2);
            assert_eq!(run[0], (Some(ButtonEvent::Pressed), 1));
            for (i, (event, count)) in run[1..=held as usize].iter().enumerate() {
                let expected_count = i as u32 + 2;
                assert_eq!(*count, expected_count, "{policy:?} held={held}");
                assert_eq!(*event, expected_event(expected_count, policy));
            }
            assert_eq!(run[run.len() - 1], (Some(ButtonEvent::Released), 0));

            let custom = run
                .iter()
                .filter(|(e, _)| *e == Some(ButtonEvent::CustomHeld))
                .count();
            // Counts reached while held run from 2 to held + 1.
            let reached = policy.custom_hold_threshold >= 2
                && policy.custom_hold_threshold <= held + 1;
            assert_eq!(custom, usize::from(reached), "{policy:?} held={held}");
        }
    }
}

#[test]
fn default_policy_long_hold() {
    let policy = HoldPolicy::default();
    let run = press_hold_release(&policy, Button::Up, 25);
    let events: Vec<_> = run.iter().map(|(e, _)| *e).collect();
    assert_eq!(events[1], None);
    assert_eq!(events[2], Some(ButtonEvent::PressedContinuously));
    assert_eq!(events[19], Some(ButtonEvent::CustomHeld));
    assert_eq!(run[19].1, 20);
    assert_eq!(events[20], Some(ButtonEvent::PressedContinuously));
    assert_eq!(events[26], Some(ButtonEvent::Released));
}

#[test]
fn release_always_resets() {
    let frame = RawButtonFrame::idle().with_released(Button::A);
    for prev in (0..200).chain([u32::MAX - 1, u32::MAX]) {
        let out = classify(Button::A, &frame, prev, &HoldPolicy::default());
        assert_eq!(out.hold_count, 0);
        assert_eq!(out.event, Some(ButtonEvent::Released));
    }
}

#[test]
fn idle_frames_leave_counts_alone() {
    let policy = HoldPolicy::default();
    let mut tracker = ButtonTracker::new();
    tracker.process(Button::Down, &RawButtonFrame::idle().with_pressed(Button::Down), &policy);
    for _ in 0..4 {
        tracker.process(Button::Down, &RawButtonFrame::idle().with_held(Button::Down), &policy);
    }
    for _ in 0..10 {
        assert!(tracker
            .process(Button::Down, &RawButtonFrame::idle(), &policy)
            .is_none());
        assert_eq!(tracker.hold_count(Button::Down), 5);
    }
}

#[test]
fn full_frames_track_buttons_independently() {
    let mut manager = InputManager::with_policy(HoldPolicy::new(2, 3).unwrap()).unwrap();

    // A pressed, then held alongside a fresh press of right.
    let signals = manager.process_frame(&RawButtonFrame::from_bits(32, 32, 0));
    assert_eq!(signals.len(), 1);
    assert_eq!(signals[0].callback_name(), "AButtonPressed");

    let signals = manager.process_frame(&RawButtonFrame::from_bits(32 | 2, 2, 0));
    let names: Vec<_> = signals.iter().map(|s| s.callback_name()).collect();
    assert_eq!(names, ["AButtonPressedContinuously", "rightButtonPressed"]);

    let signals = manager.process_frame(&RawButtonFrame::from_bits(2, 0, 32));
    let names: Vec<_> = signals.iter().map(|s| s.callback_name()).collect();
    assert_eq!(names, ["AButtonReleased", "rightButtonPressedContinuously"]);

    let signals = manager.process_frame(&RawButtonFrame::from_bits(2, 0, 0));
    let names: Vec<_> = signals.iter().map(|s| s.callback_name()).collect();
    assert_eq!(names, ["rightButtonCustomHeld"]);

    assert_eq!(manager.hold_count(Button::A), 0);
    assert_eq!(manager.hold_count(Button::Right), 3);
    for button in [Button::B, Button::Up, Button::Down, Button::Left] {
        assert_eq!(manager.hold_count(button), 0);
    }
}
