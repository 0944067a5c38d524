//! Property tests for the color state.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wish_maker::{Channel, ColorEvent, ColorState};

fn channel() -> impl Strategy<Value = Channel> {
    prop_oneof![Just(Channel::Red), Just(Channel::Green), Just(Channel::Blue)]
}

fn in_unit_range(state: &ColorState) -> bool {
    Channel::ALL
        .iter()
        .all(|&c| (0.0..=1.0).contains(&state.channel(c)))
}

proptest! {
    #[test]
    fn channels_stay_in_range(
        events in prop::collection::vec((channel(), -10.0..10.0f64), 0..32),
    ) {
        let mut state = ColorState::default();
        for (c, v) in events {
            state.set_channel(c, v);
            prop_assert!(in_unit_range(&state));
        }
    }

    #[test]
    fn in_range_values_are_stored_exactly(c in channel(), v in 0.0..=1.0f64) {
        let mut state = ColorState::default();
        state.set_channel(c, v);
        prop_assert_eq!(state.channel(c), v);
    }

    #[test]
    fn bad_hex_never_changes_state(seed in any::<u64>(), raw in "[^0-9A-Fa-f]{0,8}") {
        let mut state = ColorState::default();
        state.randomize_with(&mut StdRng::seed_from_u64(seed));
        let before = state;
        prop_assert!(state.handle(ColorEvent::ParseHex(raw)).is_err());
        prop_assert_eq!(state, before);
    }

    #[test]
    fn randomize_stays_in_range(seed in any::<u64>()) {
        let mut state = ColorState::default();
        let color = state.randomize_with(&mut StdRng::seed_from_u64(seed));
        prop_assert!(in_unit_range(&state));
        prop_assert_eq!(color.a(), 1.0);
    }
}

#[test]
fn randomize_covers_the_range() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut state = ColorState::default();
    let mut lo = [1.0f64; 3];
    let mut hi = [0.0f64; 3];
    let mut buckets = [[0u32; 10]; 3];

    for _ in 0..2000 {
        state.randomize_with(&mut rng);
        for (i, c) in Channel::ALL.into_iter().enumerate() {
            let v = state.channel(c);
            lo[i] = lo[i].min(v);
            hi[i] = hi[i].max(v);
            buckets[i][((v * 10.0) as usize).min(9)] += 1;
        }
    }

    for i in 0..3 {
        assert!(lo[i] < 0.01, "channel {i} min {}", lo[i]);
        assert!(hi[i] > 0.99, "channel {i} max {}", hi[i]);
        assert!(buckets[i].iter().all(|&n| n > 100), "channel {i} buckets {:?}", buckets[i]);
    }
}

#[test]
fn slider_scenario() {
    let mut state = ColorState::default();
    state.set_channel(Channel::Red, 0.5);
    state.set_channel(Channel::Green, 0.25);
    state.set_channel(Channel::Blue, 1.0);
    let c = state.current_color();
    assert_eq!((c.r(), c.g(), c.b(), c.a()), (0.5, 0.25, 1.0, 1.0));
}
