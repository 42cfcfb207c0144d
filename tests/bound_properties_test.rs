// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use lucky_draw::draw::bounds::{clamp_bound, parse_bound, step_bound};
use lucky_draw::draw::{sample_in_bound, DrawState};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn sample_always_within_bound(max in 1u32..=u32::MAX, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..50 {
            let value = sample_in_bound(&mut rng, max);
            prop_assert!((1..=max).contains(&value));
        }
    }

    #[test]
    fn clamped_bound_is_at_least_one(value in any::<i64>()) {
        let bound = clamp_bound(value);
        prop_assert!(bound >= 1);
        if (1..=u32::MAX as i64).contains(&value) {
            prop_assert_eq!(bound as i64, value);
        }
    }

    #[test]
    fn non_positive_input_gives_one(value in i64::MIN..=0) {
        prop_assert_eq!(parse_bound(&value.to_string()).unwrap(), 1);
        let mut state = DrawState::new();
        state.set_table_max(value);
        prop_assert_eq!(state.table_max(), 1);
    }

    #[test]
    fn step_never_drops_below_one(start in 1u32..1000, delta in -2000i64..2000) {
        prop_assert!(step_bound(start, delta) >= 1);
    }

    #[test]
    fn letters_are_rejected(text in "[a-zA-Z]{1,8}") {
        prop_assert!(parse_bound(&text).is_err());
    }
}
