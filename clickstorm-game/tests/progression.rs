//! End-to-end checks of the progression state machine: accrual, purchases,
//! skin unlocks, the cheat sequence and snapshot round-trips.

use clickstorm_game::cheat::{CheatSequenceDetector, KeyStroke, SECRET};
use clickstorm_game::skins::default_catalog;
use clickstorm_game::state::{BASE_AUTO_UNIT_COST, BASE_MULTIPLIER_COST};
use clickstorm_game::{Progress, SkinSelection, economy};

#[test]
fn click_adds_exactly_the_multiplier_across_magnitudes() {
    for multiplier in [1.0, 2.0, 64.0, 1024.0] {
        let mut progress = Progress {
            currency: 10.0,
            multiplier,
            ..Progress::default()
        };
        economy::click(&mut progress);
        assert!(
            (progress.currency - (10.0 + multiplier)).abs() < f64::EPSILON,
            "multiplier {multiplier} accrued wrong amount"
        );
    }
}

#[test]
fn denied_auto_unit_purchase_is_a_full_no_op() {
    let mut progress = Progress {
        currency: BASE_AUTO_UNIT_COST - 1.0,
        ..Progress::default()
    };
    assert!(!economy::buy_auto_unit(&mut progress));
    assert!((progress.currency - (BASE_AUTO_UNIT_COST - 1.0)).abs() < f64::EPSILON);
    assert_eq!(progress.auto_units, 0);
    assert!((progress.auto_unit_cost - BASE_AUTO_UNIT_COST).abs() < f64::EPSILON);
}

#[test]
fn auto_unit_purchase_applies_the_escalation_rule() {
    let mut progress = Progress {
        currency: BASE_AUTO_UNIT_COST,
        ..Progress::default()
    };
    assert!(economy::buy_auto_unit(&mut progress));
    assert_eq!(progress.auto_units, 1);
    assert!((progress.currency - 0.0).abs() < f64::EPSILON);
    assert!(
        (progress.auto_unit_cost - (BASE_AUTO_UNIT_COST * 1.5).floor()).abs() < f64::EPSILON
    );
}

#[test]
fn multiplier_purchase_doubles_rate_and_triples_cost() {
    let mut progress = Progress {
        currency: BASE_MULTIPLIER_COST + 5.0,
        ..Progress::default()
    };
    assert!(economy::buy_multiplier(&mut progress));
    assert!((progress.currency - 5.0).abs() < f64::EPSILON);
    assert!((progress.multiplier - 2.0).abs() < f64::EPSILON);
    assert!((progress.multiplier_cost - BASE_MULTIPLIER_COST * 3.0).abs() < f64::EPSILON);
}

#[test]
fn reward_skin_claim_credits_regardless_of_balance() {
    let mut progress = Progress::default();
    assert!((progress.currency - 0.0).abs() < f64::EPSILON);
    let outcome = economy::select_skin(&mut progress, default_catalog(), "antonsa");
    assert_eq!(outcome, SkinSelection::Claimed { reward: 100_000.0 });
    assert!((progress.currency - 100_000.0).abs() < f64::EPSILON);
    assert!(progress.is_unlocked("antonsa"));
}

#[test]
fn exact_cost_skin_unlock_leaves_zero_currency() {
    let mut progress = Progress {
        currency: 100_000.0,
        ..Progress::default()
    };
    let outcome = economy::select_skin(&mut progress, default_catalog(), "cr7");
    assert_eq!(outcome, SkinSelection::Purchased);
    assert!((progress.currency - 0.0).abs() < f64::EPSILON);
    assert!(progress.is_unlocked("cr7"));
}

#[test]
fn cheat_sequence_unlocks_exactly_once() {
    let mut progress = Progress::default();
    let mut detector = CheatSequenceDetector::default();

    let mut unlock_events = 0;
    for ch in SECRET.chars() {
        if detector.observe(KeyStroke::Char(ch)) && progress.unlock_cheat() {
            unlock_events += 1;
        }
    }
    assert!(progress.cheat_unlocked);
    assert_eq!(unlock_events, 1);

    // Typing it again matches again but the latch does not re-fire.
    for ch in SECRET.chars() {
        if detector.observe(KeyStroke::Char(ch)) && progress.unlock_cheat() {
            unlock_events += 1;
        }
    }
    assert_eq!(unlock_events, 1);
}

#[test]
fn modifier_key_interrupts_the_cheat_sequence() {
    let mut detector = CheatSequenceDetector::default();
    let mut chars = SECRET.chars();
    let last = chars.next_back().expect("secret is non-empty");
    for ch in chars {
        assert!(!detector.observe(KeyStroke::Char(ch)));
    }
    assert!(!detector.observe(KeyStroke::Other));
    assert!(!detector.observe(KeyStroke::Char(last)));
}

#[test]
fn snapshot_round_trip_preserves_every_field() {
    let mut progress = Progress {
        currency: 123_456.789,
        auto_units: 7,
        multiplier: 16.0,
        auto_unit_cost: 5_062_500.0,
        multiplier_cost: 810.0,
        player_name: Some("Benny".to_string()),
        cheat_unlocked: true,
        ..Progress::default()
    };
    progress.unlock_skin("messi");
    progress.set_active_skin("messi").unwrap();

    let text = serde_json::to_string(&progress).expect("serializes");
    let loaded: Progress = serde_json::from_str(&text).expect("parses");
    assert_eq!(loaded, progress);
}

#[test]
fn partial_snapshot_fills_missing_fields_with_defaults() {
    let loaded: Progress =
        serde_json::from_str(r#"{"currency": 42.0, "auto_units": 2}"#).expect("parses");
    assert!((loaded.currency - 42.0).abs() < f64::EPSILON);
    assert_eq!(loaded.auto_units, 2);
    assert!((loaded.multiplier - 1.0).abs() < f64::EPSILON);
    assert!((loaded.auto_unit_cost - BASE_AUTO_UNIT_COST).abs() < f64::EPSILON);
    assert!((loaded.multiplier_cost - BASE_MULTIPLIER_COST).abs() < f64::EPSILON);
    assert_eq!(loaded.player_name, None);
    assert_eq!(loaded.active_skin, clickstorm_game::DEFAULT_SKIN_ID);
    assert_eq!(
        loaded.unlocked_skins,
        vec![clickstorm_game::DEFAULT_SKIN_ID.to_string()]
    );
    assert!(!loaded.cheat_unlocked);
}

#[test]
fn persisted_escalated_cost_is_authoritative_over_unit_count() {
    // A snapshot whose cost does not match 1.5^auto_units must load as-is;
    // recomputing would change the game balance.
    let loaded: Progress = serde_json::from_str(
        r#"{"currency": 0.0, "auto_units": 10, "auto_unit_cost": 2000000.0}"#,
    )
    .expect("parses");
    assert_eq!(loaded.auto_units, 10);
    assert!((loaded.auto_unit_cost - 2_000_000.0).abs() < f64::EPSILON);
}

#[test]
fn corrupted_field_does_not_discard_healthy_fields() {
    // One wrong-typed field falls back to its default; everything else in
    // the snapshot still loads.
    let loaded: Progress =
        serde_json::from_str(r#"{"currency":"oops","auto_units":5,"player_name":"Benny"}"#)
            .expect("parses");
    assert!((loaded.currency - 0.0).abs() < f64::EPSILON);
    assert_eq!(loaded.auto_units, 5);
    assert_eq!(loaded.player_name.as_deref(), Some("Benny"));
    assert!((loaded.auto_unit_cost - BASE_AUTO_UNIT_COST).abs() < f64::EPSILON);
}

#[test]
fn empty_snapshot_object_loads_pure_defaults() {
    let loaded: Progress = serde_json::from_str("{}").expect("parses");
    assert_eq!(loaded, Progress::default());
}
