//! Wager pre-fill through the public hook API.

use smartspin::config::AppConfig;
use smartspin::host::{MenuKind, SpinContext, SpinWheelHook};
use smartspin::strategy::WagerCalculator;

use crate::mock_menu::MockMenu;

fn wheel_context(luck_level: i32, bet_on_green: bool, score: i32) -> SpinContext {
    SpinContext {
        festival_id: Some("fall16".to_string()),
        last_question_key: Some("wheelBet".to_string()),
        menu: MenuKind::NumberSelection,
        luck_level,
        bet_on_green,
        score,
    }
}

fn hook_from_config(toml: &str) -> SpinWheelHook {
    let cfg = AppConfig::parse(toml).unwrap();
    SpinWheelHook::new(cfg.spin_trigger(), WagerCalculator::new(cfg.wager_config()))
}

#[test]
fn test_green_bet_prefilled() {
    let hook = SpinWheelHook::default();
    let mut menu = MockMenu::showing(0);

    let rec = hook.on_menu_changed(&wheel_context(0, true, 1000), &mut menu).unwrap();

    assert_eq!(rec.wager, 466);
    assert_eq!(menu.current_value, 466);
    assert_eq!(menu.text, "466");
    assert_eq!(menu.writes, 2);
}

#[test]
fn test_unlucky_orange_bet_prefills_zero() {
    let hook = SpinWheelHook::default();
    let mut menu = MockMenu::showing(100);

    let rec = hook.on_menu_changed(&wheel_context(0, false, 1000), &mut menu).unwrap();

    assert!(rec.is_no_bet());
    assert_eq!(menu.current_value, 0);
    assert_eq!(menu.text, "0");
}

#[test]
fn test_ceiling_caps_prefill() {
    let hook = SpinWheelHook::default();
    let mut menu = MockMenu::showing(0);

    let rec = hook.on_menu_changed(&wheel_context(15, true, 9990), &mut menu).unwrap();

    assert_eq!(rec.raw_wager, 9990);
    assert_eq!(menu.current_value, 9);
    assert_eq!(menu.text, "9");
}

#[test]
fn test_outside_festival_untouched() {
    let hook = SpinWheelHook::default();
    let mut menu = MockMenu::showing(42);
    let mut ctx = wheel_context(15, true, 500);
    ctx.festival_id = None;

    assert!(hook.on_menu_changed(&ctx, &mut menu).is_none());
    assert_eq!(menu.current_value, 42);
    assert_eq!(menu.text, "42");
    assert_eq!(menu.writes, 0);
}

#[test]
fn test_other_menu_untouched() {
    let hook = SpinWheelHook::default();
    let mut menu = MockMenu::showing(42);
    let mut ctx = wheel_context(15, true, 500);
    ctx.menu = MenuKind::Other;

    assert!(hook.on_menu_changed(&ctx, &mut menu).is_none());
    assert_eq!(menu.writes, 0);
}

#[test]
fn test_menu_error_does_not_escape() {
    let hook = SpinWheelHook::default();
    let mut menu = MockMenu::showing(42);
    menu.set_error("field not found");

    assert!(hook.on_menu_changed(&wheel_context(15, true, 500), &mut menu).is_none());
    assert_eq!(menu.current_value, 42);
}

#[test]
fn test_configured_ceiling_and_trigger() {
    let hook = hook_from_config(
        "[wager]\nscore_ceiling = 1200\n\n[trigger]\nfestival_id = \"fall16\"\nquestion_key = \"spinBet\"\n",
    );
    let mut menu = MockMenu::showing(0);

    // Default question key no longer matches.
    assert!(hook.on_menu_changed(&wheel_context(15, true, 1000), &mut menu).is_none());

    let mut ctx = wheel_context(15, true, 1000);
    ctx.last_question_key = Some("spinBet".to_string());
    let rec = hook.on_menu_changed(&ctx, &mut menu).unwrap();
    assert_eq!(rec.max_winnable, 200);
    assert_eq!(menu.current_value, 200);
}

#[test]
fn test_repeated_spins_never_exceed_ceiling() {
    let hook = SpinWheelHook::default();
    let ceiling = hook.calculator().config().score_ceiling;
    let mut score = 100;

    // Luck 15 on green always wins; the score should climb to the ceiling and stop.
    for _ in 0..20 {
        let mut menu = MockMenu::showing(0);
        let rec = hook.on_menu_changed(&wheel_context(15, true, score), &mut menu).unwrap();
        score += rec.wager;
        assert!(score <= ceiling);
    }
    assert_eq!(score, ceiling);
}

#[test]
fn test_whole_token_wager_shown_exactly() {
    let hook = SpinWheelHook::default();
    let mut menu = MockMenu::showing(0);

    // 15 × 7/15 is exactly 7 tokens.
    let rec = hook.on_menu_changed(&wheel_context(0, true, 15), &mut menu).unwrap();

    assert_eq!(rec.wager, 7);
    assert_eq!(menu.text, "7");
}
