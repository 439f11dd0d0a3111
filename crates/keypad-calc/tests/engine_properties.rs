//! Behavioral properties of the calculator engine
//!
//! Fixed scenarios first, then property tests over random keypad sequences.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use keypad_calc::core::format::{format_number, is_display_literal, parse_number};
use keypad_calc::keypad::KeypadAction;
use keypad_calc::{CalculatorEngine, CalculatorState, Mode, Operator};
use proptest::prelude::*;

fn engine_after(actions: &[KeypadAction]) -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    for action in actions {
        engine.press(*action);
    }
    engine
}

fn type_number(engine: &mut CalculatorEngine, text: &str) {
    for key in text.chars() {
        engine.digit_pressed(key);
    }
}

// ===== Fixed scenarios =====

#[test]
fn digits_concatenate_with_leading_zero_suppressed() {
    let mut engine = CalculatorEngine::new();
    type_number(&mut engine, "053");
    assert_eq!(engine.display(), "53");
}

#[test]
fn clear_returns_to_initial_state_from_anywhere() {
    let mut engine = CalculatorEngine::new();
    type_number(&mut engine, "12");
    engine.operator_pressed(Operator::Mul);
    type_number(&mut engine, "3");
    engine.clear_pressed();
    assert_eq!(engine.state(), &CalculatorState::initial());
    assert_eq!(engine.display(), "0");
    assert_eq!(engine.pending_operator(), None);
    assert_eq!(engine.first_operand(), None);
}

#[test]
fn seven_plus_three_is_ten() {
    let mut engine = CalculatorEngine::new();
    type_number(&mut engine, "7");
    engine.operator_pressed(Operator::Add);
    type_number(&mut engine, "3");
    assert_eq!(engine.equals_pressed(), "10");
}

#[test]
fn chained_operators_resolve_left_to_right() {
    let mut engine = CalculatorEngine::new();
    type_number(&mut engine, "2");
    engine.operator_pressed(Operator::Add);
    type_number(&mut engine, "3");
    assert_eq!(engine.operator_pressed(Operator::Mul), "5");
    assert_eq!(engine.first_operand(), Some(5.0));
    type_number(&mut engine, "4");
    assert_eq!(engine.equals_pressed(), "20");
}

#[test]
fn percent_of_fifty() {
    let mut engine = CalculatorEngine::new();
    type_number(&mut engine, "50");
    assert_eq!(engine.percent_pressed(), "0.5");
}

#[test]
fn ten_divided_by_zero_is_an_error_until_cleared() {
    let mut engine = CalculatorEngine::new();
    type_number(&mut engine, "10");
    engine.operator_pressed(Operator::Div);
    type_number(&mut engine, "0");
    assert_eq!(engine.equals_pressed(), "Error");
    assert_eq!(engine.mode(), Mode::ClearRequired);
    assert_eq!(engine.digit_pressed('1'), "Error");
    assert_eq!(engine.clear_pressed(), "0");
}

#[test]
fn zero_divided_by_zero_is_the_same_error() {
    let mut engine = CalculatorEngine::new();
    engine.operator_pressed(Operator::Div);
    type_number(&mut engine, "0");
    assert_eq!(engine.equals_pressed(), "Error");
}

// ===== Property tests =====

fn action_strategy() -> impl Strategy<Value = KeypadAction> {
    prop_oneof![
        4 => (0u8..=9).prop_map(KeypadAction::Digit),
        1 => Just(KeypadAction::Decimal),
        2 => prop::sample::select(Operator::ALL.to_vec()).prop_map(KeypadAction::Operator),
        1 => Just(KeypadAction::Equals),
        1 => Just(KeypadAction::Clear),
        1 => Just(KeypadAction::SignFlip),
        1 => Just(KeypadAction::Percent),
    ]
}

fn arithmetic_op() -> impl Strategy<Value = Operator> {
    prop::sample::select(vec![Operator::Add, Operator::Sub, Operator::Mul])
}

proptest! {
    #[test]
    fn display_is_always_a_literal_or_the_error_text(
        actions in prop::collection::vec(action_strategy(), 0..60)
    ) {
        let mut engine = CalculatorEngine::new();
        for action in actions {
            let display = engine.press(action).to_string();
            if engine.is_error() {
                prop_assert_eq!(display, "Error");
                prop_assert_eq!(engine.pending_operator(), None);
            } else {
                prop_assert!(is_display_literal(&display), "{}", display);
                prop_assert!(display.matches('.').count() <= 1);
                prop_assert!(parse_number(&display).is_ok());
            }
            prop_assert_eq!(
                engine.pending_operator().is_some(),
                engine.first_operand().is_some()
            );
        }
    }

    #[test]
    fn clear_always_yields_initial_state(
        actions in prop::collection::vec(action_strategy(), 0..40)
    ) {
        let mut engine = engine_after(&actions);
        prop_assert_eq!(engine.clear_pressed(), "0");
        prop_assert_eq!(engine.state(), &CalculatorState::initial());
    }

    #[test]
    fn sign_flip_is_an_involution(digits in "[1-9][0-9]{0,8}(\\.[0-9]{1,6})?") {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &digits);
        let before = parse_number(engine.display()).unwrap();
        engine.sign_flip_pressed();
        prop_assert_eq!(parse_number(engine.display()).unwrap(), -before);
        engine.sign_flip_pressed();
        prop_assert_eq!(parse_number(engine.display()).unwrap(), before);
    }

    #[test]
    fn typed_digits_concatenate(digits in "[1-9][0-9]{0,14}") {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &digits);
        prop_assert_eq!(engine.display(), digits.as_str());
    }

    #[test]
    fn chain_matches_left_to_right_arithmetic(
        a in 0u32..1000,
        b in 0u32..1000,
        c in 0u32..1000,
        op1 in arithmetic_op(),
        op2 in arithmetic_op(),
    ) {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &a.to_string());
        engine.operator_pressed(op1);
        type_number(&mut engine, &b.to_string());
        engine.operator_pressed(op2);
        type_number(&mut engine, &c.to_string());
        engine.equals_pressed();

        let first = op1.apply(f64::from(a), f64::from(b)).unwrap();
        let expected = op2.apply(first, f64::from(c)).unwrap();
        prop_assert_eq!(engine.display(), format_number(expected, 10).unwrap());
    }

    #[test]
    fn every_resolved_operation_is_recorded(
        pairs in prop::collection::vec((1u32..100, 1u32..100), 1..10)
    ) {
        let mut engine = CalculatorEngine::new();
        for (a, b) in &pairs {
            engine.clear_pressed();
            type_number(&mut engine, &a.to_string());
            engine.operator_pressed(Operator::Add);
            type_number(&mut engine, &b.to_string());
            engine.equals_pressed();
        }
        prop_assert_eq!(engine.history().len(), pairs.len());
        let (a, b) = pairs[pairs.len() - 1];
        prop_assert_eq!(engine.history().last().unwrap().result, f64::from(a + b));
    }
}
