//! Tests scientifiques (campagne) : propriétés attendues du pipeline complet.
//!
//! - précédence, parenthèses, moins unaire, décimaux
//! - fautes : division par zéro, parenthèses, point initial
//! - commutativité de +, non-commutativité de -
//! - idempotence (aucun état caché entre deux appels)
//! - aller-retour : la RPN produite est consommée entièrement par l’évaluateur

use std::time::{Duration, Instant};

use super::erreur::CalcError;
use super::jetons::{format_tokens, parse_rpn};
use super::postfixe::eval_rpn;
use super::rpn::{retirer_espaces, to_rpn};
use super::{eval_expression, evaluate};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-12 * attendu.abs().max(1.0),
        "expr={expr:?} v={v} attendu={attendu}"
    );
}

fn assert_err(expr: &str, attendu: CalcError) {
    assert_eq!(evaluate(expr), Err(attendu), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique de base ------------------------ */

#[test]
fn sci_entiers() {
    assert_val("10 + 30", 40.0);
    assert_val("36 / 6", 6.0);
    assert_val("4 * 25", 100.0);
}

#[test]
fn sci_decimaux() {
    assert_val("2.5 + 40", 42.5);
    assert_val("15.5 / 5", 3.1);
    assert_val("2.0 * 3.0", 6.0);
    assert_val("7.5 * 0", 0.0);
    assert_val("5 * 0", 0.0);
}

#[test]
fn sci_precedence() {
    assert_val("3 + 3 * 3", 12.0);
    assert_val("4 - 2 * 3", -2.0);
    assert_val("6 + 6 / 2", 9.0);
    assert_val("8 - 4 / 2", 6.0);
}

#[test]
fn sci_associativite_gauche() {
    assert_val("10 - 4 - 3", 3.0);
    assert_val("64 / 4 / 2", 8.0);
    assert_val("8 / 4 * 2", 4.0);
}

#[test]
fn sci_parentheses() {
    assert_val("3 * ( 2 + 5 )", 21.0);
    assert_val("45 / ( 5 + 5 )", 4.5);
    assert_val("((((7))))", 7.0);
    assert_val("(1 + 2) * (3 + 4) / (2 - 9)", -3.0);
}

#[test]
fn sci_moins_unaire() {
    assert_val("- 5 + 30", 25.0);
    assert_val("-10 - 20", -30.0);
    assert_val("-2.5 - 20.5", -23.0);
    assert_val("4 * ( - 25 )", -100.0);
    assert_val("4 * -25", -100.0);
    assert_val("2 - -3", 5.0);
    assert_val("- - 5", 5.0);
    assert_val("-(2 + 3) * 2", -10.0);
    // le moins unaire lie plus fort que * et /
    assert_val("2 / -2 * 3", -3.0);
    assert_val("-2 * 3 + 1", -5.0);
}

/* ------------------------ Fautes ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_err("15 / 0", CalcError::DivisionByZero);
    assert_err("15.5 / 0", CalcError::DivisionByZero);
    assert_err("1 / (3 - 3)", CalcError::DivisionByZero);
    assert_err("1 / -0", CalcError::DivisionByZero);
}

#[test]
fn sci_parentheses_non_appariees() {
    for expr in [
        "3 + ( ( 12 / 4",
        "3 + ( ( 12 / 4 )",
        "3 + 12 / 4 ) )",
        "3 + ( 12 / 4 ) )",
        ")1(",
    ] {
        assert_err(expr, CalcError::UnmatchedParentheses);
    }
}

#[test]
fn sci_point_initial_refuse() {
    assert_err(
        ".75 + 2000",
        CalcError::InvalidCharacter {
            caractere: '.',
            position: 0,
        },
    );
}

#[test]
fn sci_caracteres_invalides() {
    // la position est comptée dans l’expression sans espaces ("3+a")
    assert_err(
        "3 + a",
        CalcError::InvalidCharacter {
            caractere: 'a',
            position: 2,
        },
    );
    assert!(matches!(
        evaluate("3 + * 4"),
        Err(CalcError::InvalidCharacter { caractere: '*', .. })
    ));
    assert!(matches!(
        evaluate("2 ^ 3"),
        Err(CalcError::InvalidCharacter { caractere: '^', .. })
    ));
}

#[test]
fn sci_operandes_manquants() {
    assert_err("3 +", CalcError::InsufficientOperands { operateur: '+' });
    assert_err("(4 * 2) /", CalcError::InsufficientOperands { operateur: '/' });
    assert_err("", CalcError::MalformedExpression { restants: 0 });
}

/* ------------------------ Propriétés ------------------------ */

#[test]
fn sci_commutativite_addition() {
    for (a, b) in [(0, 0), (1, 2), (7, 35), (120, 3), (999, 1)] {
        assert_eq!(eval_ok(&format!("{a} + {b}")), eval_ok(&format!("{b} + {a}")));
    }
}

#[test]
fn sci_soustraction_sensible_a_l_ordre() {
    for (a, b) in [(1, 2), (7, 35), (120, 3)] {
        assert_ne!(eval_ok(&format!("{a} - {b}")), eval_ok(&format!("{b} - {a}")));
    }
}

#[test]
fn sci_idempotence() {
    for expr in ["3 + 3 * 3", "-(1.5 - 4) / 2", "45 / ( 5 + 5 )"] {
        let a = eval_ok(expr);
        let b = eval_ok(expr);
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
    // une faute n’abîme pas l’appel suivant
    assert!(evaluate("1 / 0").is_err());
    assert_val("1 / 4", 0.25);
}

#[test]
fn sci_aller_retour_rpn() {
    for expr in [
        "3 + 3 * 3",
        "-10 - 20",
        "4 * ( - 25 )",
        "(1 + 2) * (3 + 4) / (2 - 9)",
        "2.25 * -(8 - 0.5)",
    ] {
        let s = retirer_espaces(expr);
        let rpn = to_rpn(&s, None).unwrap();
        let direct = eval_rpn(&rpn, None).unwrap();

        // la RPN textuelle se relit à l’identique
        let relu = parse_rpn(&format_tokens(&rpn)).unwrap();
        assert_eq!(relu, rpn, "expr={expr:?}");
        assert_eq!(eval_rpn(&relu, None), Ok(direct));
    }
}

#[test]
fn sci_capacite_bornee() {
    assert!(eval_expression("1 + 2 * 3", Some(3)).is_ok());
    assert!(matches!(
        eval_expression("((((((1))))))", Some(4)),
        Err(CalcError::Stack(_))
    ));
}

/* ------------------------ Stress borné ------------------------ */

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let expr = vec!["1"; 5000].join(" + ");
    budget(t0, max);
    assert_val(&expr, 5000.0);

    let imbrique = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    assert_val(&imbrique, 1.0);
    budget(t0, max);
}
