//! Tests scientifiques (campagne) : propriétés observables du noyau.
//!
//! Notes importantes (aligné avec le comportement actuel) :
//! - '^' est associatif à GAUCHE : "2^3^2" = (2^3)^2 = 64, pas 512.
//! - Le moins unaire injecte un 0 qui passe ensuite par la réduction normale :
//!   "2*-3" devient "2 0 * 3 -" soit -3.
//! - Les caractères hors alphabet sont sautés sans erreur.
//! - Stress : profondeur bornée, budget temps court.

use std::time::{Duration, Instant};

use approx::assert_abs_diff_eq;

use super::{calculate, EvaluationError};

const TOLERANCE: f64 = 1e-9;

fn val(expr: &str) -> f64 {
    calculate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_val(expr: &str, attendu: f64) {
    let v = val(expr);
    assert!(
        (v - attendu).abs() <= TOLERANCE,
        "expr={expr:?} obtenu={v} attendu={attendu}"
    );
}

fn assert_err(expr: &str, attendue: EvaluationError) {
    assert_eq!(calculate(expr), Err(attendue), "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence et associativité ------------------------ */

#[test]
fn sci_precedence_standard() {
    assert_eq!(val("2 + 3 * 4"), 14.0);
    assert_eq!(val("(2 + 3) * 4"), 20.0);
    assert_eq!(val("10 / 2 - 3"), 2.0);
    assert_eq!(val("2 * 3 ^ 2"), 18.0);
    assert_eq!(val("100 / 10 / 5"), 2.0);
    assert_eq!(val("10 - 4 - 3"), 3.0);
}

#[test]
fn sci_puissance_associative_a_gauche() {
    assert_eq!(val("2^3^2"), 64.0);
    assert_ne!(val("2^3^2"), 512.0);
    // la forme droite reste accessible avec des parenthèses
    assert_eq!(val("2^(3^2)"), 512.0);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_eq!(val("-5 + 2"), -3.0);
    assert_eq!(val("(-5 + 2) * 3"), -9.0);
    assert_eq!(val("-(-4)"), 4.0);
    assert_eq!(val("2 * (-3)"), -6.0);
}

#[test]
fn sci_moins_unaire_apres_operateur() {
    // 0 injecté puis réduit avec '*' : (2*0) - 3
    assert_eq!(val("2*-3"), -3.0);
    // 2^0 - 1
    assert_eq!(val("2^-1"), 0.0);
    // (0-0) - 2
    assert_eq!(val("--2"), -2.0);
}

/* ------------------------ Fonctions et constantes ------------------------ */

#[test]
fn sci_fonctions_et_constantes() {
    assert_val("sin(pi/2)", 1.0);
    assert_val("cos(pi)", -1.0);
    assert_val("tan(0)", 0.0);
    assert_val("asin(1) * 2", std::f64::consts::PI);
    assert_val("arccos(0)", std::f64::consts::FRAC_PI_2);
    assert_val("sinh(0) + cosh(0) + tanh(0)", 1.0);
    assert_val("log(1000)", 3.0);
    assert_val("ln(e)", 1.0);
    assert_val("exp(1)", std::f64::consts::E);
    assert_val("sqrt(2)^2", 2.0);
    assert_val("abs(-7.5)", 7.5);
}

#[test]
fn sci_compositions() {
    assert_val("sqrt(abs(-16)) * 2", 8.0);
    assert_val("cos(sin(0))", 1.0);
    assert_val("ln(exp(3)) + log(10)", 4.0);
    assert_abs_diff_eq!(val("sin(pi/6)^2 + cos(pi/6)^2"), 1.0, epsilon = TOLERANCE);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_division_par_zero_jamais_inf() {
    assert_err("10 / 0", EvaluationError::DivisionByZero);
    assert_err("1 / (2 - 2)", EvaluationError::DivisionByZero);
    assert_err("0 / 0", EvaluationError::DivisionByZero);
    assert_err("1 / sin(0)", EvaluationError::DivisionByZero);
}

#[test]
fn sci_parentheses_desequilibrees() {
    assert_err("(2 + 3", EvaluationError::UnbalancedParentheses);
    assert_err("2 + 3)", EvaluationError::UnbalancedParentheses);
    assert_err(")(", EvaluationError::UnbalancedParentheses);
    assert_err("sin(pi", EvaluationError::UnbalancedParentheses);
}

#[test]
fn sci_identifiants_inconnus() {
    assert_err("foo(1)", EvaluationError::UnknownFunction("foo".into()));
    assert_err("2 + xyz", EvaluationError::UnknownIdentifier("xyz".into()));
    // sensible à la casse
    assert_err("PI", EvaluationError::UnknownIdentifier("PI".into()));
    assert_err("Sin(1)", EvaluationError::UnknownFunction("Sin".into()));
}

#[test]
fn sci_domaines_des_fonctions() {
    assert_err("sqrt(-1)", EvaluationError::FunctionEvaluationError("sqrt".into()));
    assert_err("asin(2)", EvaluationError::FunctionEvaluationError("asin".into()));
    assert_err("arccos(-1.01)", EvaluationError::FunctionEvaluationError("arccos".into()));
    assert_err("ln(0)", EvaluationError::FunctionEvaluationError("ln".into()));
    assert_err("log(-10)", EvaluationError::FunctionEvaluationError("log".into()));
}

#[test]
fn sci_expressions_mal_formees() {
    assert_err("", EvaluationError::InvalidExpression);
    assert_err("*", EvaluationError::InvalidExpression);
    assert_err("1 +", EvaluationError::InvalidExpression);
    assert_err("()", EvaluationError::InvalidExpression);
    assert_err("sin()", EvaluationError::InvalidExpression);
    assert_err("+5", EvaluationError::InvalidExpression);
    assert_err("sin(1, 2)", EvaluationError::InvalidExpression);
    assert_err("1..2", EvaluationError::InvalidToken("1..2".into()));
}

/* ------------------------ Pureté ------------------------ */

#[test]
fn sci_idempotence_bit_a_bit() {
    for expr in ["sin(pi/3) * 7.1", "2^0.5", "ln(2) / log(2)", "-1.5 * e"] {
        let a = val(expr);
        let b = val(expr);
        assert_eq!(a.to_bits(), b.to_bits(), "expr={expr:?}");
    }
}

#[test]
fn sci_blancs_insignifiants() {
    assert_eq!(calculate("2 + 3 * 4"), calculate("2+3*4"));
    assert_eq!(calculate("\tsin ( pi / 2 )\n"), calculate("sin(pi/2)"));
    assert_eq!(calculate("1 0 + 1"), Ok(11.0)); // "1 0" devient "10"
}

#[test]
fn sci_caracteres_inconnus_sautes() {
    assert_eq!(val("2 @ + 3"), 5.0);
    assert_eq!(val("4 # * 2 $"), 8.0);
}

#[test]
fn sci_appels_concurrents() {
    let exprs = ["2 + 3 * 4", "sin(pi/2)", "2^3^2", "(-5 + 2) * 3"];
    let attendus: Vec<f64> = exprs.iter().map(|e| val(e)).collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            std::thread::spawn(move || {
                exprs
                    .iter()
                    .map(|e| calculate(e))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for h in handles {
        let obtenus = h.join().unwrap_or_else(|_| panic!("thread paniqué"));
        for (o, a) in obtenus.into_iter().zip(&attendus) {
            assert_eq!(o.map(f64::to_bits), Ok(a.to_bits()));
        }
    }
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let n = 500;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);
    assert_eq!(val(&expr), 1.0);

    let mut expr = "0".to_string();
    for _ in 0..200 {
        expr = format!("abs({expr}+1)");
    }
    budget(t0, max);
    assert_eq!(val(&expr), 200.0);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 2000].join(" + ");
    budget(t0, max);
    assert_eq!(val(&expr), 1000.0);
}
