//! Noyau : évaluation (pipeline réel)
//!
//! nettoyer -> parenthèses -> jetons -> RPN -> pile de valeurs -> f64
//!
//! Chaque appel possède ses propres tampons et sa propre pile ; seules les
//! tables (opérateurs, fonctions) sont partagées, en lecture seule.
//! Le noyau ne journalise rien : l’appelant présente les erreurs.

use super::erreur::EvaluationError;
use super::jetons::{format_tokens, nettoyer, tokenize, verifier_parentheses};
use super::rpn::{format_rpn, to_rpn, Postfixe};
use super::table::{appliquer_fonction, Operateur};

/// Résultat complet d’une évaluation : valeur + démarche (jetons, RPN).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub valeur: f64,
    pub jetons: String,
    pub rpn: String,
}

/// Point d’entrée unique du noyau.
pub fn calculate(expression: &str) -> Result<f64, EvaluationError> {
    eval_expression(expression).map(|e| e.valeur)
}

/// Même pipeline que [`calculate`], en gardant la démarche pour l’UI.
pub fn eval_expression(expression: &str) -> Result<Evaluation, EvaluationError> {
    // 1) Prétraitement
    let s = nettoyer(expression);
    verifier_parentheses(&s)?;

    // 2) Jetons
    let jetons = tokenize(&s);

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    // 4) Évaluation
    let valeur = evaluer_rpn(&rpn)?;

    Ok(Evaluation {
        valeur,
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
    })
}

/// Évalue une suite postfixe sur une pile de valeurs.
pub fn evaluer_rpn(rpn: &[Postfixe]) -> Result<f64, EvaluationError> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Postfixe::Nombre(txt) => {
                let v = txt
                    .parse::<f64>()
                    .map_err(|_| EvaluationError::InvalidToken(txt.clone()))?;
                pile.push(v);
            }

            Postfixe::Op(c) => {
                // b = le plus récent, puis a
                let b = pile.pop().ok_or(EvaluationError::InvalidExpression)?;
                let a = pile.pop().ok_or(EvaluationError::InvalidExpression)?;
                let op = Operateur::from_char(*c).ok_or(EvaluationError::InvalidOperator)?;
                pile.push(op.appliquer(a, b)?);
            }

            Postfixe::Fonction(nom) => {
                let x = pile.pop().ok_or(EvaluationError::InvalidExpression)?;
                pile.push(appliquer_fonction(nom, x)?);
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvaluationError::InvalidExpression),
    }
}
