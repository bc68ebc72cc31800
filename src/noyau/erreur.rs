// src/noyau/erreur.rs
//
// Taxonomie fermée des échecs du noyau.
// Chaque variante garde le jeton / nom fautif comme donnée structurée ;
// le message lisible (Display) sert seulement à l’affichage UI.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// Compteur de parenthèses négatif, ou non nul en fin de lecture.
    #[error("parenthèses non équilibrées")]
    UnbalancedParentheses,

    /// Suite de lettres qui n’est ni une fonction (suivie de `(`) ni une constante.
    #[error("identifiant inconnu : {0}")]
    UnknownIdentifier(String),

    #[error("fonction inconnue : {0}")]
    UnknownFunction(String),

    #[error("division par zéro")]
    DivisionByZero,

    /// Argument hors du domaine de la fonction (sqrt négatif, asin hors [-1, 1], …).
    #[error("erreur d’évaluation de la fonction {0}")]
    FunctionEvaluationError(String),

    #[error("opérateur invalide")]
    InvalidOperator,

    #[error("jeton invalide : {0}")]
    InvalidToken(String),

    /// Pile insuffisante pendant l’évaluation, ou pile finale ≠ 1 valeur.
    #[error("expression invalide")]
    InvalidExpression,
}
