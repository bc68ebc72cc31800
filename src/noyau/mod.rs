//! Noyau d’évaluation (flottant f64)
//!
//! Organisation interne :
//! - erreur.rs   : taxonomie fermée des échecs
//! - table.rs    : opérateurs, fonctions (phf), constantes
//! - jetons.rs   : nettoyage, équilibre des parenthèses, tokenisation
//! - rpn.rs      : shunting-yard
//! - eval.rs     : pile de valeurs + pipeline complet
//! - format.rs   : affichage “général” à p chiffres significatifs

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod table;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{calculate, eval_expression};
pub use format::format_resultat;
