// src/noyau/rpn.rs
//
// Shunting-yard : jetons (infixe) -> RPN (postfixe)
//
// Règles:
// - Ident(name):
//    - suivi immédiatement de '(' => fonction, posée sur la pile
//      (elle ne sort qu’à la fermeture de SA parenthèse)
//    - sinon => constante (pi, e) écrite comme littéral, ou identifiant inconnu
// - Moins unaire (en tête, après '(', après un opérateur, après ',') :
//    on injecte 0 puis on traite '-' normalement : "-x" => "0 x -"
// - Tous les opérateurs sont associatifs à gauche, '^' compris :
//    "2^3^2" => "2 3 ^ 2 ^"
// - Jetons Ignore : sautés.

use super::erreur::EvaluationError;
use super::jetons::Tok;
use super::table::{constante, Operateur};

/// Jeton de la suite postfixe.
///
/// Les nombres gardent leur texte : un littéral mal formé ("1.2.3")
/// n’échoue qu’à l’évaluation, en `InvalidToken`.
#[derive(Clone, Debug, PartialEq)]
pub enum Postfixe {
    Nombre(String),
    Op(char),
    Fonction(String),
}

/// Entrées de la pile auxiliaire.
#[derive(Debug)]
enum Pile {
    Op(Operateur),
    Fonction(String),
    LPar,
}

impl Pile {
    fn vers_sortie(self) -> Option<Postfixe> {
        match self {
            Pile::Op(op) => Some(Postfixe::Op(op.symbole())),
            Pile::Fonction(nom) => Some(Postfixe::Fonction(nom)),
            Pile::LPar => None,
        }
    }
}

fn est_moins_unaire(precedent: Option<&Tok>) -> bool {
    matches!(
        precedent,
        None | Some(Tok::LPar) | Some(Tok::Op(_)) | Some(Tok::Virgule)
    )
}

/// Convertit une suite de jetons en RPN.
///
/// Exemple:
///   jetons: [Ident("sin"), LPar, Ident("pi"), Op(/), Num("2"), RPar]
///   rpn:    ["3.141592653589793", "2", "/", "sin"]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Postfixe>, EvaluationError> {
    let mut out: Vec<Postfixe> = Vec::with_capacity(tokens.len());
    let mut pile: Vec<Pile> = Vec::new();

    for (i, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(txt) => out.push(Postfixe::Nombre(txt.clone())),

            Tok::Ident(nom) => {
                if tokens.get(i + 1) == Some(&Tok::LPar) {
                    pile.push(Pile::Fonction(nom.clone()));
                } else {
                    let v = constante(nom)
                        .ok_or_else(|| EvaluationError::UnknownIdentifier(nom.clone()))?;
                    out.push(Postfixe::Nombre(v.to_string()));
                }
            }

            Tok::LPar => pile.push(Pile::LPar),

            Tok::RPar => {
                // dépile jusqu’à '(' (jetée)
                loop {
                    match pile.pop() {
                        Some(Pile::LPar) => break,
                        Some(p) => out.extend(p.vers_sortie()),
                        None => return Err(EvaluationError::UnbalancedParentheses),
                    }
                }

                // fonction collée à cette parenthèse : elle sort maintenant
                if matches!(pile.last(), Some(Pile::Fonction(_))) {
                    out.extend(pile.pop().and_then(Pile::vers_sortie));
                }
            }

            Tok::Op(op) => {
                let precedent = i.checked_sub(1).and_then(|j| tokens.get(j));
                if *op == Operateur::Moins && est_moins_unaire(precedent) {
                    out.push(Postfixe::Nombre("0".to_string()));
                }

                // précédence >= : égalité résolue en faveur de l’opérateur déjà empilé
                while let Some(Pile::Op(haut)) = pile.last() {
                    if haut.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Postfixe::Op(haut.symbole()));
                    pile.pop();
                }

                pile.push(Pile::Op(*op));
            }

            Tok::Virgule => {
                // vide jusqu’à '(' sans la consommer
                while !matches!(pile.last(), None | Some(Pile::LPar)) {
                    out.extend(pile.pop().and_then(Pile::vers_sortie));
                }
            }

            Tok::Ignore(_) => {}
        }
    }

    // vide la pile
    while let Some(p) = pile.pop() {
        match p.vers_sortie() {
            Some(t) => out.push(t),
            None => return Err(EvaluationError::UnbalancedParentheses),
        }
    }

    Ok(out)
}

/// RPN en texte (panneau “démarche”).
pub fn format_rpn(rpn: &[Postfixe]) -> String {
    rpn.iter()
        .map(|t| match t {
            Postfixe::Nombre(txt) => txt.clone(),
            Postfixe::Op(c) => c.to_string(),
            Postfixe::Fonction(nom) => nom.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
