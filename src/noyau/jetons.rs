// src/noyau/jetons.rs
//
// Prétraitement + tokenisation.
// - nettoyer : retire tout blanc (espace, tab, saut de ligne…), rien d’autre
// - verifier_parentheses : compteur signé, seule validation avant la RPN
// - tokenize : découpe la chaîne nettoyée en jetons
//
// NOTE: les caractères non reconnus ne sont PAS des erreurs ; ils deviennent
// Tok::Ignore pour que la RPN voie encore le vrai voisin de chaque jeton
// (moins unaire, fonction suivie de '('), puis ils sont sautés.

use super::erreur::EvaluationError;
use super::table::Operateur;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Littéral brut (chiffres et points), tel que lu : "12", "0.5", "1.2.3".
    Num(String),

    /// Suite de lettres ASCII. La RPN décide : fonction (si suivie de '('),
    /// constante, ou identifiant inconnu.
    Ident(String),

    Op(Operateur),

    LPar,
    RPar,
    Virgule,

    /// Caractère hors alphabet, sauté silencieusement.
    Ignore(char),
}

pub fn nettoyer(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Échoue si le compteur devient négatif (')' orpheline)
/// ou reste non nul à la fin ('(' non fermée).
pub fn verifier_parentheses(s: &str) -> Result<(), EvaluationError> {
    let mut balance: i64 = 0;
    for c in s.chars() {
        match c {
            '(' => balance += 1,
            ')' => balance -= 1,
            _ => {}
        }
        if balance < 0 {
            return Err(EvaluationError::UnbalancedParentheses);
        }
    }
    if balance != 0 {
        return Err(EvaluationError::UnbalancedParentheses);
    }
    Ok(())
}

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Tokenise une chaîne déjà nettoyée.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if est_chiffre(c) {
            let start = i;
            while i < chars.len() && est_chiffre(chars[i]) {
                i += 1;
            }
            out.push(Tok::Num(chars[start..i].iter().collect()));
            continue;
        }

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            out.push(Tok::Ident(chars[start..i].iter().collect()));
            continue;
        }

        let tok = match c {
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            ',' => Tok::Virgule,
            _ => match Operateur::from_char(c) {
                Some(op) => Tok::Op(op),
                None => Tok::Ignore(c),
            },
        };
        out.push(tok);
        i += 1;
    }

    out
}

/// Liste de jetons en texte (panneau “démarche”).
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(txt) => txt.clone(),
            Tok::Ident(nom) => nom.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Virgule => ",".to_string(),
            Tok::Ignore(c) => format!("«{c}»"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
