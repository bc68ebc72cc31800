// src/noyau/table.rs
//
// Tables immuables du noyau :
// - opérateurs binaires (symbole, précédence, règle d’évaluation)
// - fonctions unaires (nom -> fn), construite à la compilation (phf)
// - constantes nommées (pi, e)
//
// Aucune table n’est modifiable à l’exécution.

use phf::{phf_map, Map};

use super::erreur::EvaluationError;

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Division,
    Puissance,
}

impl Operateur {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Division),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Division => '/',
            Self::Puissance => '^',
        }
    }

    /// `+ -` = 1, `* /` = 2, `^` = 3.
    /// Tous associatifs à gauche, `^` compris.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Moins => 1,
            Self::Fois | Self::Division => 2,
            Self::Puissance => 3,
        }
    }

    /// `a OP b` ; seule la division peut échouer.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, EvaluationError> {
        match self {
            Self::Plus => Ok(a + b),
            Self::Moins => Ok(a - b),
            Self::Fois => Ok(a * b),
            Self::Division => {
                if b == 0.0 {
                    return Err(EvaluationError::DivisionByZero);
                }
                Ok(a / b)
            }
            // NaN / inf selon IEEE-754, pas de cas particulier
            Self::Puissance => Ok(a.powf(b)),
        }
    }
}

/* ------------------------ Fonctions ------------------------ */

/// `None` = argument hors domaine.
pub type FonctionUnaire = fn(f64) -> Option<f64>;

fn dans_intervalle_unite(x: f64) -> bool {
    (-1.0..=1.0).contains(&x)
}

static FONCTIONS: Map<&'static str, FonctionUnaire> = phf_map! {
    "sin" => |x: f64| Some(x.sin()),
    "cos" => |x: f64| Some(x.cos()),
    "tan" => |x: f64| Some(x.tan()),
    "tg" => |x: f64| Some(x.tan()),

    "asin" => |x: f64| dans_intervalle_unite(x).then(|| x.asin()),
    "arcsin" => |x: f64| dans_intervalle_unite(x).then(|| x.asin()),
    "acos" => |x: f64| dans_intervalle_unite(x).then(|| x.acos()),
    "arccos" => |x: f64| dans_intervalle_unite(x).then(|| x.acos()),
    "atan" => |x: f64| Some(x.atan()),
    "arctg" => |x: f64| Some(x.atan()),

    "sinh" => |x: f64| Some(x.sinh()),
    "cosh" => |x: f64| Some(x.cosh()),
    "tanh" => |x: f64| Some(x.tanh()),

    // log = base 10, ln = népérien
    "log" => |x: f64| (x > 0.0).then(|| x.log10()),
    "ln" => |x: f64| (x > 0.0).then(|| x.ln()),
    "exp" => |x: f64| Some(x.exp()),
    "sqrt" => |x: f64| (x >= 0.0).then(|| x.sqrt()),
    "abs" => |x: f64| Some(x.abs()),
};

pub fn est_fonction(nom: &str) -> bool {
    FONCTIONS.contains_key(nom)
}

/// Applique la fonction `nom` à `x`.
///
/// Tout NaN (en argument ou en résultat) et tout argument hors domaine
/// donnent `FunctionEvaluationError(nom)`.
pub fn appliquer_fonction(nom: &str, x: f64) -> Result<f64, EvaluationError> {
    let f = FONCTIONS
        .get(nom)
        .ok_or_else(|| EvaluationError::UnknownFunction(nom.to_string()))?;

    if x.is_nan() {
        return Err(EvaluationError::FunctionEvaluationError(nom.to_string()));
    }

    match f(x) {
        Some(y) if !y.is_nan() => Ok(y),
        _ => Err(EvaluationError::FunctionEvaluationError(nom.to_string())),
    }
}

/* ------------------------ Constantes ------------------------ */

pub fn constante(nom: &str) -> Option<f64> {
    match nom {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}
