//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur,
//! démarche, précision, historique) et les actions déclenchées par les
//! boutons / le clavier.
//!
//! Contrats :
//! - Aucune logique d’affichage ici (pas d’egui).
//! - Le noyau n’est appelé qu’à travers `evaluer` et l’historique.

use log::{debug, warn};

use super::historique::Historique;
use crate::noyau::format::CHIFFRES_MAX;
use crate::noyau::table::est_fonction;
use crate::noyau::{eval_expression, format_resultat, EvaluationError};

/// Chiffres significatifs affichés par défaut.
pub const PRECISION_DEFAUT: usize = 12;

/// Garde-fou : au-delà, f64 n’apporte plus rien.
pub const PRECISION_MAX: usize = CHIFFRES_MAX;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Ligne d’historique en cours d’édition.
#[derive(Clone, Debug, PartialEq)]
pub struct Edition {
    pub index: usize,
    pub texte: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // dernier résultat formaté
    pub erreur: String,   // message d’erreur (si l’évaluation échoue)

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- historique ---
    pub historique: Historique,
    pub edition: Option<Edition>,

    // --- paramètres ---
    pub precision: usize, // chiffres significatifs

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            historique: Historique::default(),
            edition: None,
            precision: PRECISION_DEFAUT,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à zéro (entrée + résultats), l’historique est conservé.
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.edition = None;
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Efface résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Ajoute du texte brut en fin d’entrée (chiffre, opérateur, "sin(", "pi"…).
    pub fn inserer(&mut self, texte: &str) {
        self.entree.push_str(texte);
        self.focus_entree = true;
    }

    /// Backspace “intelligent” : retire d’un coup "sin(", "arccos(", "pi"…,
    /// sinon un seul caractère.
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(char::is_whitespace) {
            self.entree.pop();
        }

        if let Some(avant) = self.entree.strip_suffix('(') {
            let nom_debut = avant
                .trim_end_matches(|c: char| c.is_ascii_alphabetic())
                .len();
            if est_fonction(&avant[nom_debut..]) {
                self.entree.truncate(nom_debut);
                self.focus_entree = true;
                return;
            }
        }

        if self.entree.ends_with("pi") {
            self.entree.truncate(self.entree.len() - 2);
        } else {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE l’entrée pour que l’utilisateur corrige sa saisie.
    /// - On coupe la démarche (non fiable si l’évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    fn set_erreur_noyau(&mut self, e: &EvaluationError) {
        self.set_erreur(format!("Erreur : {e}"));
    }

    /// Garde-fou : limite la précision et reformate l’historique.
    pub fn set_precision(&mut self, precision: usize) {
        self.precision = precision.clamp(1, PRECISION_MAX);
        self.historique.reformater(self.precision);
        self.focus_entree = true;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" / Enter : évalue l’entrée, dépose le résultat et l’historise.
    pub fn evaluer(&mut self) {
        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        match eval_expression(s) {
            Ok(ev) => {
                let texte = format_resultat(ev.valeur, self.precision);
                debug!("{s:?} = {texte}");

                self.historique.ajouter(s, ev.valeur, self.precision);

                self.erreur.clear();
                // la ligne éditée a glissé d’un cran vers le bas
                if let Some(ed) = self.edition.as_mut() {
                    ed.index += 1;
                }
                self.verifier_edition();
                self.resultat = texte.clone();
                self.demarche = Demarche {
                    jetons: ev.jetons,
                    rpn: ev.rpn,
                };
                // le résultat devient la nouvelle entrée (on peut enchaîner)
                self.entree = texte;
            }
            Err(e) => {
                warn!("évaluation de {s:?} refusée : {e}");
                self.set_erreur_noyau(&e);
            }
        }
        self.focus_entree = true;
    }

    /* ------------------------ Historique ------------------------ */

    /// Recharge l’expression d’une ligne dans l’entrée.
    pub fn charger_historique(&mut self, index: usize) {
        if let Some(e) = self.historique.get(index) {
            self.entree = e.expression.clone();
            self.focus_entree = true;
        }
    }

    pub fn recalculer_historique(&mut self, index: usize) {
        match self.historique.recalculer(index, self.precision) {
            Some(Ok(v)) => {
                self.erreur.clear();
                self.resultat = format_resultat(v, self.precision);
            }
            Some(Err(e)) => self.set_erreur_noyau(&e),
            None => {}
        }
    }

    pub fn commencer_edition(&mut self, index: usize) {
        self.edition = self.historique.get(index).map(|e| Edition {
            index,
            texte: e.expression.clone(),
        });
    }

    /// Valide l’édition en cours. En cas d’échec, l’édition reste ouverte.
    pub fn valider_edition(&mut self) {
        let Some(ed) = self.edition.take() else {
            return;
        };

        match self.historique.modifier(ed.index, &ed.texte, self.precision) {
            Some(Ok(v)) => {
                self.erreur.clear();
                self.resultat = format_resultat(v, self.precision);
            }
            Some(Err(e)) => {
                warn!("édition de l’historique refusée : {e}");
                self.set_erreur_noyau(&e);
                self.edition = Some(ed);
            }
            None => {}
        }
    }

    /// Capacité de l’historique ; peut retirer la ligne en cours d’édition.
    pub fn set_capacite_historique(&mut self, capacite: usize) {
        self.historique.set_capacite(capacite);
        self.verifier_edition();
    }

    /// Ferme l’édition si sa ligne est sortie de l’historique, en le signalant.
    fn verifier_edition(&mut self) {
        let hors_historique = self
            .edition
            .as_ref()
            .is_some_and(|ed| ed.index >= self.historique.len());
        if hors_historique {
            warn!("édition abandonnée : ligne retirée de l’historique");
            self.edition = None;
            self.erreur = "Édition abandonnée : la ligne a quitté l’historique".to_string();
        }
    }

    pub fn annuler_edition(&mut self) {
        self.edition = None;
    }

    pub fn supprimer_historique(&mut self, index: usize) {
        self.historique.supprimer(index);
        // l’index édité n’a plus de sens
        self.edition = None;
    }

    pub fn vider_historique(&mut self) {
        self.historique.vider();
        self.edition = None;
    }
}
