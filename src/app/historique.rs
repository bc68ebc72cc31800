//! src/app/historique.rs
//!
//! Historique des calculs (modèle seul, sans vue).
//!
//! Contrats :
//! - Ordre : le plus récent en tête.
//! - Capacité bornée : au-delà, l’entrée la plus ancienne disparaît.
//! - Recalcul / édition passent par le noyau (`calculate`) ; un échec laisse
//!   l’entrée intacte et remonte l’erreur.
//! - Index hors bornes : `None`, jamais de panique.

use std::collections::VecDeque;

use log::debug;

use crate::noyau::{calculate, format_resultat, EvaluationError};

/// Capacité par défaut (nombre d’entrées conservées).
pub const HISTORIQUE_MAX: usize = 20;

/// Garde-fou pour `set_capacite`.
pub const HISTORIQUE_MAX_ABSOLU: usize = 200;

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    /// Texte tel que saisi.
    pub expression: String,
    pub valeur: f64,
    /// Ligne affichée : "<expression> = <résultat formaté>".
    pub ligne: String,
}

impl EntreeHistorique {
    pub fn new(expression: impl Into<String>, valeur: f64, precision: usize) -> Self {
        let expression = expression.into();
        let ligne = format_ligne(&expression, valeur, precision);
        Self {
            expression,
            valeur,
            ligne,
        }
    }
}

fn format_ligne(expression: &str, valeur: f64, precision: usize) -> String {
    format!("{} = {}", expression.trim(), format_resultat(valeur, precision))
}

#[derive(Clone, Debug)]
pub struct Historique {
    entrees: VecDeque<EntreeHistorique>,
    capacite: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self {
            entrees: VecDeque::with_capacity(HISTORIQUE_MAX),
            capacite: HISTORIQUE_MAX,
        }
    }
}

impl Historique {
    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }

    pub fn capacite(&self) -> usize {
        self.capacite
    }

    /// Borne à 1..=HISTORIQUE_MAX_ABSOLU et tronque les plus anciennes si besoin.
    pub fn set_capacite(&mut self, capacite: usize) {
        self.capacite = capacite.clamp(1, HISTORIQUE_MAX_ABSOLU);
        self.entrees.truncate(self.capacite);
    }

    pub fn get(&self, index: usize) -> Option<&EntreeHistorique> {
        self.entrees.get(index)
    }

    /// Du plus récent au plus ancien.
    pub fn iter(&self) -> impl Iterator<Item = &EntreeHistorique> {
        self.entrees.iter()
    }

    pub fn ajouter(&mut self, expression: impl Into<String>, valeur: f64, precision: usize) {
        let entree = EntreeHistorique::new(expression, valeur, precision);
        debug!("historique += {}", entree.ligne);

        self.entrees.push_front(entree);
        self.entrees.truncate(self.capacite);
    }

    /// Réévalue l’expression stockée à `index`.
    pub fn recalculer(
        &mut self,
        index: usize,
        precision: usize,
    ) -> Option<Result<f64, EvaluationError>> {
        let expression = self.entrees.get(index)?.expression.clone();
        Some(self.remplacer(index, expression, precision))
    }

    /// Remplace l’expression à `index` par `texte`, si `texte` s’évalue.
    pub fn modifier(
        &mut self,
        index: usize,
        texte: &str,
        precision: usize,
    ) -> Option<Result<f64, EvaluationError>> {
        self.entrees.get(index)?;
        Some(self.remplacer(index, texte.to_string(), precision))
    }

    fn remplacer(
        &mut self,
        index: usize,
        expression: String,
        precision: usize,
    ) -> Result<f64, EvaluationError> {
        let valeur = calculate(&expression)?;
        if let Some(e) = self.entrees.get_mut(index) {
            *e = EntreeHistorique::new(expression, valeur, precision);
            debug!("historique[{index}] <- {}", e.ligne);
        }
        Ok(valeur)
    }

    /// Reformate toutes les lignes (après changement de précision).
    pub fn reformater(&mut self, precision: usize) {
        for e in self.entrees.iter_mut() {
            e.ligne = format_ligne(&e.expression, e.valeur, precision);
        }
    }

    pub fn supprimer(&mut self, index: usize) -> Option<EntreeHistorique> {
        let e = self.entrees.remove(index)?;
        debug!("historique -= {}", e.ligne);
        Some(e)
    }

    pub fn vider(&mut self) {
        debug!("historique vidé ({} entrées)", self.entrees.len());
        self.entrees.clear();
    }
}
