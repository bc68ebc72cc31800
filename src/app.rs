// src/app.rs
//
// Calculatrice RPN : module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + historique.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App
//
// Important:
// - La gestion Enter/Backspace est faite dans vue.rs (quand le champ a le focus).

pub mod etat;
pub mod historique;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Raccourci global : ESC = annule l’édition d’historique, sinon efface l’entrée (C).
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            if self.edition.is_some() {
                self.annuler_edition();
            } else {
                self.clear_entree();
            }
        }

        egui::SidePanel::right("panneau_historique")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                self.ui_historique(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
