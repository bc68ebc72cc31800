// src/app/vue.rs
//
// Vue (UI egui)
// -------------
// Objectifs :
// - Clavier : Enter évalue (quand le champ est focus), ESC efface (app.rs)
// - Boutons : pavé numérique, opérateurs, fonctions, constantes
// - Historique : clic = recharger, double-clic = recalculer, édition en ligne
//
// Toute la logique vit dans etat.rs ; ici on ne fait que dessiner et router.

use eframe::egui;

use super::etat::AppCalc;
use super::historique::HISTORIQUE_MAX_ABSOLU;

/// (texte inséré, libellé du bouton)
const FONCTIONS: &[(&str, &str)] = &[
    ("sin(", "sin"),
    ("cos(", "cos"),
    ("tan(", "tan"),
    ("asin(", "asin"),
    ("acos(", "acos"),
    ("atan(", "atan"),
    ("sinh(", "sinh"),
    ("cosh(", "cosh"),
    ("tanh(", "tanh"),
    ("log(", "log"),
    ("ln(", "ln"),
    ("exp(", "exp"),
    ("sqrt(", "sqrt"),
    ("abs(", "|x|"),
    ("pi", "pi"),
    ("e", "e"),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2 + 3 * 4, sin(pi/2), sqrt(2)^2")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue (seulement si le champ est focus)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.evaluer();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "AC", "Efface entrée + résultat", Action::ResetTotal);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);

            ui.separator();

            ui.label("Précision :");
            let mut p = self.precision as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(1..=super::etat::PRECISION_MAX as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_precision(p as usize);
            }
        });

        ui.add_space(8.0);

        ui.horizontal(|ui| {
            self.ui_pave_numerique(ui);
            ui.separator();
            self.ui_fonctions(ui);
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        const LIGNES: [[&str; 4]; 5] = [
            ["7", "8", "9", "/"],
            ["4", "5", "6", "*"],
            ["1", "2", "3", "-"],
            ["0", ".", "^", "+"],
            ["(", ")", ",", "="],
        ];

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in LIGNES {
                    for touche in ligne {
                        if touche == "=" {
                            let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                            if eq.clicked() {
                                self.evaluer();
                            }
                        } else {
                            self.bouton_insert(ui, touche, touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("fonctions")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, (texte, libelle)) in FONCTIONS.iter().enumerate() {
                    self.bouton_insert(ui, libelle, texte);
                    if i % 3 == 2 {
                        ui.end_row();
                    }
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    /// Panneau latéral : une ligne par calcul, le plus récent en haut.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(format!("Historique ({})", self.historique.len()));
            if ui
                .add_enabled(!self.historique.is_empty(), egui::Button::new("Vider"))
                .clicked()
            {
                self.vider_historique();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Garder :");
            let mut n = self.historique.capacite() as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut n)
                    .speed(1)
                    .range(1..=HISTORIQUE_MAX_ABSOLU as u32)
                    .suffix(" calculs"),
            );
            if resp.changed() {
                self.set_capacite_historique(n as usize);
            }
        });
        ui.separator();

        // On collecte l’action, puis on l’applique hors de l’itération.
        let mut action: Option<ActionHistorique> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, entree) in self.historique.iter().enumerate() {
                    match self.edition.as_mut() {
                        Some(ed) if ed.index == i => {
                            ui.horizontal(|ui| {
                                let resp = ui.add(
                                    egui::TextEdit::singleline(&mut ed.texte)
                                        .desired_width(140.0)
                                        .code_editor(),
                                );
                                let enter = ui.input(|inp| inp.key_pressed(egui::Key::Enter));
                                if ui.small_button("OK").clicked() || (resp.lost_focus() && enter) {
                                    action = Some(ActionHistorique::ValiderEdition);
                                }
                                if ui.small_button("Annuler").clicked() {
                                    action = Some(ActionHistorique::AnnulerEdition);
                                }
                            });
                        }
                        _ => {
                            ui.horizontal(|ui| {
                                let resp = ui
                                    .add(egui::Label::new(entree.ligne.as_str()).sense(egui::Sense::click()))
                                    .on_hover_text("Clic : recharger ; double-clic : recalculer");
                                if resp.double_clicked() {
                                    action = Some(ActionHistorique::Recalculer(i));
                                } else if resp.clicked() {
                                    action = Some(ActionHistorique::Charger(i));
                                }
                                if ui.small_button("Éditer").clicked() {
                                    action = Some(ActionHistorique::Editer(i));
                                }
                                if ui.small_button("Suppr").clicked() {
                                    action = Some(ActionHistorique::Supprimer(i));
                                }
                            });
                        }
                    }
                }
            });

        match action {
            Some(ActionHistorique::Charger(i)) => self.charger_historique(i),
            Some(ActionHistorique::Recalculer(i)) => self.recalculer_historique(i),
            Some(ActionHistorique::Editer(i)) => self.commencer_edition(i),
            Some(ActionHistorique::ValiderEdition) => self.valider_edition(),
            Some(ActionHistorique::AnnulerEdition) => self.annuler_edition(),
            Some(ActionHistorique::Supprimer(i)) => self.supprimer_historique(i),
            None => {}
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(to_insert);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum ActionHistorique {
    Charger(usize),
    Recalculer(usize),
    Editer(usize),
    ValiderEdition,
    AnnulerEdition,
    Supprimer(usize),
}
