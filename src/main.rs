// src/main.rs
//
// Calculatrice RPN : point d’entrée natif
// ---------------------------------------
// - Journalisation : env_logger (niveau via RUST_LOG, ex. RUST_LOG=debug)
// - Fenêtre : eframe::run_native + NativeOptions
//
// IMPORTANT (structure projet):
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - Ici: point d’entrée seulement

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre de la fenêtre.
const TITRE_APP: &str = "Calculatrice RPN";

const TAILLE_INITIALE: [f32; 2] = [820.0, 620.0];
const TAILLE_MIN: [f32; 2] = [640.0, 480.0];

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size(TAILLE_INITIALE)
            .with_min_inner_size(TAILLE_MIN),
        ..Default::default()
    };

    log::info!("démarrage de {TITRE_APP}");

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}
