// src/journal.rs
//
// Journal : abonné `tracing` (registry + couche fmt sur stderr).
// - nos cibles (calculatrice_postfixe::*) suivent le niveau demandé (--journal)
// - le reste (eframe, winit, wgpu...) reste à WARN, sauf si on demande moins
// Les messages `log` d’eframe arrivent ici par le pont tracing-log de `init()`.

use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt::Layer,
    prelude::*,
};

const NOTRE_CIBLE: &str = env!("CARGO_CRATE_NAME");

/// Filtre par cible : `niveau` pour la calculatrice, au plus WARN ailleurs.
pub fn filtre(niveau: LevelFilter) -> Targets {
    Targets::new()
        .with_default(niveau.min(LevelFilter::WARN))
        .with_target(NOTRE_CIBLE, niveau)
}

/// Installe l’abonné global. Un second appel ne remplace rien.
pub fn init(niveau: LevelFilter) {
    let installe = tracing_subscriber::registry()
        .with(
            Layer::new()
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_filter(filtre(niveau)),
        )
        .try_init();

    if installe.is_err() {
        tracing::debug!("journal déjà installé");
    }
}
