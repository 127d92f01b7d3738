// src/main.rs
//
// Calculatrice postfixe — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : fenêtre eframe, ou console avec --console
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

use calculatrice_postfixe::app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice postfixe";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use clap::Parser;
    use tracing_subscriber::filter::LevelFilter;

    use calculatrice_postfixe::reglages::{Reglages, CHIFFRES_DEFAUT};

    /// Calculatrice : expression infixe -> RPN -> valeur.
    #[derive(Parser, Debug)]
    #[command(version, about, long_about = None)]
    pub struct Args {
        /// Mode console : une expression par ligne sur l’entrée standard.
        #[arg(short, long)]
        pub console: bool,

        /// Chiffres significatifs affichés (1 à 17).
        #[arg(long, env = "CALC_CHIFFRES", default_value_t = CHIFFRES_DEFAUT)]
        pub chiffres: usize,

        /// Capacité des piles du noyau (illimitées si absent).
        #[arg(long, env = "CALC_CAPACITE")]
        pub capacite: Option<usize>,

        /// Niveau de journal (off, error, warn, info, debug, trace).
        #[arg(long, env = "CALC_JOURNAL", default_value_t = LevelFilter::WARN)]
        pub journal: LevelFilter,
    }

    impl Args {
        pub fn reglages(&self) -> Reglages {
            Reglages::new(self.chiffres, self.capacite)
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;
    use std::io;

    use calculatrice_postfixe::{console, journal};

    let args = natif::Args::parse();
    journal::init(args.journal);

    let reglages = args.reglages();
    tracing::info!("réglages: {reglages:?}");

    if args.console {
        let stdin = io::stdin();
        if let Err(e) = console::run(stdin.lock(), &mut io::stdout(), &mut io::stderr(), &reglages)
        {
            tracing::error!("console interrompue: {e}");
            std::process::exit(1);
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([480.0, 640.0])
            .with_min_inner_size([380.0, 520.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
