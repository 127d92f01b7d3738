// src/noyau/format.rs
//
// Affichage d’un résultat f64, façon "%g" :
// - `chiffres` chiffres significatifs (borné à 1..=17)
// - zéros finaux retirés
// - notation scientifique si l’exposant décimal est < -4 ou >= chiffres
// - -0 affiché "0"

use num_traits::Zero;

pub fn format_resultat(x: f64, chiffres: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return (if x > 0.0 { "inf" } else { "-inf" }).to_string();
    }
    if x.is_zero() {
        return "0".to_string();
    }

    let p = chiffres.clamp(1, 17);

    // L’exposant est lu APRÈS arrondi à p chiffres (9.9999999 -> 1.00000e1).
    let sci = format!("{:.*e}", p - 1, x);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exposant < -4 || exposant >= p as i32 {
        let signe = if exposant < 0 { '-' } else { '+' };
        return format!(
            "{}e{signe}{:02}",
            retire_zeros_finaux(mantisse),
            exposant.unsigned_abs()
        );
    }

    let decimales = (p as i32 - 1 - exposant).max(0) as usize;
    retire_zeros_finaux(&format!("{x:.decimales$}")).to_string()
}

fn retire_zeros_finaux(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
