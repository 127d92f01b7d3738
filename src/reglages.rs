//! src/reglages.rs
//!
//! Réglages partagés par la console et la fenêtre.
//! - chiffres significatifs de l’affichage (borné)
//! - capacité des piles du noyau (None = illimitées)

/// Comme l’affichage par défaut d’un flux C++ (6 chiffres significatifs).
pub const CHIFFRES_DEFAUT: usize = 6;

/// Au-delà de 17 chiffres, un f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 17;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub chiffres: usize,
    pub capacite_pile: Option<usize>,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres: CHIFFRES_DEFAUT,
            capacite_pile: None,
        }
    }
}

impl Reglages {
    /// Une capacité nulle est lue comme "illimitée".
    pub fn new(chiffres: usize, capacite_pile: Option<usize>) -> Self {
        let mut r = Self {
            chiffres: CHIFFRES_DEFAUT,
            capacite_pile: capacite_pile.filter(|&n| n > 0),
        };
        r.set_chiffres(chiffres);
        r
    }

    /// Garde-fou : 1..=CHIFFRES_MAX.
    pub fn set_chiffres(&mut self, chiffres: usize) {
        self.chiffres = chiffres.clamp(1, CHIFFRES_MAX);
    }
}
