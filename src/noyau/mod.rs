//! Noyau de la calculatrice postfixe
//!
//! Organisation interne :
//! - pile.rs     : pile LIFO générique (bornée ou non)
//! - erreur.rs   : CalcError (une variante par faute)
//! - jetons.rs   : Tok + format/relecture RPN textuelle
//! - rpn.rs      : nettoyage, parenthèses, automate infixe -> RPN
//! - postfixe.rs : évaluation RPN (pile de valeurs)
//! - format.rs   : affichage du résultat ("%g")
//! - eval.rs     : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod pile;
pub mod postfixe;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::CalcError;
pub use eval::{eval_expression, eval_rpn_texte, evaluate};
pub use format::format_resultat;
