//! Calculatrice postfixe
//!
//! Expression infixe -> RPN (automate à états + shunting-yard) -> valeur f64.
//!
//! ```
//! use calculatrice_postfixe::noyau::{evaluate, CalcError};
//!
//! assert_eq!(evaluate("3 * ( 2 + 5 )"), Ok(21.0));
//! assert_eq!(evaluate("15 / 0"), Err(CalcError::DivisionByZero));
//! ```
//!
//! Autour du noyau : une console ligne à ligne et une fenêtre egui (natif + web).

pub mod app;
pub mod console;
#[cfg(not(target_arch = "wasm32"))]
pub mod journal;
pub mod noyau;
pub mod reglages;
