// src/noyau/erreur.rs

use thiserror::Error;

use super::pile::StackError;

/// Erreurs du noyau. Chaque variante interrompt l’évaluation en cours ;
/// aucun résultat partiel n’est produit.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error("parenthèses non appariées")]
    UnmatchedParentheses,

    /// `position` : index (en caractères) dans l’expression sans espaces.
    #[error("caractère invalide '{caractere}' en position {position}")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("opérandes insuffisants pour '{operateur}'")]
    InsufficientOperands { operateur: char },

    #[error("division par zéro")]
    DivisionByZero,

    /// `restants` : taille de la pile de valeurs en fin d’évaluation (≠ 1).
    #[error("expression invalide ({restants} valeur(s) restante(s))")]
    MalformedExpression { restants: usize },

    #[error("jeton inconnu en RPN: '{0}'")]
    UnknownToken(String),

    #[error(transparent)]
    Stack(#[from] StackError),
}
