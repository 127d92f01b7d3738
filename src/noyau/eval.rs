//! Noyau — évaluation (pipeline réel)
//!
//! retirer espaces -> parenthèses équilibrées -> RPN (automate) -> évaluation RPN
//!
//! Aucun état n’est gardé d’un appel à l’autre : piles et tampons sont locaux.

use super::erreur::CalcError;
use super::jetons::{format_tokens, parse_rpn};
use super::postfixe::eval_rpn;
use super::rpn::{parentheses_equilibrees, retirer_espaces, to_rpn};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub sans_espaces: String,
    pub rpn: String,
}

/// API publique : évalue une expression infixe, piles illimitées.
pub fn evaluate(expression: &str) -> Result<f64, CalcError> {
    eval_expression(expression, None).map(|(v, _d)| v)
}

/// Évalue une expression et retourne la valeur + la démarche (forme nettoyée, RPN).
///
/// `capacite` borne les deux piles (opérateurs et valeurs) ; None = illimitées.
pub fn eval_expression(
    expression: &str,
    capacite: Option<usize>,
) -> Result<(f64, DemarcheNoyau), CalcError> {
    // 1) Nettoyage
    let s = retirer_espaces(expression);

    // 2) Parenthèses (échec rapide, avant tout calcul)
    if !parentheses_equilibrees(&s) {
        return Err(CalcError::UnmatchedParentheses);
    }

    // 3) RPN
    let rpn = to_rpn(&s, capacite)?;
    let rpn_txt = format_tokens(&rpn);
    tracing::debug!("{s:?} => RPN [{rpn_txt}]");

    // 4) Valeur
    let v = eval_rpn(&rpn, capacite)?;

    Ok((
        v,
        DemarcheNoyau {
            sans_espaces: s,
            rpn: rpn_txt,
        },
    ))
}

/// Évalue directement une RPN textuelle ("3 4 + 2 *").
pub fn eval_rpn_texte(texte: &str, capacite: Option<usize>) -> Result<f64, CalcError> {
    let rpn = parse_rpn(texte)?;
    eval_rpn(&rpn, capacite)
}
