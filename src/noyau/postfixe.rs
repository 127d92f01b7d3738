// src/noyau/postfixe.rs
//
// Évaluation d’une RPN avec une pile de valeurs (f64, IEEE).

use num_traits::Zero;

use super::erreur::CalcError;
use super::jetons::Tok;
use super::pile::Pile;

/// Évalue une RPN de gauche à droite.
///
/// - nombre    : empilé
/// - opérateur : dépile b (sommet) puis a, empile `a op b`
/// - à la fin, il doit rester exactement une valeur
///
/// `capacite` borne la pile de valeurs (None = illimitée).
pub fn eval_rpn(rpn: &[Tok], capacite: Option<usize>) -> Result<f64, CalcError> {
    let mut valeurs: Pile<f64> = Pile::new(capacite)?;

    for &tok in rpn {
        match tok {
            Tok::Num(v) => valeurs.push(v)?,

            op if op.is_operateur() => {
                if valeurs.len() < 2 {
                    return Err(CalcError::InsufficientOperands {
                        operateur: op.symbole().unwrap_or('?'),
                    });
                }
                let b = valeurs.pop()?;
                let a = valeurs.pop()?;
                valeurs.push(applique(op, a, b)?)?;
            }

            // '(' / ')' n’ont rien à faire dans une RPN
            autre => return Err(CalcError::UnknownToken(autre.to_string())),
        }
    }

    if valeurs.len() != 1 {
        return Err(CalcError::MalformedExpression {
            restants: valeurs.len(),
        });
    }
    Ok(valeurs.pop()?)
}

fn applique(op: Tok, a: f64, b: f64) -> Result<f64, CalcError> {
    match op {
        Tok::Plus => Ok(a + b),
        Tok::Minus => Ok(a - b),
        Tok::Star => Ok(a * b),
        Tok::Slash if b.is_zero() => Err(CalcError::DivisionByZero),
        Tok::Slash => Ok(a / b),
        autre => Err(CalcError::UnknownToken(autre.to_string())),
    }
}
