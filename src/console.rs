// src/console.rs
//
// Mode console : une expression par ligne.
// - résultat sur `sortie`, erreurs sur `erreurs`
// - une faute n’arrête pas la boucle
// - fin : fin d’entrée, "quit" ou "exit"
// - "rpn <jetons>" évalue directement une RPN ("rpn 3 4 + 2 *")

use std::io::{self, BufRead, Write};

use crate::noyau::{eval_expression, eval_rpn_texte, format_resultat, CalcError};
use crate::reglages::Reglages;

const INVITE: &str = "Entrez une expression : ";

pub fn run<R, W, E>(
    entree: R,
    sortie: &mut W,
    erreurs: &mut E,
    reglages: &Reglages,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(sortie, "Bienvenue dans la calculatrice !")?;
    writeln!(sortie)?;

    let mut lignes = entree.lines();
    loop {
        write!(sortie, "{INVITE}")?;
        sortie.flush()?;

        let Some(ligne) = lignes.next() else {
            writeln!(sortie)?;
            break;
        };
        let ligne = ligne?;
        let ligne = ligne.trim();

        match ligne {
            "" => continue,
            "quit" | "exit" => break,
            _ => {}
        }

        match evalue_ligne(ligne, reglages) {
            Ok(v) => writeln!(
                sortie,
                "Résultat : {}",
                format_resultat(v, reglages.chiffres)
            )?,
            Err(e) => {
                tracing::warn!("{ligne:?} : {e}");
                writeln!(erreurs, "Erreur d’évaluation : {e}")?;
            }
        }
    }

    Ok(())
}

fn evalue_ligne(ligne: &str, reglages: &Reglages) -> Result<f64, CalcError> {
    match ligne.strip_prefix("rpn ") {
        Some(rpn) => eval_rpn_texte(rpn, reglages.capacite_pile),
        None => eval_expression(ligne, reglages.capacite_pile).map(|(v, _d)| v),
    }
}
