// src/noyau/rpn.rs
//
// Infixe -> RPN (postfixe) par automate à états + shunting-yard
// ---------------------------------------------------------------
// Entrée : expression SANS espaces (voir retirer_espaces) et déjà vérifiée
// par parentheses_equilibrees.
//
// États :
//   Debut, Operateur, ParOuvrante => on attend une opérande
//   Nombre, ParFermante           => on vient de lire une opérande
//   Erreur                        => transition illégale (caractère invalide)
//
// Règles :
// - un nombre commence par un chiffre ; au plus un '.' et toujours suivi d’un chiffre
//   (".75" et "5." sont refusés)
// - moins unaire (quand on attend une opérande) : on injecte 0 => "-x" devient "0 x -".
//   Le '-' unaire est empilé avec une précédence plus forte que * et /,
//   pour que "2/-2*3" vaille (2/(0-2))*3.
// - deux opérateurs binaires consécutifs sont refusés ici, pas à l’évaluation.

use super::erreur::CalcError;
use super::jetons::Tok;
use super::pile::Pile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Etat {
    Debut,
    Nombre,
    Operateur,
    ParOuvrante,
    ParFermante,
    Erreur,
}

impl Etat {
    fn attend_operande(self) -> bool {
        matches!(self, Etat::Debut | Etat::Operateur | Etat::ParOuvrante)
    }
}

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq)]
enum EnAttente {
    Op(Tok),
    MoinsUnaire,
    LPar,
}

impl EnAttente {
    fn precedence(&self) -> u8 {
        match self {
            EnAttente::Op(Tok::Plus | Tok::Minus) => 1,
            EnAttente::Op(Tok::Star | Tok::Slash) => 2,
            EnAttente::MoinsUnaire => 3,
            EnAttente::Op(_) | EnAttente::LPar => 0,
        }
    }

    /// Jeton émis en sortie ('(' n’est jamais émise).
    fn vers_tok(self) -> Option<Tok> {
        match self {
            EnAttente::Op(t) => Some(t),
            EnAttente::MoinsUnaire => Some(Tok::Minus),
            EnAttente::LPar => None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Classe {
    Chiffre,
    Point,
    Op(Tok),
    LPar,
    RPar,
    Autre,
}

fn classe(c: char) -> Classe {
    match c {
        '0'..='9' => Classe::Chiffre,
        '.' => Classe::Point,
        '(' => Classe::LPar,
        ')' => Classe::RPar,
        _ => Tok::operateur(c).map_or(Classe::Autre, Classe::Op),
    }
}

/// Retire tous les blancs (espaces, tabulations, fins de ligne...).
pub fn retirer_espaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Vrai si chaque ')' ferme une '(' ouverte avant elle, et si tout est refermé à la fin.
pub fn parentheses_equilibrees(s: &str) -> bool {
    let mut ouvertes: usize = 0;
    for c in s.chars() {
        match c {
            '(' => ouvertes += 1,
            ')' => match ouvertes.checked_sub(1) {
                Some(n) => ouvertes = n,
                None => return false,
            },
            _ => {}
        }
    }
    ouvertes == 0
}

/// Convertit une expression infixe (sans espaces) en RPN.
///
/// `capacite` borne la pile d’opérateurs (None = illimitée).
///
/// Exemple:
///   "3*(2+5)"  => [3, 2, 5, +, *]
///   "-10-20"   => [0, 10, -, 20, -]
pub fn to_rpn(infixe: &str, capacite: Option<usize>) -> Result<Vec<Tok>, CalcError> {
    let chars: Vec<char> = infixe.chars().collect();
    let mut t = Traducteur {
        chars: &chars,
        ops: Pile::new(capacite)?,
        sortie: Vec::with_capacity(chars.len() + 1),
        etat: Etat::Debut,
        debut_nombre: 0,
        point_vu: false,
    };

    for (i, &c) in chars.iter().enumerate() {
        let suivant = t.transition(i, c)?;
        tracing::trace!("{c:?} : {:?} -> {suivant:?}", t.etat);

        if suivant == Etat::Erreur {
            return Err(CalcError::InvalidCharacter {
                caractere: c,
                position: i,
            });
        }
        t.etat = suivant;
    }

    t.fin_nombre(chars.len())?;

    // vide la pile ops
    while let Ok(e) = t.ops.pop() {
        match e.vers_tok() {
            Some(tok) => t.sortie.push(tok),
            None => return Err(CalcError::UnmatchedParentheses),
        }
    }

    Ok(t.sortie)
}

struct Traducteur<'a> {
    chars: &'a [char],
    ops: Pile<EnAttente>,
    sortie: Vec<Tok>,
    etat: Etat,
    debut_nombre: usize,
    point_vu: bool,
}

impl Traducteur<'_> {
    /// Une transition de l’automate. Renvoie le nouvel état (Erreur si illégal).
    /// Les Err ne viennent que de la pile (capacité) ou d’une ')' orpheline.
    fn transition(&mut self, i: usize, c: char) -> Result<Etat, CalcError> {
        let attend = self.etat.attend_operande();
        let suivi_d_un_chiffre = self.chars.get(i + 1).is_some_and(char::is_ascii_digit);

        let suivant = match (self.etat, classe(c)) {
            (Etat::Erreur, _) | (_, Classe::Autre) => Etat::Erreur,

            (Etat::Nombre, Classe::Chiffre) => Etat::Nombre,
            (Etat::Nombre, Classe::Point) if !self.point_vu && suivi_d_un_chiffre => {
                self.point_vu = true;
                Etat::Nombre
            }
            (_, Classe::Chiffre) if attend => {
                self.debut_nombre = i;
                self.point_vu = false;
                Etat::Nombre
            }

            (_, Classe::Op(Tok::Minus)) if attend => {
                // moins unaire : "-x" => "0 x -"
                // (avec la précédence ordinaire de '-', "2/-2*3" donnerait "2 0 2 3 * - /")
                self.sortie.push(Tok::Num(0.0));
                self.ops.push(EnAttente::MoinsUnaire)?;
                Etat::Operateur
            }
            (Etat::Nombre | Etat::ParFermante, Classe::Op(op)) => {
                self.fin_nombre(i)?;
                self.depile_selon(EnAttente::Op(op))?;
                self.ops.push(EnAttente::Op(op))?;
                Etat::Operateur
            }

            (_, Classe::LPar) if attend => {
                self.ops.push(EnAttente::LPar)?;
                Etat::ParOuvrante
            }
            (Etat::Nombre | Etat::ParFermante, Classe::RPar) => {
                self.fin_nombre(i)?;
                self.depile_jusqu_a_lpar()?;
                Etat::ParFermante
            }

            _ => Etat::Erreur,
        };

        Ok(suivant)
    }

    /// Si un littéral est en cours, l’émet (il s’étend de debut_nombre à fin exclue).
    fn fin_nombre(&mut self, fin: usize) -> Result<(), CalcError> {
        if self.etat != Etat::Nombre {
            return Ok(());
        }
        let debut = self.debut_nombre;
        let texte: String = self.chars[debut..fin].iter().collect();
        // un littéral hors du domaine f64 (inf) est refusé comme dans parse_rpn
        let v = texte
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or(CalcError::InvalidCharacter {
                caractere: self.chars[debut],
                position: debut,
            })?;
        self.sortie.push(Tok::Num(v));
        Ok(())
    }

    /// Dépile tant que le sommet a une précédence >= (associativité à gauche).
    fn depile_selon(&mut self, entrant: EnAttente) -> Result<(), CalcError> {
        while let Ok(&sommet) = self.ops.top() {
            if sommet == EnAttente::LPar || sommet.precedence() < entrant.precedence() {
                break;
            }
            self.ops.pop()?;
            if let Some(tok) = sommet.vers_tok() {
                self.sortie.push(tok);
            }
        }
        Ok(())
    }

    /// Dépile jusqu’à '(' (jetée, pas émise).
    fn depile_jusqu_a_lpar(&mut self) -> Result<(), CalcError> {
        loop {
            match self.ops.pop() {
                Ok(EnAttente::LPar) => return Ok(()),
                Ok(e) => {
                    if let Some(tok) = e.vers_tok() {
                        self.sortie.push(tok);
                    }
                }
                Err(_) => return Err(CalcError::UnmatchedParentheses),
            }
        }
    }
}
