// src/noyau/jetons.rs

use std::fmt;

use super::erreur::CalcError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

impl Tok {
    /// Opérateur binaire correspondant au caractère, s’il y en a un.
    pub fn operateur(c: char) -> Option<Tok> {
        match c {
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        }
    }

    pub fn is_operateur(&self) -> bool {
        matches!(self, Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash)
    }

    /// Symbole d’un jeton non numérique.
    pub fn symbole(&self) -> Option<char> {
        match self {
            Tok::Num(_) => None,
            Tok::Plus => Some('+'),
            Tok::Minus => Some('-'),
            Tok::Star => Some('*'),
            Tok::Slash => Some('/'),
            Tok::LPar => Some('('),
            Tok::RPar => Some(')'),
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(v) => write!(f, "{v}"),
            Tok::Plus => f.write_str("+"),
            Tok::Minus => f.write_str("-"),
            Tok::Star => f.write_str("*"),
            Tok::Slash => f.write_str("/"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Liste de jetons en texte, séparés par un espace (forme postfixe affichée).
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Relit une RPN textuelle (jetons séparés par des blancs).
///
/// Classement d’un jeton :
/// - un seul caractère `+ - * /` => opérateur
/// - commence par un chiffre, ou par `-`/`.` suivi d’autre chose => nombre (f64 fini)
/// - sinon => jeton inconnu
pub fn parse_rpn(texte: &str) -> Result<Vec<Tok>, CalcError> {
    texte.split_whitespace().map(parse_jeton_rpn).collect()
}

fn parse_jeton_rpn(mot: &str) -> Result<Tok, CalcError> {
    let mut chars = mot.chars();
    let premier = chars.next();
    let reste_non_vide = chars.next().is_some();

    if let Some(c) = premier {
        if !reste_non_vide {
            if let Some(op) = Tok::operateur(c) {
                return Ok(op);
            }
        }

        let forme_nombre = c.is_ascii_digit() || ((c == '-' || c == '.') && reste_non_vide);
        if forme_nombre {
            if let Ok(v) = mot.parse::<f64>() {
                if v.is_finite() {
                    return Ok(Tok::Num(v));
                }
            }
        }
    }

    Err(CalcError::UnknownToken(mot.to_string()))
}
