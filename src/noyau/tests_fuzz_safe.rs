//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - chaque expression générée porte sa valeur de référence (calculée à la génération)
//! - seule erreur attendue sur une expression bien formée : division par zéro
//! - invariant clé : la RPN produite laisse exactement une valeur

use std::time::{Duration, Instant};

use super::erreur::CalcError;
use super::jetons::Tok;
use super::rpn::{retirer_espaces, to_rpn};
use super::{eval_expression, evaluate};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Texte + valeur de référence (None si une division par zéro apparaît).
struct Genere {
    texte: String,
    valeur: Option<f64>,
}

fn espace(rng: &mut Rng) -> &'static str {
    match rng.pick(4) {
        0 => " ",
        1 => "  ",
        _ => "",
    }
}

fn gen_nombre(rng: &mut Rng) -> Genere {
    // inclut 0 (utile pour provoquer des divisions par zéro)
    const DECIMAUX: [(&str, f64); 6] = [
        ("0.5", 0.5),
        ("2.25", 2.25),
        ("10.75", 10.75),
        ("0.125", 0.125),
        ("3.0", 3.0),
        ("0", 0.0),
    ];
    if rng.coin() {
        let n = rng.pick(100);
        Genere {
            texte: n.to_string(),
            valeur: Some(f64::from(n)),
        }
    } else {
        let (t, v) = DECIMAUX[rng.pick(DECIMAUX.len() as u32) as usize];
        Genere {
            texte: t.to_string(),
            valeur: Some(v),
        }
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> Genere {
    if depth == 0 || rng.pick(5) == 0 {
        return gen_nombre(rng);
    }

    if rng.pick(6) == 0 {
        // moins unaire, sur un atome ou un groupe
        let x = gen_expr(rng, depth - 1);
        let texte = if x.texte.starts_with('(') || !x.texte.starts_with('-') {
            format!("-{}{}", espace(rng), x.texte)
        } else {
            format!("-({})", x.texte)
        };
        return Genere {
            texte,
            valeur: x.valeur.map(|v| 0.0 - v),
        };
    }

    let a = gen_expr(rng, depth - 1);
    let b = gen_expr(rng, depth - 1);
    let (op, valeur) = match rng.pick(4) {
        0 => ('+', a.valeur.zip(b.valeur).map(|(x, y)| x + y)),
        1 => ('-', a.valeur.zip(b.valeur).map(|(x, y)| x - y)),
        2 => ('*', a.valeur.zip(b.valeur).map(|(x, y)| x * y)),
        _ => (
            '/',
            a.valeur
                .zip(b.valeur)
                .and_then(|(x, y)| if y == 0.0 { None } else { Some(x / y) }),
        ),
    };

    let (s1, s2) = (espace(rng), espace(rng));
    Genere {
        texte: format!("({}{s1}{op}{s2}{})", a.texte, b.texte),
        valeur,
    }
}

/* ------------------------ Helpers ------------------------ */

fn meme_valeur(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// Nombre de valeurs laissées par une RPN (sans évaluer).
fn solde_rpn(rpn: &[Tok]) -> i64 {
    rpn.iter()
        .map(|t| if t.is_operateur() { -1 } else { 1 })
        .sum()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_reference_et_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 5);
        let r1 = evaluate(&g.texte);
        let r2 = evaluate(&g.texte);

        match (&r1, g.valeur) {
            (Ok(v), Some(attendu)) => {
                assert!(
                    meme_valeur(*v, attendu),
                    "expr={:?} v={v} attendu={attendu}",
                    g.texte
                );
                seen_ok += 1;
            }
            (Err(CalcError::DivisionByZero), None) => seen_err += 1,
            _ => panic!("expr={:?} r={r1:?} attendu={:?}", g.texte, g.valeur),
        }

        // même entrée => même sortie
        match (r1, r2) {
            (Ok(a), Ok(b)) => assert!(meme_valeur(a, b), "expr={:?}", g.texte),
            (a, b) => assert_eq!(a, b, "expr={:?}", g.texte),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_rpn_laisse_une_valeur() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 6);
        let s = retirer_espaces(&g.texte);
        let rpn = to_rpn(&s, None).unwrap_or_else(|e| panic!("expr={:?} err={e}", g.texte));

        assert_eq!(solde_rpn(&rpn), 1, "expr={:?}", g.texte);
        assert!(
            !rpn.iter().any(|t| matches!(t, Tok::LPar | Tok::RPar)),
            "parenthèse en sortie RPN: expr={:?}",
            g.texte
        );
    }
}

#[test]
fn fuzz_safe_mutations_sans_panique() {
    // Expressions bien formées puis abîmées (un caractère remplacé) :
    // toute sortie est acceptable tant que rien ne panique,
    // et les erreurs restent dans la taxonomie.
    const ALPHABET: [char; 12] = ['(', ')', '+', '-', '*', '/', '.', '0', '7', 'x', ' ', '^'];

    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let mut rng = Rng::new(0x5EED_u64);

    for _ in 0..300 {
        budget(t0, max);

        let g = gen_expr(&mut rng, 4);
        let mut chars: Vec<char> = g.texte.chars().collect();
        let i = rng.pick(chars.len() as u32) as usize;
        chars[i] = ALPHABET[rng.pick(ALPHABET.len() as u32) as usize];
        let abime: String = chars.into_iter().collect();

        match eval_expression(&abime, Some(64)) {
            Ok(_) => {}
            Err(
                CalcError::UnmatchedParentheses
                | CalcError::InvalidCharacter { .. }
                | CalcError::InsufficientOperands { .. }
                | CalcError::DivisionByZero
                | CalcError::MalformedExpression { .. },
            ) => {}
            Err(e) => panic!("erreur hors taxonomie: expr={abime:?} err={e}"),
        }
    }
}
