// src/noyau/pile.rs
//
// Pile LIFO générique, bornée ou non.
// - bornée   : capacité fixée à la création (> 0), push échoue si pleine
// - illimitée : Vec qui grandit
// Les accès sur pile vide (pop/top) échouent au lieu de paniquer.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("capacité de pile invalide (doit être > 0)")]
    InvalidCapacity,
    #[error("pile pleine (capacité {capacite})")]
    Overflow { capacite: usize },
    #[error("pile vide")]
    Empty,
}

#[derive(Clone, Debug)]
pub struct Pile<T> {
    elements: Vec<T>,
    capacite: Option<usize>,
}

impl<T> Pile<T> {
    /// Pile bornée. `capacite == 0` est refusé.
    pub fn with_capacity(capacite: usize) -> Result<Self, StackError> {
        if capacite == 0 {
            return Err(StackError::InvalidCapacity);
        }
        Ok(Self {
            elements: Vec::with_capacity(capacite),
            capacite: Some(capacite),
        })
    }

    pub fn unbounded() -> Self {
        Self {
            elements: Vec::new(),
            capacite: None,
        }
    }

    /// Bornée si `capacite` est Some, illimitée sinon.
    pub fn new(capacite: Option<usize>) -> Result<Self, StackError> {
        match capacite {
            Some(n) => Self::with_capacity(n),
            None => Ok(Self::unbounded()),
        }
    }

    pub fn push(&mut self, valeur: T) -> Result<(), StackError> {
        if let Some(capacite) = self.capacite {
            if self.elements.len() >= capacite {
                return Err(StackError::Overflow { capacite });
            }
        }
        self.elements.push(valeur);
        Ok(())
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.elements.pop().ok_or(StackError::Empty)
    }

    pub fn top(&self) -> Result<&T, StackError> {
        self.elements.last().ok_or(StackError::Empty)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacite
    }
}

/// Égalité sur le contenu seulement (la capacité n’entre pas en compte).
impl<T: PartialEq> PartialEq for Pile<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}
