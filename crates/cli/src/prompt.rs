//! Saisie interactive des paramètres entiers

use anyhow::Result;
use console::{style, Term};
use motifgen_core::Parameter;
use std::io::{self, BufRead};

/// Source de réponses aux questions posées à l'utilisateur
pub trait Prompter {
    /// Pose une question et retourne la ligne saisie
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Saisie au terminal (questions sur stderr, réponses sur stdin)
pub struct TermPrompter {
    term: Term,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self { term: Term::stderr() }
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self.term.write_str(&format!("{} ", style(question).bold()))?;
        self.term.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "entrée standard fermée avant une valeur valide",
            ));
        }
        Ok(line)
    }
}

fn question(parameter: Parameter) -> String {
    let label = match parameter {
        Parameter::SequenceCount => "Nombre de séquences",
        Parameter::SequenceLength => "Longueur de chaque séquence",
        Parameter::MotifSize => "Taille du motif",
    };
    let range = parameter.range();
    format!("{} [{}-{}]:", label, range.start(), range.end())
}

/// Retourne `initial` s'il est valide, sinon redemande jusqu'à une valeur valide
///
/// Les valeurs hors plage ne sont jamais ramenées dans la plage.
pub fn prompt_until_valid<P: Prompter + ?Sized>(
    prompter: &mut P,
    parameter: Parameter,
    initial: Option<usize>,
) -> Result<usize> {
    if let Some(value) = initial {
        if parameter.is_valid(value) {
            return Ok(value);
        }
        tracing::warn!("{} = {} hors plage, nouvelle saisie demandée", parameter, value);
    }

    let question = question(parameter);
    loop {
        let answer = prompter.ask(&question)?;
        match answer.trim().parse::<usize>() {
            Ok(value) if parameter.is_valid(value) => return Ok(value),
            _ => tracing::debug!("Saisie rejetée pour {}: {:?}", parameter, answer.trim()),
        }
    }
}

/// Réponses prédéfinies, pour les tests
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::collections::VecDeque<String>,
    asked: usize,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            asked: 0,
        }
    }

    pub fn asked(&self) -> usize {
        self.asked
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn ask(&mut self, _question: &str) -> io::Result<String> {
        self.asked += 1;
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "plus de réponses"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_initial_value() {
        let mut prompter = ScriptedPrompter::new(&[]);
        let value = prompt_until_valid(&mut prompter, Parameter::MotifSize, Some(4)).unwrap();
        assert_eq!(value, 4);
        assert_eq!(prompter.asked(), 0);
    }

    #[test]
    fn test_out_of_range_is_reprompted() {
        let mut prompter = ScriptedPrompter::new(&["999", " 2000001 ", "-5", "1000\n"]);
        let value = prompt_until_valid(&mut prompter, Parameter::SequenceCount, None).unwrap();
        assert_eq!(value, 1000);
        assert_eq!(prompter.asked(), 4);
    }

    #[test]
    fn test_invalid_initial_is_not_clamped() {
        let mut prompter = ScriptedPrompter::new(&["100"]);
        let value = prompt_until_valid(&mut prompter, Parameter::SequenceLength, Some(500)).unwrap();
        assert_eq!(value, 100);
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut prompter = ScriptedPrompter::new(&["3"]);
        assert!(prompt_until_valid(&mut prompter, Parameter::MotifSize, None).is_err());
    }

    #[test]
    fn test_question_shows_range() {
        assert_eq!(question(Parameter::MotifSize), "Taille du motif [4-10]:");
    }
}
