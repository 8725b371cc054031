use crate::Petri::reaction_extractor::ReactionEquation;
use log::debug;
use regex::Regex;
use std::collections::HashMap;

/// substance name -> stoichiometric multiplicity for one side of a reaction
pub type ReagentMap = HashMap<String, usize>;

/// One directed reaction: the substances it consumes and the substances it
/// produces. A reversible equation expands into two of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedReaction {
    pub consumed: ReagentMap,
    pub produced: ReagentMap,
}

/// Parses one side of a reaction equation, substances joined by ` + `.
///
/// A token of the form `(m) name` contributes multiplicity m, a bare `name`
/// contributes multiplicity 1. Returns None when any coefficient on the side
/// is non-integral, not a numeral, or below 1 - the whole side is rejected,
/// never a part of it. A side with no valid tokens at all is the degenerate
/// empty map (influx/outflux reactions have one empty side).
///
/// If the same substance appears in several tokens of one side the later
/// token wins. The upstream tables do not do this on purpose, see DESIGN.md.
pub fn parse_reagents(side: &str) -> Option<ReagentMap> {
    let coefficient_re = Regex::new(r"^\((\d+(?:\.\d+)?)\)$").unwrap();
    let mut reagents = ReagentMap::new();
    for token in side.split(" + ") {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let words: Vec<&str> = token.split_whitespace().collect();
        let (coefficient, name) = match words.as_slice() {
            [name] => ("(1)", *name),
            [coefficient, name] => (*coefficient, *name),
            _ => {
                debug!("reagent token not of shape '(m) name', side invalid: {}", token);
                return None;
            }
        };
        let multiplicity = parse_multiplicity(&coefficient_re, coefficient)?;
        reagents.insert(name.to_string(), multiplicity);
    }
    Some(reagents)
}

/// `(m)` literal -> integer multiplicity; fractional values are a validation
/// failure, not something to round
fn parse_multiplicity(coefficient_re: &Regex, coefficient: &str) -> Option<usize> {
    let caps = coefficient_re.captures(coefficient)?;
    let value: f64 = caps.get(1).unwrap().as_str().parse().ok()?;
    if value.fract() != 0.0 || value < 1.0 {
        debug!("coefficient {} is not a positive integer, side invalid", coefficient);
        return None;
    }
    Some(value as usize)
}

/// Expands classified equations into directed reactions.
///
/// A one-way equation yields one reaction, a reversible equation yields the
/// forward and the reverse reaction in immediate succession. A reaction with
/// either side invalid is dropped whole; the remaining equations are still
/// processed.
pub fn build_directed_reactions(equations: &[ReactionEquation]) -> Vec<DirectedReaction> {
    let mut reactions = Vec::new();
    for equation in equations {
        let lhs = parse_reagents(&equation.lhs);
        let rhs = parse_reagents(&equation.rhs);
        let (Some(lhs), Some(rhs)) = (lhs, rhs) else {
            debug!(
                "reaction '{} / {}' dropped, one side failed to validate",
                equation.lhs, equation.rhs
            );
            continue;
        };
        reactions.push(DirectedReaction {
            consumed: lhs.clone(),
            produced: rhs.clone(),
        });
        if equation.reversible {
            reactions.push(DirectedReaction {
                consumed: rhs,
                produced: lhs,
            });
        }
    }
    reactions
}
