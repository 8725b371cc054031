use crate::Petri::stoichiometry_parser::DirectedReaction;
use std::collections::{HashMap, HashSet};

/// symbols have the shape `:A0`, `:A1`, ... - valid symbol literals in the
/// generated net documents
pub const SPECIES_SYMBOL_PREFIX: &str = ":A";

/// Bijective mapping between species names and generated symbols, built once
/// after the accepted reaction set is complete and immutable afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesRegistry {
    /// distinct species names in assignment order; index i owns symbol `:A<i>`
    pub species: Vec<String>,
    pub symbol_from_species: HashMap<String, String>,
    pub species_from_symbol: HashMap<String, String>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerates every species referenced by any consumed or produced map of
    /// the accepted reactions and assigns each a symbol. Names are sorted
    /// lexicographically before assignment, so the numbering does not depend
    /// on hash iteration order and is identical across runs.
    pub fn build(reactions: &[DirectedReaction]) -> Self {
        let mut all_species: HashSet<&String> = HashSet::new();
        for reaction in reactions {
            all_species.extend(reaction.consumed.keys());
            all_species.extend(reaction.produced.keys());
        }
        let mut species: Vec<String> = all_species.into_iter().cloned().collect();
        species.sort();
        let mut symbol_from_species = HashMap::new();
        let mut species_from_symbol = HashMap::new();
        for (i, name) in species.iter().enumerate() {
            let symbol = format!("{}{}", SPECIES_SYMBOL_PREFIX, i);
            symbol_from_species.insert(name.clone(), symbol.clone());
            species_from_symbol.insert(symbol, name.clone());
        }
        Self {
            species,
            symbol_from_species,
            species_from_symbol,
        }
    }

    pub fn symbol(&self, species_name: &str) -> Option<&str> {
        self.symbol_from_species.get(species_name).map(|s| s.as_str())
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Petri::stoichiometry_parser::ReagentMap;

    fn reaction(consumed: &[(&str, usize)], produced: &[(&str, usize)]) -> DirectedReaction {
        DirectedReaction {
            consumed: consumed
                .iter()
                .map(|(n, m)| (n.to_string(), *m))
                .collect::<ReagentMap>(),
            produced: produced
                .iter()
                .map(|(n, m)| (n.to_string(), *m))
                .collect::<ReagentMap>(),
        }
    }

    #[test]
    fn test_symbols_are_assigned_in_sorted_order() {
        let registry = SpeciesRegistry::build(&[reaction(&[("C", 1), ("A", 2)], &[("B", 1)])]);
        assert_eq!(registry.species, vec!["A", "B", "C"]);
        assert_eq!(registry.symbol("A"), Some(":A0"));
        assert_eq!(registry.symbol("B"), Some(":A1"));
        assert_eq!(registry.symbol("C"), Some(":A2"));
    }

    #[test]
    fn test_species_are_deduplicated_across_reactions() {
        let registry = SpeciesRegistry::build(&[
            reaction(&[("A", 1)], &[("B", 1)]),
            reaction(&[("B", 1)], &[("A", 1)]),
        ]);
        assert_eq!(registry.species_count(), 2);
    }

    #[test]
    fn test_mapping_is_bijective() {
        let registry = SpeciesRegistry::build(&[reaction(&[("X", 1)], &[("Y", 3)])]);
        for name in &registry.species {
            let symbol = registry.symbol(name).unwrap();
            assert_eq!(registry.species_from_symbol.get(symbol), Some(name));
        }
        assert_eq!(
            registry.symbol_from_species.len(),
            registry.species_from_symbol.len()
        );
    }

    #[test]
    fn test_empty_reaction_list_gives_empty_registry() {
        let registry = SpeciesRegistry::build(&[]);
        assert_eq!(registry.species_count(), 0);
        assert_eq!(registry.symbol("A"), None);
    }

    #[test]
    fn test_unknown_species_has_no_symbol() {
        let registry = SpeciesRegistry::build(&[reaction(&[("A", 1)], &[])]);
        assert_eq!(registry.symbol("Z"), None);
    }
}
