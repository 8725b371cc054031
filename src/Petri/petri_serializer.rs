use crate::Petri::errors::PetriError;
use crate::Petri::species_registry::SpeciesRegistry;
use crate::Petri::stoichiometry_parser::{DirectedReaction, ReagentMap};
use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::Write;

/// Renders the net document for the given reactions.
///
/// The species list is the union of species referenced by these reactions
/// (a subset of the registry when a single reaction is rendered), sorted and
/// given as symbols. Each reaction at position i becomes a transition labelled
/// `:t<i>` whose input and output sequences repeat a species symbol once per
/// unit of multiplicity. The document is assembled token by token; no
/// placeholder substitution is involved, so species names can never collide
/// with template text.
pub fn serialize_net(
    net_name: &str,
    reactions: &[DirectedReaction],
    registry: &SpeciesRegistry,
) -> Result<String, PetriError> {
    let mut symbols = Vec::new();
    for name in relevant_species(reactions) {
        symbols.push(lookup_symbol(registry, &name)?.to_string());
    }
    let mut transitions = Vec::with_capacity(reactions.len());
    for (i, reaction) in reactions.iter().enumerate() {
        let consumed = expand_symbols(&reaction.consumed, registry)?;
        let produced = expand_symbols(&reaction.produced, registry)?;
        transitions.push(format!(":t{} => (({}) => ({}))", i, consumed, produced));
    }
    let mut document = String::new();
    document.push('\n');
    document.push_str(net_name);
    document.push_str(" = LabelledPetriNet([");
    document.push_str(&symbols.join(", "));
    document.push_str("], \n    ");
    document.push_str(&transitions.join(",\n    "));
    document.push_str("\n) \n");
    Ok(document)
}

/// Writes one single-reaction artifact per accepted directed reaction into
/// the output directory, named by the reaction's position in the list.
pub fn write_reaction_artifacts(
    net_name: &str,
    reactions: &[DirectedReaction],
    registry: &SpeciesRegistry,
    output_dir: &str,
) -> Result<(), PetriError> {
    for (i, reaction) in reactions.iter().enumerate() {
        let document = serialize_net(net_name, std::slice::from_ref(reaction), registry)?;
        let path = format!("{}/reaction-{}.jl", output_dir, i);
        write_artifact(&path, &document)?;
    }
    info!("wrote {} single-reaction artifacts to {}", reactions.len(), output_dir);
    Ok(())
}

/// Writes the combined artifact covering the full accepted reaction list.
pub fn write_combined_artifact(
    net_name: &str,
    reactions: &[DirectedReaction],
    registry: &SpeciesRegistry,
    combined_path: &str,
) -> Result<(), PetriError> {
    let document = serialize_net(net_name, reactions, registry)?;
    write_artifact(combined_path, &document)?;
    info!("wrote combined artifact {}", combined_path);
    Ok(())
}

fn write_artifact(path: &str, document: &str) -> Result<(), PetriError> {
    let mut file = File::create(path).map_err(|e| PetriError::WriteArtifact {
        path: path.to_string(),
        source: e,
    })?;
    file.write_all(document.as_bytes())
        .map_err(|e| PetriError::WriteArtifact {
            path: path.to_string(),
            source: e,
        })
}

/// distinct species referenced by the given reactions, sorted
fn relevant_species(reactions: &[DirectedReaction]) -> Vec<String> {
    let mut relevant: HashSet<&String> = HashSet::new();
    for reaction in reactions {
        relevant.extend(reaction.consumed.keys());
        relevant.extend(reaction.produced.keys());
    }
    let mut relevant: Vec<String> = relevant.into_iter().cloned().collect();
    relevant.sort();
    relevant
}

/// flat comma-joined symbol sequence with multiplicities expanded positionally
fn expand_symbols(side: &ReagentMap, registry: &SpeciesRegistry) -> Result<String, PetriError> {
    let mut entries: Vec<(&String, usize)> = side.iter().map(|(n, m)| (n, *m)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let mut symbols = Vec::new();
    for (name, multiplicity) in entries {
        let symbol = lookup_symbol(registry, name)?;
        for _ in 0..multiplicity {
            symbols.push(symbol.to_string());
        }
    }
    Ok(symbols.join(", "))
}

fn lookup_symbol<'a>(registry: &'a SpeciesRegistry, name: &str) -> Result<&'a str, PetriError> {
    registry
        .symbol(name)
        .ok_or_else(|| PetriError::UnknownSpecies(name.to_string()))
}
