use crate::Petri::errors::PetriError;
use crate::Petri::petri_serializer::{write_combined_artifact, write_reaction_artifacts};
use crate::Petri::reaction_extractor::{ReactionEquation, extract_equations};
use crate::Petri::species_registry::SpeciesRegistry;
use crate::Petri::stoichiometry_parser::{DirectedReaction, ReagentMap, build_directed_reactions};
use crate::settings::Settings;
use log::info;
use prettytable::{Cell, Row, Table};
use std::fs;

/// THE STRUCT PetriData COLLECTS EVERYTHING ONE CONVERSION RUN PRODUCES.
/// It threads the stages explicitly: raw table text -> reaction equations ->
/// directed reactions -> species registry -> net artifacts. Each stage
/// consumes the field the previous stage filled; nothing lives outside the
/// struct, so two runs cannot interfere with each other.
#[derive(Debug, Clone, Default)]
pub struct PetriData {
    /// raw text of the reaction table
    pub table_text: Option<String>,
    /// equations extracted from compartment-tagged rows, in input order
    pub equations: Vec<ReactionEquation>,
    /// validated directed reactions (reversible equations already expanded)
    pub reactions: Vec<DirectedReaction>,
    /// species -> symbol mapping over the full accepted reaction set
    pub registry: SpeciesRegistry,
}

impl PetriData {
    pub fn new() -> Self {
        Self::default()
    }

    /////////////////////////////////SETTING THE TABLE///////////////////////////////////////////
    /// read the reaction table from disk; unreadable input is fatal
    pub fn read_table(&mut self, path: &str) -> Result<(), PetriError> {
        let table_text = fs::read_to_string(path).map_err(|e| PetriError::ReadTable {
            path: path.to_string(),
            source: e,
        })?;
        info!("read reaction table {} ({} bytes)", path, table_text.len());
        self.table_text = Some(table_text);
        Ok(())
    }

    /// set the table text directly, bypassing the filesystem
    pub fn set_table_directly(&mut self, table_text: String) {
        self.table_text = Some(table_text);
    }

    /////////////////////////////////BUILDING THE NET///////////////////////////////////////////
    /// scan the table for compartment-tagged reaction rows
    pub fn extract_equations(&mut self) {
        if let Some(table_text) = &self.table_text {
            self.equations = extract_equations(table_text);
            info!("extracted {} reaction equations", self.equations.len());
        } else {
            println!("PetriData::extract_equations: table_text is None");
        }
    }

    /// validate stoichiometry and expand reversible equations
    pub fn build_reactions(&mut self) {
        self.reactions = build_directed_reactions(&self.equations);
        info!("accepted {} directed reactions", self.reactions.len());
    }

    /// assign symbols; must run after the accepted reaction set is complete
    pub fn build_registry(&mut self) {
        self.registry = SpeciesRegistry::build(&self.reactions);
    }

    pub fn species_count(&self) -> usize {
        self.registry.species_count()
    }

    ///////////////////////////INPUT/OUTPUT/////////////////////////////////////////////////////
    /// write one artifact per reaction plus the combined artifact
    pub fn write_artifacts(&self, settings: &Settings) -> Result<(), PetriError> {
        write_reaction_artifacts(
            &settings.net_name,
            &self.reactions,
            &self.registry,
            &settings.output_dir,
        )?;
        write_combined_artifact(
            &settings.net_name,
            &self.reactions,
            &self.registry,
            &settings.combined_path,
        )?;
        Ok(())
    }

    /// printlns the accepted transitions as a table
    pub fn pretty_print_transitions(&self) {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("transition"),
            Cell::new("consumed"),
            Cell::new("produced"),
        ]));
        for (i, reaction) in self.reactions.iter().enumerate() {
            table.add_row(Row::new(vec![
                Cell::new(&format!(":t{}", i)),
                Cell::new(&format_side(&reaction.consumed)),
                Cell::new(&format_side(&reaction.produced)),
            ]));
        }
        table.printstd();
    }

    /// the whole conversion in one call
    pub fn run_full_pipeline(&mut self, settings: &Settings) -> Result<(), PetriError> {
        self.read_table(&settings.input_path)?;
        self.extract_equations();
        self.build_reactions();
        self.build_registry();
        self.write_artifacts(settings)?;
        self.pretty_print_transitions();
        println!("detected {} many species", self.species_count());
        Ok(())
    }
}

/// human-readable reagent side for the report table, e.g. "(2) A + B"
fn format_side(side: &ReagentMap) -> String {
    let mut entries: Vec<(&String, usize)> = side.iter().map(|(n, m)| (n, *m)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .iter()
        .map(|(name, multiplicity)| {
            if *multiplicity == 1 {
                name.to_string()
            } else {
                format!("({}) {}", multiplicity, name)
            }
        })
        .collect::<Vec<String>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_side() {
        let side = ReagentMap::from([("B".to_string(), 1), ("A".to_string(), 2)]);
        assert_eq!(format_side(&side), "(2) A + B");
        assert_eq!(format_side(&ReagentMap::new()), "");
    }

    #[test]
    fn test_stages_thread_through_the_struct() {
        let mut petri_data = PetriData::new();
        petri_data.set_table_directly(
            "foo\tbar\t[c]: r1: (2) A + B --> C\tbaz".to_string(),
        );
        petri_data.extract_equations();
        assert_eq!(petri_data.equations.len(), 1);
        petri_data.build_reactions();
        assert_eq!(petri_data.reactions.len(), 1);
        petri_data.build_registry();
        assert_eq!(petri_data.species_count(), 3);
    }

    #[test]
    fn test_extract_without_table_leaves_equations_empty() {
        let mut petri_data = PetriData::new();
        petri_data.extract_equations();
        assert!(petri_data.equations.is_empty());
    }
}
