/// The module takes as input the full text of a tab-separated reaction table
/// and produces the following data:
/// 1) an ordered vector of reaction equations, each split into a left side and
///    a right side on the reaction arrow
/// 2) a reversibility flag for every equation (one-way arrow `-->` or two-way
///    arrow `<==>`)
/// Rows with the wrong field count, a foreign compartment tag, no label colon
/// or no recognizable arrow are dropped silently - the table is produced by an
/// external curation process and malformed rows are not this tool's business.
/// # Examples
/// ```
/// use PetriKin::Petri::reaction_extractor::extract_equations;
/// let table = "R00001\tsome reaction\t[c]: r1: (2) A + B --> C\tEC 1.1.1.1";
/// let equations = extract_equations(table);
/// assert_eq!(equations.len(), 1);
/// assert_eq!(equations[0].lhs, "(2) A + B");
/// assert_eq!(equations[0].rhs, "C");
/// assert!(!equations[0].reversible);
/// ```
pub mod reaction_extractor;
/// The module takes one side of a reaction equation, substances joined by
/// ` + ` with optional parenthesized stoichiometric coefficients, and produces
/// the following data:
/// 1) a map substance name -> integer multiplicity (a bare name counts as 1)
/// 2) an explicit invalid signal (None) when any coefficient on the side is
///    non-integral or malformed - the whole side is rejected, never a part of it
/// It also expands classified equations into directed reactions: a reversible
/// equation yields a forward and a reverse reaction, a reaction with either
/// side invalid is dropped whole while processing continues.
/// # Examples
/// ```
/// use PetriKin::Petri::stoichiometry_parser::parse_reagents;
/// let reagents = parse_reagents("(2) atp + h2o").unwrap();
/// assert_eq!(reagents.get("atp"), Some(&2));
/// assert_eq!(reagents.get("h2o"), Some(&1));
/// assert!(parse_reagents("(0.5) atp").is_none());
/// ```
pub mod stoichiometry_parser;
/// The module collects every distinct species referenced by the accepted
/// directed reactions and assigns each one a symbol of the fixed shape `:A<i>`.
/// Species names are sorted lexicographically before assignment so the
/// numbering is reproducible from run to run. Both lookup directions
/// (name -> symbol, symbol -> name) are kept for the serializer.
pub mod species_registry;
/// The module renders a list of directed reactions and the species registry
/// into the textual `LabelledPetriNet` literal consumed by downstream
/// simulation tooling, and writes the artifacts: one file per accepted
/// directed reaction plus one combined file. Multiplicities are expanded
/// positionally - a species consumed twice contributes its symbol twice to the
/// transition's input sequence.
/// # Examples
/// ```
/// use PetriKin::Petri::reaction_extractor::extract_equations;
/// use PetriKin::Petri::stoichiometry_parser::build_directed_reactions;
/// use PetriKin::Petri::species_registry::SpeciesRegistry;
/// use PetriKin::Petri::petri_serializer::serialize_net;
/// let equations = extract_equations("R2\tx\t[c]: r2: X <==> Y\tEC 2.1.1.1");
/// let reactions = build_directed_reactions(&equations);
/// let registry = SpeciesRegistry::build(&reactions);
/// let document = serialize_net("Demo", &reactions, &registry).unwrap();
/// assert!(document.contains(":t0 => ((:A0) => (:A1))"));
/// assert!(document.contains(":t1 => ((:A1) => (:A0))"));
/// ```
pub mod petri_serializer;
/// error types of the conversion pipeline
pub mod errors;
/// The module holds the PetriData struct which threads the whole conversion:
/// table text -> reaction equations -> directed reactions -> species registry
/// -> net artifacts, with no state outside the struct itself.
pub mod petri_pipeline;
