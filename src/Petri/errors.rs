use thiserror::Error;

/// error types of the conversion pipeline; only file I/O is fatal, everything
/// upstream of it degrades by dropping the offending row or reaction
#[derive(Debug, Error)]
pub enum PetriError {
    #[error("Failed to read reaction table {path}: {source}")]
    ReadTable { path: String, source: std::io::Error },
    #[error("Failed to write net artifact {path}: {source}")]
    WriteArtifact { path: String, source: std::io::Error },
    #[error("Species {0} is missing from the registry")]
    UnknownSpecies(String),
}
