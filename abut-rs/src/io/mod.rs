/// Importing raw shape assets into the registry
pub mod import;
