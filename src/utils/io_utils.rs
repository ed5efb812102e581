use super::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writer for the annotation report: the given path, or stdout when absent.
pub fn open_output_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| format!("Failed to create {}: {}", path.display(), e))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}
