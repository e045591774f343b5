mod builder;
pub mod parser;
pub mod writer;

use anyhow::{bail, Context, Result};
use log::info;
use mf_format::Model;
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use crate::{config::Config, utils};

pub use self::parser::ParserError;
pub use self::writer::WriterError;

/// Binary model extension, see [`Model::to_bytes`].
pub const BINARY_EXTENSION: &str = "mfm";

/// Loads a model, picking the format from the file extension.
pub fn load(path: &Path, config: &Config) -> Result<Model> {
    info!("Loading model: {}", path.display());

    let model = match utils::extension(path).as_deref() {
        Some("obj") => {
            let file = File::open(path)
                .with_context(|| format!("Could not open model: {}", path.display()))?;
            parser::parse(BufReader::new(file), &config.reader)
                .with_context(|| format!("Could not parse model: {}", path.display()))?
        }
        Some(BINARY_EXTENSION) => Model::from_file(path)
            .with_context(|| format!("Could not decode model: {}", path.display()))?,
        _ => bail!("Unsupported model format: {}", path.display()),
    };

    info!(
        "Loaded {} vertices and {} polygons",
        model.vertex_count(),
        model.polygon_count()
    );
    Ok(model)
}

/// Saves a model as OBJ text or in the binary format, depending on the
/// extension of `path`.
pub fn save(model: &Model, path: &Path, config: &Config) -> Result<()> {
    match utils::extension(path).as_deref() {
        Some("obj") => {
            let file = File::create(path)
                .with_context(|| format!("Could not create file: {}", path.display()))?;
            writer::write(model, BufWriter::new(file), &config.writer)
                .with_context(|| format!("Could not write model: {}", path.display()))?;
        }
        Some(BINARY_EXTENSION) => {
            let data = model.to_bytes().context("Could not serialize model")?;
            utils::write_file(path, &data)?;
        }
        _ => bail!(
            "Unsupported output format: {} (expected .obj or .{})",
            path.display(),
            BINARY_EXTENSION
        ),
    }

    info!("Saved model: {}", path.display());
    Ok(())
}
