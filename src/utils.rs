use anyhow::{anyhow, Context, Result};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

pub fn file_name(path: &Path) -> Result<&str> {
    path.file_stem()
        .ok_or_else(|| anyhow!("No file stem found: {}", path.display()))?
        .to_str()
        .ok_or_else(|| anyhow!("Can't convert file stem to string"))
}

/// Lowercased extension, if the path has one.
pub fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|x| x.to_str())
        .map(|x| x.to_ascii_lowercase())
}

pub fn combine_path(directory: &Path, file_name: &str, extension: &str) -> Result<PathBuf> {
    Ok(directory.join(format!("{}.{}", file_name, extension)))
}

pub fn write_file(target: &Path, data: &[u8]) -> Result<()> {
    let mut buffer = File::create(target)
        .with_context(|| format!("Could not create file: {}", target.display()))?;
    buffer
        .write_all(data)
        .with_context(|| format!("Could not write data to file: {}", target.display()))?;
    buffer
        .flush()
        .with_context(|| format!("Could not flush file: {}", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utils_paths() -> Result<()> {
        let path = Path::new("models/Cube.OBJ");

        assert_eq!(file_name(path)?, "Cube");
        assert_eq!(extension(path).as_deref(), Some("obj"));
        assert_eq!(extension(Path::new("models/cube")), None);
        assert_eq!(
            combine_path(Path::new("models"), "cube", "toml")?,
            PathBuf::from("models/cube.toml")
        );

        Ok(())
    }

    #[test]
    fn utils_write_file() -> Result<()> {
        let target = std::env::temp_dir().join(format!("meshform-{}-utils.bin", std::process::id()));

        write_file(&target, &[1, 2, 3])?;
        assert_eq!(std::fs::read(&target)?, vec![1, 2, 3]);

        write_file(&target, b"v 1 2 3")?;
        assert_eq!(std::fs::read(&target)?, b"v 1 2 3".to_vec());

        std::fs::remove_file(&target)?;

        let missing = target.join("nested").join("out.bin");
        assert!(write_file(&missing, &[0]).is_err());

        Ok(())
    }
}
