use std::error::Error;
use std::fs::{self, File};
use std::io::prelude::*;
use std::path::Path;

use crate::level::Level;
use crate::LoadLevel;

impl LoadLevel for str {
    fn load_level(&self) -> Result<Level, Box<dyn Error>> {
        let level = read_file(self)?;
        Ok(level.parse::<Level>()?)
    }
}

pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Box<dyn Error>> {
    let mut file = File::open(path)?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Creates missing parent directories.
pub(crate) fn write_file<P: AsRef<Path>>(path: P, text: &str) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut file = File::create(path)?;
    file.write_all(text.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::*;

    #[test]
    fn loading_levels() {
        let level = "levels/scenario-c.txt".load_level().unwrap();
        assert_eq!(level.state.boxes().len(), 1);

        assert!("levels/does-not-exist.txt".load_level().is_err());
    }

    #[test]
    fn writing_and_reading() {
        let dir = env::temp_dir().join(format!("sokoban-search-fs-{}", std::process::id()));
        let path = dir.join("nested").join("file.txt");
        write_file(&path, "#@ #\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "#@ #\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
