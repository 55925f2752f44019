use std::io::Write;
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;

use super::TranslationUnit;
use super::super::error::CompileError;

/// Directory a path lives in, the working directory for a bare file name.
pub fn destination_directory(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Writes a translation unit to its destination.
///
/// The text is written to a temporary file in the destination directory which is then renamed
/// over the destination. Any failure drops the temporary file, a partially written unit is never
/// visible under the destination name.
///
/// With echo set the same text is also written to stdout.
pub fn write_artifact(unit: &TranslationUnit, destination: &Path, echo: bool) -> Result<(), CompileError> {
    let text = unit.to_string();

    let mut file = NamedTempFile::new_in(destination_directory(destination))?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    file.persist(destination)
        .map_err(|error| CompileError::Io(error.error))?;

    if echo {
        print!("{}", text);
    }

    info!("Successfully wrote to {}", destination.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use super::*;

    fn unit() -> TranslationUnit {
        TranslationUnit {
            statements: String::from("int _jagle_a = 1;\n"),
            ..TranslationUnit::default()
        }
    }

    #[test]
    fn test_destination_directory() {
        assert_eq!(Path::new("."), destination_directory(Path::new("hello.cpp")));
        assert_eq!(Path::new("out"), destination_directory(Path::new("out/hello.cpp")));
    }

    #[test]
    fn test_write_artifact() {
        let directory = tempfile::tempdir().unwrap();
        let destination = directory.path().join("out.cpp");

        write_artifact(&unit(), &destination, false).unwrap();

        assert_eq!(unit().to_string(), fs::read_to_string(&destination).unwrap());
        // Only the artifact remains, the temporary file has been renamed
        assert_eq!(1, fs::read_dir(directory.path()).unwrap().count());
    }

    #[test]
    fn test_write_artifact_replaces_previous() {
        let directory = tempfile::tempdir().unwrap();
        let destination = directory.path().join("out.cpp");
        fs::write(&destination, "stale").unwrap();

        write_artifact(&unit(), &destination, false).unwrap();

        assert_eq!(unit().to_string(), fs::read_to_string(&destination).unwrap());
    }

    #[test]
    fn test_write_artifact_missing_directory() {
        let directory = tempfile::tempdir().unwrap();
        let destination = directory.path().join("missing").join("out.cpp");

        match write_artifact(&unit(), &destination, false) {
            Err(CompileError::Io(_)) => {},
            other => panic!("Expected io error, found {:?}", other),
        }
        assert!(!destination.exists());
    }
}
