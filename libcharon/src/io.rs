use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use errors::*;

/// `read` loads the full content of one input split into memory.
///
/// The whole split is read in a single call; there is no partial-read or streaming mode. Returns
/// an error if the file does not exist or can not be read to the end.
pub fn read<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(&path).chain_err(|| {
        format!(
            "unable to open input split {}",
            path.as_ref().to_string_lossy()
        )
    })?;

    let mut buf_reader = BufReader::new(file);
    let mut value = String::new();
    let bytes_read = buf_reader.read_to_string(&mut value).chain_err(|| {
        format!(
            "unable to read content of {}",
            path.as_ref().to_string_lossy()
        )
    })?;
    if bytes_read == 0 {
        warn!("Input split {} is empty.", path.as_ref().to_string_lossy());
    }

    Ok(value)
}

/// `write` creates the file at the given path and writes the full byte slice to it, overwriting
/// any prior content.
///
/// The file handle is scoped to this function: it is flushed and closed when the function
/// returns, on success and on error.
pub fn write<P: AsRef<Path>>(path: P, data: &[u8]) -> Result<()> {
    let mut file = File::create(&path).chain_err(|| {
        format!("unable to create file {}", path.as_ref().to_string_lossy())
    })?;
    file.write_all(data).chain_err(|| {
        format!(
            "unable to write content to {}",
            path.as_ref().to_string_lossy()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    use uuid::Uuid;

    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("charon-io-test-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn write_then_read_round_trip() {
        let path = scratch_path("split.txt");

        write(&path, b"a b a").unwrap();
        let content = read(&path).unwrap();

        assert_eq!("a b a", content);
    }

    #[test]
    fn read_missing_file_fails() {
        let path = scratch_path("does-not-exist.txt");

        assert!(read(&path).is_err());
    }

    #[test]
    fn write_overwrites_prior_content() {
        let path = scratch_path("overwrite.txt");

        write(&path, b"stale content from an earlier run").unwrap();
        write(&path, b"fresh").unwrap();

        assert_eq!("fresh", read(&path).unwrap());
    }
}
