//! Writer for the generated `map.json`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::models::ApiMap;

/// File name of the generated map inside the output directory.
pub const MAP_FILE: &str = "map.json";

/// Serialize a value to JSON, indented by four spaces when `pretty`.
pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>> {
    if !pretty {
        return Ok(serde_json::to_vec(value)?);
    }

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

/// Write bytes atomically (write to temp, then rename).
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let tmp = path.with_extension("tmp");
    let mut file = fs::File::create(&tmp)?;
    file.write_all(bytes)?;
    file.flush()?;
    drop(file);

    fs::rename(&tmp, path)?;
    Ok(())
}

/// Write the map to `{output_dir}/map.json`, creating the directory if needed.
pub fn write_map(output_dir: &Path, map: &ApiMap, pretty: bool) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(MAP_FILE);
    let bytes = to_json_bytes(map, pretty)?;
    write_atomic(&path, &bytes)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MethodEntry};

    fn sample_map() -> ApiMap {
        let mut map = ApiMap::new("2.2");
        map.push(Category::Network, MethodEntry::new("/sites", None));
        map
    }

    #[test]
    fn test_compact_output() {
        let bytes = to_json_bytes(&serde_json::json!({"a": [1]}), false).unwrap();
        assert_eq!(bytes, br#"{"a":[1]}"#);
    }

    #[test]
    fn test_pretty_output_uses_four_spaces() {
        let bytes = to_json_bytes(&serde_json::json!({"a": [1]}), true).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "{\n    \"a\": [\n        1\n    ]\n}"
        );
    }

    #[test]
    fn test_write_map_creates_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out/nested");
        let map = sample_map();

        let path = write_map(&out, &map, true).unwrap();
        assert_eq!(path, out.join(MAP_FILE));
        assert!(!out.join("map.tmp").exists());

        let written: ApiMap = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(written, map);
    }

    #[test]
    fn test_write_map_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MAP_FILE), b"stale").unwrap();

        let path = write_map(dir.path(), &sample_map(), false).unwrap();
        let text = fs::read_to_string(path).unwrap();
        assert!(text.starts_with("{\"version\":\"2.2\""));
    }
}
