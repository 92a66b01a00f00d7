use super::errors::IngestionError;
use contracts::domain::a001_rug::RugRecord;
use contracts::usecases::u501_import_catalog::{OutputRecord, SchemaVariant};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Пишет `data.json` атомарно: сначала `<output>.tmp`, затем rename.
///
/// Returns the size of the written document in bytes. If serialization or the
/// write fails, the previous document stays in place.
pub fn write_catalog(
    path: &Path,
    records: &[RugRecord],
    schema: &SchemaVariant,
) -> Result<u64, IngestionError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let document: Vec<OutputRecord<'_>> = records.iter().map(|r| schema.output_record(r)).collect();
    let json = serde_json::to_string_pretty(&document)?;

    replace_file(path, |file| file.write_all(json.as_bytes()))?;
    Ok(json.len() as u64)
}

/// Пишет во временный файл и переименовывает его в `path`.
/// On any error after the temp file is created it is removed.
fn replace_file<F>(path: &Path, write: F) -> io::Result<()>
where
    F: FnOnce(&mut File) -> io::Result<()>,
{
    let tmp = tmp_path(path);
    let mut file = File::create(&tmp)?;
    let written = write(&mut file).and_then(|_| file.sync_all());
    drop(file);
    let result = written.and_then(|_| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
