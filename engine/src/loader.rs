use crate::catalog::{Catalog, EntryMeta};
use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const REQUIRED: [&str; 3] = ["title", "genre", "overview"];

/// Column positions discovered from a header row.
struct Columns {
    title: usize,
    genre: usize,
    overview: usize,
    industry: Option<usize>,
    language: Option<usize>,
    release_year: Option<usize>,
}

impl Columns {
    fn discover(headers: &csv::StringRecord) -> Result<Self> {
        let names: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let find = |name: &str| names.iter().position(|n| n == name);
        let missing: Vec<String> = REQUIRED.iter().filter(|c| find(c).is_none()).map(|c| c.to_string()).collect();
        if !missing.is_empty() {
            return Err(EngineError::MissingColumns(missing));
        }
        Ok(Self {
            title: find("title").unwrap_or_default(),
            genre: find("genre").unwrap_or_default(),
            overview: find("overview").unwrap_or_default(),
            industry: find("industry"),
            language: find("language"),
            release_year: find("release_year"),
        })
    }
}

/// Load a catalog from a CSV file, or from every `*.csv` under a directory in
/// sorted path order. Missing cells become empty strings.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let files = catalog_files(path)?;
    if files.is_empty() {
        return Err(EngineError::EmptySource(path.to_path_buf()));
    }
    let mut catalog = Catalog::new();
    for file in files {
        let f = File::open(&file).map_err(|source| EngineError::Io { path: file.clone(), source })?;
        let before = catalog.len();
        read_csv(f, &mut catalog)?;
        tracing::debug!(file = %file.display(), rows = catalog.len() - before, "read catalog file");
    }
    Ok(catalog)
}

/// Append every row of CSV data from `reader` to `catalog`.
pub fn read_csv<R: Read>(reader: R, catalog: &mut Catalog) -> Result<()> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::discover(rdr.headers()?)?;
    for record in rdr.records() {
        let record = record?;
        let cell = |i: usize| record.get(i).unwrap_or("").to_string();
        let optional = |i: Option<usize>| i.and_then(|i| record.get(i)).filter(|v| !v.is_empty()).map(str::to_string);
        let meta = EntryMeta {
            industry: optional(columns.industry),
            language: optional(columns.language),
            release_year: optional(columns.release_year),
        };
        catalog.push(cell(columns.title), cell(columns.genre), cell(columns.overview), meta);
    }
    Ok(())
}

fn catalog_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(EngineError::Io {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "dataset not found"),
        });
    }
    let mut files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && p.extension().and_then(|s| s.to_str()) == Some("csv"))
        .collect();
    files.sort();
    Ok(files)
}
