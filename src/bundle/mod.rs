//! Reader for campus bundles: a folder or zip archive of CSV tables
//! describing buildings and the inter-campus shuttle.

use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, Read},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::warn;
use zip::ZipArchive;

mod config;
pub mod models;
pub use config::*;
pub use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Bundle path does not exist: {0}")]
    InvalidPath(PathBuf),
}

#[derive(Debug, Default, Clone)]
pub enum StorageType {
    #[default]
    None,
    Zip(PathBuf),
    Directory(PathBuf),
}

#[derive(Default)]
pub struct BundleReader {
    config: Config,
    storage: StorageType,
}

impl BundleReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn from_zip<P: AsRef<Path>>(mut self, path: P) -> Result<Self, self::Error> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }
        self.storage = StorageType::Zip(path.to_path_buf());
        Ok(self)
    }

    pub fn from_directory<P: AsRef<Path>>(mut self, path: P) -> Result<Self, self::Error> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(Error::InvalidPath(path.to_path_buf()));
        }
        self.storage = StorageType::Directory(path.to_path_buf());
        Ok(self)
    }

    /// Picks zip or directory storage from what is on disk.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> Result<Self, self::Error> {
        if path.as_ref().is_dir() {
            self.from_directory(path)
        } else {
            self.from_zip(path)
        }
    }

    pub fn storage(&self) -> &StorageType {
        &self.storage
    }

    pub fn stream_buildings<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, BundleBuilding)),
    {
        self.stream(&self.config.buildings_file_name, f)
    }

    pub fn stream_shuttle_stops<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, BundleShuttleStop)),
    {
        self.stream(&self.config.shuttle_stops_file_name, f)
    }

    pub fn stream_shuttle_departures<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, BundleDeparture)),
    {
        self.stream(&self.config.shuttle_departures_file_name, f)
    }

    fn stream<T, F>(&self, file_name: &str, f: F) -> Result<(), self::Error>
    where
        T: DeserializeOwned,
        F: FnMut((usize, T)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Zip(path) => {
                let mut archive = ZipArchive::new(File::open(path)?)?;
                let index = archive
                    .index_for_name(file_name)
                    .ok_or(Error::FileNotFound(file_name.to_string()))?;
                let file = archive.by_index(index)?;
                stream_csv(file, file_name, f)
            }
            StorageType::Directory(path) => {
                let file = File::open(path.join(file_name)).map_err(|err| match err.kind() {
                    io::ErrorKind::NotFound => Error::FileNotFound(file_name.to_string()),
                    _ => Error::Io(err),
                })?;
                stream_csv(file, file_name, f)
            }
        }
    }
}

/// Deserializes every row, skipping the ones that do not parse.
fn stream_csv<R, T, F>(reader: R, file_name: &str, f: F) -> Result<(), self::Error>
where
    R: Read,
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    reader.headers()?;
    reader
        .deserialize()
        .enumerate()
        .filter_map(|(line, row)| match row {
            Ok(row) => Some(row),
            Err(err) => {
                warn!("Skipping row {} in {file_name}: {err}", line + 1);
                None
            }
        })
        .enumerate()
        .for_each(f);
    Ok(())
}
