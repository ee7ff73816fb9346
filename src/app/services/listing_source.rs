//! Listing file sources
//!
//! A [`ListingSource`] hands back the raw bytes of a listing file. The
//! production source is the NASDAQ Trader anonymous FTP server; a local
//! directory source serves offline runs and test fixtures. Both are blocking;
//! the pipeline calls them from tokio's blocking pool.

use std::fmt::Debug;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use suppaftp::FtpStream;
use suppaftp::types::FileType;
use tracing::{debug, info};

use crate::config::TransferConfig;
use crate::{Error, Result};

/// Something that can fetch a listing file by name
pub trait ListingSource: Debug + Send + Sync {
    /// Fetch the complete contents of `file_name`
    fn fetch(&self, file_name: &str) -> Result<Vec<u8>>;

    /// Human-readable location, for logs and reports
    fn describe(&self) -> String;
}

/// Anonymous FTP client for the symbol directory
#[derive(Debug, Clone)]
pub struct FtpSource {
    address: String,
    user: String,
    password: String,
    directory: String,
    connect_timeout: Duration,
}

impl FtpSource {
    pub fn new(config: &TransferConfig) -> Self {
        Self {
            address: config.address(),
            user: config.user.clone(),
            password: config.password.clone(),
            directory: config.directory.clone(),
            connect_timeout: config.connect_timeout(),
        }
    }

    fn resolve(&self, file_name: &str) -> Result<SocketAddr> {
        self.address
            .as_str()
            .to_socket_addrs()
            .map_err(|e| Error::transfer(file_name, "resolve the server address", e))?
            .next()
            .ok_or_else(|| {
                Error::transfer(
                    file_name,
                    "resolve the server address",
                    format!("no address found for {}", self.address),
                )
            })
    }
}

impl ListingSource for FtpSource {
    fn fetch(&self, file_name: &str) -> Result<Vec<u8>> {
        let addr = self.resolve(file_name)?;
        debug!("Connecting to {} ({})", self.describe(), addr);

        let mut ftp = FtpStream::connect_timeout(addr, self.connect_timeout)
            .map_err(|e| Error::transfer(file_name, "connect", e))?;

        ftp.login(self.user.as_str(), self.password.as_str())
            .map_err(|e| Error::transfer(file_name, "log in", e))?;
        ftp.cwd(self.directory.as_str())
            .map_err(|e| Error::transfer(file_name, "change directory", e))?;
        ftp.transfer_type(FileType::Binary)
            .map_err(|e| Error::transfer(file_name, "switch to binary mode", e))?;

        let data = ftp
            .retr_as_buffer(file_name)
            .map_err(|e| Error::transfer(file_name, "retrieve the file", e))?
            .into_inner();

        ftp.quit()
            .map_err(|e| Error::transfer(file_name, "close the session", e))?;

        info!("Fetched {} ({} bytes) from {}", file_name, data.len(), self.describe());
        Ok(data)
    }

    fn describe(&self) -> String {
        format!("ftp://{}/{}", self.address, self.directory)
    }
}

/// Listing files stored in a local directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ListingSource for DirectorySource {
    fn fetch(&self, file_name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(file_name);
        let data =
            std::fs::read(&path).map_err(|e| Error::transfer(file_name, "read the file", e))?;

        info!("Read {} ({} bytes) from {}", file_name, data.len(), self.describe());
        Ok(data)
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

/// Build the source selected by the transfer configuration
pub fn source_from_config(config: &TransferConfig) -> Arc<dyn ListingSource> {
    match &config.input_dir {
        Some(dir) => Arc::new(DirectorySource::new(dir.clone())),
        None => Arc::new(FtpSource::new(config)),
    }
}
