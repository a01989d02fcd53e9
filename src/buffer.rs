//! Loading buffer payloads from the files their URIs name.
//!
//! URIs are resolved against the directory of the document that declares them, and must name a
//! file within that directory.

use std::{
    fs::File,
    io::{self, Read},
    path::{Component, Path, PathBuf},
};

use url::Url;

use crate::{
    error::Error,
    table::{Buffer, Tables},
};

/// The directory in which a document's buffer payloads reside.
#[derive(Debug, Clone)]
pub(crate) struct PayloadDir {
    path: PathBuf,
    url: Url,
}

impl PayloadDir {
    /// # Errors
    ///
    /// * [Error::Io] if `dir` can't be canonicalized
    pub(crate) fn new(dir: &Path) -> Result<Self, Error> {
        let dir = if dir.as_os_str().is_empty() {
            Path::new(".")
        } else {
            dir
        };
        let path = dir.canonicalize().map_err(Error::io(dir))?;
        // only fails for relative paths, which canonicalize never returns
        let url = Url::from_directory_path(&path).map_err(|()| Error::Io {
            path: path.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "not an absolute path"),
        })?;
        Ok(Self { path, url })
    }

    /// Resolve a (percent-encoded) buffer URI to the path of its payload file.
    ///
    /// # Errors
    ///
    /// * [Error::InvalidUri] if `uri` isn't a valid URI reference
    /// * [Error::UnsupportedUriScheme] for any scheme but `file`, including `data`
    /// * [Error::UnresolvableUri] if `uri` is empty or doesn't name a local path
    /// * [Error::OutsideDocumentDir] if the resolved path leaves this directory
    pub(crate) fn resolve(&self, uri: &str) -> Result<PathBuf, Error> {
        if uri.is_empty() {
            return Err(Error::UnresolvableUri { uri: uri.to_owned() });
        }
        let url = Url::options()
            .base_url(Some(&self.url))
            .parse(uri)
            .map_err(|source| Error::InvalidUri {
                uri: uri.to_owned(),
                source,
            })?;
        if url.scheme() != "file" {
            return Err(Error::UnsupportedUriScheme {
                uri: uri.to_owned(),
                scheme: url.scheme().to_owned(),
            });
        }
        let path = url
            .to_file_path()
            .map_err(|()| Error::UnresolvableUri { uri: uri.to_owned() })?;
        let escapes = path.components().any(|c| c == Component::ParentDir);
        if escapes || !path.starts_with(&self.path) {
            return Err(Error::OutsideDocumentDir {
                uri: uri.to_owned(),
                path,
            });
        }
        Ok(path)
    }
}

/// Read exactly `buffer.byte_length` bytes from the file `buffer.uri` names within `dir`.
///
/// # Errors
///
/// * Any error of [PayloadDir::resolve]
/// * [Error::Io] if the file can't be opened or read
/// * [Error::TruncatedRead] if the file holds fewer bytes than declared
pub(crate) fn load_payload(buffer: &Buffer, dir: &PayloadDir) -> Result<tessera_mesh::Buffer, Error> {
    let path = dir.resolve(&buffer.uri)?;

    tracing::trace!(
        path = ?path,
        byte_length = buffer.byte_length,
        "reading buffer payload"
    );
    let file = File::open(&path).map_err(Error::io(&path))?;
    // no preallocation: `byte_length` comes from the document & may be arbitrarily large
    let mut data = Vec::new();
    file.take(buffer.byte_length as u64)
        .read_to_end(&mut data)
        .map_err(Error::io(&path))?;

    if data.len() < buffer.byte_length {
        return Err(Error::TruncatedRead {
            path,
            expected: buffer.byte_length,
            actual: data.len(),
        });
    }
    Ok(data.into())
}

/// Load the payload of every buffer in `tables`, in table order.
pub(crate) fn load_payloads(tables: &mut Tables, base_dir: &Path) -> Result<(), Error> {
    if tables.buffers.is_empty() {
        return Ok(());
    }
    let dir = PayloadDir::new(base_dir)?;
    for buffer in tables.buffers.iter_mut() {
        buffer.payload = load_payload(buffer, &dir)?;
    }
    Ok(())
}
