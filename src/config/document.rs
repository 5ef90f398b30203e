use crate::{
    config::codec::{parse_section, serialize_entry},
    domain::network::Network,
    error::{Error, Result},
};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

pub const MARKER: &str = "# WPANET: DO NOT EDIT BELOW THIS LINE";

/// A supplicant config split into the user-owned preamble and the generated
/// section below the marker line. Only the generated section is decoded; the
/// preamble is kept as raw bytes.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    path: PathBuf,
    original: Vec<u8>,
    preamble: Vec<u8>,
    marker_line: Option<Vec<u8>>,
    networks: Vec<Network>,
}

impl ConfigDocument {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::resource(path, e))?;
        let doc = Self::parse(path, bytes);
        info!(
            "loaded {} ({} known networks, marker {})",
            path.display(),
            doc.networks.len(),
            if doc.has_marker() { "present" } else { "absent" }
        );
        Ok(doc)
    }

    pub fn parse(path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        let (preamble, marker_line, networks) = match find_marker(&bytes) {
            Some((start, end)) => (
                bytes[..start].to_vec(),
                Some(trim_line_end(&bytes[start..end]).to_vec()),
                parse_section(&bytes[end..]),
            ),
            None => (bytes.clone(), None, Vec::new()),
        };

        Self {
            path: path.into(),
            original: bytes,
            preamble,
            marker_line,
            networks,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn original(&self) -> &[u8] {
        &self.original
    }

    pub fn preamble(&self) -> &[u8] {
        &self.preamble
    }

    pub fn has_marker(&self) -> bool {
        self.marker_line.is_some()
    }

    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    /// Builds the full file content for `networks`: the preamble untouched,
    /// the marker line, then one block per network followed by a blank line.
    pub fn render<'a, I>(&self, networks: I) -> Vec<u8>
    where
        I: IntoIterator<Item = &'a Network>,
    {
        let mut out = Vec::with_capacity(self.original.len() + 64);
        out.extend_from_slice(&self.preamble);
        if out.last().is_some_and(|b| *b != b'\n') {
            out.push(b'\n');
        }
        out.extend_from_slice(self.marker_line.as_deref().unwrap_or(MARKER.as_bytes()));
        out.push(b'\n');

        for network in networks {
            out.extend_from_slice(serialize_entry(network).as_bytes());
            out.push(b'\n');
        }
        out
    }

    /// Replaces the file on disk with `content` via a sibling temp file and a
    /// rename, keeping the original permissions. A symlinked config is
    /// resolved first so the link keeps pointing at the rewritten file.
    pub fn write_atomic(&self, content: &[u8]) -> Result<()> {
        let target = fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone());
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let err = |e| Error::resource(&target, e);

        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(err)?;
        if let Ok(meta) = fs::metadata(&target) {
            fs::set_permissions(tmp.path(), meta.permissions()).map_err(err)?;
        }
        tmp.write_all(content).map_err(err)?;
        tmp.as_file().sync_all().map_err(err)?;
        tmp.persist(&target).map_err(|e| err(e.error))?;

        debug!("wrote {} bytes to {}", content.len(), target.display());
        Ok(())
    }
}

/// Byte range of the first line starting with [`MARKER`], newline included.
fn find_marker(bytes: &[u8]) -> Option<(usize, usize)> {
    let mut start = 0;
    for line in bytes.split_inclusive(|b| *b == b'\n') {
        let end = start + line.len();
        if line.starts_with(MARKER.as_bytes()) {
            return Some((start, end));
        }
        start = end;
    }
    None
}

fn trim_line_end(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\r' | b'\n'] = line {
        line = rest;
    }
    line
}
