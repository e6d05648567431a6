//! Whole-container operations: inspection and extraction
//!
//! `inspect` reads only the 40-byte header plus file metadata; `unpack`
//! loads the whole container into memory and splits it into per-section
//! files. Header failures abort before any output is produced; a single
//! bad section is skipped with a warning so the rest can be recovered.

use std::fs::{self, File};
use std::path::Path;

use tracing::{debug, warn};

use crate::{Error, HEADER_SIZE, PbpHeader, Result, SectionLayout};

/// Parsed header and resolved layout of a container on disk.
#[derive(Debug, Clone)]
pub struct ContainerInfo {
    pub header: PbpHeader,
    /// Total container length in bytes, from file metadata.
    pub total_len: u64,
    pub layout: SectionLayout,
}

/// Read and validate a container's header without touching payload bytes.
///
/// The container length comes from file metadata, so presence of the
/// last slot can be judged without reading past the header.
pub fn inspect<P: AsRef<Path>>(path: P) -> Result<ContainerInfo> {
    let mut f = File::open(path)?;
    let total_len = f.metadata()?.len();
    if total_len < HEADER_SIZE as u64 {
        return Err(Error::TruncatedData {
            expected: HEADER_SIZE as u64,
            actual: total_len,
        });
    }

    let header = PbpHeader::parse(&mut f)?;
    header.validate()?;

    Ok(ContainerInfo {
        header,
        total_len,
        layout: SectionLayout::resolve(&header, total_len),
    })
}

/// Result of an unpack run.
#[derive(Debug, Clone, Default)]
pub struct UnpackSummary {
    /// Sections written, as (canonical name, bytes written).
    pub written: Vec<(&'static str, u64)>,
    /// Sections skipped because their range was invalid or the write
    /// failed.
    pub skipped: Vec<&'static str>,
}

/// Split a container into its sections, one file per present slot.
///
/// The output directory is created if missing. Extraction is not atomic:
/// a failure partway through leaves the sections already written.
pub fn unpack<P: AsRef<Path>, Q: AsRef<Path>>(container: P, out_dir: Q) -> Result<UnpackSummary> {
    let buf = fs::read(container)?;
    let total_len = buf.len() as u64;
    if total_len < HEADER_SIZE as u64 {
        return Err(Error::TruncatedData {
            expected: HEADER_SIZE as u64,
            actual: total_len,
        });
    }

    let header = PbpHeader::parse(&mut &buf[..])?;
    header.validate()?;

    fs::create_dir_all(&out_dir)?;

    let layout = SectionLayout::resolve(&header, total_len);
    let payload = &buf[HEADER_SIZE..];
    let mut summary = UnpackSummary::default();

    for entry in layout.iter() {
        if !entry.is_present() {
            continue;
        }

        let range = match entry.payload_range(total_len) {
            Ok(range) => range,
            Err(err) => {
                warn!("skipping {}: {err}", entry.id.name());
                summary.skipped.push(entry.id.name());
                continue;
            }
        };

        let out_path = out_dir.as_ref().join(entry.id.name());
        if let Err(err) = fs::write(&out_path, &payload[range]) {
            warn!("failed to write '{}': {err}", out_path.display());
            summary.skipped.push(entry.id.name());
            continue;
        }

        debug!("wrote {} ({} bytes)", entry.id.name(), entry.size);
        summary.written.push((entry.id.name(), entry.size));
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SectionId;
    use tempfile::TempDir;

    fn write_container(dir: &TempDir, offsets: [u32; 8], payload: &[u8]) -> std::path::PathBuf {
        let mut data = Vec::new();
        PbpHeader::new(offsets).write(&mut data).unwrap();
        data.extend_from_slice(payload);
        let path = dir.path().join("test.pbp");
        fs::write(&path, &data).unwrap();
        path
    }

    #[test]
    fn test_inspect_reports_layout() {
        let dir = TempDir::new().unwrap();
        let path = write_container(&dir, [40, 43, 43, 43, 43, 43, 43, 43], b"abcXYZ");

        let info = inspect(&path).unwrap();
        assert_eq!(info.total_len, 46);
        assert_eq!(info.layout.get(SectionId::ParamSfo).size, 3);
        assert_eq!(info.layout.get(SectionId::DataPsar).size, 3);
        assert!(!info.layout.get(SectionId::Icon0Png).is_present());
    }

    #[test]
    fn test_inspect_rejects_short_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.pbp");
        fs::write(&path, b"\x00PBP").unwrap();

        let err = inspect(&path).unwrap_err();
        assert!(
            matches!(
                err,
                Error::TruncatedData {
                    expected: 40,
                    actual: 4,
                }
            ),
            "actual error: {err:?}",
        );
    }

    #[test]
    fn test_unpack_writes_present_sections() {
        let dir = TempDir::new().unwrap();
        let path = write_container(&dir, [40, 43, 43, 43, 43, 43, 43, 43], b"abcXYZ");
        let out = dir.path().join("out");

        let summary = unpack(&path, &out).unwrap();
        assert_eq!(summary.written, [("PARAM.SFO", 3), ("DATA.PSAR", 3)]);
        assert!(summary.skipped.is_empty());

        assert_eq!(fs::read(out.join("PARAM.SFO")).unwrap(), b"abc");
        assert_eq!(fs::read(out.join("DATA.PSAR")).unwrap(), b"XYZ");
        assert!(!out.join("ICON0.PNG").exists());
    }

    #[test]
    fn test_unpack_skips_out_of_bounds_section() {
        let dir = TempDir::new().unwrap();
        // Slot 0 claims to span up to offset 0xFFFF_FFFF.
        let path = write_container(
            &dir,
            [40, 0xFFFF_FFFF, 50, 50, 50, 50, 50, 45],
            b"0123456789",
        );
        let out = dir.path().join("out");

        let summary = unpack(&path, &out).unwrap();
        assert!(summary.skipped.contains(&"PARAM.SFO"));
        assert!(!out.join("PARAM.SFO").exists());
        // The last slot is still recoverable.
        assert_eq!(summary.written, [("DATA.PSAR", 5)]);
        assert_eq!(fs::read(out.join("DATA.PSAR")).unwrap(), b"56789");
    }

    #[test]
    fn test_unpack_rejects_invalid_signature_before_output() {
        let dir = TempDir::new().unwrap();
        let mut data = Vec::new();
        PbpHeader::new([40; 8]).write(&mut data).unwrap();
        data[1] = b'X';
        data.extend_from_slice(b"payload");
        let path = dir.path().join("bad.pbp");
        fs::write(&path, &data).unwrap();

        let out = dir.path().join("out");
        let err = unpack(&path, &out).unwrap_err();
        assert!(matches!(err, Error::InvalidSignature(_)));
        assert!(!out.exists());
    }

    #[test]
    fn test_unpack_tolerates_existing_directory() {
        let dir = TempDir::new().unwrap();
        let path = write_container(&dir, [40, 41, 41, 41, 41, 41, 41, 41], b"a");
        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();

        let summary = unpack(&path, &out).unwrap();
        assert_eq!(summary.written, [("PARAM.SFO", 1)]);
    }
}
