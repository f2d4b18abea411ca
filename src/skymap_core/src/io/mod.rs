//! File IO related tools
//!
//! Settings and precomputed footprints are stored as bincode with the legacy
//! configuration, which is stable across versions of this crate as long as the
//! serialized types do not change.

use crate::errors::{Error, SkymapResult};
use bincode::serde::{decode_from_std_read, encode_into_std_write};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Support for automatic derivation of Save/Load
pub trait FileIO: Serialize
where
    for<'de> Self: Deserialize<'de>,
{
    /// Save into a file, returning the number of bytes written.
    fn save<P: AsRef<Path>>(&self, path: P) -> SkymapResult<usize> {
        let mut f = BufWriter::new(File::create(path)?);
        encode_into_std_write(self, &mut f, bincode::config::legacy())
            .map_err(|e| Error::IOError(format!("Failed to write to file: {}", e)))
    }

    /// Load from a file.
    fn load<P: AsRef<Path>>(path: P) -> SkymapResult<Self> {
        let mut f = BufReader::new(File::open(path)?);
        decode_from_std_read(&mut f, bincode::config::legacy())
            .map_err(|e| Error::IOError(format!("Failed to read from file: {}", e)))
    }

    /// Save a slice of this object.
    fn save_vec<P: AsRef<Path>>(vec: &[Self], path: P) -> SkymapResult<()> {
        let mut f = BufWriter::new(File::create(path)?);

        let _ = encode_into_std_write(vec, &mut f, bincode::config::legacy())
            .map_err(|e| Error::IOError(format!("Failed to write to file: {}", e)))?;
        Ok(())
    }

    /// Load a vector of this object.
    fn load_vec<P: AsRef<Path>>(path: P) -> SkymapResult<Vec<Self>> {
        let mut f = BufReader::new(File::open(path)?);

        let res: Vec<Self> = decode_from_std_read(&mut f, bincode::config::legacy())
            .map_err(|e| Error::IOError(format!("Failed to load from file: {}", e)))?;
        Ok(res)
    }
}

impl FileIO for crate::polygon::PlanarPolygon {}
impl FileIO for crate::frames::SphericalPolyline {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frames::SphericalPolyline;
    use crate::polygon::PlanarPolygon;

    #[test]
    fn test_roundtrip_vec() {
        let path = std::env::temp_dir().join("skymap_core_io_test_polygons.bin");
        let polys = vec![
            PlanarPolygon::new(vec![[0.0, 1.0], [2.0, 3.0]]),
            PlanarPolygon::new(vec![[-1.0, 5.0]]),
        ];
        PlanarPolygon::save_vec(&polys, &path).unwrap();
        let loaded = PlanarPolygon::load_vec(&path).unwrap();
        assert_eq!(polys, loaded);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_roundtrip_single() {
        let path = std::env::temp_dir().join("skymap_core_io_test_line.bin");
        let line = SphericalPolyline::from_lon_lat(&[1.0, 2.0], &[3.0, 4.0]).unwrap();
        let written = line.save(&path).unwrap();
        assert!(written > 0);
        assert_eq!(SphericalPolyline::load(&path).unwrap(), line);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        let res = PlanarPolygon::load("/this/path/does/not/exist.bin");
        assert!(matches!(res, Err(Error::IOError(_))));
    }
}
