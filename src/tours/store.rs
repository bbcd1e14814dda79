use std::path::Path;

use tracing::info;

use crate::error::Error;
use crate::tours::record::Tour;

/// The immutable tour collection, in file order.
///
/// Built once before the server starts and shared read-only between
/// requests (wrap it in an `Arc`).
#[derive(Debug, Default)]
pub struct TourStore {
    tours: Vec<Tour>,
}

impl TourStore {
    pub fn new(tours: Vec<Tour>) -> Self {
        Self { tours }
    }

    /// Reads a JSON array of tour objects from `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::ReadData {
            path: path.to_owned(),
            source,
        })?;
        let tours: Vec<Tour> = serde_json::from_slice(&bytes).map_err(|source| Error::ParseData {
            path: path.to_owned(),
            source,
        })?;

        info!(path = %path.display(), tours = tours.len(), "tour data loaded");
        Ok(Self::new(tours))
    }

    /// Every tour, in load order.
    pub fn all(&self) -> &[Tour] {
        &self.tours
    }

    /// First tour whose `id` equals `id`. Linear scan.
    pub fn find_by_id(&self, id: i64) -> Option<&Tour> {
        self.tours.iter().find(|t| t.id() == Some(id))
    }

    pub fn len(&self) -> usize { self.tours.len() }
    pub fn is_empty(&self) -> bool { self.tours.is_empty() }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;
    use tempfile::NamedTempFile;

    use super::*;

    fn data_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_tours_in_file_order() {
        let f = data_file(r#"[{"id":2,"country":"Spain"},{"id":1,"country":"France"}]"#);
        let store = TourStore::load(f.path()).unwrap();
        assert_eq!(store.len(), 2);
        let ids: Vec<_> = store.all().iter().map(Tour::id).collect();
        assert_eq!(ids, vec![Some(2), Some(1)]);
    }

    #[test]
    fn empty_array_is_a_valid_store() {
        let f = data_file("[]");
        assert!(TourStore::load(f.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TourStore::load(dir.path().join("data.json")).unwrap_err();
        assert!(matches!(err, Error::ReadData { .. }), "{err}");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        for contents in ["[{\"id\":1", "{\"id\":1}", "[1,2,3]", ""] {
            let f = data_file(contents);
            let err = TourStore::load(f.path()).unwrap_err();
            assert!(matches!(err, Error::ParseData { .. }), "{contents:?}: {err}");
        }
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let tours = [json!({"id": 1, "n": "a"}), json!({"id": 2, "n": "b"}), json!({"id": 2, "n": "c"})]
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect();
        let store = TourStore::new(tours);

        assert_eq!(store.find_by_id(2).and_then(|t| t.field("n")), Some(&json!("b")));
        assert!(store.find_by_id(99).is_none());
    }

    #[test]
    fn string_ids_do_not_match_integers() {
        let store = TourStore::new(vec![serde_json::from_value(json!({"id": "3"})).unwrap()]);
        assert!(store.find_by_id(3).is_none());
    }
}
