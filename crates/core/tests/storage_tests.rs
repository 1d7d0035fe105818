// ═══════════════════════════════════════════════════════════════════
// Storage Tests — StorageManager: CSV parsing, serialization, file I/O
// ═══════════════════════════════════════════════════════════════════

use energy_analyzer_core::errors::CoreError;
use energy_analyzer_core::storage::manager::StorageManager;

const SAMPLE_CSV: &str = "\
DateTime,Consumption,Production,Nuclear,Wind
2020-01-01T00:00,6352,5234,1395,789
2020-01-01T01:00,6116,5296,1393,947
2020-01-01T02:00,5873,5300,1394,1014
";

// ═══════════════════════════════════════════════════════════════════
// Loading from bytes
// ═══════════════════════════════════════════════════════════════════

mod load_from_bytes {
    use super::*;

    #[test]
    fn well_formed_csv_shape() {
        let ds = StorageManager::load_from_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.column_count(), 5);
        assert_eq!(
            ds.column_names(),
            vec!["DateTime", "Consumption", "Production", "Nuclear", "Wind"]
        );
    }

    #[test]
    fn cells_are_raw_strings() {
        let ds = StorageManager::load_from_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.value_at(0, 0), Some("2020-01-01T00:00"));
        assert_eq!(ds.value_at(2, 4), Some("1014"));
    }

    #[test]
    fn no_trailing_newline_still_parses() {
        let csv = "A,B\n1,2";
        let ds = StorageManager::load_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(ds.row_count(), 1);
        assert_eq!(ds.value_at(0, 1), Some("2"));
    }

    #[test]
    fn quoted_field_with_comma() {
        let csv = "Name,Value\n\"Oil, refined\",42\n";
        let ds = StorageManager::load_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(ds.value_at(0, 0), Some("Oil, refined"));
        assert_eq!(ds.value_at(0, 1), Some("42"));
    }

    #[test]
    fn column_name_with_spaces() {
        let csv = "DateTime,Oil and Gas\n2020-01-01,934\n";
        let ds = StorageManager::load_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(ds.column_names(), vec!["DateTime", "Oil and Gas"]);
    }

    #[test]
    fn empty_file_fails() {
        let result = StorageManager::load_from_bytes(b"");
        match result {
            Err(CoreError::EmptyData) => {}
            other => panic!("Expected EmptyData, got {:?}", other),
        }
    }

    #[test]
    fn header_only_file_fails() {
        let result = StorageManager::load_from_bytes(b"DateTime,Consumption,Production\n");
        match result {
            Err(CoreError::EmptyData) => {}
            other => panic!("Expected EmptyData, got {:?}", other),
        }
    }

    #[test]
    fn inconsistent_field_counts_fail() {
        let csv = "A,B,C\n1,2,3\n4,5\n";
        let result = StorageManager::load_from_bytes(csv.as_bytes());
        match result {
            Err(CoreError::Parse(msg)) => assert!(!msg.is_empty()),
            other => panic!("Expected Parse, got {:?}", other),
        }
    }

    #[test]
    fn extra_fields_fail() {
        let csv = "A,B\n1,2\n3,4,5\n";
        let result = StorageManager::load_from_bytes(csv.as_bytes());
        assert!(matches!(result, Err(CoreError::Parse(_))));
    }

    #[test]
    fn chart_columns_not_required_at_load_time() {
        // Column presence is validated lazily, when a chart asks for it
        let csv = "Timestamp,Load\n2020-01-01,100\n";
        let ds = StorageManager::load_from_bytes(csv.as_bytes()).unwrap();
        assert_eq!(ds.row_count(), 1);
        assert!(ds.column("Consumption").is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Saving to bytes
// ═══════════════════════════════════════════════════════════════════

mod save_to_bytes {
    use super::*;

    #[test]
    fn header_then_rows() {
        let ds = StorageManager::load_from_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        let bytes = StorageManager::save_to_bytes(&ds).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("DateTime,Consumption,Production,Nuclear,Wind")
        );
        assert_eq!(lines.next(), Some("2020-01-01T00:00,6352,5234,1395,789"));
    }

    #[test]
    fn no_index_column_written() {
        let ds = StorageManager::load_from_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        let bytes = StorageManager::save_to_bytes(&ds).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        // Every line starts with the first real column, not a row number
        for line in text.lines().skip(1) {
            assert!(line.starts_with("2020-01-01T"), "unexpected line: {line}");
        }
    }

    #[test]
    fn round_trip_preserves_shape_and_cells() {
        let original = StorageManager::load_from_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        let bytes = StorageManager::save_to_bytes(&original).unwrap();
        let reloaded = StorageManager::load_from_bytes(&bytes).unwrap();

        assert_eq!(original, reloaded);
    }

    #[test]
    fn round_trip_preserves_quoted_fields() {
        let csv = "Name,Value\n\"Oil, refined\",42\n";
        let original = StorageManager::load_from_bytes(csv.as_bytes()).unwrap();
        let bytes = StorageManager::save_to_bytes(&original).unwrap();
        let reloaded = StorageManager::load_from_bytes(&bytes).unwrap();

        assert_eq!(reloaded.value_at(0, 0), Some("Oil, refined"));
        assert_eq!(original, reloaded);
    }

    #[test]
    fn round_trip_preserves_empty_cells() {
        let csv = "A,B\n1,\n,2\n";
        let original = StorageManager::load_from_bytes(csv.as_bytes()).unwrap();
        let bytes = StorageManager::save_to_bytes(&original).unwrap();
        let reloaded = StorageManager::load_from_bytes(&bytes).unwrap();

        assert_eq!(reloaded.value_at(0, 1), Some(""));
        assert_eq!(reloaded.value_at(1, 0), Some(""));
        assert_eq!(original, reloaded);
    }
}

// ═══════════════════════════════════════════════════════════════════
// File I/O
// ═══════════════════════════════════════════════════════════════════

mod file_io {
    use super::*;

    #[test]
    fn save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("energy.csv");
        let path_str = path.to_str().unwrap();

        let ds = StorageManager::load_from_bytes(SAMPLE_CSV.as_bytes()).unwrap();
        StorageManager::save_to_path(&ds, path_str).unwrap();
        let loaded = StorageManager::load_from_path(path_str).unwrap();

        assert_eq!(ds, loaded);
    }

    #[test]
    fn load_nonexistent_path_fails() {
        let result = StorageManager::load_from_path("/tmp/nonexistent_energy_export.csv");
        match result {
            Err(CoreError::FileNotFound(path)) => {
                assert_eq!(path, "/tmp/nonexistent_energy_export.csv");
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }

    #[test]
    fn load_directory_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = StorageManager::load_from_path(dir.path().to_str().unwrap());
        assert!(matches!(result, Err(CoreError::FileNotFound(_))));
    }

    #[test]
    fn load_empty_file_on_disk_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        std::fs::write(&path, "").unwrap();

        let result = StorageManager::load_from_path(path.to_str().unwrap());
        assert!(matches!(result, Err(CoreError::EmptyData)));
    }

    #[test]
    fn overwrite_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overwrite.csv");
        let path_str = path.to_str().unwrap();

        let first = StorageManager::load_from_bytes(b"A,B\n1,2\n").unwrap();
        StorageManager::save_to_path(&first, path_str).unwrap();

        let second = StorageManager::load_from_bytes(b"C,D\n3,4\n5,6\n").unwrap();
        StorageManager::save_to_path(&second, path_str).unwrap();

        let loaded = StorageManager::load_from_path(path_str).unwrap();
        assert_eq!(loaded, second);
        assert_eq!(loaded.row_count(), 2);
    }
}
