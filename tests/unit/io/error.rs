//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use panelmatrix::AlgorithmError;
    use panelmatrix::io::error::{WithPath, invalid_input, invalid_parameter};
    use std::error::Error;
    use std::path::Path;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AlgorithmError::FileSystem {
            path: "/tmp/inventory.json".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/inventory.json"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("cell_size", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("cell_size"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests colour errors name the offending colour or index
    // Verified by omitting the index from the message
    #[test]
    fn test_colour_errors() {
        let error = AlgorithmError::InvalidColour {
            colour_id: "teal".to_string(),
        };
        assert!(error.to_string().contains("teal"));

        let error = AlgorithmError::InvalidColourIndex {
            index: 7,
            colour_count: 3,
        };
        let message = error.to_string();
        assert!(message.contains('7'));
        assert!(message.contains('3'));
    }

    // Tests inventory parse errors chain to serde
    // Verified by dropping the source
    #[test]
    fn test_inventory_load_error() {
        let source = serde_json::from_str::<u32>("-1").expect_err("Negative is not a u32");
        let error = AlgorithmError::InventoryLoad {
            path: "order.json".into(),
            source,
        };

        assert!(error.to_string().contains("order.json"));
        assert!(error.source().is_some());
    }

    // Tests path context is attached to I/O failures
    // Verified by discarding the path
    #[test]
    fn test_with_path() {
        let result: std::io::Result<()> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = result
            .with_path(Path::new("/restricted/out.png"), "create directory")
            .expect_err("Error is preserved");

        let message = error.to_string();
        assert!(message.contains("/restricted/out.png"));
        assert!(message.contains("create directory"));
        assert!(message.contains("access denied"));
    }

    // Tests invalid input errors keep their reason
    // Verified by formatting a fixed message
    #[test]
    fn test_invalid_input() {
        let error = invalid_input(&"quantity must be an integer");
        assert!(error.to_string().contains("quantity must be an integer"));

        let converted: AlgorithmError = std::io::Error::other("boom").into();
        assert!(matches!(converted, AlgorithmError::FileSystem { .. }));
    }
}
