//! Tests for error formatting, source chaining and phase tagging

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tessera::MosaicError;
    use tessera::io::error::{Phase, WithPhase, computation_error, configuration_error, type_mismatch};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let error = MosaicError::FileSystem {
            path: "/tiles/persian".into(),
            operation: "list tile set",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tiles/persian"));
    }

    // Tests configuration errors name the setting and value
    // Verified by omitting value from message
    #[test]
    fn test_configuration_error_message() {
        let error = configuration_error("tile_edge_length", &0, &"must be positive");
        let message = error.to_string();
        assert!(message.contains("tile_edge_length"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests empty palette message carries the directory and skip count
    // Verified by dropping the skip count
    #[test]
    fn test_empty_palette_message() {
        let error = MosaicError::EmptyPalette {
            tile_set: PathBuf::from("tile_set/persian"),
            skipped: 3,
        };
        let message = error.to_string();
        assert!(message.contains("tile_set/persian"));
        assert!(message.contains("3 entries skipped"));
        assert!(error.source().is_none());
    }

    // Tests phase tags prefix the message and chain to the cause
    // Verified by formatting only the inner error
    #[test]
    fn test_phase_wrapping() {
        let result: Result<(), MosaicError> = Err(MosaicError::InvalidDimensions {
            width: 0,
            height: 12,
            reason: "cannot encode an image without pixels".to_string(),
        });

        let error = result.in_phase(Phase::Save).unwrap_err();
        assert_eq!(error.phase(), Some(Phase::Save));
        assert!(error.to_string().starts_with("save failed: Invalid dimensions 0x12"));
        assert!(error.source().is_some());
        assert!(matches!(error.root(), MosaicError::InvalidDimensions { .. }));
    }

    // Tests foreign errors convert before tagging
    // Verified by dropping the From conversion
    #[test]
    fn test_in_phase_converts_io_errors() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"));

        let error = result.in_phase(Phase::PaletteLoad).unwrap_err();
        assert!(matches!(error.root(), MosaicError::FileSystem { .. }));
        assert_eq!(Phase::PaletteLoad.to_string(), "palette load");
        assert_eq!(Phase::Compositing.to_string(), "compositing");
    }

    // Tests helper constructors format their operation
    // Verified by swapping operation and reason
    #[test]
    fn test_helper_constructors() {
        let mismatch = type_mismatch("vector conversion", &"(-1, 2) does not fit in u32");
        assert!(mismatch.to_string().contains("vector conversion"));

        let computation = computation_error("tile lookup", &"no tile for Vector2(0, 0)");
        assert!(computation.to_string().contains("no tile for Vector2(0, 0)"));

        let division = MosaicError::DivisionByZero {
            operation: "vector division",
        };
        assert_eq!(division.to_string(), "Division by zero in vector division");
        assert!(division.phase().is_none());
    }

    // Tests image export errors expose the encoder failure
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MosaicError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }
}
