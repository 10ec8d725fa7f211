//! Tests for argument parsing and the runner built from it

#[cfg(test)]
mod tests {
    use crate::Workspace;
    use clap::Parser;
    use std::path::PathBuf;
    use tessera::MosaicError;
    use tessera::io::cli::{Cli, MosaicRunner};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("tessera").chain(args.iter().copied()))
    }

    // Tests defaults apply when only the required arguments are given
    // Verified by changing the default tile edge
    #[test]
    fn test_defaults() {
        let cli = parse(&["example.jpg", "--tile-set", "persian"]).unwrap();

        assert_eq!(cli.source_image_name, "example.jpg");
        assert_eq!(cli.tile_set, "persian");
        assert_eq!(cli.tile_edge, 35);
        assert!((cli.compression - 2.0).abs() < f64::EPSILON);
        assert!(cli.should_show_progress());

        let config = cli.to_config();
        assert_eq!(config.tile_set_path(), PathBuf::from("tile_set/persian"));
        assert_eq!(config.source_path(), PathBuf::from("input/example.jpg"));
        assert_eq!(config.output_path(), PathBuf::from("output/example.jpg"));
    }

    // Tests explicit flags override every default
    // Verified by ignoring the directory flags in to_config
    #[test]
    fn test_overrides() {
        let cli = parse(&[
            "cat.png",
            "-t",
            "lego",
            "-e",
            "8",
            "-c",
            "0.5",
            "--tile-root",
            "/sets",
            "--input-dir",
            "/in",
            "--output-dir",
            "/out",
            "--quiet",
        ])
        .unwrap();

        assert!(!cli.should_show_progress());
        let config = cli.to_config();
        assert_eq!(config.tile_edge_length, 8);
        assert!((config.compression_rate - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.tile_set_path(), PathBuf::from("/sets/lego"));
        assert_eq!(config.source_path(), PathBuf::from("/in/cat.png"));
        assert_eq!(config.output_path(), PathBuf::from("/out/cat.png"));
    }

    // Tests the tile set is required
    // Verified by giving the tile set a default
    #[test]
    fn test_missing_tile_set() {
        assert!(parse(&["example.jpg"]).is_err());
        assert!(parse(&["--tile-set", "persian"]).is_err());
    }

    // Tests invalid values are rejected before any file is touched
    // Verified by validating lazily inside run
    #[test]
    fn test_runner_rejects_invalid_settings() {
        let cli = parse(&["example.jpg", "-t", "persian", "-e", "0"]).unwrap();
        assert!(matches!(
            MosaicRunner::new(&cli),
            Err(MosaicError::Configuration {
                setting: "tile_edge_length",
                ..
            })
        ));
    }

    // Tests a quiet run writes the mosaic where the flags point
    // Verified by writing to the working directory
    #[test]
    fn test_quiet_run() {
        let workspace = Workspace::black_and_white();
        let config = &workspace.config;
        let cli = parse(&[
            "source.png",
            "-t",
            "mono",
            "-e",
            "4",
            "-c",
            "1",
            "--tile-root",
            config.tile_set_root.to_str().unwrap(),
            "--input-dir",
            config.input_dir.to_str().unwrap(),
            "--output-dir",
            config.output_dir.to_str().unwrap(),
            "-q",
        ])
        .unwrap();

        let written = MosaicRunner::new(&cli).unwrap().run().unwrap();
        assert_eq!(written, config.output_path());
        assert!(written.exists());
    }
}
