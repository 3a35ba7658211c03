//! Tests for command-line interface parsing and file processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};
    use toonface::io::cli::{Cli, FileOutcome, FileProcessor, ProcessSummary, is_supported_image};
    use toonface::io::configuration::TARGET_WIDTH;
    use toonface::{AvatarError, EyeShape, FeatureRecord, HairStyle, HexColor};

    fn quiet_cli(target: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["program", target.to_str().unwrap(), "--quiet"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    fn read_record(path: &Path) -> FeatureRecord {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    // Tests CLI parsing with only the required target argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "face.jpg"]);

        assert_eq!(cli.target, PathBuf::from("face.jpg"));
        assert_eq!(cli.hair_style, HairStyle::Short);
        assert_eq!(cli.eye_shape, EyeShape::Round);
        assert_eq!(cli.width, TARGET_WIDTH);
        assert!(cli.skin_tone.is_none());
        assert!(!cli.manual);
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    // Tests CLI parsing with all available arguments
    // Verified by modifying value parsers to ensure they're invoked
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "photos",
            "--hair-style",
            "curly",
            "--eye-shape",
            "almond",
            "--skin-tone",
            "#E0AC69",
            "--hair-color",
            "#000000",
            "--eye-color",
            "#00ff00",
            "--width",
            "300",
            "--manual",
            "--quiet",
            "--no-skip",
            "--verbose",
        ]);

        assert_eq!(cli.hair_style, HairStyle::Curly);
        assert_eq!(cli.eye_shape, EyeShape::Almond);
        assert_eq!(cli.skin_tone, Some(HexColor::new(0xe0, 0xac, 0x69)));
        assert_eq!(cli.hair_color, Some(HexColor::new(0, 0, 0)));
        assert_eq!(cli.eye_color, Some(HexColor::new(0, 0xff, 0)));
        assert_eq!(cli.width, 300);
        assert!(cli.manual && cli.quiet && cli.verbose);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests short flag parsing
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "face.png", "-m", "-w", "120", "-q", "-n", "-v"]);

        assert!(cli.manual);
        assert_eq!(cli.width, 120);
        assert!(cli.quiet && cli.no_skip && cli.verbose);
    }

    // Tests malformed colors and unknown styles are rejected by the parser
    // Verified by accepting colors without the leading '#'
    #[test]
    fn test_cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["program", "a.png", "--hair-color", "ff0000"]).is_err());
        assert!(Cli::try_parse_from(["program", "a.png", "--eye-color", "#12345g"]).is_err());
        assert!(Cli::try_parse_from(["program", "a.png", "--hair-style", "mohawk"]).is_err());
    }

    // Tests overrides replace only the colors that were given
    // Verified by applying the skin override to the hair color
    #[test]
    fn test_apply_overrides() {
        let cli = Cli::parse_from(["program", "a.png", "--hair-color", "#101010"]);
        let mut record = cli.base_record();

        cli.apply_overrides(&mut record);

        assert_eq!(record.hair_color, HexColor::new(16, 16, 16));
        assert_eq!(record.skin_tone, FeatureRecord::default().skin_tone);
        assert_eq!(record.eye_color, FeatureRecord::default().eye_color);
    }

    // Tests a single photo produces an avatar and a report beside it
    // Verified by writing outputs into the working directory
    #[test]
    fn test_process_single_photo() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let photo = temp_dir.path().join("face.png");
        RgbImage::from_pixel(300, 400, Rgb([255, 0, 0]))
            .save(&photo)
            .unwrap();

        let mut processor =
            FileProcessor::new(quiet_cli(&photo, &["--eye-shape", "almond"])).unwrap();
        let summary = processor.process().unwrap();

        assert_eq!(summary.rendered, 1);
        let avatar = std::fs::read_to_string(temp_dir.path().join("face_avatar.svg")).unwrap();
        assert!(avatar.contains("<ellipse"));

        let record = read_record(&temp_dir.path().join("face_features.json"));
        assert_eq!(record.hair_color.to_string(), "#e60000");
        assert_eq!(record.skin_tone.to_string(), "#ff0000");
        assert_eq!(record.eye_shape, EyeShape::Almond);
    }

    // Tests an undecodable photo is reported while the batch continues
    // Verified by propagating decode errors out of process
    #[test]
    fn test_process_directory_with_corrupt_photo() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(temp_dir.path().join("a_broken.jpg"), b"not a jpeg").unwrap();
        RgbImage::from_pixel(60, 80, Rgb([20, 40, 60]))
            .save(temp_dir.path().join("b_face.png"))
            .unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), b"ignored").unwrap();

        let mut processor = FileProcessor::new(quiet_cli(temp_dir.path(), &[])).unwrap();
        let summary = processor.process().unwrap();

        assert_eq!(
            summary,
            ProcessSummary {
                rendered: 1,
                skipped: 0,
                failed: vec![temp_dir.path().join("a_broken.jpg")],
            }
        );
        assert!(!temp_dir.path().join("a_broken_avatar.svg").exists());
        assert!(temp_dir.path().join("b_face_avatar.svg").exists());
    }

    // Tests existing avatars are skipped unless --no-skip is given
    // Verified by inverting boolean logic in skip_existing method
    #[test]
    fn test_skip_existing_outputs() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let photo = temp_dir.path().join("face.png");
        RgbImage::from_pixel(60, 80, Rgb([0, 0, 255]))
            .save(&photo)
            .unwrap();

        let first = FileProcessor::new(quiet_cli(&photo, &[]))
            .unwrap()
            .process()
            .unwrap();
        assert_eq!(first.rendered, 1);

        let second = FileProcessor::new(quiet_cli(&photo, &[]))
            .unwrap()
            .process()
            .unwrap();
        assert_eq!(second.skipped, 1);
        assert_eq!(second.rendered, 0);

        let forced = FileProcessor::new(quiet_cli(&photo, &["--no-skip"]))
            .unwrap()
            .process()
            .unwrap();
        assert_eq!(forced.rendered, 1);
    }

    // Tests color overrides win over extracted colors
    // Verified by applying overrides before extraction
    #[test]
    fn test_overrides_after_extraction() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let photo = temp_dir.path().join("face.png");
        RgbImage::from_pixel(60, 80, Rgb([255, 0, 0]))
            .save(&photo)
            .unwrap();

        FileProcessor::new(quiet_cli(&photo, &["--hair-color", "#123456"]))
            .unwrap()
            .process()
            .unwrap();

        let record = read_record(&temp_dir.path().join("face_features.json"));
        assert_eq!(record.hair_color.to_string(), "#123456");
        assert_eq!(record.eye_color.to_string(), "#e60000");
    }

    // Tests manual mode renders defaults plus overrides without a photo
    // Verified by requiring the target to exist in manual mode
    #[test]
    fn test_manual_mode() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let stem = temp_dir.path().join("me");

        let summary = FileProcessor::new(quiet_cli(
            &stem,
            &["--manual", "--hair-style", "long", "--eye-color", "#00aa00"],
        ))
        .unwrap()
        .process()
        .unwrap();

        assert_eq!(summary.rendered, 1);
        let record = read_record(&temp_dir.path().join("me_features.json"));
        assert_eq!(record.hair_style, HairStyle::Long);
        assert_eq!(record.eye_color.to_string(), "#00aa00");
        assert_eq!(record.skin_tone, FeatureRecord::default().skin_tone);
        assert!(temp_dir.path().join("me_avatar.svg").exists());
    }

    // Tests invalid targets are rejected before any work is done
    // Verified by silently accepting unsupported extensions
    #[test]
    fn test_invalid_targets() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let notes = temp_dir.path().join("notes.txt");
        std::fs::write(&notes, b"text").unwrap();

        let unsupported = FileProcessor::new(quiet_cli(&notes, &[])).unwrap().process();
        assert!(matches!(
            unsupported,
            Err(AvatarError::InvalidParameter {
                parameter: "target",
                ..
            })
        ));

        let missing = FileProcessor::new(quiet_cli(&temp_dir.path().join("nope.png"), &[]))
            .unwrap()
            .process();
        assert!(matches!(
            missing,
            Err(AvatarError::InvalidParameter { .. })
        ));
    }

    // Tests an empty directory is a successful no-op
    // Verified by treating an empty batch as an error
    #[test]
    fn test_empty_directory() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

        let summary = FileProcessor::new(quiet_cli(temp_dir.path(), &[]))
            .unwrap()
            .process()
            .unwrap();

        assert_eq!(summary, ProcessSummary::default());
    }

    // Tests a zero width is rejected when the processor is built
    // Verified by deferring width validation to the first photo
    #[test]
    fn test_zero_width_rejected() {
        let cli = Cli::parse_from(["program", "face.png", "--width", "0"]);

        assert!(matches!(
            FileProcessor::new(cli),
            Err(AvatarError::InvalidParameter { .. })
        ));
    }

    // Tests output path generation
    // Verified by dropping the suffix from output names
    #[test]
    fn test_output_paths() {
        assert_eq!(
            FileProcessor::get_avatar_path(Path::new("dir/photo.jpg")),
            PathBuf::from("dir/photo_avatar.svg")
        );
        assert_eq!(
            FileProcessor::get_report_path(Path::new("photo.jpeg")),
            PathBuf::from("photo_features.json")
        );
    }

    // Tests extension matching ignores case
    // Verified by comparing extensions case-sensitively
    #[test]
    fn test_is_supported_image() {
        assert!(is_supported_image(Path::new("a.PNG")));
        assert!(is_supported_image(Path::new("b.webp")));
        assert!(is_supported_image(Path::new("c.TIF")));
        assert!(!is_supported_image(Path::new("d.svg")));
        assert!(!is_supported_image(Path::new("no_extension")));
    }

    // Tests outcomes carry the rendered record
    // Verified by returning Skipped for rendered photos
    #[test]
    fn test_file_outcome_equality() {
        let record = FeatureRecord::default();
        assert_eq!(FileOutcome::Rendered(record), FileOutcome::Rendered(record));
        assert_ne!(FileOutcome::Skipped, FileOutcome::Failed(String::new()));
    }

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    // Tests quiet runs still log the readable notice for a failed photo
    // Verified by logging only the raw decoder error
    #[test]
    fn test_quiet_failure_logs_user_notice() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let broken = temp_dir.path().join("broken.png");
        std::fs::write(&broken, b"not a png").unwrap();

        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();

        let summary = tracing::subscriber::with_default(subscriber, || {
            FileProcessor::new(quiet_cli(&broken, &[]))
                .unwrap()
                .process()
                .unwrap()
        });

        assert_eq!(summary.failed, vec![broken]);
        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(
            output.contains("broken.png: Couldn't read that image. Please try another photo."),
            "{output}"
        );
    }

    // Tests an output error on a later photo stops the run after earlier photos finish
    // Verified by continuing the batch after an export error
    #[test]
    fn test_output_error_stops_batch() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        for name in ["a_face.png", "b_face.png"] {
            RgbImage::from_pixel(60, 80, Rgb([0, 200, 0]))
                .save(temp_dir.path().join(name))
                .unwrap();
        }
        // A directory where the second avatar should go makes its export fail
        std::fs::create_dir(temp_dir.path().join("b_face_avatar.svg")).unwrap();

        for extra in [&["--quiet", "--no-skip"][..], &["--no-skip"][..]] {
            let mut args = vec!["program", temp_dir.path().to_str().unwrap()];
            args.extend_from_slice(extra);
            let result = FileProcessor::new(Cli::parse_from(args)).unwrap().process();

            assert!(matches!(result, Err(AvatarError::AvatarExport { .. })));
            assert!(temp_dir.path().join("a_face_avatar.svg").exists());
            assert!(!temp_dir.path().join("b_face_features.json").exists());
        }
    }
}
