use pocketmod::*;

#[test]
fn test_default_options() {
    let options = PocketModOptions::default();
    assert_eq!(options.paper_size, PaperSize::A4);
    assert_eq!(options.size_tolerance_pt, 1.0);
    assert!(options.validate().is_ok());
}

#[test]
fn test_validation_bad_paper() {
    let options = PocketModOptions {
        paper_size: PaperSize::Custom {
            width_mm: 0.0,
            height_mm: 297.0,
        },
        ..Default::default()
    };
    match options.validate() {
        Err(PocketModError::Config(msg)) => assert!(msg.contains("Paper dimensions")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    let options = PocketModOptions {
        paper_size: PaperSize::Custom {
            width_mm: f32::NAN,
            height_mm: 297.0,
        },
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_bad_tolerance() {
    let mut options = PocketModOptions::default();

    options.size_tolerance_pt = -0.5;
    assert!(options.validate().is_err());

    options.size_tolerance_pt = f32::INFINITY;
    assert!(options.validate().is_err());

    options.size_tolerance_pt = 0.0;
    assert!(options.validate().is_ok());
}

#[test]
fn test_sheet_is_page_turned_landscape() {
    let options = PocketModOptions::default();
    let (page_w, page_h) = options.page_dimensions_pt();
    let (sheet_w, sheet_h) = options.sheet_dimensions_pt();
    assert_eq!((sheet_w, sheet_h), (page_h, page_w));
}

#[test]
fn test_matches_page_size() {
    let options = PocketModOptions::default();

    assert!(options.matches_page_size(595.0, 842.0));
    assert!(options.matches_page_size(595.276, 841.89));
    assert!(!options.matches_page_size(612.0, 792.0));
    assert!(!options.matches_page_size(842.0, 595.0));
    assert!(!options.matches_page_size(f32::NAN, 842.0));

    let strict = PocketModOptions {
        size_tolerance_pt: 0.0,
        ..Default::default()
    };
    assert!(!strict.matches_page_size(595.0, 842.0));
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let options = PocketModOptions {
        paper_size: PaperSize::Custom {
            width_mm: 100.0,
            height_mm: 140.0,
        },
        size_tolerance_pt: 2.5,
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = PocketModOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_options_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), br#"{ "paper_size": "Letter" }"#).unwrap();

    let loaded = PocketModOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.paper_size, PaperSize::Letter);
    assert_eq!(loaded.size_tolerance_pt, 1.0);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), b"{ not json").unwrap();
    assert!(matches!(
        PocketModOptions::load(temp_file.path()).await,
        Err(PocketModError::Config(_))
    ));

    std::fs::write(temp_file.path(), br#"{ "size_tolerance_pt": -3.0 }"#).unwrap();
    assert!(matches!(
        PocketModOptions::load(temp_file.path()).await,
        Err(PocketModError::Config(_))
    ));
}
