//! Integration tests for the full simulate/correct/name pipeline
//!
//! These validate the end-to-end contracts a capture/UI layer relies on:
//! - dimension preservation and channel range across all variants
//! - identity at zero correction strength and determinism of simulation
//! - staged name resolution, including tie-breaks and HSV banding edges
//! - hand-computed matrix arithmetic for a known input

use cvd_assist::{
    apply_matrix, correct, name_color, simulate, AssistConfig, AssistError, ColorNamer, Frame,
    NameSource, NamedColorEntry, Variant,
};

fn gradient_frame(width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 17 % 256) as u8);
            data.push((y * 31 % 256) as u8);
            data.push(((x + y) * 13 % 256) as u8);
        }
    }
    Frame::new(width, height, data).unwrap()
}

// ============================================================================
// Transform Engine
// ============================================================================

#[test]
fn test_simulate_preserves_dimensions_for_all_variants() {
    let frame = gradient_frame(16, 9);
    for variant in Variant::ALL {
        let out = simulate(&frame, variant);
        assert_eq!(out.width(), 16);
        assert_eq!(out.height(), 9);
        assert_eq!(out.as_raw().len(), frame.as_raw().len());
    }
}

#[test]
fn test_simulate_is_deterministic() {
    let frame = gradient_frame(8, 8);
    for variant in Variant::ALL {
        assert_eq!(
            simulate(&frame, variant).as_raw(),
            simulate(&frame, variant).as_raw()
        );
    }
}

#[test]
fn test_correct_zero_strength_is_identity() {
    let frame = gradient_frame(8, 8);
    for variant in Variant::ALL {
        assert_eq!(correct(&frame, variant, 0.0).as_raw(), frame.as_raw());
    }
}

#[test]
fn test_tritanopia_cyan_hand_computed() {
    // (0,255,255) normalized is (0,1,1) against the tritanopia matrix
    // [[0.95,0.05,0],[0,0.43333,0.56667],[0,0.475,0.525]]:
    //   r' = 0.05 -> 12.75 -> 12, g' = 1.0 -> 255, b' = 1.0 -> 255
    let frame = Frame::filled(1, 1, [0, 255, 255]);
    let out = simulate(&frame, Variant::Tritanopia);
    assert_eq!(out.pixel(0, 0), Some([12, 255, 255]));
}

#[test]
fn test_apply_matrix_clips_instead_of_wrapping() {
    let amplify = [[1.5, 0.0, 0.0], [0.0, 1.5, 0.0], [0.0, 0.0, 1.5]];
    let frame = Frame::filled(2, 2, [200, 200, 200]);
    let out = apply_matrix(&frame, &amplify);
    assert!(out.pixels().all(|p| p == [255, 255, 255]));
}

#[test]
fn test_correction_is_closer_than_simulation_but_not_exact() {
    // correct(simulate(F)) is not expected to reconstruct F: the matrices
    // are rank-deficient, so the delta only narrows the gap
    let frame = gradient_frame(12, 12);
    for variant in Variant::ALL {
        let simulated = simulate(&frame, variant);
        let corrected = correct(&frame, variant, 0.7);

        let total_error = |candidate: &Frame| -> i64 {
            frame
                .as_raw()
                .iter()
                .zip(candidate.as_raw().iter())
                .map(|(&a, &b)| (a as i64 - b as i64).abs())
                .sum()
        };

        assert!(total_error(&corrected) < total_error(&simulated));
        assert_ne!(corrected.as_raw(), frame.as_raw());
    }
}

// ============================================================================
// Color Namer
// ============================================================================

#[test]
fn test_pure_red_resolves_via_css_stage() {
    let namer = ColorNamer::new();
    let resolved = namer.resolve([255, 0, 0], 50.0);
    assert_eq!(resolved.name, "red");
    assert_eq!(resolved.source, NameSource::Css);
}

#[test]
fn test_near_black_takes_gray_branch_under_tight_tolerance() {
    // (10,10,10) is ~17.3 from the dictionary's black entry; tolerance 10
    // pushes resolution into the HSV fallback
    assert_eq!(name_color([10, 10, 10], 10.0), "very dark gray");
}

#[test]
fn test_dictionary_tie_break_uses_declared_order() {
    let namer = ColorNamer::with_dictionary(vec![
        NamedColorEntry::new("left", [100, 100, 100]),
        NamedColorEntry::new("right", [120, 100, 100]),
    ])
    .unwrap();
    // (110,100,100) is exactly 10 from both entries
    let resolved = namer.resolve([110, 100, 100], 50.0);
    assert_eq!(resolved.name, "left");
    assert_eq!(resolved.source, NameSource::Dictionary);
}

#[test]
fn test_namer_never_returns_empty_string() {
    let namer = ColorNamer::new();
    for r in (0..=255).step_by(51) {
        for g in (0..=255).step_by(51) {
            for b in (0..=255).step_by(51) {
                let name = namer.name_color([r as u8, g as u8, b as u8], 0.0);
                assert!(!name.is_empty());
            }
        }
    }
}

#[test]
fn test_simulated_pixel_can_be_named() {
    // The two components compose without depending on each other: name the
    // center pixel of a simulated frame, as the UI's click-to-name path does
    let frame = Frame::filled(5, 5, [0, 255, 255]);
    let simulated = simulate(&frame, Variant::Tritanopia);
    let pixel = simulated.pixel(2, 2).unwrap();
    assert!(!name_color(pixel, 50.0).is_empty());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_roundtrip() {
    let dir = std::env::temp_dir().join("cvd_assist_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.json");

    let config = AssistConfig {
        variant: Variant::Deuteranopia,
        strength: 0.5,
        tolerance: 80.0,
        ..AssistConfig::default()
    };
    config.to_json_file(&path).unwrap();

    let loaded = AssistConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded.variant, Variant::Deuteranopia);
    assert_eq!(loaded.strength, 0.5);
    assert_eq!(loaded.tolerance, 80.0);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_config_load_missing_file() {
    let result = AssistConfig::from_json_file(std::path::Path::new("nonexistent_config.json"));
    assert!(matches!(result, Err(AssistError::ConfigIoError { .. })));
}

#[test]
fn test_config_load_rejects_invalid_tolerance() {
    let dir = std::env::temp_dir().join("cvd_assist_config_test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("bad_tolerance.json");
    std::fs::write(
        &path,
        r#"{"variant":"protanopia","strength":0.7,"tolerance":-3.0}"#,
    )
    .unwrap();

    let result = AssistConfig::from_json_file(&path);
    assert!(matches!(result, Err(AssistError::InvalidParameter { .. })));

    std::fs::remove_file(&path).ok();
}
