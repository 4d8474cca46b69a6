//! End-to-end tests for board text conversion.

use plated_slot_converter::kicad::{
    convert, find_pads, survey, Orientation, RotationMode, SlotError, SlotOptions,
};

const SINGLE_PAD: &str = r#"(pad 1 thru_hole oval (at 10 10 0) (size 1.5 2) (drill oval 0.8 1.2) (layers *.Cu *.Mask) (net 1 "GND"))"#;

const USB_C: &str = include_str!("data/usb_c_receptacle.kicad_pcb");

// =============================================================================
// Single Pad
// =============================================================================

#[test]
fn test_single_pad_vertical_slot() {
    let out = convert(SINGLE_PAD, &SlotOptions::default()).expect("conversion failed");

    let expected = "\
(pad 1 smd oval (at 10 10 0) (size 1.5 2) (layers F.Cu F.Paste F.Mask) (net 1 \"GND\"))
(pad 1 smd oval (at 10 10 0) (size 1.5 2) (layers B.Cu B.Paste B.Mask) (net 1 \"GND\"))
(fp_arc (start 10 9.8) (end 10.4 9.8) (angle -180) (layer Edge.Cuts) (width 0.0508))
(fp_arc (start 10 10.2) (end 10.4 10.2) (angle 180) (layer Edge.Cuts) (width 0.0508))
(fp_line (start 9.6 9.8) (end 9.6 10.2) (layer Edge.Cuts) (width 0.0508))
(fp_line (start 10.4 9.8) (end 10.4 10.2) (layer Edge.Cuts) (width 0.0508))
";
    assert_eq!(out, expected);
}

#[test]
fn test_single_pad_horizontal_slot() {
    let text = SINGLE_PAD.replace("(size 1.5 2)", "(size 2 1.5)");
    let out = convert(&text, &SlotOptions::default()).expect("conversion failed");

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[2],
        "(fp_arc (start 9.8 10) (end 9.8 9.6) (angle -180) (layer Edge.Cuts) (width 0.0508))"
    );
    assert_eq!(
        lines[3],
        "(fp_arc (start 10.2 10) (end 10.2 9.6) (angle 180) (layer Edge.Cuts) (width 0.0508))"
    );
    assert_eq!(
        lines[4],
        "(fp_line (start 9.8 9.6) (end 10.2 9.6) (layer Edge.Cuts) (width 0.0508))"
    );
    assert_eq!(
        lines[5],
        "(fp_line (start 9.8 10.4) (end 10.2 10.4) (layer Edge.Cuts) (width 0.0508))"
    );
}

#[test]
fn test_rotated_pad_keeps_axis_by_default() {
    let text = SINGLE_PAD.replace("(at 10 10 0)", "(at 10 10 90)");
    let out = convert(&text, &SlotOptions::default()).expect("conversion failed");
    assert!(out.contains("(at 10 10 90)"));
    assert!(out.contains("(fp_line (start 9.6 9.8) (end 9.6 10.2)"));
}

#[test]
fn test_rotated_pad_follow_pad_mode() {
    let text = SINGLE_PAD.replace("(at 10 10 0)", "(at 10 10 270)");
    let options = SlotOptions {
        rotation_mode: RotationMode::FollowPad,
        ..SlotOptions::default()
    };
    let out = convert(&text, &options).expect("conversion failed");
    assert!(out.contains("(fp_line (start 9.8 9.6) (end 10.2 9.6)"));
    assert!(out.contains("(fp_line (start 9.8 10.4) (end 10.2 10.4)"));
}

// =============================================================================
// Whole Document
// =============================================================================

#[test]
fn test_document_pass_through() {
    let found = find_pads(USB_C).count();
    assert_eq!(found, 4);

    let out = convert(USB_C, &SlotOptions::default()).expect("conversion failed");

    assert!(!out.contains("thru_hole oval"));
    assert_eq!(out.matches("smd oval").count(), 8);
    assert_eq!(out.matches("(fp_arc").count(), 8);
    assert_eq!(out.matches("(fp_line").count(), 8);

    // Text before the first slot and after the last one is untouched
    let first = USB_C.find("(pad S1").unwrap();
    assert_eq!(&out[..first], &USB_C[..first]);
    let tail = USB_C.find("\n    (pad \"\" np_thru_hole").unwrap();
    assert!(out.ends_with(&USB_C[tail..]));
}

#[test]
fn test_document_without_slots_unchanged() {
    let text = USB_C.replace("thru_hole oval", "thru_hole circle");
    let out = convert(&text, &SlotOptions::default()).expect("conversion failed");
    assert_eq!(out, text);
}

#[test]
fn test_survey_document() {
    let found = survey(USB_C, &SlotOptions::default()).expect("survey failed");
    assert_eq!(found.len(), 4);
    for (record, geometry) in &found {
        assert_eq!(record.id, "S1");
        assert_eq!(record.net.name, "GND");
        assert_eq!(geometry.orientation, Orientation::Vertical);
        assert!((geometry.width - 0.7).abs() < 1e-9);
    }
    assert!((found[0].1.half_len - 0.55).abs() < 1e-9);
    assert!((found[2].1.half_len - 0.25).abs() < 1e-9);
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_narrow_slot_rejected() {
    let text = SINGLE_PAD.replace("(drill oval 0.8 1.2)", "(drill oval 0.5 1.2)");
    let err = convert(&text, &SlotOptions::default()).unwrap_err();
    assert!(matches!(err, SlotError::SlotTooNarrow { .. }));
    assert!(err.to_string().contains("pad 1"));
}

#[test]
fn test_odd_rotation_rejected() {
    let text = SINGLE_PAD.replace("(at 10 10 0)", "(at 10 10 45)");
    let err = convert(&text, &SlotOptions::default()).unwrap_err();
    assert!(matches!(err, SlotError::UnsupportedRotation { .. }));
}

#[test]
fn test_board_house_limit_is_configurable() {
    assert!(convert(USB_C, &SlotOptions::default()).is_ok());

    let stricter = SlotOptions {
        min_width: 0.8,
        ..SlotOptions::default()
    };
    let err = convert(USB_C, &stricter).unwrap_err();
    assert!(matches!(
        err,
        SlotError::SlotTooNarrow { minimum, .. } if (minimum - 0.8).abs() < f64::EPSILON
    ));
}

#[test]
fn test_board_house_limit_cannot_go_below_floor() {
    let text = USB_C.replace("drill oval 0.7", "drill oval 0.6");
    let looser = SlotOptions {
        min_width: 0.3,
        ..SlotOptions::default()
    };
    let err = convert(&text, &looser).unwrap_err();
    assert!(matches!(
        err,
        SlotError::SlotTooNarrow { minimum, .. } if (minimum - 0.7).abs() < f64::EPSILON
    ));
}
