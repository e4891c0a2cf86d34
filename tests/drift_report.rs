use figdrift::specs::{extract_design_specs, DesignNode};
use figdrift::{run_drift_check, Bitmap, CompareConfig, Error, FontDescriptor, LiveSpecs, Severity};

const CARD: &str = r##"{
    "id": "2:1",
    "name": "Pricing card",
    "absoluteBoundingBox": {"x": 0, "y": 0, "width": 40, "height": 40},
    "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1}}],
    "paddingLeft": 24,
    "children": [
        {
            "id": "2:2",
            "name": "Price",
            "fills": [{"type": "SOLID", "color": {"r": 0.2, "g": 0.4, "b": 1}}],
            "style": {"fontFamily": "Inter", "fontSize": 32, "fontWeight": 700}
        }
    ]
}"##;

fn design_specs() -> figdrift::DesignSpecs {
    let node: DesignNode = serde_json::from_str(CARD).expect("parse design node");
    extract_design_specs(&node)
}

fn matching_live() -> LiveSpecs {
    LiveSpecs {
        colors: vec!["rgb(255, 255, 255)".into(), "#3366FF".into()],
        fonts: vec![FontDescriptor::new("inter", 31.0, 700)],
        spacing: vec![23.0],
        ..Default::default()
    }
    .normalized()
}

#[tokio::test]
async fn clean_run_passes() {
    let img = Bitmap::filled(40, 40, [255, 255, 255, 255]);
    let outcome = run_drift_check(img.clone(), img, design_specs(), matching_live(), CompareConfig::default())
        .await
        .expect("drift check");

    let report = &outcome.report;
    assert!(report.passed);
    assert_eq!(report.visual.diff_percent, 0.0);
    assert_eq!(report.visual.severity, Severity::Low);
    assert!(!report.specs.has_drift);
    assert!(outcome.pixels.composite.is_some());
}

#[tokio::test]
async fn spec_drift_fails_the_report_and_names_nodes() {
    let img = Bitmap::filled(40, 40, [255, 255, 255, 255]);
    let mut live = matching_live();
    live.fonts = vec![FontDescriptor::new("Inter", 32.0, 600)];

    let outcome = run_drift_check(img.clone(), img, design_specs(), live, CompareConfig::default())
        .await
        .expect("drift check");

    assert!(!outcome.report.passed);
    let drift = &outcome.report.specs.font_drift;
    assert_eq!(drift.len(), 1);
    assert_eq!(drift[0].nodes[0].node_name, "Price");

    let json = serde_json::to_value(&outcome.report).unwrap();
    assert_eq!(json["specs"]["fontDrift"][0]["nodes"][0]["nodeId"], "2:2");
}

#[tokio::test]
async fn visual_drift_over_threshold_fails() {
    let design = Bitmap::filled(40, 40, [255, 255, 255, 255]);
    let live = Bitmap::from_fn(40, 40, |_, y| if y < 8 { [0, 0, 0, 255] } else { [255, 255, 255, 255] });
    let config = CompareConfig {
        render_composite: false,
        ..Default::default()
    };

    let outcome = run_drift_check(design, live, design_specs(), matching_live(), config)
        .await
        .expect("drift check");

    assert_eq!(outcome.report.visual.diff_percent, 20.0);
    assert_eq!(outcome.report.visual.severity, Severity::High);
    assert!(!outcome.report.passed);
    assert!(outcome.pixels.composite.is_none());
}

#[tokio::test]
async fn malformed_live_color_is_an_error() {
    let img = Bitmap::filled(4, 4, [0, 0, 0, 255]);
    let live = LiveSpecs {
        colors: vec!["transparent".into()],
        ..Default::default()
    };

    let err = run_drift_check(img.clone(), img, design_specs(), live, CompareConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidColorFormat(_)));
}

#[tokio::test]
async fn invalid_threshold_is_rejected() {
    let img = Bitmap::filled(4, 4, [0, 0, 0, 255]);
    let config = CompareConfig {
        threshold: 1.5,
        ..Default::default()
    };
    let err = run_drift_check(img.clone(), img, Default::default(), Default::default(), config)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ConfigError(_)));
}

#[cfg(feature = "codec")]
#[tokio::test]
async fn png_captures_round_trip_into_report() {
    use figdrift::codec::{decode_png, encode_png};

    let design = Bitmap::from_fn(16, 16, |x, _| if x < 8 { [255, 0, 0, 255] } else { [255, 255, 255, 255] });
    let live = decode_png(&encode_png(&design).unwrap()).unwrap();
    let outcome = run_drift_check(design, live, Default::default(), Default::default(), CompareConfig::default())
        .await
        .unwrap();

    assert!(outcome.report.passed);
    let composite = outcome.pixels.composite.expect("composite");
    let png = encode_png(&composite).unwrap();
    assert_eq!(decode_png(&png).unwrap(), composite);
}
