use figdrift::specs::{compare_specs, DesignSpecsBuilder};
use figdrift::{DesignSpecs, Error, FontDescriptor, LiveSpecs, NodeRef, SpecItem};

fn node(id: &str) -> NodeRef {
    NodeRef::new(id, format!("node {id}"))
}

fn design_colors(colors: &[&str]) -> DesignSpecs {
    let mut b = DesignSpecsBuilder::new();
    for (i, c) in colors.iter().enumerate() {
        b.add_color(c, node(&i.to_string()));
    }
    b.build(Default::default())
}

fn live_colors(colors: &[&str]) -> LiveSpecs {
    LiveSpecs {
        colors: colors.iter().map(|c| c.to_string()).collect(),
        ..Default::default()
    }
}

fn font_drift(design: FontDescriptor, live: FontDescriptor) -> bool {
    let mut b = DesignSpecsBuilder::new();
    b.add_font(design, node("1"));
    let live = LiveSpecs {
        fonts: vec![live],
        ..Default::default()
    };
    compare_specs(&b.build(Default::default()), &live).expect("compare").has_drift
}

fn spacing_drift(design: f64, live: f64) -> bool {
    let design = DesignSpecs {
        spacing: vec![SpecItem::new(design, node("1"))],
        ..Default::default()
    };
    let live = LiveSpecs {
        spacing: vec![live],
        ..Default::default()
    };
    compare_specs(&design, &live).expect("compare").has_drift
}

#[test]
fn color_distance_fifteen_is_not_drift() {
    let res = compare_specs(&design_colors(&["#FF0000"]), &live_colors(&["#F00000"])).unwrap();
    assert!(!res.has_drift);
}

#[test]
fn color_distance_thirty_one_is_drift() {
    let res = compare_specs(&design_colors(&["#FF0000"]), &live_colors(&["#E00000"])).unwrap();
    assert!(res.has_drift);
    assert_eq!(res.color_drift.len(), 1);
    assert!(res.font_drift.is_empty() && res.spacing_drift.is_empty());
}

#[test]
fn color_comparison_ignores_case() {
    let res = compare_specs(&design_colors(&["#AbCdEf"]), &live_colors(&["#ABCDEF"])).unwrap();
    assert!(!res.has_drift);
}

#[test]
fn malformed_color_propagates_error() {
    let err = compare_specs(&design_colors(&["#12345"]), &live_colors(&["#123456"])).unwrap_err();
    assert!(matches!(err, Error::InvalidColorFormat(ref s) if s == "#12345"));

    let err = compare_specs(&design_colors(&["#123456"]), &live_colors(&["rgb(1,2,3)"])).unwrap_err();
    assert!(matches!(err, Error::InvalidColorFormat(_)));
}

#[test]
fn live_css_colors_match_after_normalizing() {
    let live = live_colors(&["rgb(255, 0, 0)"]).normalized();
    let res = compare_specs(&design_colors(&["#FF0000"]), &live).unwrap();
    assert!(!res.has_drift);
}

#[test]
fn font_size_tolerance_is_exclusive() {
    let live = FontDescriptor::new("Inter", 16.0, 400);
    assert!(font_drift(FontDescriptor::new("Inter", 18.0, 400), live.clone()));
    assert!(!font_drift(FontDescriptor::new("Inter", 17.9, 400), live.clone()));
    assert!(!font_drift(FontDescriptor::new("INTER", 16.0, 400), live));
}

#[test]
fn font_weight_must_match_exactly() {
    let live = FontDescriptor::new("Inter", 16.0, 400);
    assert!(font_drift(FontDescriptor::new("Inter", 16.0, 500), live.clone()));
    assert!(font_drift(FontDescriptor::new("Inter", 16.0, 401), live));
}

#[test]
fn spacing_tolerance_is_inclusive() {
    assert!(!spacing_drift(16.0, 16.0));
    assert!(!spacing_drift(16.0, 18.0));
    assert!(!spacing_drift(16.0, 14.0));
    assert!(spacing_drift(16.0, 19.0));
}

// Font size uses `< 2` while spacing uses `<= 2`; both behaviours are pinned here.
#[test]
fn exactly_two_px_differs_between_fonts_and_spacing() {
    assert!(font_drift(
        FontDescriptor::new("Inter", 14.0, 400),
        FontDescriptor::new("Inter", 16.0, 400)
    ));
    assert!(!spacing_drift(14.0, 16.0));
}

#[test]
fn swapped_values_are_not_drift() {
    let mut b = DesignSpecsBuilder::new();
    b.add_color("#ff0000", NodeRef::new("X", "Header"));
    b.add_color("#0000ff", NodeRef::new("Y", "Button"));
    let res = compare_specs(&b.build(Default::default()), &live_colors(&["#0000ff", "#ff0000"])).unwrap();
    assert!(!res.has_drift);
}

#[test]
fn empty_design_never_drifts() {
    let live = LiveSpecs {
        colors: vec!["#123456".into(), "inherit".into(), "transparent".into()],
        fonts: vec![FontDescriptor::new("Inter", 12.0, 400)],
        spacing: vec![4.0, 8.0],
        ..Default::default()
    };
    let res = compare_specs(&DesignSpecs::default(), &live).unwrap();
    assert!(!res.has_drift);
}

#[test]
fn duplicate_declarations_collapse_into_one_item() {
    let mut b = DesignSpecsBuilder::new();
    b.add_color("#00ff00", NodeRef::new("10:1", "Primary"));
    b.add_color("#00FF00", NodeRef::new("10:2", "Accent"));
    let design = b.build(Default::default());

    assert_eq!(design.colors.len(), 1);
    let ids: Vec<&str> = design.colors[0].nodes.iter().map(|n| n.node_id.as_str()).collect();
    assert_eq!(ids, vec!["10:1", "10:2"]);

    // the drift entry carries the whole provenance list
    let res = compare_specs(&design, &live_colors(&[])).unwrap();
    assert_eq!(res.color_drift[0].nodes.len(), 2);
}
