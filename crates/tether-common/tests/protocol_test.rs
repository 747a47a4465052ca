use serde_json::json;
use tether_common::{
    ArrowOption, ArrowSettings, DeclarationDefinition, FloatingUiOverrides, NamedMiddleware,
    Placement, PositioningOptions, StepDefinition, Strategy,
};

#[test]
fn test_placement_wire_names() {
    assert_eq!(serde_json::to_value(Placement::TopStart).unwrap(), json!("top-start"));
    assert_eq!(
        serde_json::from_value::<Placement>(json!("auto-end")).unwrap(),
        Placement::AutoEnd
    );
    assert_eq!(Placement::RightEnd.to_string(), "right-end");
    assert!(serde_json::from_value::<Placement>(json!("sideways")).is_err());
}

#[test]
fn test_placement_alignment() {
    assert!(Placement::Auto.is_auto());
    assert!(!Placement::Center.is_auto());
    assert!(Placement::BottomStart.is_edge_aligned());
    assert!(!Placement::Bottom.is_edge_aligned());
}

#[test]
fn test_positioning_options_flatten_extra_fields() {
    let options: PositioningOptions = serde_json::from_value(json!({
        "strategy": "fixed",
        "middleware": [{ "name": "flip" }],
        "platform": "dom"
    }))
    .unwrap();

    assert_eq!(options.strategy, Strategy::Fixed);
    assert_eq!(options.placement, None);
    assert_eq!(options.middleware, vec![NamedMiddleware::new("flip")]);
    assert_eq!(options.extra.get("platform"), Some(&json!("dom")));
    assert_eq!(
        serde_json::to_value(&options).unwrap(),
        json!({
            "strategy": "fixed",
            "middleware": [{ "name": "flip" }],
            "platform": "dom"
        })
    );
}

#[test]
fn test_empty_overrides() {
    let overrides: FloatingUiOverrides = serde_json::from_value(json!({})).unwrap();
    assert!(overrides.is_empty());

    let overrides: FloatingUiOverrides =
        serde_json::from_value(json!({ "strategy": "absolute" })).unwrap();
    assert!(!overrides.is_empty());
    assert_eq!(overrides.strategy, Some(Strategy::Absolute));
    assert_eq!(overrides.middleware, None);
}

#[test]
fn test_arrow_option_forms() {
    let off: ArrowOption = serde_json::from_value(json!(false)).unwrap();
    let padded: ArrowOption = serde_json::from_value(json!({ "padding": 8 })).unwrap();
    let bare: ArrowOption = serde_json::from_value(json!({})).unwrap();

    assert!(!off.is_enabled());
    assert_eq!(padded, ArrowOption::Settings(ArrowSettings { padding: Some(8.0) }));
    assert!(padded.is_enabled());
    assert_eq!(bare.padding(), None);
    assert!(ArrowOption::default().is_enabled());
}

#[test]
fn test_step_definition_single_attachment() {
    let definition = StepDefinition::from_yaml(
        r#"
id: intro
attachTo:
  element: .options-test
  on: right
floatingUIOptions:
  middleware:
    - name: preventOverflow
      options:
        altAxis: false
options:
  floatingUIOptions:
    strategy: absolute
arrow:
  padding: 6
extraHighlights: [".sidebar"]
"#,
    )
    .unwrap();

    assert_eq!(definition.id.as_deref(), Some("intro"));
    match definition.attach_to {
        Some(DeclarationDefinition::Single(ref attachment)) => {
            assert_eq!(attachment.element.as_deref(), Some(".options-test"));
            assert_eq!(attachment.on, Some(Placement::Right));
        }
        ref other => panic!("expected single attachment, got {:?}", other),
    }
    let top = definition.floating_ui_options.as_ref().unwrap();
    assert_eq!(top.middleware.as_ref().unwrap()[0].name, "preventOverflow");
    let nested = definition
        .options
        .as_ref()
        .and_then(|o| o.floating_ui_options.as_ref())
        .unwrap();
    assert_eq!(nested.strategy, Some(Strategy::Absolute));
    assert_eq!(definition.arrow.padding(), Some(6.0));
    assert_eq!(definition.extra_highlights, vec![".sidebar".to_string()]);
}

#[test]
fn test_step_definition_many_attachments_from_json() {
    let definition = StepDefinition::from_yaml(
        r#"{"attachTo": [{"element": ".class1", "on": "center"}, {"on": "top"}]}"#,
    )
    .unwrap();

    match definition.attach_to {
        Some(DeclarationDefinition::Many(ref attachments)) => {
            assert_eq!(attachments.len(), 2);
            assert_eq!(attachments[0].element.as_deref(), Some(".class1"));
            assert_eq!(attachments[1].element, None);
            assert_eq!(attachments[1].on, Some(Placement::Top));
        }
        ref other => panic!("expected attachment list, got {:?}", other),
    }
    assert!(definition.arrow.is_enabled());
}

#[test]
fn test_step_definition_without_attachment() {
    let definition = StepDefinition::from_yaml("id: floating").unwrap();

    assert_eq!(definition.attach_to, None);
    assert_eq!(definition.floating_ui_options, None);
}

#[test]
fn test_step_definition_load_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "attachTo: {{ element: '#menu', on: bottom-end }}").unwrap();

    let definition = StepDefinition::load_from(file.path()).unwrap();

    match definition.attach_to {
        Some(DeclarationDefinition::Single(ref attachment)) => {
            assert_eq!(attachment.element.as_deref(), Some("#menu"));
            assert_eq!(attachment.on, Some(Placement::BottomEnd));
        }
        ref other => panic!("expected single attachment, got {:?}", other),
    }
    assert!(StepDefinition::load_from(std::path::Path::new("/nonexistent/step.yaml")).is_err());
}
