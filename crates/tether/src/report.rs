use serde::Serialize;
use tether_common::StepDefinition;
use tether_core::{
    AttachmentResolver, HtmlDocument, HtmlElement, PositioningConfig, PositioningOptions,
    ResolveError, ResolvedAttachment, Step, configure_positioning,
};

/// What `tether resolve` prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    pub centered: bool,
    pub targets: Vec<ResolvedAttachment<HtmlElement>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extra_highlights: Vec<HtmlElement>,
    #[serde(rename = "floatingUIOptions")]
    pub floating_ui_options: PositioningOptions,
}

pub fn build(
    definition: &StepDefinition,
    document: &HtmlDocument,
    config: &PositioningConfig,
) -> Result<Report, ResolveError> {
    let step = Step::from_definition(definition);
    let resolver = AttachmentResolver::new(document);

    let targets = resolver.resolve(&step)?;
    let positioning = configure_positioning(targets.first(), &step, config);

    Ok(Report {
        step: step.id.clone(),
        centered: positioning.centered,
        extra_highlights: resolver.resolve_extra_highlights(&step),
        targets,
        floating_ui_options: positioning.options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGE: &str = r#"<html><body><button id="save">Save</button><p class="hint">a</p></body></html>"#;

    #[test]
    fn test_report_for_anchored_step() {
        let document = HtmlDocument::parse(PAGE);
        let definition = StepDefinition::from_yaml(
            "id: save\nattachTo: { element: '#save', on: bottom }\nextraHighlights: ['.hint']",
        )
        .unwrap();

        let report = build(&definition, &document, &PositioningConfig::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["step"], json!("save"));
        assert_eq!(value["centered"], json!(false));
        assert_eq!(value["targets"][0]["element"]["id"], json!("save"));
        assert_eq!(value["targets"][0]["on"], json!("bottom"));
        assert_eq!(value["extraHighlights"][0]["tag"], json!("p"));
        assert_eq!(value["floatingUIOptions"]["placement"], json!("bottom"));
    }

    #[test]
    fn test_report_for_missing_target() {
        let document = HtmlDocument::parse(PAGE);
        let definition =
            StepDefinition::from_yaml("attachTo: { element: '#gone', on: top }").unwrap();

        let report = build(&definition, &document, &PositioningConfig::default()).unwrap();

        assert!(report.centered);
        assert_eq!(report.targets.len(), 1);
        assert_eq!(report.targets[0].element, None);
        assert!(report.floating_ui_options.middleware.is_empty());
    }
}
