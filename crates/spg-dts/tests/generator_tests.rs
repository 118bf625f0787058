use spg_core::config::SpgConfig;
use spg_core::ir::{Shape, infer_shape};
use spg_core::parse::from_json;
use spg_core::transform::{GenerationRules, service_to_ir};
use spg_core::{DeclarationGenerator, NoShapes, ShapeSource};
use spg_dts::{DtsConfig, DtsGenerator};

fn generate(services: &[spg_core::ir::ServiceIr]) -> Vec<spg_core::GeneratedFile> {
    DtsGenerator
        .generate(services, &DtsConfig::default())
        .unwrap()
}

#[test]
fn test_manifest_lists_exactly_the_produced_files_index_last() {
    let rules = GenerationRules::from_config(&SpgConfig::default());
    let docs = [
        r#"{ "serviceName": "Chat", "operations": [] }"#,
        r#"{ "serviceName": "Group", "operations": [] }"#,
    ];
    let services: Vec<_> = docs
        .iter()
        .map(|doc| service_to_ir(&from_json(doc).unwrap(), &rules, &NoShapes))
        .collect();

    let files = generate(&services);
    assert_eq!(files.len(), 4);

    let manifest = files.last().unwrap();
    assert_eq!(manifest.path, "dts_file_names");

    let listed: Vec<&str> = manifest.content.lines().collect();
    let produced: Vec<&str> = files[..files.len() - 1]
        .iter()
        .map(|f| f.path.as_str())
        .collect();
    assert_eq!(listed, produced);
    assert_eq!(
        listed.last().copied(),
        Some("lib.cloudcode.service-proxies.d.ts")
    );
}

#[test]
fn test_group_summary_data_overload() {
    let doc = from_json(
        r#"{
            "serviceName": "Group",
            "operations": [
                { "apiMethod": "createGroupWithSummaryData", "desc": "d", "paramInfo": [] }
            ]
        }"#,
    )
    .unwrap();
    let rules = GenerationRules::from_config(&SpgConfig::default());
    let service = service_to_ir(&doc, &rules, &NoShapes);

    let files = generate(&[service]);
    assert_eq!(files[0].path, "lib.cloudcode.group-service-proxy.d.ts");
    assert!(
        files[0]
            .content
            .contains("\tcreateGroup(): ServiceProxyResponse;\n")
    );
}

struct ExampleShapes {
    ceiling: usize,
}

impl ShapeSource for ExampleShapes {
    fn response_shape(&self, _service: &str, method: &str) -> Option<Shape> {
        (method == "getChannelId").then(|| {
            let example = serde_json::json!({
                "status": 200,
                "data": { "channelId": "gl:valid" }
            });
            infer_shape(&example, self.ceiling)
        })
    }
}

#[test]
fn test_inferred_return_shape_rendered_into_signature() {
    let doc = from_json(
        r#"{
            "serviceName": "Chat",
            "operations": [
                {
                    "apiMethod": "getChannelId",
                    "desc": "Gets the channelId.",
                    "paramInfo": [
                        { "name": "channelType", "type": "String", "desc": "The channel type." }
                    ]
                },
                { "apiMethod": "channelConnect", "desc": "Connects.", "paramInfo": [] }
            ]
        }"#,
    )
    .unwrap();
    let rules = GenerationRules::from_config(&SpgConfig::default());
    let service = service_to_ir(&doc, &rules, &ExampleShapes { ceiling: 4 });

    let files = generate(&[service]);
    let content = &files[0].content;

    assert!(content.contains(
        "\tgetChannelId(channelType: string): {\n\
         \t    status: number;\n\
         \t    data: {\n\
         \t        channelId: string;\n\
         \t    };\n\
         \t};\n"
    ));
    // The operation without a shape falls back to the generic type.
    assert!(
        content.contains("\tchannelConnect(): ServiceProxyResponse;\n")
    );
}

#[test]
fn test_custom_prefix_and_extension() {
    let rules = GenerationRules::from_config(&SpgConfig::default());
    let service = service_to_ir(
        &from_json(r#"{ "serviceName": "PlaybackStream", "operations": [] }"#).unwrap(),
        &rules,
        &NoShapes,
    );

    let config = DtsConfig {
        file_prefix: "lib.scripting".to_string(),
        extension: "d.ts".to_string(),
    };
    let files = DtsGenerator.generate(&[service], &config).unwrap();
    assert_eq!(
        files[0].path,
        "lib.scripting.playback-stream-service-proxy.d.ts"
    );
    assert_eq!(files[1].path, "lib.scripting.service-proxies.d.ts");
}
