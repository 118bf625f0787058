use minijinja::{Environment, context};
use spg_core::ir::{OperationIr, ServiceIr};

use crate::shape_mapper::shape_to_ts;

/// Return type used when no response shape could be inferred.
const DEFAULT_RETURN_TYPE: &str = "ServiceProxyResponse";

/// Emit one self-contained per-service declaration file.
pub fn emit_service(service: &ServiceIr) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template(
        "service.d.ts.j2",
        include_str!("../../templates/service.d.ts.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("service.d.ts.j2").unwrap();

    let operations: Vec<_> = service.operations.iter().map(operation_to_ctx).collect();

    tmpl.render(context! {
        interface_name => format!("{}ServiceProxy", service.service_name),
        operations => operations,
    })
    .expect("render should succeed")
}

fn operation_to_ctx(op: &OperationIr) -> minijinja::Value {
    // Doc lines carry the raw source type; signatures carry the
    // normalized one. A parameter without a description has no doc line.
    let doc_params: Vec<String> = op
        .params
        .iter()
        .filter_map(|p| {
            p.description
                .as_ref()
                .map(|desc| format!("@param  {{{}}} {} {}", p.raw_type, p.name, desc))
        })
        .collect();

    let signature = op
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ts_type))
        .collect::<Vec<_>>()
        .join(", ");

    let return_type = match &op.response_shape {
        Some(shape) => shape_to_ts(shape, 0),
        None => DEFAULT_RETURN_TYPE.to_string(),
    };

    context! {
        name => op.name.clone(),
        description => op.description.clone(),
        doc_params => doc_params,
        signature => signature,
        return_type => return_type,
    }
}
