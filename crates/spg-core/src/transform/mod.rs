pub mod filter;
pub mod sanitize;
pub mod type_map;

pub use filter::{FilteredOperation, GenerationRules, filter_operations};

use crate::ShapeSource;
use crate::ir::{OperationIr, ParamIr, ServiceIr};
use crate::parse::ServiceDocument;

/// Transform one parsed service document into generator-ready IR.
///
/// Operations are filtered and deduplicated, parameter types normalized,
/// and response shapes resolved through the supplied [`ShapeSource`].
/// Missing substructure (`paramInfo`, per-parameter `desc`) is tolerated
/// and reported as a diagnostic, never an error.
pub fn service_to_ir(
    doc: &ServiceDocument,
    rules: &GenerationRules,
    shapes: &dyn ShapeSource,
) -> ServiceIr {
    let kept = filter_operations(&doc.service_name, &doc.operations, rules);

    let operations = kept
        .into_iter()
        .map(|filtered| {
            let params = match &filtered.entry.param_info {
                Some(params) => params
                    .iter()
                    .map(|param| {
                        if param.desc.is_none() {
                            log::warn!(
                                "{}.json - Parameter <{}> missing \"paramInfo.desc\".",
                                doc.service_name,
                                param.name
                            );
                        }
                        ParamIr {
                            name: param.name.clone(),
                            raw_type: param.param_type.clone(),
                            ts_type: type_map::normalize_param_type(&param.param_type),
                            description: param.desc.clone(),
                        }
                    })
                    .collect(),
                None => {
                    log::warn!("{}.json - Missing \"paramInfo\".", doc.service_name);
                    Vec::new()
                }
            };

            let response_shape = shapes.response_shape(&doc.service_name, &filtered.logical_name);

            OperationIr {
                name: rules.emitted_name(&filtered.logical_name).to_string(),
                description: filtered.entry.desc.clone(),
                params,
                response_shape,
            }
        })
        .collect();

    ServiceIr {
        service_name: doc.service_name.clone(),
        operations,
    }
}
