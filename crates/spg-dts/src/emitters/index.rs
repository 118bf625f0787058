use minijinja::{Environment, context};
use spg_core::ir::ServiceIr;

/// Emit the aggregate index declaration: one accessor per service, in
/// processing order, wrapped in one `ServiceProxies` interface.
pub fn emit_index(services: &[ServiceIr]) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template(
        "index.d.ts.j2",
        include_str!("../../templates/index.d.ts.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("index.d.ts.j2").unwrap();

    let services: Vec<_> = services
        .iter()
        .map(|svc| {
            context! {
                name => svc.service_name.clone(),
            }
        })
        .collect();

    tmpl.render(context! {
        services => services,
    })
    .expect("render should succeed")
}
