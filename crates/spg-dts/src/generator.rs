use spg_core::ir::ServiceIr;
use spg_core::{DeclarationGenerator, GeneratedFile};
use thiserror::Error;

use crate::emitters;
use crate::file_names::{MANIFEST_FILE_NAME, index_file_name, proxy_file_name};

#[derive(Debug, Error)]
pub enum DtsError {
    #[error("template render failed: {0}")]
    Render(String),
}

/// Configuration for the declaration generator.
#[derive(Debug, Clone)]
pub struct DtsConfig {
    pub file_prefix: String,
    pub extension: String,
}

impl Default for DtsConfig {
    fn default() -> Self {
        Self {
            file_prefix: "lib.cloudcode".to_string(),
            extension: "d.ts".to_string(),
        }
    }
}

/// Ambient TypeScript declaration generator: one file per service, one
/// aggregate index file, one manifest.
pub struct DtsGenerator;

impl DeclarationGenerator for DtsGenerator {
    type Config = DtsConfig;
    type Error = DtsError;

    fn generate(
        &self,
        services: &[ServiceIr],
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error> {
        let mut files = Vec::with_capacity(services.len() + 2);
        let mut produced_names = Vec::with_capacity(services.len() + 1);

        for service in services {
            let path = proxy_file_name(
                &config.file_prefix,
                &service.service_name,
                &config.extension,
            );
            log::debug!("emitting {} ({} operations)", path, service.operations.len());
            produced_names.push(path.clone());
            files.push(GeneratedFile {
                path,
                content: emitters::service::emit_service(service),
            });
        }

        let index_path = index_file_name(&config.file_prefix, &config.extension);
        files.push(GeneratedFile {
            path: index_path.clone(),
            content: emitters::index::emit_index(services),
        });
        produced_names.push(index_path);

        // The manifest lists every produced file, index last, and never
        // lists itself.
        let mut manifest = produced_names.join("\n");
        manifest.push('\n');
        files.push(GeneratedFile {
            path: MANIFEST_FILE_NAME.to_string(),
            content: manifest,
        });

        Ok(files)
    }
}
