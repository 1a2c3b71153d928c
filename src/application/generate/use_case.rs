//! Generate Use Case
//!
//! Orchestrates one generation run:
//! 1. Partition the tokens into a ClassSpec
//! 2. Load the resource store (if one is configured)
//! 3. Synchronize the required keys in memory
//! 4. Save the store as a full rewrite
//! 5. Render the source text
//! 6. Write the generated file
//!
//! The store is read once and written once. The generated file is written
//! only after the store was saved, so a store failure leaves no output.

use std::path::Path;
use std::sync::Arc;

use crate::domain::entities::ClassSpec;
use crate::domain::ports::{
    FileSystem, GenerateEvent, GenerateEventSink, NoopEventSink, ResourceRepository,
};
use crate::domain::services::{
    output_file_name, parse_invocation, required_keys, synchronize, KeyRecord, KeyStatus,
    SyncReport, TemplateRenderer,
};
use crate::error::{ActgenError, ActgenResult};

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case - parameterized by its ports
pub struct GenerateUseCase<RR, FS>
where
    RR: ResourceRepository,
    FS: FileSystem,
{
    resource_repo: RR,
    file_system: FS,
    renderer: TemplateRenderer,
}

impl<RR, FS> GenerateUseCase<RR, FS>
where
    RR: ResourceRepository,
    FS: FileSystem,
{
    pub fn new(resource_repo: RR, file_system: FS, renderer: TemplateRenderer) -> Self {
        Self {
            resource_repo,
            file_system,
            renderer,
        }
    }

    /// Execute the generate use case
    pub fn execute(&self, options: &GenerateOptions) -> ActgenResult<GenerateResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute the generate use case with event reporting
    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        events: Arc<dyn GenerateEventSink>,
    ) -> ActgenResult<GenerateResult> {
        let invocation = parse_invocation(&options.tokens)?;
        let spec = invocation.class_spec();

        events.on_event(GenerateEvent::Started {
            namespace_name: spec.namespace_name().to_string(),
            class_name: spec.class_name().to_string(),
            argument_count: spec.arguments().len(),
        });

        let resource_path = invocation
            .resource_path
            .clone()
            .or_else(|| options.resource_path.clone());

        let records = match &resource_path {
            Some(path) => self.sync_resources(path, &spec, options, events.as_ref())?,
            None => Vec::new(),
        };

        let content = self.renderer.render(&spec);
        events.on_event(GenerateEvent::Rendered {
            byte_count: content.len(),
        });

        let output_path = options
            .output_dir
            .join(output_file_name(&spec, &options.extension));
        if !options.dry_run {
            self.file_system
                .write(&output_path, &content)
                .map_err(|source| ActgenError::Fs {
                    path: output_path.clone(),
                    source,
                })?;
            events.on_event(GenerateEvent::FileWritten {
                path: output_path.clone(),
            });
        }

        let result = GenerateResult {
            namespace_name: spec.namespace_name().to_string(),
            class_name: spec.class_name().to_string(),
            output_path,
            content,
            resource_path,
            records,
            ignored_tokens: invocation.ignored,
            dry_run: options.dry_run,
        };

        events.on_event(GenerateEvent::Completed {
            added_count: result.added_count(),
            found_count: result.found_count(),
            dry_run: options.dry_run,
        });

        Ok(result)
    }

    /// Load, synchronize and save the store in one pass
    fn sync_resources(
        &self,
        path: &Path,
        spec: &ClassSpec,
        options: &GenerateOptions,
        events: &dyn GenerateEventSink,
    ) -> ActgenResult<Vec<KeyRecord>> {
        let store = self.resource_repo.load(path)?;
        events.on_event(GenerateEvent::StoreLoaded {
            path: path.to_path_buf(),
            entry_count: store.len(),
        });

        let report = synchronize(&store, &required_keys(spec, &options.default_value));
        if events.wants_detailed_events() {
            emit_key_events(&report, events);
        }

        if !options.dry_run {
            self.resource_repo.save(&report.store, path)?;
            events.on_event(GenerateEvent::StoreSaved {
                path: path.to_path_buf(),
                added_count: report.added_count(),
            });
        }

        Ok(report.records)
    }
}

fn emit_key_events(report: &SyncReport, events: &dyn GenerateEventSink) {
    for record in &report.records {
        let key = record.key.clone();
        events.on_event(match record.status {
            KeyStatus::Found => GenerateEvent::KeyFound { key },
            KeyStatus::Added => GenerateEvent::KeyAdded { key },
            KeyStatus::KeptBlank => GenerateEvent::KeyKeptBlank { key },
        });
    }
}
