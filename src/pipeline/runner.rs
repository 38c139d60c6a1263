// file: src/pipeline/runner.rs
// description: sequential load, describe, summarize, export pipeline
// reference: pipeline orchestration

use crate::config::Config;
use crate::describer::describe;
use crate::error::{PipelineError, Result};
use crate::exporter::JsonExporter;
use crate::loader::ElementLoader;
use crate::models::{Document, Element};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use crate::summarizer::{Summarizer, SummaryOptions, generate_summary};
use crate::utils::validation::Validator;
use tracing::{debug, info};

pub struct Pipeline<S> {
    summarizer: S,
    config: Config,
    options: SummaryOptions,
}

impl<S: Summarizer> Pipeline<S> {
    pub fn new(summarizer: S, config: Config) -> Self {
        let options = SummaryOptions::from(&config.summarizer);
        Self {
            summarizer,
            config,
            options,
        }
    }

    pub fn summarizer(&self) -> &S {
        &self.summarizer
    }

    /// Loads the input, builds every document, then writes the output once.
    pub async fn run(&self) -> Result<PipelineStats> {
        let paths = &self.config.paths;
        Validator::validate_output_path(&paths.output)?;

        let elements = ElementLoader::load(&paths.input)?;

        let mut tracker = if self.config.pipeline.show_progress {
            ProgressTracker::new(elements.len())
        } else {
            ProgressTracker::hidden()
        };

        let documents = self.build_with_tracker(&elements, &mut tracker).await?;
        tracker.finish();

        JsonExporter::new(&paths.output)
            .with_ensure_ascii(self.config.output.ensure_ascii)
            .export(&documents)?;

        let stats = tracker.get_stats();
        info!(
            "Processed {} elements in {:.2}s ({} summarized, {} passed through)",
            stats.elements_processed, stats.duration_secs, stats.summarized, stats.passed_through
        );
        info!(
            "Throughput: {:.2} elements/s, summarized ratio: {:.1}%",
            stats.elements_per_second(),
            stats.summarized_ratio()
        );
        Ok(stats)
    }

    /// One document per element, in input order. Stops at the first failure.
    pub async fn build_documents(&self, elements: &[Element]) -> Result<Vec<Document>> {
        let mut tracker = ProgressTracker::hidden();
        self.build_with_tracker(elements, &mut tracker).await
    }

    pub async fn process_element(&self, element: &Element) -> Result<(Document, bool)> {
        let description = describe(element)?;
        let outcome = generate_summary(&self.summarizer, &description, &self.options).await?;
        let summarized = outcome.is_summarized();
        Ok((Document::new(outcome.into_content(), element), summarized))
    }

    async fn build_with_tracker(
        &self,
        elements: &[Element],
        tracker: &mut ProgressTracker,
    ) -> Result<Vec<Document>> {
        let mut documents = Vec::with_capacity(elements.len());

        for (index, element) in elements.iter().enumerate() {
            let (document, summarized) =
                self.process_element(element)
                    .await
                    .map_err(|source| PipelineError::Element {
                        index,
                        express_id: element.express_id_text(),
                        source: Box::new(source),
                    })?;

            debug!(
                "Element {} ({}) {}",
                element.express_id_text(),
                element.type_name(),
                if summarized { "summarized" } else { "passed through" }
            );
            tracker.record(summarized);
            documents.push(document);
        }

        Ok(documents)
    }
}
