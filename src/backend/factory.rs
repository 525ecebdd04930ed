use std::sync::Arc;

use crate::app::Config;
use crate::store::Settings;

use super::mock::{GeneratorLatency, TemplateGenerator};
use super::traits::Generator;

/// Build the generation backend for the current settings.
///
/// Only the local template backend exists today; it presents as whatever
/// model the settings name so the header reads the same once a real
/// backend is wired in.
pub fn create_generator(settings: &Settings, config: &Config) -> Arc<dyn Generator> {
    let latency = if config.generator.simulate_latency {
        GeneratorLatency::default()
    } else {
        GeneratorLatency::none()
    };

    Arc::new(TemplateGenerator::new(settings.model.clone(), latency))
}
