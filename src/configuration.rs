use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use log::debug;
use serde::{
    Deserialize,
    Serialize
};

use crate::configurationerror::ConfigurationError;
use crate::math::linear::gaussianelimination::LinearSolverSettings;
use crate::math::tabulated::tabulatedfunctionfactory::{
    FactoryType,
    TabulatedFunctionFactory
};

/// Process-wide defaults: which storage backs newly created tabulated
/// functions, and how the collocation solver treats vanishing pivots.
///
/// ```json
/// {
///     "factory": "linked_list",
///     "linear_solver": { "pivot_policy": "reject", "pivot_tolerance": 1e-12 }
/// }
/// ```
///
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    factory: FactoryType,
    linear_solver: LinearSolverSettings,
}

impl Configuration {
    pub fn new(factory: FactoryType, linear_solver: LinearSolverSettings) -> Configuration {
        Configuration { factory, linear_solver }
    }

    pub fn from_reader(file_path: String) -> Result<Configuration, ConfigurationError> {
        let file = File::open(&file_path)?;
        let reader = BufReader::new(file);
        let configuration: Configuration = serde_json::from_reader(reader)?;
        debug!("configuration loaded from {}: {:?}", file_path, configuration);
        Ok(configuration)
    }

    pub fn from_json_str(json: &str) -> Result<Configuration, ConfigurationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn factory_type(&self) -> FactoryType {
        self.factory
    }

    pub fn tabulated_function_factory(&self) -> Arc<dyn TabulatedFunctionFactory> {
        Arc::from(self.factory.factory())
    }

    pub fn linear_solver(&self) -> &LinearSolverSettings {
        &self.linear_solver
    }
}
