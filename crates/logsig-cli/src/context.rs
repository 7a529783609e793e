use crate::args::Cli;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::{Result, anyhow};
use logsig_core::{CheckSpec, Config, SortOrder, resolve_config_path, resolve_log_dir};
use logsig_scanner::{LogLocator, PatternCheck, builtin_checks, compile_checks};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Where a check came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckSource {
    Builtin,
    Config,
}

impl CheckSource {
    pub fn label(self) -> &'static str {
        match self {
            CheckSource::Builtin => "builtin",
            CheckSource::Config => "config",
        }
    }
}

/// Settings resolved once from flags, environment and the config file.
pub struct ExecutionContext {
    log_dir: PathBuf,
    config_path: Option<PathBuf>,
    order: SortOrder,
    format: OutputFormat,
    pub config: Config,
}

impl ExecutionContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = resolve_config_path(cli.config.as_deref());
        let config = match &config_path {
            Some(path) => Config::load_from(path)
                .map_err(|e| anyhow!("failed to load {}: {}", path.display(), e))?,
            None => Config::default(),
        };

        Ok(Self::new(cli, config, config_path))
    }

    pub fn new(cli: &Cli, config: Config, config_path: Option<PathBuf>) -> Self {
        let log_dir = resolve_log_dir(cli.path.as_deref(), config.log_dir.as_deref());
        let order = cli.order.map(SortOrder::from).unwrap_or(config.order);

        Self {
            log_dir,
            config_path,
            order,
            format: cli.format,
            config,
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn locator(&self) -> LogLocator {
        LogLocator::new(&self.log_dir).with_order(self.order)
    }

    /// Built-in checks (unless disabled) followed by configured ones.
    pub fn check_specs(&self) -> Vec<(CheckSource, CheckSpec)> {
        let mut specs = Vec::new();
        if self.config.include_builtin_checks {
            specs.extend(
                builtin_checks()
                    .into_iter()
                    .map(|spec| (CheckSource::Builtin, spec)),
            );
        }
        specs.extend(
            self.config
                .checks
                .iter()
                .cloned()
                .map(|spec| (CheckSource::Config, spec)),
        );
        specs
    }

    pub fn compile_checks(&self) -> Result<Vec<PatternCheck>> {
        let specs: Vec<CheckSpec> = self
            .check_specs()
            .into_iter()
            .map(|(_, spec)| spec)
            .collect();
        Ok(compile_checks(&specs)?)
    }

    /// Render a view model using the configured output format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format == OutputFormat::Json);
        renderer.render(view_model)
    }
}
