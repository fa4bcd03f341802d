use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_complexity::ComplexityAnalyzer;
use graphql_complexity::ComplexityConfig;
use graphql_complexity::ComplexityError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use std::str::FromStr;
use walkdir::WalkDir;

/// A `name=cost` pair from `--override`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldOverride {
    pub name: String,
    pub cost: i64,
}

impl FromStr for FieldOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, cost)) = s.split_once('=') else {
            return Err(format!("expected `<field>=<cost>`, found `{s}`"));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(format!("missing field name in `{s}`"));
        }
        let cost = cost
            .trim()
            .parse::<i64>()
            .map_err(|e| format!("invalid cost for `{name}`: {e}"))?;
        Ok(Self {
            name: name.to_string(),
            cost,
        })
    }
}

#[derive(Debug, clap::Args)]
pub(crate) struct ScoreCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    pub(crate) graphql_file_exts: Vec<String>,

    #[arg(
        help="JSON file with an object of variable values used to resolve \
             `first`/`last` page sizes.",
        long,
    )]
    pub(crate) variables: Option<PathBuf>,

    #[arg(
        help="JSON file with a complexity config: `overrides` and \
             `max_complexity`.",
        long,
    )]
    pub(crate) config: Option<PathBuf>,

    #[arg(
        help="Fixed cost for every field with the given name, as \
             `<field>=<cost>`. Wins over overrides from --config.",
        long = "override",
        value_name = "FIELD=COST",
    )]
    pub(crate) overrides: Vec<FieldOverride>,

    #[arg(
        help="Fail any operation whose complexity is above this value. Wins \
             over `max_complexity` from --config.",
        long,
    )]
    pub(crate) max_complexity: Option<i64>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be scored.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    pub(crate) file_or_dir_paths: Vec<PathBuf>,
}

impl ScoreCmd {
    async fn build_analyzer(&self) -> anyhow::Result<ComplexityAnalyzer> {
        let config = match &self.config {
            Some(path) => {
                let contents = tokio::fs::read_to_string(path)
                    .await
                    .with_context(|| format!("Failed to read config file {path:#?}"))?;
                serde_json::from_str::<ComplexityConfig>(&contents)
                    .with_context(|| format!("Invalid config file {path:#?}"))?
            },
            None => ComplexityConfig::default(),
        };
        log::debug!(
            "Loaded {} overrides from config; {} more from the command line.",
            config.overrides.len(),
            self.overrides.len(),
        );

        let mut analyzer = ComplexityAnalyzer::from_config(config)
            .with_overrides(
                self.overrides
                    .iter()
                    .map(|o| (o.name.clone(), o.cost)),
            );
        if let Some(max) = self.max_complexity {
            analyzer = analyzer.with_max_complexity(max);
        }
        Ok(analyzer)
    }
}

#[inherent::inherent]
impl RunnableCommand for ScoreCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let analyzer = match self.build_analyzer().await {
            Ok(analyzer) => analyzer,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };
        let variables = match load_variables(self.variables.as_deref()).await {
            Ok(variables) => variables,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} {e:#}",
                output_utils::RED_X,
            )),
        };

        let graphql_file_exts = normalize_exts(&self.graphql_file_exts);
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let found = collect_graphql_files(&self.file_or_dir_paths, &graphql_file_exts);
        let mut failures = found.errors;
        log::debug!(
            "Found {} GraphQL files to be scored.",
            found.file_paths.len(),
        );

        let mut scores = vec![];
        for path in &found.file_paths {
            let source = match tokio::fs::read_to_string(path).await {
                Ok(source) => source,
                Err(e) => {
                    failures.push(format!(
                        "{} {}: failed to read file: {e}",
                        output_utils::RED_X,
                        path.display(),
                    ));
                    continue
                },
            };

            match analyzer.analyze(&source, &variables) {
                Ok(score) => scores.push(format!(
                    "{} {}: {score}",
                    output_utils::GREEN_CHECK,
                    path.display(),
                )),
                Err(ComplexityError::Syntax(e)) => failures.push(format!(
                    "{} {}",
                    output_utils::RED_X,
                    e.format_detailed(Some(&source), Some(path.as_path())),
                )),
                Err(e) => failures.push(format!(
                    "{} {}: {e}",
                    output_utils::RED_X,
                    path.display(),
                )),
            }
        }

        scores.push(format!(
            "Scored {} of {} files ({} non-graphql entries skipped).",
            scores.len(),
            found.file_paths.len(),
            found.num_skipped,
        ));
        CommandResult::report(scores, failures)
    }
}

/// Reads the `--variables` JSON object. No file means no variables.
async fn load_variables(
    path: Option<&Path>,
) -> anyhow::Result<HashMap<String, serde_json::Value>> {
    let Some(path) = path else {
        return Ok(HashMap::new());
    };
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read variables file {path:#?}"))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Variables file {path:#?} must contain a JSON object"))
}

/// Lowercases extensions and strips any leading `.`.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Default)]
pub(crate) struct FoundFiles {
    pub file_paths: Vec<PathBuf>,
    pub num_skipped: usize,
    pub errors: Vec<String>,
}

/// Finds all GraphQL files recursively located at or under each path.
///
/// A single file argument is always scored, even if its extension isn't in
/// `graphql_file_exts`.
pub(crate) fn collect_graphql_files(
    paths: &[PathBuf],
    graphql_file_exts: &HashSet<String>,
) -> FoundFiles {
    let mut found = FoundFiles::default();
    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::trace!(
                        "Encountered an error while iterating recursive \
                        filesystem entities at/under {path:#?}."
                    );
                    found.errors.push(format!("{} {e}", output_utils::RED_X));
                    continue
                },
            };

            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            let is_graphql = entry_path
                .extension()
                .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
                .is_some_and(|ext| graphql_file_exts.contains(&ext));
            if is_graphql {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                found.file_paths.push(entry_path.to_path_buf());
            } else {
                found.num_skipped += 1;
            }
        }
    }

    if found.file_paths.is_empty()
        && paths.len() == 1
        && let Some(first_arg_path) = paths.first()
        && first_arg_path.is_file() {
        log::warn!(
            "Proceeding to score {first_arg_path:#?} even though it doesn't \
            match any of the --graphql-file-exts ({}).",
            graphql_file_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        found.num_skipped = found.num_skipped.saturating_sub(1);
        found.file_paths.push(first_arg_path.clone());
    }

    found
}
