// Copyright 2024 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::{Parser, Subcommand};
use nym_mixnode_grid::env::{arg_or_env, vars::*};
use nym_mixnode_grid::input::InputSource;
use nym_mixnode_grid::output_format::OutputFormat;
use std::path::PathBuf;

mod rows;
mod summary;

#[derive(Parser, Debug)]
#[clap(author = "Nymtech", version, about)]
pub(crate) struct Cli {
    /// Path pointing to an env file with values for any of the arguments
    /// that weren't explicitly provided.
    #[clap(short, long)]
    pub(crate) config_env_file: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

impl Cli {
    pub(crate) fn load_env_file(&self) -> anyhow::Result<()> {
        if let Some(env_file) = &self.config_env_file {
            dotenvy::from_path(env_file).with_context(|| {
                format!("failed to load the env file at '{}'", env_file.display())
            })?;
        }
        Ok(())
    }

    pub(crate) fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Rows(args) => rows::execute(args),
            Commands::Summary(args) => summary::execute(args),
        }
    }
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Map the mixnode listing into grid rows and print them
    Rows(CommonArgs),

    /// Print the number of mixnodes in the listing per status
    Summary(CommonArgs),
}

#[derive(clap::Args, Debug)]
pub(crate) struct CommonArgs {
    /// Path to the json listing returned by the explorer API. Reads stdin if omitted or set to '-'.
    /// Can be overridden with $MIXNODE_GRID_INPUT environmental variable.
    #[clap(short, long)]
    input: Option<PathBuf>,

    /// Format of the printed output.
    /// Can be overridden with $MIXNODE_GRID_OUTPUT environmental variable.
    #[clap(short, long, value_enum)]
    output: Option<OutputFormat>,
}

impl CommonArgs {
    pub(crate) fn input_source(&self) -> InputSource {
        InputSource::new(arg_or_env(self.input.clone(), MIXNODE_GRID_INPUT_ARG))
    }

    pub(crate) fn output_format(&self) -> anyhow::Result<OutputFormat> {
        if let Some(output) = self.output {
            return Ok(output);
        }
        match std::env::var(MIXNODE_GRID_OUTPUT_ARG) {
            Ok(raw) => raw.parse().map_err(anyhow::Error::msg),
            Err(_) => Ok(OutputFormat::default()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn common_args(input: Option<&str>, output: Option<OutputFormat>) -> CommonArgs {
        CommonArgs {
            input: input.map(PathBuf::from),
            output,
        }
    }

    // this is the only test touching $MIXNODE_GRID_OUTPUT, so the cases can't race each other
    #[test]
    fn output_format_resolution() {
        std::env::remove_var(MIXNODE_GRID_OUTPUT_ARG);
        let args = common_args(None, None);
        assert_eq!(args.output_format().unwrap(), OutputFormat::Text);

        std::env::set_var(MIXNODE_GRID_OUTPUT_ARG, "csv");
        assert_eq!(args.output_format().unwrap(), OutputFormat::Csv);

        let explicit = common_args(None, Some(OutputFormat::Json));
        assert_eq!(explicit.output_format().unwrap(), OutputFormat::Json);

        std::env::set_var(MIXNODE_GRID_OUTPUT_ARG, "yaml");
        assert!(args.output_format().is_err());
        // an explicit value never looks at the environment
        assert_eq!(explicit.output_format().unwrap(), OutputFormat::Json);

        std::env::remove_var(MIXNODE_GRID_OUTPUT_ARG);
    }

    // likewise, the only test touching $MIXNODE_GRID_INPUT
    #[test]
    fn env_file_provides_input() {
        let mut env_file = NamedTempFile::new().unwrap();
        writeln!(env_file, "{MIXNODE_GRID_INPUT_ARG}=/var/lib/explorer/mixnodes.json").unwrap();

        let cli = Cli::try_parse_from([
            "nym-mixnode-grid",
            "--config-env-file",
            env_file.path().to_str().unwrap(),
            "rows",
        ])
        .unwrap();
        cli.load_env_file().unwrap();

        let args = common_args(None, None);
        assert_eq!(
            args.input_source(),
            InputSource::File("/var/lib/explorer/mixnodes.json".into())
        );

        let explicit = common_args(Some("-"), None);
        assert_eq!(explicit.input_source(), InputSource::Stdin);

        let explicit = common_args(Some("listing.json"), None);
        assert_eq!(
            explicit.input_source(),
            InputSource::File("listing.json".into())
        );
    }

    #[test]
    fn missing_env_file_is_an_error() {
        let cli = Cli::try_parse_from([
            "nym-mixnode-grid",
            "-c",
            "/this/env/file/does/not/exist.env",
            "summary",
        ])
        .unwrap();
        let err = cli.load_env_file().unwrap_err();
        assert!(err.to_string().contains("/this/env/file/does/not/exist.env"));
    }

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
