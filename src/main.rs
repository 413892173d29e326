// Copyright (c) 2026 MCU-Debug Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mcu_artifact_resolver::logging::init_logging;
use mcu_artifact_resolver::output::write_json_stdout;
use mcu_artifact_resolver::prompt::TerminalPrompt;
use mcu_artifact_resolver::{ArtifactResolver, CaseSensitivity, ResolverConfig};
use std::path::{Path, PathBuf};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CaseArg {
    /// Detect from the workspace filesystem
    Auto,
    Sensitive,
    Insensitive,
}

/// Locate the binary image and linker map of a build inside a project tree.
/// Prints the result as JSON on stdout.
#[derive(Parser, Debug)]
#[command(name = "mcu-artifact-resolver", version)]
struct Cli {
    /// Workspace root to search
    #[arg(short = 'w', long = "workspace")]
    workspace: Option<PathBuf>,

    /// JSON settings file (mapFilePath, binaryFilePath, toolchainPath, debug, ...)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Binary file, overrides binaryFilePath
    #[arg(long = "binary")]
    binary: Option<String>,

    /// Map file, overrides mapFilePath
    #[arg(long = "map")]
    map: Option<String>,

    /// Toolchain installation, overrides toolchainPath
    #[arg(long = "toolchain")]
    toolchain: Option<String>,

    /// Binary file suffix, e.g. ".axf"
    #[arg(long = "binary-ext")]
    binary_ext: Option<String>,

    /// Map file suffix
    #[arg(long = "map-ext")]
    map_ext: Option<String>,

    /// Enable debug output
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    debug: bool,

    /// Take the first candidate instead of prompting
    #[arg(long = "non-interactive", default_value_t = false)]
    non_interactive: bool,

    /// Filesystem case sensitivity used to recognize already visited folders
    #[arg(long = "case", value_enum, default_value_t = CaseArg::Auto)]
    case: CaseArg,

    /// Print every candidate instead of resolving one
    #[arg(long = "list", default_value_t = false)]
    list: bool,

    /// Prefix the JSON with a Content-Length header
    #[arg(long = "framed", default_value_t = false)]
    framed: bool,
}

impl Cli {
    fn settings(&self) -> Result<ResolverConfig> {
        let mut config = match &self.config {
            Some(path) => ResolverConfig::from_file(path)?,
            None => ResolverConfig::default(),
        };
        if let Some(binary) = &self.binary {
            config.binary_file_path = Some(binary.clone());
        }
        if let Some(map) = &self.map {
            config.map_file_path = Some(map.clone());
        }
        if let Some(toolchain) = &self.toolchain {
            config.toolchain_path = Some(toolchain.clone());
        }
        if let Some(ext) = &self.binary_ext {
            config.binary_extension = ext.clone();
        }
        if let Some(ext) = &self.map_ext {
            config.map_extension = ext.clone();
        }
        config.debug |= self.debug;
        Ok(config)
    }

    fn case_sensitivity(&self, workspace: Option<&Path>) -> CaseSensitivity {
        match self.case {
            CaseArg::Sensitive => CaseSensitivity::Sensitive,
            CaseArg::Insensitive => CaseSensitivity::Insensitive,
            CaseArg::Auto => workspace
                .map(CaseSensitivity::detect_or_host)
                .unwrap_or_else(CaseSensitivity::for_host),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.settings()?;
    let _logger = init_logging(config.debug).context("Failed to start logger")?;

    let case = cli.case_sensitivity(cli.workspace.as_deref());
    let mut resolver =
        ArtifactResolver::new(config, cli.workspace.clone()).with_case_sensitivity(case);
    if !cli.non_interactive {
        resolver = resolver.with_prompt(TerminalPrompt::stdio());
    }

    if cli.list {
        let candidates = resolver.candidates()?;
        write_json_stdout(&serde_json::to_value(&candidates)?, cli.framed)
            .context("Failed to write candidates")?;
        return Ok(());
    }

    let resolved = resolver.resolve()?;
    write_json_stdout(&serde_json::to_value(&resolved)?, cli.framed)
        .context("Failed to write result")?;
    Ok(())
}
