// Copyright 2025 dentsusoken
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

use apk_file::args::normalize_args;
use apk_file::commands::search::SearchCommand;
use apk_file::config::SearchConfig;
use apk_file::error::{ApkFileError, Result, format_error_with_color, get_exit_code};
use apk_file::logging;
use apk_file::user_agent;
use clap::Parser;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(name = "apk-file")]
#[command(author, about = "Search apk package contents via the command line", long_about = None)]
struct Cli {
    /// File or path to search for (e.g., "posix", "bin/file", "/usr/bin/bash")
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// Arch to search for (x86, x86_64, armhf, armv7, aarch64, ppc64le, s390x, mips64)
    #[arg(long, value_name = "ARCH")]
    arch: Option<String>,

    /// Repository to search in (main, community, testing)
    #[arg(long, value_name = "REPO")]
    repo: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Print version information and exit
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));

    if cli.version {
        println!("apk-file {}", user_agent::long_version());
        return;
    }

    logging::setup_logger(cli.debug);

    let result: Result<()> = (|| {
        // Validate filters before anything touches the network
        let config = SearchConfig::new(cli.arch.as_deref(), cli.repo.as_deref(), cli.debug)?;
        let file = cli.file.as_deref().ok_or(ApkFileError::MissingFile)?;

        let command = SearchCommand::new(&config)?;
        command.execute(file)
    })();

    if let Err(e) = result {
        eprint!(
            "{}",
            format_error_with_color(&e, std::io::stderr().is_terminal())
        );
        std::process::exit(get_exit_code(&e));
    }
}
