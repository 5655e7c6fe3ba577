use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::{debug, info, warn};
use srclist_manifest::Config;
use srclist_toolchain::{
    BuildProfile, EnvStrategy, PromptStrategy, ToolchainResolver, VCPKG_ROOT_VAR,
};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "srclist")]
#[command(about = "Keeps CMake source and header lists in sync with the file tree", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Write HeaderDirs.cmake, SourceFiles.cmake and HeaderFiles.cmake
    Generate(Config),
    /// Print the CMake definitions for the vcpkg toolchain
    Toolchain(ToolchainArgs),
}

#[derive(Debug, Args)]
struct ToolchainArgs {
    /// Build type: debug, release, relwithdebinfo or minsizerel
    #[arg(long, default_value = "debug")]
    profile: String,

    /// Environment variable holding the vcpkg root
    #[arg(long, default_value = VCPKG_ROOT_VAR)]
    env_var: String,

    /// Fail instead of asking for the vcpkg root interactively
    #[arg(long)]
    no_prompt: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Generate(cfg) => {
            info!("Generating lists for {} target directories", cfg.targets.len());
            let label = cfg.label.clone();

            let result = srclist_manifest::run_generate(cfg)?;
            debug!("Scanned {} files", result.files_scanned);

            srclist_manifest::print_skipped(&mut stdout, &result.skipped, &label)?;
            srclist_manifest::print_summary(&mut stdout, &result, &label)?;
            writeln!(
                stdout,
                "\n{} Finished in {}ms.",
                "●".bright_blue(),
                start.elapsed().as_millis().to_string().cyan()
            )?;
            stdout.flush()?;
            Ok(())
        }
        Commands::Toolchain(args) => {
            let profile = BuildProfile::from_arg(&args.profile).unwrap_or_else(|| {
                let fallback = BuildProfile::default();
                warn!("Unknown build type '{}'. Using default '{}'.", args.profile, fallback);
                fallback
            });

            let mut resolver =
                ToolchainResolver::new().with_strategy(EnvStrategy::from_env(&args.env_var));
            if !args.no_prompt {
                let cwd = std::env::current_dir()?;
                resolver = resolver.with_strategy(PromptStrategy::new(
                    std::io::stdin().lock(),
                    std::io::stderr(),
                    cwd,
                ));
            }

            let toolchain = resolver.resolve_toolchain_file()?;
            for define in profile.cmake_defines(&toolchain) {
                writeln!(stdout, "{}", define)?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}
