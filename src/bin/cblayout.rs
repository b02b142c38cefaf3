use cblayout::cli::analyzer::{display_results, Analyzer};
use cblayout::cli::args::{AnalyzeConfig, Cli, ColorWhen, Commands};
use cblayout::cli::output::Output;
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    // handle subcommands
    if let Some(command) = &cli.command {
        match command {
            Commands::Check { input } => {
                handle_check(input.as_ref().or(cli.input.as_ref()), &cli);
            }
        }
        return;
    }

    // default: analyze the input file and print the report
    match AnalyzeConfig::from_cli(&cli) {
        Ok(config) => {
            let analyzer = Analyzer::new(config.clone());
            match analyzer.run() {
                Ok(output) => {
                    display_results(&output, &config);
                    if !output.success {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    Output::error(&format!("Analysis failed: {}", e));
                    process::exit(1);
                }
            }
        }
        Err(e) => {
            Output::error(&e);
            process::exit(1);
        }
    }
}

fn handle_check(input: Option<&std::path::PathBuf>, cli: &Cli) {
    let input = match input {
        Some(i) => i.clone(),
        None => {
            Output::error("No input file specified for check command");
            process::exit(1);
        }
    };

    let config = AnalyzeConfig {
        input,
        force_c_layout: cli.force_c_layout,
        check_c_layout: cli.check_c_layout,
        expanded_arrays: true,
        alignment: 28,
        verbose: false,
        quiet: true,
        color: ColorWhen::Auto,
    };

    let analyzer = Analyzer::new(config.clone());
    match analyzer.run() {
        Ok(output) => {
            display_results(&output, &config);
            if !output.success {
                process::exit(1);
            }
            if let Some(result) = &output.result {
                if result.layouts_match == Some(false) {
                    process::exit(1);
                }
            }
            Output::success("Layout check passed!");
        }
        Err(e) => {
            Output::error(&format!("Check failed: {}", e));
            process::exit(1);
        }
    }
}
