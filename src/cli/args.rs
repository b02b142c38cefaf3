use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cblayout")]
#[command(about = "HLSL buffer layout analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// input shader file
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// lay out every buffer with C packing rules
    #[arg(long)]
    pub force_c_layout: bool,

    /// report whether each buffer matches its C layout
    #[arg(long)]
    pub check_c_layout: bool,

    /// print arrays as a single line instead of one line per element
    #[arg(long)]
    pub collapse_arrays: bool,

    /// column where the offset/size/padding table starts
    #[arg(long, value_name = "COLUMN", default_value = "28")]
    pub alignment: usize,

    /// verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// quiet mode
    #[arg(short, long)]
    pub quiet: bool,

    /// when to use colors
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorWhen,

    /// subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// parse and lay out without printing the report
    Check {
        /// input shader file
        #[arg(value_name = "INPUT")]
        input: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl ColorWhen {
    pub fn should_color(&self) -> bool {
        match self {
            ColorWhen::Always => true,
            ColorWhen::Never => false,
            ColorWhen::Auto => atty::is(atty::Stream::Stdout),
        }
    }
}

/// analysis configuration derived from cli arguments
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub force_c_layout: bool,
    pub check_c_layout: bool,
    pub expanded_arrays: bool,
    pub alignment: usize,
    pub verbose: bool,
    pub quiet: bool,
    pub color: ColorWhen,
}

impl AnalyzeConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self, String> {
        let input = cli
            .input
            .clone()
            .ok_or_else(|| "No input file specified".to_string())?;

        Ok(AnalyzeConfig {
            input,
            force_c_layout: cli.force_c_layout,
            check_c_layout: cli.check_c_layout,
            expanded_arrays: !cli.collapse_arrays,
            alignment: cli.alignment,
            verbose: cli.verbose,
            quiet: cli.quiet,
            color: cli.color,
        })
    }
}
