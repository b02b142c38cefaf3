use crate::analysis::{self, AnalysisOptions, AnalysisResult};
use crate::cli::args::{AnalyzeConfig, ColorWhen};
use crate::cli::error_display::display_error;
use crate::cli::output::Output;
use crate::cli::report::{render_layout, ReportOptions};
use crate::error::HlslError;
use codespan::{FileId, Files};
use codespan_reporting::term::termcolor::ColorChoice;
use std::fs;

/// analysis outcome for one input file
#[derive(Debug)]
pub struct AnalyzeOutput {
    pub result: Option<AnalysisResult>,
    pub error: Option<HlslError>,
    pub files: Files<String>,
    pub file_id: FileId,
    pub success: bool,
}

/// analysis orchestrator
pub struct Analyzer {
    config: AnalyzeConfig,
}

impl Analyzer {
    pub fn new(config: AnalyzeConfig) -> Self {
        Self { config }
    }

    /// analyze the input file
    pub fn run(&self) -> Result<AnalyzeOutput, AnalyzeError> {
        // load source file
        if self.config.verbose {
            Output::phase("loading source");
        }
        let source = self.load_source()?;

        if self.config.verbose {
            Output::processing_file(self.config.input.to_string_lossy().as_ref());
        }

        let mut files = Files::new();
        let file_id = files.add(
            self.config.input.to_string_lossy().to_string(),
            source.clone(),
        );

        // lexing, parsing and layout generation
        if self.config.verbose {
            Output::phase("computing buffer layouts");
        }
        let options = AnalysisOptions {
            force_c_layout: self.config.force_c_layout,
            check_matches_c_layout: self.config.check_c_layout,
        };

        match analysis::analyze(&source, &options) {
            Ok(result) => Ok(AnalyzeOutput {
                result: Some(result),
                error: None,
                files,
                file_id,
                success: true,
            }),
            Err(error) => Ok(AnalyzeOutput {
                result: None,
                error: Some(error),
                files,
                file_id,
                success: false,
            }),
        }
    }

    /// load source file from disk
    fn load_source(&self) -> Result<String, AnalyzeError> {
        fs::read_to_string(&self.config.input)
            .map_err(|e| AnalyzeError::IoError(format!("Failed to read input file: {}", e)))
    }

    /// get the analysis configuration
    pub fn config(&self) -> &AnalyzeConfig {
        &self.config
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("IO error: {0}")]
    IoError(String),
}

/// display analysis results
pub fn display_results(output: &AnalyzeOutput, config: &AnalyzeConfig) {
    let color_choice = match config.color {
        ColorWhen::Always => ColorChoice::Always,
        ColorWhen::Never => ColorChoice::Never,
        ColorWhen::Auto => ColorChoice::Auto,
    };

    if let Some(error) = &output.error {
        display_error(&output.files, output.file_id, error, color_choice);
        return;
    }

    let result = match &output.result {
        Some(result) => result,
        None => return,
    };

    if !config.quiet {
        let options = ReportOptions {
            expanded_arrays: config.expanded_arrays,
            alignment: config.alignment,
        };
        for (i, layout) in result.layouts.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print!("{}", render_layout(layout, options));
        }
    }

    match result.layouts_match {
        Some(true) => {
            if !config.quiet {
                Output::success("every buffer matches its C layout");
            }
        }
        Some(false) => {
            Output::warning("buffer packing differs from the C layout");
            Output::help("use --force-c-layout to lay out every buffer with C rules");
        }
        None => {}
    }
}
