mod analysis_tests;
mod compare_tests;
mod lexer_tests;
mod structured_layout_tests;
