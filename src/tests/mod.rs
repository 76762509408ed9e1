mod export_tests;
mod utils;
