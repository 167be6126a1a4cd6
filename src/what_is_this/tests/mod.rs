mod core_test;
mod run_test;
