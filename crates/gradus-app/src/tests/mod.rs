mod pool_tests;
mod progress_tests;
