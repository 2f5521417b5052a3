mod params_tests;
mod response_tests;
