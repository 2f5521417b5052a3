mod commands_tests;
mod runner_tests;
mod scripted_tests;
