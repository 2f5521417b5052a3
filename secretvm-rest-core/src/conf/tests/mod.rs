mod env_tests;
