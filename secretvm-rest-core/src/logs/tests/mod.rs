mod timestamp_tests;
