mod converter_tests;
mod ellipsoid_tests;
