mod validation_tests;
mod crud_tests;
