//! Integration tests for the unfurl workspace.

#[cfg(test)]
mod support;

#[cfg(test)]
mod cache_tests;

#[cfg(test)]
mod load_tests;
