//! Unit tests for the traversal strategies

#![cfg(test)]

mod fixture_tests;
mod round_trip_tests;
