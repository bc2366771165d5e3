// ============================================================================
// Numeric Module
// Exact decimal value type and error taxonomy
// ============================================================================
//
// This module provides:
// - DecimalValue: immutable exact-decimal value type
// - ToDecimal: conversion from native numbers and string literals
// - DecimalError: error types for decimal operations
//
// Design principles:
// - No binary floating point in any intermediate computation
// - All fallible operations return Result (no panics)
// - Malformed input fails at the point it is introduced
// - Division by a zero of any spelling fails before computing

mod errors;
mod value;

pub use errors::{DecimalError, DecimalResult};
pub use value::{DecimalValue, ToDecimal};
