//! Supporting textbook sequences
//!
//! The two non-list algorithms the tool demonstrates:
//! - pascal: Pascal's triangle rows from the binomial recurrence
//! - factorial: trailing zeros of n! from the factors-of-five reduction

pub mod factorial;
pub mod pascal;
