use super::*;

mod basic;
