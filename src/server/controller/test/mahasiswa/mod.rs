use super::*;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
