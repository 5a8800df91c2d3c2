//! Tests for the template engine

use super::*;


// Rendering tests
mod render_basic;
mod render_conditionals;
