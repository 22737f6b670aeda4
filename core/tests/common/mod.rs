// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers for month grids

mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_flag_count, assert_grid_shape};
#[allow(unused_imports)]
pub use fixtures::{config_in, date, monday_first, store_with, sunday_first};
