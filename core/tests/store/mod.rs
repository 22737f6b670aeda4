// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event store integration tests.
//!
//! Tests the add, remove and per-day query contract of the public API.

mod queries;
