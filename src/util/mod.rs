// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing and result presentation.
//!
//! Text normalization that both queries and file names pass through, and the
//! small formatting helpers (sizes, folder paths) every front end needs.

pub mod format;
pub mod normalize;
