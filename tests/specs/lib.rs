// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spec test files live under `cli/` and are compiled as `[[test]]`
//! targets of the fieldline CLI package.
