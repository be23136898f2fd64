// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure calendar data types shared between UI and the selection kernel.

pub mod date_time;
