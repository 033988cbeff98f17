// Copyright 2025 Roberto Antunes
//
// Licensed under the Functional Source License, Version 1.1 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://github.com/RobAntunes/lingodb/blob/main/LICENSE
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core data structures and types for the travel POR search engine.
//!
//! This module contains the fundamental building blocks of the system:
//!
//! - **Types**: Identifiers (`DocId`, `GeonamesId`, `PorKey`, ...)
//! - **POR**: The point-of-reference data model (`PorType`, `PorRecord`, ...)
//! - **Score**: The typed multi-signal scoring model (`ScoreType`, `ScoreBoard`)
//! - **Errors**: Error types and result definitions

pub mod types;

pub use types::{DocId, EditDistance, EnvelopeId, GeonamesId, Percentage, PorKey};

/// The point-of-reference data model.
pub mod por;

/// Typed multi-signal scoring.
pub mod score;

/// Error types
pub mod error;