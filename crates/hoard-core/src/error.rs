// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error taxonomy for hoard containers.

use thiserror::Error;

/// First value of the numeric error-code namespace.
pub const ERROR_CODE_BASE: i32 = 100;

/// Error type shared by every hoard container.
///
/// All variants are recoverable: an operation that returns one of them leaves
/// the container exactly as it was before the call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum HoardError {
    /// A size computation would exceed the representable range.
    #[error("arithmetic overflow: value exceeds the representable range")]
    Overflow,

    /// A size computation would fall below the representable range.
    #[error("arithmetic underflow: value falls below the representable range")]
    Underflow,

    /// An index was not below the logical size.
    #[error("index overflow: index {index} is out of bounds for length {len}")]
    IndexOverflow {
        /// Offending index.
        index: usize,
        /// Logical size at the time of the call.
        len: usize,
    },

    /// A destination argument conflicts with a source argument, or a
    /// capacity strategy failed to make progress.
    #[error("invalid target")]
    InvalidTarget,

    /// A required container handle is absent.
    #[error("instance not present")]
    InstanceNotPresent,

    /// A required argument is absent.
    #[error("argument not present")]
    ArgNotPresent,

    /// The underlying allocator refused the request.
    #[error("allocation of {bytes} bytes failed")]
    Allocation {
        /// Size of the refused request in bytes.
        bytes: usize,
    },
}

impl HoardError {
    /// Returns the stable numeric code of this error.
    ///
    /// Codes start at [`ERROR_CODE_BASE`]; allocator failures report
    /// `i32::MIN + 1` so they never collide with library codes.
    pub const fn code(&self) -> i32 {
        match self {
            Self::Overflow => ERROR_CODE_BASE + 1,
            Self::Underflow => ERROR_CODE_BASE + 2,
            Self::IndexOverflow { .. } => ERROR_CODE_BASE + 3,
            Self::InvalidTarget => ERROR_CODE_BASE + 4,
            Self::InstanceNotPresent => ERROR_CODE_BASE + 6,
            Self::ArgNotPresent => ERROR_CODE_BASE + 7,
            Self::Allocation { .. } => i32::MIN + 1,
        }
    }

    /// Returns the static message associated with this error class.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Overflow => "overflow",
            Self::Underflow => "underflow",
            Self::IndexOverflow { .. } => "index overflow",
            Self::InvalidTarget => "invalid target",
            Self::InstanceNotPresent => "instance not present",
            Self::ArgNotPresent => "argument not present",
            Self::Allocation { .. } => "allocation failed",
        }
    }
}
