// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Whole-line reading into a [`DynString`].

use std::io::{self, BufRead};

use thiserror::Error;

use hoard_core::HoardError;

use crate::DynString;

/// Error type for [`DynString::read_full_line`].
#[derive(Debug, Error)]
pub enum ReadLineError {
    /// The reader failed.
    #[error("failed to read line: {0}")]
    Io(#[from] io::Error),

    /// The string could not grow to hold the line.
    #[error(transparent)]
    Hoard(#[from] HoardError),
}

impl DynString {
    /// Replaces the content with the next line of `reader`, however long.
    ///
    /// The string grows with its own strategy until the whole line fits.
    /// The line terminator is kept unless `ignore_endl` is set. Returns
    /// `Ok(false)`, with the string emptied, when the reader has no more
    /// input.
    ///
    /// The line is assembled in a separate buffer: on error the string keeps
    /// its previous content, though the consumed bytes are gone from
    /// `reader`.
    ///
    /// ```rust
    /// use std::io::Cursor;
    /// use hoard_string::DynString;
    ///
    /// let mut reader = Cursor::new("first\nsecond");
    /// let mut line = DynString::new();
    ///
    /// assert!(line.read_full_line(&mut reader, true).unwrap());
    /// assert_eq!(line, "first");
    /// assert!(line.read_full_line(&mut reader, false).unwrap());
    /// assert_eq!(line, "second");
    /// assert!(!line.read_full_line(&mut reader, true).unwrap());
    /// assert!(line.is_empty());
    /// ```
    pub fn read_full_line<R>(&mut self, reader: &mut R, ignore_endl: bool) -> Result<bool, ReadLineError>
    where
        R: BufRead + ?Sized,
    {
        let mut line = self.sibling();
        let mut consumed_any = false;

        loop {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(err.into()),
            };

            if available.is_empty() {
                break;
            }

            let (take, complete) = match available.iter().position(|&b| b == b'\n') {
                Some(at) => (at + 1, true),
                None => (available.len(), false),
            };

            line.cat(&available[..take])?;
            reader.consume(take);
            consumed_any = true;

            if complete {
                break;
            }
        }

        if ignore_endl && line.as_bytes().last() == Some(&b'\n') {
            line.truncate_by_one();
        }

        *self = line;

        Ok(consumed_any)
    }
}
