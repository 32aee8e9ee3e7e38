// SPDX-FileCopyrightText: The linkfolio authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation and document format

#![allow(rustdoc::invalid_rust_codeblocks)] // Do not interpret code blocks, e.g. license comments.
#![doc = include_str!("../README.md")]
