//! SPDX license header stamping.
//!
//! Source files opt in with a marker on their first line:
//!
//! ```c
//! /* @license: gpl2 */
//! ```
//!
//! Stamping prepends the matching identifier and keeps the marker:
//!
//! ```c
//! /* SPDX-License-Identifier: GPL-2.0 */
//! /* @license: gpl2 */
//! ```
//!
//! `@license: none` and `@license: ignore` opt out. Files without a marker
//! are left alone, which also makes stamping idempotent: after one run the
//! first line is the SPDX header, not the marker.

pub mod error;
pub mod license;
pub mod marker;
pub mod stamp;

pub use error::{LicenseError, Result};
pub use license::{License, spdx_header};
pub use marker::Marker;
pub use stamp::{Outcome, SkipReason, plan, stamp_file};
