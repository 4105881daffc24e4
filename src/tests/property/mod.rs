//! Property-based tests for HanziHero
//!
//! These verify invariants over generated catalogs and mastered sets rather
//! than hand-picked cases.
//!
//! ## Test Modules
//!
//! - `difficulty_props`: tiers depend only on the first character
//! - `progress_props`: saving then loading returns the same mastered set
//! - `navigation_props`: level changes keep the current word on the level;
//!   advancing cycles through every word of the level exactly once
//! - `mastery_props`: marking then unmarking a word restores the set
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. This can be configured
//! via the `PROPTEST_CASES` environment variable:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod difficulty_props;
mod mastery_props;
mod navigation_props;
mod progress_props;
