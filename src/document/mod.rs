//! Retrieved document fragments and their provenance metadata.
//!
//! Fragments are produced upstream by ingestion and treated as immutable here.

pub mod fragment;


pub use fragment::{
    CREATION_DATE_KEY, DISPLAY_NAME_KEY, FILENAME_KEY, Fragment, MOD_DATE_KEY, Metadata,
    SOURCE_PATH_KEY,
};
