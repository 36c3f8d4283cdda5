pub mod boundary;
pub mod build_info;
pub mod cli;
pub mod convergence;
pub mod csv;
pub mod domain;
pub mod error;
pub mod grid;
pub mod image;
pub mod par_slice;
pub mod par_stencil;
pub mod report;
pub mod solver;
pub mod util;

pub use error::{Error, Result};
