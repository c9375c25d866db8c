//! Map side of a MapReduce job: runs one map task over one input partition
//! and routes its output into per-reduce intermediate files.

pub mod mr;
pub mod mrapps;
pub mod util;
