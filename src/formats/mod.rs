//! Hand-parsed container format readers.
//!
//! These are the format-parsing collaborators of the detector set that have
//! no crate binding: a compound-file (OLE/CFB) directory reader and bounded
//! header probes for RAR, 7z and PST. Each exposes "inspect the container at
//! this path" and reports structural faults as errors; the detectors map
//! those faults to verdicts.
//!
//! All probes read a bounded prefix or a bounded number of sectors; a
//! damaged chain terminates the walk instead of looping.

pub mod ole;
pub mod pst;
pub mod rar;
pub mod sevenzip;
