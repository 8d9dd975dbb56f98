//! Mailbox detectors: Outlook PST stores and MSG messages.

use crate::core::Verdict;
use crate::formats::ole::CompoundFile;
use crate::formats::pst as pst_format;
use std::path::Path;
use tracing::debug;

/// PST: attempt a container open via the NDB header.
pub(crate) fn pst(path: &Path) -> Verdict {
    match pst_format::probe(path) {
        Ok(info) if info.needs_password() => Verdict::new(true, true, 1.0),
        Ok(_) => Verdict::new(false, false, 1.0),
        Err(err) => {
            debug!(path = %path.display(), %err, "pst probe failed");
            Verdict::NO_SIGNAL
        }
    }
}

/// MSG: compound-file stream check for `EncryptedSummary`.
pub(crate) fn msg(path: &Path) -> Verdict {
    match CompoundFile::open(path) {
        Ok(cfb) if cfb.has_stream("EncryptedSummary") => Verdict::new(true, true, 0.9),
        Ok(_) => Verdict::NO_SIGNAL,
        Err(err) => {
            debug!(path = %path.display(), %err, "msg open failed");
            Verdict::NO_SIGNAL
        }
    }
}
