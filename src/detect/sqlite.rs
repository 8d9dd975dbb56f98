//! SQLite detector: attempt a minimal catalog read.
//!
//! Encrypted databases fail that read with a recognizable "encrypted" or
//! "not a database" fault; a clean read is an affirmative clear.

use crate::core::Verdict;
use crate::detect::Capabilities;
use std::path::Path;

pub(crate) fn inspect(path: &Path, caps: &Capabilities) -> Verdict {
    if !caps.sqlite {
        return Verdict::NO_SIGNAL;
    }
    imp::inspect(path)
}

#[cfg(feature = "parsers-sqlite")]
mod imp {
    use super::*;
    use rusqlite::{Connection, OpenFlags};
    use tracing::debug;

    fn catalog_read(path: &Path) -> rusqlite::Result<()> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        let mut stmt =
            conn.prepare("SELECT name FROM sqlite_master WHERE type='table' LIMIT 1")?;
        let mut rows = stmt.query([])?;
        rows.next()?;
        Ok(())
    }

    pub(super) fn inspect(path: &Path) -> Verdict {
        match catalog_read(path) {
            Ok(()) => Verdict::new(false, false, 1.0),
            Err(err) => {
                let message = err.to_string().to_ascii_lowercase();
                if message.contains("encrypted") || message.contains("not a database") {
                    Verdict::new(true, true, 1.0)
                } else {
                    debug!(path = %path.display(), %err, "sqlite catalog read failed");
                    Verdict::NO_SIGNAL
                }
            }
        }
    }
}

#[cfg(not(feature = "parsers-sqlite"))]
mod imp {
    use super::*;

    pub(super) fn inspect(_path: &Path) -> Verdict {
        Verdict::NO_SIGNAL
    }
}
