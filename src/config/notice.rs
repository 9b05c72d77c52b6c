//! Override notifications emitted while a configuration is resolved.
//!
//! Some resolution branches are only observable through these notices, so
//! they go through a sink instead of straight to the global logger; tests
//! collect them, production forwards them to `log`.

use log::info;

/// A flag override replacing a value the configuration file had set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    TrustBundleOverride,
    ZoneOverride,
}

/// Receiver for override notices.
pub trait NoticeSink {
    fn notify(&mut self, notice: Notice);
}

/// Default sink: forwards each notice to the `log` facade at info level.
#[derive(Debug, Default)]
pub struct LogNoticeSink;

impl NoticeSink for LogNoticeSink {
    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::TrustBundleOverride => {
                info!("Overriding trust bundle based on command line flag.");
            }
            Notice::ZoneOverride => {
                info!("Overriding zone based on command line flag.");
            }
        }
    }
}

impl NoticeSink for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}
