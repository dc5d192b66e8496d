//! Release family - the closed set of catalog release kinds
//!
//! A release is one concrete kind within a closed family: a PC build or a
//! console build of a title. Shared behavior lives in narrow capability
//! traits, and each variant implements exactly the capabilities it can
//! honor. "Can this release save progress?" is answered by capability
//! presence ([`Release::as_saveable`] returning `Some`), never by a method
//! that fails at runtime.
//!
//! Every release embeds the catalog [`Record`] the query core operates on,
//! so a family of releases can seed a
//! [`RecordStore`](crate::catalog::RecordStore) directly.

use serde::{Deserialize, Serialize};

use crate::catalog::Record;
use crate::{Error, Result};

/// Capability: the release can run an interactive session.
///
/// Implemented by every variant in the family.
pub trait Playable {
    /// Input device an interactive session expects.
    fn input_device(&self) -> &str;
}

/// Capability: the release can keep play progress between sessions.
///
/// Implemented only by variants with writable storage. A variant without
/// it simply does not appear behind `dyn Saveable`; there is no stub
/// implementation that fails.
pub trait Saveable {
    /// Number of save slots the release exposes.
    fn save_slots(&self) -> u8;
}

/// PC build of a title: keyboard-driven, with writable save storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcRelease {
    record: Record,
    save_slots: u8,
}

impl PcRelease {
    /// Create a PC release.
    ///
    /// # Arguments
    ///
    /// * `name` - Title of the release
    /// * `metric` - Catalog metric (release year)
    /// * `save_slots` - Save slots exposed to the player
    #[must_use]
    pub fn new(name: impl Into<String>, metric: i64, save_slots: u8) -> Self {
        Self {
            record: Record::new(name, metric),
            save_slots,
        }
    }

    /// Get the embedded catalog record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }
}

impl Playable for PcRelease {
    fn input_device(&self) -> &str {
        "keyboard and mouse"
    }
}

impl Saveable for PcRelease {
    fn save_slots(&self) -> u8 {
        self.save_slots
    }
}

/// Console build of a title: gamepad-driven, cartridge storage only.
///
/// Does not implement [`Saveable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleRelease {
    record: Record,
    platform: String,
}

impl ConsoleRelease {
    /// Create a console release.
    ///
    /// # Arguments
    ///
    /// * `name` - Title of the release
    /// * `metric` - Catalog metric (release year)
    /// * `platform` - Console platform name (e.g., "SNES")
    #[must_use]
    pub fn new(name: impl Into<String>, metric: i64, platform: impl Into<String>) -> Self {
        Self {
            record: Record::new(name, metric),
            platform: platform.into(),
        }
    }

    /// Get the embedded catalog record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// Get the console platform name.
    #[must_use]
    pub fn platform(&self) -> &str {
        &self.platform
    }
}

impl Playable for ConsoleRelease {
    fn input_device(&self) -> &str {
        "gamepad"
    }
}

/// One release of a title, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Release {
    /// PC build
    Pc(PcRelease),
    /// Console build
    Console(ConsoleRelease),
}

impl Release {
    /// Get the catalog record embedded in this release.
    #[must_use]
    pub const fn record(&self) -> &Record {
        match self {
            Self::Pc(pc) => pc.record(),
            Self::Console(console) => console.record(),
        }
    }

    /// View the release through its [`Playable`] capability.
    ///
    /// Every variant in the family is playable.
    #[must_use]
    pub fn as_playable(&self) -> &dyn Playable {
        match self {
            Self::Pc(pc) => pc,
            Self::Console(console) => console,
        }
    }

    /// View the release through its [`Saveable`] capability, if present.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ludoteca::release::{ConsoleRelease, PcRelease, Release};
    ///
    /// let pc = Release::Pc(PcRelease::new("Doom", 1993, 8));
    /// let snes = Release::Console(ConsoleRelease::new("Chrono Trigger", 1995, "SNES"));
    ///
    /// assert!(pc.as_saveable().is_some());
    /// assert!(snes.as_saveable().is_none());
    /// ```
    #[must_use]
    pub fn as_saveable(&self) -> Option<&dyn Saveable> {
        match self {
            Self::Pc(pc) => Some(pc),
            Self::Console(_) => None,
        }
    }

    /// Require the [`Saveable`] capability.
    ///
    /// Boundary accessor for callers that cannot proceed without saving.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapabilityUnsupported`] if the variant does not
    /// implement [`Saveable`].
    pub fn require_saveable(&self) -> Result<&dyn Saveable> {
        self.as_saveable().ok_or_else(|| Error::CapabilityUnsupported {
            capability: "saveable",
            release: self.record().name().to_string(),
        })
    }
}
