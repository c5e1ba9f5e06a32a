//! Static library identification exposed through the plugin contract.

/// Descriptive strings identifying this monitoring library.
///
/// Returned by [`library_info`](crate::TransferMonitor::library_info);
/// purely informational, no side effects.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LibraryInfo {
    name: &'static str,
    version: &'static str,
    remarks: &'static str,
}

impl LibraryInfo {
    /// Returns the library name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the library version.
    #[must_use]
    pub const fn version(&self) -> &'static str {
        self.version
    }

    /// Returns free-form remarks, possibly empty.
    #[must_use]
    pub const fn remarks(&self) -> &'static str {
        self.remarks
    }
}

/// Returns the identification strings for this build.
#[must_use]
pub const fn library_info() -> LibraryInfo {
    LibraryInfo {
        name: "oc-xfermon transfer monitor",
        version: env!("CARGO_PKG_VERSION"),
        remarks: "",
    }
}
