/// One of the `static const FirebaseOptions` fields of the generated class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    /// Used whenever `kIsWeb` is set, also carries the `authDomain`.
    Web,
    /// Android apps.
    Android,
    /// iOS apps, carries the bundle id.
    Ios,
    /// macOS apps, carries the bundle id as well.
    Macos,
}

impl Variant {
    /// All variants in the order they appear in the generated file.
    pub const ALL: [Self; 4] = [Self::Web, Self::Android, Self::Ios, Self::Macos];

    /// Name of the Dart field holding this variant.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Macos => "macos",
        }
    }

    /// Only the web needs an `authDomain`.
    #[must_use]
    pub fn has_auth_domain(self) -> bool {
        self == Self::Web
    }

    /// Apple platforms need an `iosBundleId`.
    #[must_use]
    pub fn has_bundle_id(self) -> bool {
        matches!(self, Self::Ios | Self::Macos)
    }
}

/// The values of Flutter's `TargetPlatform` enum the generated selector has a dedicated branch for.
///
/// Anything else falls through to a generic "unsupported platform" error.
/// Browsers never get here as `kIsWeb` is checked first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetPlatform {
    /// `TargetPlatform.android`
    Android,
    /// `TargetPlatform.iOS`
    Ios,
    /// `TargetPlatform.macOS`
    MacOs,
    /// `TargetPlatform.windows`, never configured
    Windows,
    /// `TargetPlatform.linux`, never configured
    Linux,
}

impl TargetPlatform {
    /// All platforms in the order of their `case` branches.
    pub const ALL: [Self; 5] = [
        Self::Android,
        Self::Ios,
        Self::MacOs,
        Self::Windows,
        Self::Linux,
    ];

    /// Name of the `TargetPlatform` enum value in Dart.
    #[must_use]
    pub fn dart_name(self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "iOS",
            Self::MacOs => "macOS",
            Self::Windows => "windows",
            Self::Linux => "linux",
        }
    }

    /// The options used on this platform, `None` if it has never been configured.
    #[must_use]
    pub fn variant(self) -> Option<Variant> {
        match self {
            Self::Android => Some(Variant::Android),
            Self::Ios => Some(Variant::Ios),
            Self::MacOs => Some(Variant::Macos),
            Self::Windows | Self::Linux => None,
        }
    }
}
