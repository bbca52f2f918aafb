//! Runtime libraries the Qt xcb platform plugin needs on Debian-based
//! systems. The list is fixed; nothing here inspects the host.

/// XCB libraries the `xcb` platform plugin dlopens or links against.
pub const XCB_PACKAGES: &[&str] = &[
    "libxcb-cursor0",
    "libxcb-icccm4",
    "libxcb-image0",
    "libxcb-keysyms1",
    "libxcb-randr0",
    "libxcb-render-util0",
    "libxcb-shape0",
    "libxcb-shm0",
    "libxcb-sync1",
    "libxcb-xfixes0",
    "libxcb-xinerama0",
    "libxcb-xkb1",
    "libxkbcommon-x11-0",
];

/// Rendering and session support: EGL/GL, font resolution, session bus.
pub const RENDER_PACKAGES: &[&str] = &["libegl1", "libgl1", "libfontconfig1", "libdbus-1-3"];

/// Full install list, XCB libraries first, in declaration order.
pub fn runtime_packages() -> Vec<&'static str> {
    let mut packages = Vec::with_capacity(XCB_PACKAGES.len() + RENDER_PACKAGES.len());
    packages.extend_from_slice(XCB_PACKAGES);
    packages.extend_from_slice(RENDER_PACKAGES);
    packages
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn runtime_packages_is_nonempty() {
        assert!(!runtime_packages().is_empty());
    }

    #[test]
    fn runtime_packages_has_no_duplicates() {
        let packages = runtime_packages();
        let unique: HashSet<_> = packages.iter().collect();
        assert_eq!(unique.len(), packages.len());
    }

    #[test]
    fn xcb_packages_come_first() {
        let packages = runtime_packages();
        assert_eq!(&packages[..XCB_PACKAGES.len()], XCB_PACKAGES);
        assert_eq!(&packages[XCB_PACKAGES.len()..], RENDER_PACKAGES);
    }

    #[test]
    fn package_names_are_wellformed() {
        for name in runtime_packages() {
            assert!(!name.is_empty());
            assert!(!name.contains(char::is_whitespace), "bad name: {}", name);
        }
    }
}
