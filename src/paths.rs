use std::path::{Path, PathBuf};

/// Icon sizes shipped in the hicolor theme tree.
pub const ICON_SIZES: &[&str] = &["16x16", "24x24", "32x32", "64x64", "128x128"];

/// Icon file name as installed by the build (application id).
pub const APP_ICON: &str = "com.github.alecaddd.akira.svg";

/// Icon file name the desktop environment looks up for the MIME type.
pub const MIME_ICON: &str = "application-x-akira.svg";

/// GSettings schema directory under the install prefix.
pub fn schema_dir(prefix: &Path) -> PathBuf {
    prefix.join("share").join("glib-2.0").join("schemas")
}

/// Root of the hicolor icon theme under the install prefix.
pub fn hicolor_dir(prefix: &Path) -> PathBuf {
    prefix.join("share").join("icons").join("hicolor")
}

/// Per-size mimetypes directory, e.g. `share/icons/hicolor/16x16/mimetypes`.
pub fn mimetypes_dir(prefix: &Path, size: &str) -> PathBuf {
    hicolor_dir(prefix).join(size).join("mimetypes")
}

/// Desktop entry directory under the install prefix.
pub fn applications_dir(prefix: &Path) -> PathBuf {
    prefix.join("share").join("applications")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_dir() {
        assert_eq!(
            schema_dir(Path::new("/tmp/root")),
            PathBuf::from("/tmp/root/share/glib-2.0/schemas")
        );
    }

    #[test]
    fn test_mimetypes_dir() {
        assert_eq!(
            mimetypes_dir(Path::new("/usr"), "64x64"),
            PathBuf::from("/usr/share/icons/hicolor/64x64/mimetypes")
        );
    }

    #[test]
    fn test_applications_dir() {
        assert_eq!(
            applications_dir(Path::new("/usr/local")),
            PathBuf::from("/usr/local/share/applications")
        );
    }

    #[test]
    fn test_icon_sizes_fixed_list() {
        assert_eq!(ICON_SIZES, &["16x16", "24x24", "32x32", "64x64", "128x128"]);
    }
}
