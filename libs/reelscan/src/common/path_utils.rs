use std::path::{Path, PathBuf};

use anyhow::Result;

/// Returns the folder as-is if it exists and is a directory.
pub fn to_verified_dir(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(anyhow::anyhow!("Frame folder not found: {}", path.display()));
    }
    if !path.is_dir() {
        return Err(anyhow::anyhow!("Expected a directory, got a file: {}", path.display()));
    }
    Ok(path.to_path_buf())
}

/// Frame formats read by the visual feature pass.
pub const FRAME_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// Lists `*.<extension>` files in `folder`, sorted by file name so that
/// `frame_0001.jpg` comes before `frame_0002.jpg`.
pub fn list_frames(folder: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    list_frames_with_extensions(folder, &[extension])
}

/// Like [`list_frames`] for several extensions. Extensions match regardless
/// of case, so `FRAME_0001.JPG` is found by `jpg`.
pub fn list_frames_with_extensions(folder: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let folder = to_verified_dir(folder)?;
    let folder_str = folder
        .to_str()
        .ok_or_else(|| anyhow::anyhow!("Frame folder is not valid UTF-8: {}", folder.display()))?;
    let options = glob::MatchOptions {
        case_sensitive: false,
        require_literal_separator: false,
        require_literal_leading_dot: false,
    };

    let mut frames: Vec<PathBuf> = Vec::new();
    for extension in extensions {
        let pattern = format!(
            "{}/*.{}",
            glob::Pattern::escape(folder_str),
            extension.trim_start_matches('.')
        );
        frames.extend(
            glob::glob_with(&pattern, options)?
                .filter_map(|entry| entry.ok())
                .filter(|p| p.is_file()),
        );
    }

    frames.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));
    frames.dedup();
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = list_frames(&dir.path().join("nope"), "jpg").unwrap_err();
        assert!(err.to_string().contains("Frame folder not found"));
    }

    #[test]
    fn test_file_instead_of_folder_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("frame.jpg");
        std::fs::write(&file, b"").unwrap();
        assert!(to_verified_dir(&file).is_err());
    }

    #[test]
    fn test_frames_are_filtered_and_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["frame_0002.jpg", "frame_0000.jpg", "frame_0001.jpg", "notes.txt", "frame_0003.png"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();

        let frames = list_frames(dir.path(), "jpg").unwrap();
        let names: Vec<_> = frames
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["frame_0000.jpg", "frame_0001.jpg", "frame_0002.jpg"]);

        assert_eq!(list_frames(dir.path(), ".png").unwrap().len(), 1);
    }

    #[test]
    fn test_extension_match_ignores_case() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["FRAME_0001.JPG", "frame_0000.jpg", "frame_0002.Jpg"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let frames = list_frames(dir.path(), "jpg").unwrap();
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[0].file_name().unwrap(), "FRAME_0001.JPG");
    }

    #[test]
    fn test_multiple_extensions_without_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["frame_0000.jpg", "frame_0001.jpeg", "frame_0002.png", "frame_0003.bmp", "frame_0004.gif"] {
            std::fs::write(dir.path().join(name), b"").unwrap();
        }

        let frames = list_frames_with_extensions(dir.path(), &FRAME_EXTENSIONS).unwrap();
        assert_eq!(frames.len(), 4);
        assert!(frames[3].ends_with("frame_0003.bmp"));

        let twice = list_frames_with_extensions(dir.path(), &["png", "PNG"]).unwrap();
        assert_eq!(twice.len(), 1);
    }

    #[test]
    fn test_empty_folder_yields_no_frames() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_frames(dir.path(), "jpg").unwrap().is_empty());
    }
}
