use std::{
    fs,
    path::{Path, PathBuf},
};

use image::{
    imageops::FilterType, io::Reader as ImageReader, DynamicImage, ImageError, ImageFormat,
};
use log::{debug, info};

mod error;

pub use error::{ErrorKind, ResizeError};

/// Edge lengths of the generated icons, in the order they are written.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Filter used for every resize.
pub const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

/// `icon-<size>.png`
pub fn icon_file_name(size: u32) -> String {
    format!("icon-{}.png", size)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenIcon {
    pub size: u32,
    pub path: PathBuf,
}

/// Resize `input_path` into one square PNG per entry of [`ICON_SIZES`],
/// written to `output_dir/icon-<size>.png`.
///
/// The output directory is created first, so it exists even when the input
/// turns out to be unreadable. The first failure stops the run; icons
/// written before it stay on disk.
pub fn resize_icon(
    input_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
) -> Result<Vec<WrittenIcon>, ResizeError> {
    resize_icon_with(input_path, output_dir, |_| {})
}

/// Same as [`resize_icon`], calling `on_written` right after each file lands
/// on disk.
pub fn resize_icon_with(
    input_path: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    mut on_written: impl FnMut(&WrittenIcon),
) -> Result<Vec<WrittenIcon>, ResizeError> {
    let output_dir = output_dir.as_ref();

    ensure_output_dir(output_dir)?;
    let source = load_source(input_path)?;

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let icon = render_icon(&source, size);
        let path = write_icon(&icon, output_dir, size)?;

        let entry = WrittenIcon { size, path };
        on_written(&entry);
        written.push(entry);
    }

    Ok(written)
}

/// Create `dir` and any missing parents. An existing directory is fine.
pub fn ensure_output_dir(dir: impl AsRef<Path>) -> Result<(), ResizeError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| ResizeError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Decode the master image. The format is sniffed from the file content,
/// falling back to the extension when the content is not recognised.
pub fn load_source(path: impl AsRef<Path>) -> Result<DynamicImage, ResizeError> {
    let path = path.as_ref();
    let open_err = |source: std::io::Error| ResizeError::Open {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .map_err(open_err)?
        .with_guessed_format()
        .map_err(open_err)?;

    let image = reader.decode().map_err(|source| ResizeError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Decoded {:?}: {}x{} {:?}",
        path,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Resample to exactly `size`x`size`; the source aspect ratio is discarded.
pub fn render_icon(source: &DynamicImage, size: u32) -> DynamicImage {
    debug!(
        "Resizing {}x{} -> {}x{}",
        source.width(),
        source.height(),
        size,
        size
    );
    source.resize_exact(size, size, RESAMPLE_FILTER)
}

/// Encode `icon` as PNG into `output_dir/icon-<size>.png`, replacing any
/// existing file.
pub fn write_icon(
    icon: &DynamicImage,
    output_dir: impl AsRef<Path>,
    size: u32,
) -> Result<PathBuf, ResizeError> {
    let path = output_dir.as_ref().join(icon_file_name(size));

    icon.save_with_format(&path, ImageFormat::Png)
        .map_err(|e| match e {
            ImageError::IoError(source) => ResizeError::Write {
                path: path.clone(),
                source,
            },
            source => ResizeError::Encode {
                path: path.clone(),
                source,
            },
        })?;

    info!("Wrote {:?} ({}x{})", path, size, size);
    Ok(path)
}
