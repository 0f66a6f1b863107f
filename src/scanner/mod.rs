mod format;

pub use format::ImageKind;

use crate::error::{FarmVisionError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// アップロードされた作物画像
#[derive(Debug, Clone)]
pub struct CropImage {
    pub file_name: String,
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 対応拡張子か（大文字小文字は無視）
pub fn is_image_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| is_image_extension(&e.to_string_lossy()))
        .unwrap_or(false)
}

/// 画像1枚を読み込み、拡張子と中身の両方でJPEG/PNGか確認
pub fn load_image(path: &Path) -> Result<CropImage> {
    if !path.is_file() {
        return Err(FarmVisionError::FileNotFound(path.display().to_string()));
    }

    if !has_image_extension(path) {
        return Err(FarmVisionError::UnsupportedImage(path.display().to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| FarmVisionError::ImageLoad(format!("{}: {}", path.display(), e)))?;
    let kind = format::sniff(&bytes)
        .ok_or_else(|| FarmVisionError::UnsupportedImage(path.display().to_string()))?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    debug!(file = %file_name, kind = %kind, size = bytes.len(), "Image loaded");

    Ok(CropImage {
        file_name,
        kind,
        bytes,
    })
}

/// フォルダ直下の画像パスを列挙（ファイル名順）
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(FarmVisionError::FolderNotFound(folder.display().to_string()));
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && has_image_extension(p))
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// 読み込み結果。フォルダ内の読めなかった画像は `skipped` に残す
#[derive(Debug, Default)]
pub struct ImageBatch {
    pub images: Vec<CropImage>,
    pub skipped: Vec<FarmVisionError>,
}

/// ファイルならその1枚、フォルダなら直下の画像すべてを読み込む
///
/// 単体ファイルのエラーはそのまま返す。フォルダ内の不正な画像は飛ばして続行する。
pub fn load_images(path: &Path) -> Result<ImageBatch> {
    if !path.is_dir() {
        return Ok(ImageBatch {
            images: vec![load_image(path)?],
            skipped: Vec::new(),
        });
    }

    let mut batch = ImageBatch::default();
    for p in scan_folder(path)? {
        match load_image(&p) {
            Ok(image) => batch.images.push(image),
            Err(e) => {
                warn!(file = %p.display(), error = %e, "Skipping image");
                batch.skipped.push(e);
            }
        }
    }
    Ok(batch)
}
