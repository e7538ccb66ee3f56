use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<PathBuf> {
        let src = Path::new(&cfg.database);
        let dest_buf = expand_tilde(dest_file);
        let dest = dest_buf.as_path();

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Refuse to clobber without confirmation
        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };
        ensure_writable(&final_target, force)?;

        // 4️⃣ Consistent copy of the live database
        pool.conn
            .execute("VACUUM INTO ?1", [dest.to_string_lossy().to_string()])
            .or_else(|_| fs::copy(src, dest).map(|_| 0).map_err(AppError::from))?;
        success(format!("Backup created: {}", dest.display()));

        // 5️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(dest)?;
            if let Err(e) = fs::remove_file(dest) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            compressed
        } else {
            dest.to_path_buf()
        };

        // 6️⃣ Audit
        ttlog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(final_path)
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "rplancharge.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
