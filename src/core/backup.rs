use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use flate2::Compression;
use flate2::write::GzEncoder;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        _pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        fs::copy(src, &dest)?;
        println!("✅ Backup created: {}", dest.display());

        let final_path = if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                // remove uncompressed copy
                if let Err(e) = fs::remove_file(&dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                }
            }

            compressed
        } else {
            dest
        };

        // Log in DB (non-blocking)
        if let Ok(conn) = Connection::open(src)
            && let Err(e) = crate::db::log::ttlog(
                &conn,
                "backup",
                &final_path.to_string_lossy(),
                if compress {
                    "Backup created and compressed"
                } else {
                    "Backup created"
                },
            )
        {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        Ok(())
    }
}

/// Compress a backup using gzip.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let gz_path = path.with_extension("sqlite.gz");
    let file = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(file, Compression::default());

    let mut f = fs::File::open(path)?;
    std::io::copy(&mut f, &mut encoder)?;
    encoder.finish()?;

    println!("📦 Compressed: {}", gz_path.display());

    Ok(gz_path)
}
