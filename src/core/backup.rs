use crate::db::log::oplog;
use crate::db::store::SessionStore;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::models::backup::BackupDocument;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Write the full store to `dest_file` as a JSON backup document.
    pub fn backup(store: &SessionStore, dest_file: &str, force: bool, compress: bool) -> AppResult<()> {
        let dest = expand_tilde(dest_file);

        // 1️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 2️⃣ Overwrite confirmation (unless --force)
        ensure_writable(&dest, force)?;

        // 3️⃣ Snapshot the store and write the document
        let doc = BackupDocument::capture(store)?;
        let json = doc.to_json()?;

        let mut file = fs::File::create(&dest)?;
        file.write_all(json.as_bytes())?;

        success(format!(
            "Backup created: {} ({} record(s))",
            dest.display(),
            doc.records.len()
        ));

        // 4️⃣ Optional compression
        let final_path = if compress {
            let compressed = compress_backup(&dest)?;

            if compressed != dest {
                // remove uncompressed copy
                if let Err(e) = fs::remove_file(&dest) {
                    eprintln!("⚠️ Failed to remove uncompressed backup: {}", e);
                } else {
                    println!("🗑️ Removed uncompressed backup: {}", dest.display());
                }
            }

            compressed
        } else {
            dest.clone()
        };

        // 5️⃣ Log in DB
        let _ = oplog(
            &store.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(())
    }

    /// Restore the store from a backup document, replacing everything.
    ///
    /// Validation happens before the prompt and before any write: a
    /// malformed document can never leave the store half-restored.
    pub fn restore(store: &mut SessionStore, src_file: &str) -> AppResult<usize> {
        let src = expand_tilde(src_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Backup file not found: {}", src.display()),
            )
            .into());
        }

        let text = fs::read_to_string(&src)?;
        let doc = BackupDocument::parse(&text)?;

        let existing = store.count()?;

        // ⛔ Restore replaces the whole store → ask first
        println!(
            "⚠️  Restore will REPLACE {} existing record(s) with {} from '{}'.",
            existing,
            doc.records.len(),
            src.display()
        );

        use std::io::{stdin, stdout};

        let mut answer = String::new();
        print!("Continue? [y/N]: ");
        stdout().flush().ok();
        stdin().read_line(&mut answer)?;

        let answer = answer.trim().to_lowercase();
        if !(answer == "y" || answer == "yes") {
            println!("❌ Restore cancelled by user.");
            return Ok(0);
        }

        let n = doc.restore_into(store)?;

        success(format!(
            "Restore completed: {} record(s) from {}",
            n,
            src.display()
        ));

        let _ = oplog(
            &store.conn,
            "restore",
            &src.to_string_lossy(),
            &format!("Store replaced with {} record(s) from backup", n),
        );

        Ok(n)
    }
}

/// Compress a backup: .zip on Windows, .tar.gz elsewhere.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    if cfg!(target_os = "windows") {
        compress_zip(path)
    } else {
        compress_tar_gz(path)
    }
}

fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    zip.start_file(path.file_name().unwrap().to_string_lossy(), options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    println!("📦 Compressed: {}", zip_path.display());

    Ok(zip_path)
}

fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let tar_path = path.with_extension("tar.gz");
    let file = fs::File::create(&tar_path)?;

    let enc = GzEncoder::new(file, Compression::default());
    let mut tar = tar::Builder::new(enc);

    tar.append_path_with_name(path, path.file_name().unwrap())?;

    let enc = tar.into_inner()?;
    enc.finish()?;

    println!("📦 Compressed: {}", tar_path.display());

    Ok(tar_path)
}
