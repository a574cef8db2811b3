//! Packs `data_sources/alloys.txt` into a zstd-compressed postcard catalog
//! for `Catalog::from_compressed`.
//!
//! The library's builtin table is not generated from this file; the
//! `parsers` tests keep the two in sync. Usage:
//! ```sh
//! cargo run -p alloydb-generate -- [OUTPUT]   # default: target/catalog.bin.zst
//! ```

mod parsers;

use std::io::Write;
use std::path::{Path, PathBuf};

use alloydb::Catalog;
use alloydb_data::CatalogRecord;
use anyhow::{Context, Result, bail};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .context("generator crate has no parent directory")?;
    let data_dir = root.join("data_sources");

    if !data_dir.exists() {
        bail!("data_sources directory not found at {}", data_dir.display());
    }

    info!("parsing catalog sources from {}", data_dir.display());

    let version = parsers::parse_version(&data_dir.join("Version.dat"))?;
    info!("  version: {} entries", version.len());

    let alloys = parsers::parse_alloys(&data_dir.join("alloys.txt"))?;
    info!("  alloys: {} entries", alloys.len());

    let record = CatalogRecord { version, alloys };

    info!("serializing with postcard");
    let serialized = postcard::to_allocvec(&record).context("postcard serialization failed")?;
    info!("  serialized size: {} bytes", serialized.len());

    info!("compressing with zstd (level 19)");
    let compressed = zstd::encode_all(&serialized[..], 19).context("zstd compression failed")?;
    info!(
        "  compressed size: {} bytes ({:.1}x)",
        compressed.len(),
        serialized.len() as f64 / compressed.len() as f64
    );

    let out_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| root.join("target").join("catalog.bin.zst"));
    if let Some(dir) = out_path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let mut f = std::fs::File::create(&out_path)
        .with_context(|| format!("failed to create {}", out_path.display()))?;
    f.write_all(&compressed)?;
    info!("wrote {}", out_path.display());

    // Verify round-trip through the library's own validation.
    let decompressed = zstd::decode_all(&compressed[..]).context("zstd decompression failed")?;
    let reread: CatalogRecord =
        postcard::from_bytes(&decompressed).context("postcard deserialization failed")?;
    let catalog = Catalog::from_record(reread)?;
    info!("round-trip OK: {} alloys", catalog.len());

    Ok(())
}
