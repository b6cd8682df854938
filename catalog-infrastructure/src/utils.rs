use std::path::Path;

use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Creates or truncates `path` and writes `content` in full.
/// New files get mode 0644 on unix.
pub async fn write_file(path: &Path, content: &[u8]) -> std::io::Result<()> {
    ensure_parent_dir(path).await?;
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o644);
    let mut file = options.open(path).await?;
    file.write_all(content).await?;
    file.flush().await?;
    Ok(())
}

async fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}
