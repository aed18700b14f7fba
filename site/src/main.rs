use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{App, HttpServer, middleware::Logger};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Root of the assembled deploy tree: the default theme build at the top
/// level, every alternate build in its own `vN/` subdirectory.
fn dist_root() -> PathBuf {
    std::env::var("DIST_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("../dist"))
}

/// `vN` directories present in the dist tree, one URL mount per theme.
fn theme_mounts(root: &Path) -> Vec<String> {
    let mut mounts = Vec::new();
    if let Ok(entries) = std::fs::read_dir(root) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let versioned = name.starts_with('v')
                && name.len() > 1
                && name[1..].chars().all(|c| c.is_ascii_digit());
            if versioned && entry.path().is_dir() {
                mounts.push(name);
            }
        }
    }
    mounts.sort();
    mounts
}

/// Static files for one mount, with an SPA fallback: any path that is not
/// a file on disk answers with that mount's `index.html`, so client-side
/// routes survive a full reload.
fn theme_service(url: &str, dir: PathBuf) -> Files {
    let index = dir.join("index.html");
    Files::new(url, dir)
        .index_file("index.html")
        .default_handler(fn_service(move |req: ServiceRequest| {
            let index = index.clone();
            async move {
                let (req, _) = req.into_parts();
                let file = NamedFile::open_async(&index).await?;
                let res = file.into_response(&req);
                Ok(ServiceResponse::new(req, res))
            }
        }))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let root = dist_root();
    anyhow::ensure!(
        root.join("index.html").is_file(),
        "no index.html under {} (set DIST_ROOT or build the themes first)",
        root.display(),
    );
    let root = root
        .canonicalize()
        .with_context(|| format!("resolving dist root {}", root.display()))?;

    let mounts = theme_mounts(&root);
    log::info!(
        "serving root theme plus {} mounted builds from {}",
        mounts.len(),
        root.display(),
    );

    let server_root = root.clone();
    let assets = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../assets");
    HttpServer::new(move || {
        let mut app = App::new().wrap(Logger::default());
        // ① one service per alternate theme build
        for mount in &mounts {
            app = app.service(theme_service(&format!("/{mount}"), server_root.join(mount)));
        }
        app
            // ② top-level static assets (i18n dictionaries)
            .service(Files::new("/assets", assets.clone()))
            // ③ the default build owns everything else
            .service(theme_service("/", server_root.clone()))
    })
    .bind(("127.0.0.1", 3000))?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn version_directories_become_mounts() {
        let dir = std::env::temp_dir().join(format!("folio-mounts-{}", std::process::id()));
        for sub in ["v6", "v12", "v3", "assets", "vNext"] {
            fs::create_dir_all(dir.join(sub)).unwrap();
        }
        fs::write(dir.join("v9"), b"a file, not a mount").unwrap();

        let mounts = theme_mounts(&dir);
        assert_eq!(mounts, vec!["v12", "v3", "v6"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_dist_roots_yield_no_mounts() {
        assert!(theme_mounts(Path::new("/definitely/not/here")).is_empty());
    }
}
