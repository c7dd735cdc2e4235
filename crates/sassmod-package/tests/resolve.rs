use std::path::Path;
use std::sync::Arc;

use sassmod_fs::TokioFileSystem;
use sassmod_package::{
    Error, LayoutResolver, PackageDescriptor, PackageResolver, ResolveOptions,
};
use tempfile::{TempDir, tempdir};

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

fn npm() -> LayoutResolver { LayoutResolver::npm(Arc::new(TokioFileSystem)) }

fn bower() -> LayoutResolver { LayoutResolver::bower(Arc::new(TokioFileSystem)) }

fn project() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();

    write(root, "node_modules/test-npm-main-scss/package.json", r#"{"name": "test-npm-main-scss", "main": "./main.scss"}"#);
    write(root, "node_modules/test-npm-main-scss/main.scss", ".test{content:\"SCSS from 'npm' and from 'main' field.\"}");

    write(root, "node_modules/test-npm-style-css/package.json", r#"{"main": "index.js", "style": "dist/style.css"}"#);
    write(root, "node_modules/test-npm-style-css/dist/style.css", ".test{}");

    write(root, "node_modules/test-npm-index-css/package.json", r#"{"main": "index.js"}"#);
    write(root, "node_modules/test-npm-index-css/index.css", ".test{}");

    write(root, "node_modules/test-npm-extensionless/package.json", r#"{"style": "scss/grid"}"#);
    write(root, "node_modules/test-npm-extensionless/scss/grid.scss", ".grid{}");

    write(root, "node_modules/@acme/theme/package.json", r#"{"main.sass": "theme.sass"}"#);
    write(root, "node_modules/@acme/theme/theme.sass", ".theme\n  color: red");

    write(root, "node_modules/broken/package.json", "{ not json");
    write(root, "node_modules/empty/README.md", "nothing here");

    write(root, "bower_components/test-bower-main-scss/bower.json", r#"{"main": ["dist/x.js", "main.scss"]}"#);
    write(root, "bower_components/test-bower-main-scss/main.scss", ".test{}");

    write(root, "bower_components/test-bower-dot/.bower.json", r#"{"main": "dot.css"}"#);
    write(root, "bower_components/test-bower-dot/dot.css", ".dot{}");

    dir
}

#[tokio::test]
async fn test_npm_main_field() {
    let dir = project();
    let options = ResolveOptions::new(dir.path());

    let path = npm().resolve("test-npm-main-scss", &options).await.unwrap();
    assert_eq!(path, dir.path().join("node_modules/test-npm-main-scss/main.scss"));
}

#[tokio::test]
async fn test_npm_style_and_index_fallbacks() {
    let dir = project();
    let options = ResolveOptions::new(dir.path());

    let style = npm().resolve("test-npm-style-css", &options).await.unwrap();
    assert_eq!(style, dir.path().join("node_modules/test-npm-style-css/dist/style.css"));

    let index = npm().resolve("test-npm-index-css", &options).await.unwrap();
    assert_eq!(index, dir.path().join("node_modules/test-npm-index-css/index.css"));
}

#[tokio::test]
async fn test_npm_entry_extension_is_probed() {
    let dir = project();
    let options = ResolveOptions::new(dir.path());

    let path = npm().resolve("test-npm-extensionless", &options).await.unwrap();
    assert_eq!(path, dir.path().join("node_modules/test-npm-extensionless/scss/grid.scss"));
}

#[tokio::test]
async fn test_scoped_package() {
    let dir = project();
    let options = ResolveOptions::new(dir.path());

    let path = npm().resolve("@acme/theme", &options).await.unwrap();
    assert_eq!(path, dir.path().join("node_modules/@acme/theme/theme.sass"));
}

#[tokio::test]
async fn test_subpath_is_appended_to_package_root() {
    let dir = project();
    let options = ResolveOptions::new(dir.path());

    let path = npm().resolve("test-npm-main-scss/assets/styles", &options).await.unwrap();
    assert_eq!(path, dir.path().join("node_modules/test-npm-main-scss/assets/styles"));
}

#[tokio::test]
async fn test_lookup_walks_ancestors() {
    let dir = project();
    let nested = dir.path().join("src/styles/components");
    std::fs::create_dir_all(&nested).unwrap();

    let path = npm()
        .resolve("test-npm-main-scss", &ResolveOptions::new(&nested))
        .await
        .unwrap();
    assert_eq!(path, dir.path().join("node_modules/test-npm-main-scss/main.scss"));
}

#[tokio::test]
async fn test_misses_and_broken_packages() {
    let dir = project();
    let options = ResolveOptions::new(dir.path());

    let missing = npm().resolve("unicorn", &options).await.unwrap_err();
    assert!(matches!(missing, Error::NotFound(ref name) if name == "unicorn"));
    assert!(missing.is_not_found());

    let broken = npm().resolve("broken", &options).await.unwrap_err();
    assert!(matches!(broken, Error::Manifest { .. }));
    assert!(!broken.is_not_found());

    let empty = npm().resolve("empty", &options).await.unwrap_err();
    assert!(matches!(empty, Error::EntryNotFound { ref entry, .. } if entry == "index.css"));

    let relative = npm().resolve("./local", &options).await.unwrap_err();
    assert!(matches!(relative, Error::InvalidSpecifier(_)));
}

#[tokio::test]
async fn test_custom_filter_overrides_selection() {
    let dir = project();
    let options = ResolveOptions::new(dir.path()).filter(Arc::new(|mut desc: PackageDescriptor| {
        desc.main = Some("main.scss".into());
        desc
    }));

    let err = npm().resolve("test-npm-index-css", &options).await.unwrap_err();
    assert!(matches!(err, Error::EntryNotFound { ref entry, .. } if entry == "main.scss"));
}

#[tokio::test]
async fn test_bower_main_array_and_dot_manifest() {
    let dir = project();
    let options = ResolveOptions::new(dir.path());

    let main = bower().resolve("test-bower-main-scss", &options).await.unwrap();
    assert_eq!(main, dir.path().join("bower_components/test-bower-main-scss/main.scss"));

    let dot = bower().resolve("test-bower-dot", &options).await.unwrap();
    assert_eq!(dot, dir.path().join("bower_components/test-bower-dot/dot.css"));

    assert!(npm().resolve("test-bower-dot", &options).await.is_err());
}

#[tokio::test]
async fn test_bowerrc_moves_components_directory() {
    let dir = tempdir().unwrap();
    let root = dir.path();
    write(root, ".bowerrc", r#"{"directory": "vendor/bower"}"#);
    write(root, "vendor/bower/grid/bower.json", r#"{"main": "grid.scss"}"#);
    write(root, "vendor/bower/grid/grid.scss", ".grid{}");
    write(root, "bower_components/other/bower.json", r#"{"main": "other.scss"}"#);
    write(root, "bower_components/other/other.scss", ".other{}");

    let options = ResolveOptions::new(root);
    let grid = bower().resolve("grid", &options).await.unwrap();
    assert_eq!(grid, root.join("vendor/bower/grid/grid.scss"));

    let other = bower().resolve("other", &options).await.unwrap_err();
    assert!(other.is_not_found());
}
