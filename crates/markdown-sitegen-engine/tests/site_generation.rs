use std::fs;
use std::path::Path;

use markdown_sitegen_engine::{MarkdownError, PageError, SiteBuilder, SiteError, io::IoError};
use relative_path::RelativePathBuf;
use tempfile::TempDir;

const TEMPLATE: &str = r#"<title>{{ Title }}</title><link href="/index.css">{{ Content }}"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

struct Site {
    _tmp: TempDir,
    content: std::path::PathBuf,
    static_dir: std::path::PathBuf,
    public: std::path::PathBuf,
}

fn site() -> Site {
    let tmp = TempDir::new().unwrap();
    let content = tmp.path().join("content");
    let static_dir = tmp.path().join("static");
    let public = tmp.path().join("public");
    fs::create_dir_all(&content).unwrap();
    fs::create_dir_all(&static_dir).unwrap();
    Site {
        content,
        static_dir,
        public,
        _tmp: tmp,
    }
}

#[test]
fn generates_pages_and_copies_static_files() {
    let s = site();
    write(&s.content, "index.md", "# Home\n\nSee the [blog](/blog/first.html)");
    write(&s.content, "blog/first.md", "# First post\n\n- one\n- two");
    write(&s.static_dir, "index.css", "body {}");
    write(&s.static_dir, "images/logo.png", "png");

    let report = SiteBuilder::new(&s.content, &s.public, TEMPLATE)
        .static_dir(&s.static_dir)
        .build()
        .unwrap();

    assert_eq!(report.static_files, 2);
    assert_eq!(
        report.generated,
        vec![
            RelativePathBuf::from("blog/first.html"),
            RelativePathBuf::from("index.html"),
        ]
    );
    assert!(report.skipped.is_empty());

    assert_eq!(
        fs::read_to_string(s.public.join("index.html")).unwrap(),
        r#"<title>Home</title><link href="/index.css"><div><h1>Home</h1><p>See the <a href="/blog/first.html">blog</a></p></div>"#
    );
    assert_eq!(
        fs::read_to_string(s.public.join("blog").join("first.html")).unwrap(),
        r#"<title>First post</title><link href="/index.css"><div><h1>First post</h1><ul><li>one</li><li>two</li></ul></div>"#
    );
    assert!(s.public.join("images").join("logo.png").exists());
}

#[test]
fn base_path_is_applied_to_every_page() {
    let s = site();
    write(&s.content, "index.md", "# Home\n\n![logo](/images/logo.png)");

    SiteBuilder::new(&s.content, &s.public, TEMPLATE)
        .base_path("/docs/")
        .build()
        .unwrap();

    assert_eq!(
        fs::read_to_string(s.public.join("index.html")).unwrap(),
        r#"<title>Home</title><link href="/docs/index.css"><div><h1>Home</h1><p><img src="/docs/images/logo.png" alt="logo">logo</img></p></div>"#
    );
}

#[test]
fn stale_output_is_removed_without_static_dir() {
    let s = site();
    write(&s.content, "index.md", "# Home");
    write(&s.public, "stale.html", "<p>old page</p>");

    SiteBuilder::new(&s.content, &s.public, TEMPLATE)
        .build()
        .unwrap();

    assert!(!s.public.join("stale.html").exists());
    assert!(s.public.join("index.html").exists());
}

#[test]
fn stale_output_is_removed_with_static_dir() {
    let s = site();
    write(&s.content, "index.md", "# Home");
    write(&s.static_dir, "index.css", "body {}");
    write(&s.public, "old/renamed.html", "<p>old page</p>");

    SiteBuilder::new(&s.content, &s.public, TEMPLATE)
        .static_dir(&s.static_dir)
        .build()
        .unwrap();

    assert!(!s.public.join("old").exists());
    assert!(s.public.join("index.css").exists());
}

#[test]
fn output_inside_static_dir_is_rejected() {
    let s = site();
    write(&s.content, "index.md", "# Home");
    write(&s.static_dir, "index.css", "body {}");

    let err = SiteBuilder::new(&s.content, s.static_dir.join("public"), TEMPLATE)
        .static_dir(&s.static_dir)
        .build()
        .unwrap_err();

    assert!(matches!(err, SiteError::Io(IoError::InvalidDir { .. })));
}

#[test]
fn failing_page_aborts_build_by_default() {
    let s = site();
    write(&s.content, "bad.md", "# Bad\n\nunterminated **bold");

    let err = SiteBuilder::new(&s.content, &s.public, TEMPLATE)
        .build()
        .unwrap_err();

    match err {
        SiteError::Page { path, source } => {
            assert_eq!(path, RelativePathBuf::from("bad.md"));
            assert!(matches!(
                source,
                PageError::Markdown(MarkdownError::UnterminatedDelimiter { delimiter: "**", .. })
            ));
        }
        other => panic!("expected page error, got {other:?}"),
    }
}

#[test]
fn keep_going_skips_failing_pages() {
    let s = site();
    write(&s.content, "bad.md", "no title here");
    write(&s.content, "good.md", "# Good");

    let report = SiteBuilder::new(&s.content, &s.public, TEMPLATE)
        .keep_going(true)
        .build()
        .unwrap();

    assert_eq!(report.generated, vec![RelativePathBuf::from("good.html")]);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].path, RelativePathBuf::from("bad.md"));
    assert!(matches!(report.skipped[0].error, PageError::MissingTitle));
    assert!(!s.public.join("bad.html").exists());
}

#[test]
fn missing_content_dir_is_an_io_error() {
    let s = site();
    let err = SiteBuilder::new(s.content.join("nope"), &s.public, TEMPLATE)
        .build()
        .unwrap_err();
    assert!(matches!(err, SiteError::Io(_)));
}
