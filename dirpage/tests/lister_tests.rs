use chrono::{Local, TimeZone};
use dirpage::formatter::{ListingFormatter, PageFormatter, PayloadFormatter};
use dirpage::lister::format_timestamp;
use dirpage::{DirectoryLister, DirpageError, PayloadRecord};
use filetime::FileTime;
use std::fs::{self, File};
use std::path::Path;
use std::time::SystemTime;
use tempfile::TempDir;

fn setup(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in files {
        File::create(dir.path().join(name)).unwrap();
    }
    dir
}

fn names(listing: &DirectoryLister) -> Vec<&str> {
    listing.matches().iter().map(|e| e.name.as_str()).collect()
}

fn set_mtime(path: &Path, year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) {
    let local = Local.with_ymd_and_hms(year, month, day, h, m, s).unwrap();
    let time: SystemTime = local.into();
    filetime::set_file_mtime(path, FileTime::from_system_time(time)).unwrap();
}

#[test]
fn filters_by_extension_in_enumeration_order() {
    let dir = setup(&["a.html", "b.md", "c.txt"]);
    let listing = DirectoryLister::new(dir.path(), &["html", "md"]).unwrap();

    assert_eq!(names(&listing), vec!["a.html", "b.md"]);
}

#[test]
fn no_extensions_means_empty_views() {
    let dir = setup(&["a.html", "b.md"]);
    let listing = DirectoryLister::new(dir.path(), &[] as &[&str]).unwrap();

    assert!(listing.matches().is_empty());
    assert_eq!(
        listing.render_dropdown("file", "a.html"),
        "<select name=\"file\" class=\"form-control\"></select>"
    );
    assert_eq!(listing.render_links(), "");
    assert!(listing.to_payload().is_empty());
}

#[test]
fn unreadable_directory_fails_construction() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");

    match DirectoryLister::new(&missing, &["html"]) {
        Err(DirpageError::DirectoryUnreadable { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected DirectoryUnreadable, got {:?}", other),
    }
}

#[test]
fn unreadable_differs_from_empty() {
    let dir = setup(&["c.txt"]);
    let empty = DirectoryLister::new(dir.path(), &["html"]).unwrap();
    assert!(empty.matches().is_empty());

    let file_as_root = dir.path().join("c.txt");
    assert!(DirectoryLister::new(&file_as_root, &["html"]).is_err());
}

#[test]
fn dropdown_marks_selected_entry() {
    let dir = setup(&["a.html", "b.md"]);
    let listing = DirectoryLister::new(dir.path(), &["html", "md"]).unwrap();
    let html = listing.render_dropdown("file", "b.md");

    assert_eq!(html.matches("<option ").count(), 2);
    assert_eq!(html.matches(" selected>").count(), 1);
    assert!(html.contains("<option value=\"b.md\" selected>b.md - "));
    assert!(html.contains("<option value=\"a.html\">a.html - "));
}

#[test]
fn dropdown_with_absent_selection_selects_nothing() {
    let dir = setup(&["a.html", "b.md"]);
    let listing = DirectoryLister::new(dir.path(), &["html", "md"]).unwrap();

    assert!(!listing.render_dropdown("file", "c.txt").contains("selected"));
    assert!(!listing.render_dropdown("file", "./b.md").contains("selected"));
}

#[test]
fn duplicate_extensions_duplicate_matches() {
    let dir = setup(&["a.html"]);
    let listing = DirectoryLister::new(dir.path(), &["html", "html"]).unwrap();

    assert_eq!(names(&listing), vec!["a.html", "a.html"]);
    let payload = listing.to_payload();
    assert_eq!(payload.len(), 2);
    assert_eq!(payload[0], payload[1]);
}

#[test]
fn duplicate_matches_select_one_option() {
    let dir = setup(&["a.html"]);
    let listing = DirectoryLister::new(dir.path(), &["html", "html"]).unwrap();
    let html = listing.render_dropdown("file", "a.html");

    assert_eq!(html.matches("<option ").count(), 2);
    assert_eq!(html.matches(" selected>").count(), 1);
}

#[test]
fn suffix_match_is_literal() {
    let dir = setup(&[
        "notes.html.bak",
        "archive.tar.html",
        ".html",
        "UPPER.HTML",
        "plainhtml",
    ]);
    let listing = DirectoryLister::new(dir.path(), &["html"]).unwrap();

    assert_eq!(names(&listing), vec![".html", "archive.tar.html"]);
}

#[test]
fn matching_subdirectories_are_listed_but_not_descended() {
    let dir = setup(&["a.md"]);
    fs::create_dir(dir.path().join("guide.md")).unwrap();
    File::create(dir.path().join("guide.md").join("inner.md")).unwrap();

    let listing = DirectoryLister::new(dir.path(), &["md"]).unwrap();

    assert_eq!(names(&listing), vec!["a.md", "guide.md"]);
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_skipped() {
    let dir = setup(&["a.html"]);
    std::os::unix::fs::symlink(dir.path().join("gone.html"), dir.path().join("link.html"))
        .unwrap();

    let listing = DirectoryLister::new(dir.path(), &["html"]).unwrap();

    assert_eq!(names(&listing), vec!["a.html"]);
}

#[test]
fn unrepresentable_mtime_skips_only_that_entry() {
    // tmpfs keeps the full 64-bit mtime; disk filesystems may clamp it
    let shm = Path::new("/dev/shm");
    let dir = if shm.is_dir() {
        tempfile::tempdir_in(shm).unwrap()
    } else {
        tempfile::tempdir().unwrap()
    };
    File::create(dir.path().join("a.html")).unwrap();
    File::create(dir.path().join("far.html")).unwrap();
    let far = dir.path().join("far.html");
    filetime::set_file_mtime(&far, FileTime::from_unix_time(9_000_000_000_000, 0)).unwrap();

    let listing = DirectoryLister::new(dir.path(), &["html"]).unwrap();

    let stored = fs::metadata(&far).unwrap().modified().unwrap();
    if format_timestamp(stored).is_none() {
        assert_eq!(names(&listing), vec!["a.html"]);
    } else {
        assert_eq!(names(&listing), vec!["a.html", "far.html"]);
    }
}

#[test]
fn payload_mirrors_matches() {
    let dir = setup(&["a.html", "b.md", "c.md"]);
    set_mtime(&dir.path().join("b.md"), 2018, 2, 14, 9, 30, 5);
    let listing = DirectoryLister::new(dir.path(), &["md", "html"]).unwrap();

    let payload = listing.to_payload();
    assert_eq!(payload.len(), listing.matches().len());
    for (record, entry) in payload.iter().zip(listing.matches()) {
        assert_eq!(record.file, entry.name);
        assert_eq!(record.date, entry.modified_at);
    }
    assert_eq!(
        payload[1],
        PayloadRecord {
            file: "b.md".into(),
            date: "2018-02-14 09:30:05".into(),
        }
    );
}

#[test]
fn views_are_repeatable() {
    let dir = setup(&["a.html", "b.md"]);
    let listing = DirectoryLister::new(dir.path(), &["html", "md"]).unwrap();
    let before = listing.matches().to_vec();

    let links = listing.render_links();
    let dropdown = listing.render_dropdown("file", "a.html");
    let payload = listing.to_payload();

    fs::remove_file(dir.path().join("a.html")).unwrap();

    assert_eq!(listing.render_links(), links);
    assert_eq!(listing.render_dropdown("file", "a.html"), dropdown);
    assert_eq!(listing.to_payload(), payload);
    assert_eq!(listing.matches(), before.as_slice());
}

#[test]
fn links_show_formatted_timestamp() {
    let dir = setup(&["a.html"]);
    set_mtime(&dir.path().join("a.html"), 2019, 7, 1, 23, 59, 58);
    let listing = DirectoryLister::new(dir.path(), &["html"]).unwrap();

    assert_eq!(
        listing.render_links(),
        "<p><a href=\"a.html\">a.html</a> 2019-07-01 23:59:58</p>"
    );
}

#[test]
fn json_and_page_formatters_render_payload() {
    let dir = setup(&["a.html"]);
    set_mtime(&dir.path().join("a.html"), 2019, 7, 1, 12, 0, 0);
    let listing = DirectoryLister::new(dir.path(), &["html"]).unwrap();

    let json = PayloadFormatter::new(false)
        .format_entries(listing.matches())
        .unwrap();
    let decoded: Vec<PayloadRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, listing.to_payload());

    let page = PageFormatter::new("Project Files")
        .format_entries(listing.matches())
        .unwrap();
    assert!(page.contains("title=\"2019-07-01 12:00:00\">a.html</a>"));
    assert!(page.contains(&json));
}
