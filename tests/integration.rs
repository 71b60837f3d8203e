//! Cross-backend scenario tests.
//!
//! Each scenario below is run against both shipped backends wherever the
//! scenario doesn't name one specifically, through the `Filesystem` trait
//! object — proving that a consumer written against the contract behaves
//! identically regardless of which backend it is handed.

use buildfs::{Entry, FileFinder, FileType, Filesystem, MemoryFs};

#[cfg(unix)]
use buildfs::PhysicalFs;

#[cfg(unix)]
struct PhysicalFixture {
    fs: PhysicalFs,
    dir: tempfile::TempDir,
}

#[cfg(unix)]
impl PhysicalFixture {
    fn new() -> Self {
        PhysicalFixture {
            fs: PhysicalFs::new(),
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    fn path(&self, relative: &str) -> String {
        self.dir.path().join(relative).to_str().unwrap().to_string()
    }
}

fn for_each_backend(scenario: impl Fn(&dyn Filesystem, &dyn Fn(&str) -> String)) {
    let memory = MemoryFs::new();
    scenario(&memory, &|p: &str| p.to_string());

    #[cfg(unix)]
    {
        let fixture = PhysicalFixture::new();
        let rooter = |p: &str| fixture.path(p.trim_start_matches('/'));
        scenario(&fixture.fs, &rooter);
    }
}

#[test]
fn enumerate_reports_every_descendant_exactly_once() {
    for_each_backend(|fs, root| {
        assert!(fs.create_directory(&root("/a/b"), true));
        assert!(fs.write(&root("/a/b/c.txt"), b"hi"));
        assert!(fs.write(&root("/a/d.txt"), b"x"));

        let mut reported = Vec::new();
        assert!(fs.read_directory(&root("/a"), true, &mut |name| {
            reported.push(name.to_string());
        }));
        reported.sort();
        assert_eq!(reported, vec!["b", "b/c.txt", "d.txt"]);
        assert!(reported.iter().all(|n| !n.starts_with('/') && n != "." && n != ".."));
    });
}

#[test]
fn replace_write_then_read_yields_latest_content() {
    for_each_backend(|fs, root| {
        let f = root("/f");
        assert!(fs.write(&f, &[0x01]));
        assert!(fs.write(&f, &[0x02, 0x03]));
        assert_eq!(fs.read(&f), Some(vec![0x02, 0x03]));
    });
}

#[test]
fn partial_read_returns_the_requested_window() {
    for_each_backend(|fs, root| {
        let p = root("/p");
        assert!(fs.write(&p, b"abcdef"));
        assert_eq!(fs.read_range(&p, 2, Some(3)), Some(b"cde".to_vec()));
    });
}

#[test]
fn recursive_create_directory_is_idempotent_and_builds_every_ancestor() {
    for_each_backend(|fs, root| {
        let target = root("/x/y/z");
        assert!(fs.create_directory(&target, true));
        assert!(fs.is_directory(&root("/x")));
        assert!(fs.is_directory(&root("/x/y")));
        assert!(fs.is_directory(&target));
        assert!(fs.create_directory(&target, true));
        assert!(fs.is_directory(&target));
    });
}

#[test]
fn recursive_remove_deletes_a_populated_subtree() {
    for_each_backend(|fs, root| {
        assert!(fs.create_directory(&root("/r/a"), true));
        assert!(fs.create_directory(&root("/r/b"), true));
        assert!(fs.write(&root("/r/b/c"), b""));

        assert!(fs.remove_directory(&root("/r"), true));
        assert!(!fs.exists(&root("/r")));
    });
}

#[test]
fn wrong_type_guard_leaves_the_existing_entry_untouched() {
    for_each_backend(|fs, root| {
        let d = root("/d");
        assert!(fs.create_directory(&d, false));
        assert!(!fs.create_file(&d));
        assert!(fs.is_directory(&d));
    });
}

#[test]
fn non_recursive_remove_fails_unless_empty() {
    for_each_backend(|fs, root| {
        assert!(fs.create_directory(&root("/r/a"), true));
        assert!(!fs.remove_directory(&root("/r"), false));
        assert!(fs.exists(&root("/r")));
    });
}

#[test]
fn out_of_range_read_fails() {
    for_each_backend(|fs, root| {
        let p = root("/p");
        assert!(fs.write(&p, b"abc"));
        assert_eq!(fs.read_range(&p, 0, Some(10)), None);
    });
}

#[test]
fn find_file_and_find_executable_search_a_path_list() {
    for_each_backend(|fs, root| {
        assert!(fs.create_directory(&root("/bin"), true));
        assert!(fs.write(&root("/bin/tool"), b""));

        let usr_bin = root("/usr/bin");
        let bin = root("/bin");
        assert_eq!(
            fs.find_file("tool", &[usr_bin.as_str(), bin.as_str()]),
            Some(root("/bin/tool"))
        );
        assert_eq!(fs.find_file("absent", &[bin.as_str()]), None);
    });
}

#[test]
fn universal_invariant_typed_means_exists() {
    for_each_backend(|fs, root| {
        assert!(fs.write(&root("/f"), b""));
        assert!(fs.create_directory(&root("/d"), false));

        assert!(fs.is_file(&root("/f")) && fs.exists(&root("/f")));
        assert!(fs.is_directory(&root("/d")) && fs.exists(&root("/d")));
    });
}

#[test]
fn memory_backend_enumerate_scenario_matches_the_walked_tree() {
    let fs = MemoryFs::with_entries(vec![Entry::directory(
        "a",
        vec![
            Entry::directory("b", vec![Entry::file("c.txt", b"hi".to_vec())]),
            Entry::file("d.txt", b"x".to_vec()),
        ],
    )]);

    let mut reported = Vec::new();
    assert!(fs.read_directory("/a", true, &mut |name| reported.push(name.to_string())));
    reported.sort();
    assert_eq!(reported, vec!["b", "b/c.txt", "d.txt"]);
}

#[test]
fn memory_backend_resolve_path_of_existing_normalized_path_is_itself() {
    let fs = MemoryFs::new();
    assert!(fs.create_directory("/a/b", true));
    assert_eq!(fs.resolve_path("/a/b"), "/a/b");
}

#[test]
fn memory_backend_is_link_free() {
    let fs = MemoryFs::new();
    assert!(!fs.write_symbolic_link("/link", "/anywhere"));
    assert_eq!(fs.file_type("/link"), None);
}

#[cfg(unix)]
#[test]
fn physical_backend_symlink_round_trip() {
    let fixture = PhysicalFixture::new();
    let real = fixture.path("real");
    std::fs::write(&real, b"x").unwrap();
    let link = fixture.path("link");

    let fs = &fixture.fs;
    assert!(fs.write_symbolic_link(&link, &real));
    assert_eq!(fs.file_type(&link), Some(FileType::SymbolicLink));
    assert_eq!(fs.read_symbolic_link(&link), Some(real.clone()));
    assert_eq!(
        std::fs::canonicalize(fs.resolve_path(&link)).unwrap(),
        std::fs::canonicalize(&real).unwrap()
    );
}

#[cfg(unix)]
#[test]
fn physical_backend_remove_symbolic_link_on_non_link_is_idempotent() {
    let fixture = PhysicalFixture::new();
    let path = fixture.path("f");
    std::fs::write(&path, b"x").unwrap();

    assert!(fixture.fs.remove_symbolic_link(&path));
    assert!(fixture.fs.is_file(&path));
}
