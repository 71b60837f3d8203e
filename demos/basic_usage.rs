//! Exercises both shipped backends through the same `Filesystem` trait
//! object, showing that code written against the contract doesn't care
//! which one it's handed.
//!
//! Run with: `cargo run --example basic_usage`

use buildfs::{Entry, FileFinder, Filesystem, MemoryFs};

fn populate_and_report(fs: &dyn Filesystem, root: &str) {
    let readme = format!("{root}/README.md");
    let src = format!("{root}/src");
    let lib_rs = format!("{src}/lib.rs");

    assert!(fs.create_directory(&src, true));
    assert!(fs.write(&readme, b"# demo\n"));
    assert!(fs.write(&lib_rs, b"pub fn hello() {}\n"));

    let mut entries = Vec::new();
    fs.read_directory(root, true, &mut |name| entries.push(name.to_string()));
    entries.sort();
    println!("{root}: {entries:?}");

    let nonexistent = format!("{root}/nonexistent");
    assert_eq!(
        fs.find_file("lib.rs", &[nonexistent.as_str(), src.as_str()]),
        Some(lib_rs.clone())
    );
}

fn main() {
    tracing_subscriber::fmt::init();

    let memory = MemoryFs::with_entries(vec![Entry::directory("project", Vec::new())]);
    populate_and_report(&memory, "/project");

    #[cfg(unix)]
    {
        use buildfs::PhysicalFs;

        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = dir.path().join("project");
        std::fs::create_dir(&root).unwrap();
        let root = root.to_str().unwrap();

        let physical = PhysicalFs::new();
        populate_and_report(&physical, root);
    }
}
