use crr::{copy_rename_replace, SubstMap};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;
use walkdir::WalkDir;

fn build_tree(root: &Path) {
    let layout = [
        ("foo.txt", "foo content with foo twice"),
        ("sub_foo/nested.txt", "nothing to change"),
        ("sub_foo/deep_foo/foo_file.cfg", "key=foo"),
        ("plain/readme.md", "# foo docs"),
    ];
    for (rel, content) in layout {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(&p, content).unwrap();
    }
}

fn collect_relative(root: &Path) -> HashSet<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

#[test]
fn tree_names_and_contents_rewritten() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("src_tree");
    let dest = td.path().join("dest_tree");
    build_tree(&src);

    let mut map = SubstMap::new();
    map.set("foo", "bar")?;
    copy_rename_replace(&src, &dest, &map)?;

    let got = collect_relative(&dest);
    let want: HashSet<PathBuf> = [
        "bar.txt",
        "sub_bar",
        "sub_bar/nested.txt",
        "sub_bar/deep_bar",
        "sub_bar/deep_bar/bar_file.cfg",
        "plain",
        "plain/readme.md",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    assert_eq!(got, want);

    assert_eq!(
        fs::read_to_string(dest.join("bar.txt"))?,
        "bar content with bar twice"
    );
    assert_eq!(
        fs::read_to_string(dest.join("sub_bar/deep_bar/bar_file.cfg"))?,
        "key=bar"
    );
    assert_eq!(
        fs::read_to_string(dest.join("sub_bar/nested.txt"))?,
        "nothing to change"
    );

    // Source tree is left exactly as it was.
    assert!(src.join("foo.txt").exists());
    assert!(src.join("sub_foo/deep_foo/foo_file.cfg").exists());
    Ok(())
}

#[test]
fn rules_apply_in_registration_order_across_tree() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("in");
    let dest = td.path().join("out");
    fs::create_dir_all(&src)?;
    fs::write(src.join("one.txt"), "alpha")?;

    let mut map = SubstMap::new();
    map.set("alpha", "beta")?;
    map.set("beta", "gamma")?;
    copy_rename_replace(&src, &dest, &map)?;

    // Later rules see the output of earlier rules.
    assert_eq!(fs::read_to_string(dest.join("one.txt"))?, "gamma");
    Ok(())
}

#[test]
fn empty_source_directory_copies_to_empty_destination() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("empty_src");
    let dest = td.path().join("empty_dest");
    fs::create_dir_all(&src)?;

    copy_rename_replace(&src, &dest, &SubstMap::new())?;
    assert!(dest.is_dir());
    assert!(collect_relative(&dest).is_empty());
    Ok(())
}
