use crr::{copy_rename_replace, CrrError, SubstMap};
use std::fs;
use tempfile::tempdir;

/// A failing pathname check must abort before any destination mutation.
#[test]
fn invalid_derived_name_leaves_destination_untouched() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("tree");
    let dest = td.path().join("copy");
    fs::create_dir_all(src.join("ok_dir"))?;
    fs::write(src.join("ok_dir/fine.txt"), "fine")?;
    // This file's name becomes empty after substitution.
    fs::write(src.join("doomed"), "content")?;

    let mut map = SubstMap::new();
    map.set("doomed", "")?;
    let err = copy_rename_replace(&src, &dest, &map).unwrap_err();

    assert!(matches!(err, CrrError::InvalidName(_)));
    assert_eq!(err.exit_code(), 9);
    // Zero files/directories created, including the destination root.
    assert!(!dest.exists());
    Ok(())
}

#[test]
fn reserved_derived_name_aborts_whole_run() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("tree");
    let dest = td.path().join("copy");
    fs::create_dir_all(&src)?;
    fs::write(src.join("a.txt"), "a")?;
    fs::write(src.join("control"), "c")?;

    let mut map = SubstMap::new();
    map.set("control", "con")?;
    let err = copy_rename_replace(&src, &dest, &map).unwrap_err();

    assert!(matches!(err, CrrError::InvalidName(ref n) if n == "con"));
    assert!(!dest.exists());
    Ok(())
}

#[test]
fn invalid_destination_title_checked_before_filesystem() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("tree");
    fs::create_dir_all(&src)?;
    fs::write(src.join("x.txt"), "x")?;
    // The destination's own final name ends with '$' after substitution.
    let dest = td.path().join("money");

    let mut map = SubstMap::new();
    map.set("money", "cash$")?;
    let err = copy_rename_replace(&src, &dest, &map).unwrap_err();

    assert!(matches!(err, CrrError::InvalidName(ref n) if n == "cash$"));
    assert!(!dest.exists());
    assert!(!td.path().join("cash$").exists());
    Ok(())
}

/// Mid-run file failures stop the traversal but keep what was already copied.
#[test]
fn first_file_failure_aborts_remaining_entries() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("tree");
    let dest = td.path().join("copy");
    fs::create_dir_all(&src)?;
    fs::write(src.join("a_first.txt"), "first")?;
    fs::write(src.join("b_unreadable.txt"), "secret")?;
    fs::write(src.join("c_last.txt"), "last")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(
            src.join("b_unreadable.txt"),
            fs::Permissions::from_mode(0o000),
        )?;
        if fs::read(src.join("b_unreadable.txt")).is_ok() {
            // Privileged user ignores file modes; nothing to exercise here.
            return Ok(());
        }

        let err = copy_rename_replace(&src, &dest, &SubstMap::new()).unwrap_err();
        assert!(matches!(err, CrrError::CantRead(_)));
        assert_eq!(err.exit_code(), 1);

        // Entries before the failure remain; entries after were never reached.
        assert!(dest.join("a_first.txt").exists());
        assert!(!dest.join("b_unreadable.txt").exists());
        assert!(!dest.join("c_last.txt").exists());

        // Restore so tempdir cleanup works everywhere.
        fs::set_permissions(
            src.join("b_unreadable.txt"),
            fs::Permissions::from_mode(0o644),
        )?;
    }
    Ok(())
}
