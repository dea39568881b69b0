use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::env;
use std::sync::Mutex;

use vault_fallback::{vault_fallback, ProjectRoot, VaultError, VaultResolver};

static TEST_CWD_LOCK: Mutex<()> = Mutex::new(());

fn project() -> Result<(TempDir, VaultResolver), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let resolver = VaultResolver::new(ProjectRoot::new(temp.path())?);
    Ok((temp, resolver))
}

#[test]
fn plain_only_resolves_to_plain() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, resolver) = project()?;
    temp.child("group_vars/all.yml").write_str("user: deploy\n")?;

    let got = resolver.resolve("group_vars/all.yml")?;
    assert_eq!(got, temp.child("group_vars/all.yml").path());
    Ok(())
}

#[test]
fn vault_only_resolves_to_vault() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, resolver) = project()?;
    temp.child("group_vars/all.vault.yml").write_str("$ANSIBLE_VAULT;1.1;AES256\n")?;

    let got = resolver.resolve("group_vars/all.yml")?;
    assert_eq!(got, temp.child("group_vars/all.vault.yml").path());
    Ok(())
}

#[test]
fn plain_is_preferred_over_vault() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, resolver) = project()?;
    temp.child("a.b.c").write_str("plain")?;
    temp.child("a.b.vault.c").write_str("$ANSIBLE_VAULT")?;

    for _ in 0..3 {
        assert_eq!(resolver.resolve("a.b.c")?, temp.child("a.b.c").path());
    }
    Ok(())
}

#[test]
fn neither_exists_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, resolver) = project()?;

    let err = resolver.resolve("secrets.yml").unwrap_err();
    match &err {
        VaultError::NotFound { path, root } => {
            assert_eq!(path, "secrets.yml");
            assert_eq!(root, temp.path());
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        format!(
            "No decrypted or encrypted version of: secrets.yml found in {}.",
            temp.path().display()
        )
    );
    Ok(())
}

#[test]
fn candidate_names_follow_layout() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, resolver) = project()?;

    let c = resolver.candidates("secrets.yml");
    assert_eq!(c.plain, temp.path().join("secrets.yml"));
    assert_eq!(c.vault, temp.path().join("secrets.vault.yml"));

    let c = resolver.candidates("id_rsa");
    assert_eq!(c.plain, temp.path().join("id_rsa"));
    assert_eq!(c.vault, temp.path().join("id_rsa.vault"));

    assert_eq!(resolver.candidates("a.b.c").vault, temp.path().join("a.b.vault.c"));
    Ok(())
}

#[test]
fn path_through_a_file_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, resolver) = project()?;
    // A regular file used as a directory makes `stat` fail with ENOTDIR.
    temp.child("plain.txt").write_str("x")?;

    let err = resolver.resolve("plain.txt/inner.yml").unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlink_loop_falls_through_to_vault() -> Result<(), Box<dyn std::error::Error>> {
    let (temp, resolver) = project()?;
    let plain = temp.child("s.yml");
    std::os::unix::fs::symlink(plain.path(), plain.path())?;
    temp.child("s.vault.yml").write_str("$ANSIBLE_VAULT")?;

    let got = resolver.resolve("s.yml")?;
    assert_eq!(got, temp.child("s.vault.yml").path());
    Ok(())
}

#[test]
fn resolution_ignores_current_dir() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = TEST_CWD_LOCK.lock().unwrap();

    let (temp, resolver) = project()?;
    temp.child("hosts.vault.ini").write_str("$ANSIBLE_VAULT")?;
    let elsewhere = TempDir::new()?;
    elsewhere.child("hosts.ini").write_str("decoy")?;

    let orig = env::current_dir()?;
    env::set_current_dir(elsewhere.path())?;
    let got = resolver.resolve("hosts.ini");
    env::set_current_dir(orig)?;

    assert_eq!(got?, temp.child("hosts.vault.ini").path());
    Ok(())
}

#[test]
fn relative_root_is_fixed_at_construction() -> Result<(), Box<dyn std::error::Error>> {
    let _guard = TEST_CWD_LOCK.lock().unwrap();

    let temp = TempDir::new()?;
    temp.child("infra/site.yml").write_str("- hosts: all\n")?;

    let orig = env::current_dir()?;
    env::set_current_dir(temp.path())?;
    let root = ProjectRoot::new("infra");
    env::set_current_dir(&orig)?;
    let root = root?;

    let got = vault_fallback(&root, "site.yml")?;
    assert_eq!(got, temp.child("infra/site.yml").path());
    Ok(())
}
