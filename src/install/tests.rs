// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::TempDir;

use super::{InstallOutcome, ModEntry, install_all, install_mod, mod_entries};
use crate::config::Config;
use crate::error::{InstallError, LauncherError};

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn entry(root: &Path, chunk: u32, name: &str) -> ModEntry {
    ModEntry::new(
        name,
        root.join("packaged")
            .join(format!("pakchunk{chunk}-WindowsNoEditor.pak")),
        root.join("shim").join(name).join(format!("{name}.pak")),
    )
}

fn write_source(entry: &ModEntry, contents: &[u8]) {
    std::fs::create_dir_all(entry.source().parent().expect("source has a parent"))
        .expect("create packaged dir");
    std::fs::write(entry.source(), contents).expect("write source pak");
}

/// Log sink shared with a `tracing` fmt subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log lock").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log lock")).into_owned()
    }
}

#[test]
fn test_mod_entries_follow_mod_list_order() {
    let config = Config::parse_json(
        r#"{
            "gameDir": "G",
            "packagedPaksDir": "P",
            "shimloaderPaksDir": "S",
            "mods": [[5, "Foo"], [9, "Bar"]]
        }"#,
    )
    .expect("config should parse");

    let entries = mod_entries(&config);

    assert_eq!(
        entries,
        vec![
            ModEntry::new(
                "Foo",
                PathBuf::from("P/pakchunk5-WindowsNoEditor.pak"),
                PathBuf::from("S/Foo/Foo.pak"),
            ),
            ModEntry::new(
                "Bar",
                PathBuf::from("P/pakchunk9-WindowsNoEditor.pak"),
                PathBuf::from("S/Bar/Bar.pak"),
            ),
        ]
    );
}

#[tokio::test]
async fn test_install_copies_bytes_exactly() {
    let temp = temp_dir();
    let foo = entry(temp.path(), 5, "Foo");
    let payload: Vec<u8> = (0..=255u8).rev().cycle().take(70_000).collect();
    write_source(&foo, &payload);

    let outcome = install_mod(&foo, false).await.expect("install should not fail");

    assert_eq!(
        outcome,
        InstallOutcome::Copied {
            bytes: payload.len() as u64
        }
    );
    assert_eq!(std::fs::read(foo.destination()).expect("read destination"), payload);
}

#[tokio::test]
async fn test_install_overwrites_previous_build() {
    let temp = temp_dir();
    let foo = entry(temp.path(), 5, "Foo");
    write_source(&foo, b"new");
    std::fs::create_dir_all(foo.destination().parent().expect("parent")).expect("create dir");
    std::fs::write(foo.destination(), b"old build, longer than the new one").expect("seed");

    install_mod(&foo, false).await.expect("install should not fail");

    assert_eq!(std::fs::read(foo.destination()).expect("read destination"), b"new");
}

#[tokio::test]
async fn test_missing_source_is_skipped_and_batch_continues() {
    let temp = temp_dir();
    let missing = entry(temp.path(), 5, "Foo");
    let present = entry(temp.path(), 9, "Bar");
    write_source(&present, b"bar pak");

    let logs = Captured::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let reports = install_all(&[missing.clone(), present.clone()], false)
        .await
        .expect("missing sources are not fatal");

    assert_eq!(reports[0].outcome, InstallOutcome::SourceMissing);
    assert_eq!(reports[1].outcome, InstallOutcome::Copied { bytes: 7 });
    assert!(!missing.destination().exists());
    assert!(
        !missing
            .destination()
            .parent()
            .expect("parent")
            .exists(),
        "no directory is created for a missing source"
    );
    assert_eq!(std::fs::read(present.destination()).expect("read"), b"bar pak");

    let text = logs.text();
    assert_eq!(text.matches("source not found").count(), 1, "logs: {text}");
    assert!(text.contains(&missing.source().display().to_string()));
}

#[tokio::test]
async fn test_copy_failure_is_recorded() {
    let temp = temp_dir();
    let broken = entry(temp.path(), 5, "Foo");
    let ok = entry(temp.path(), 9, "Bar");
    // A directory where the pak should be: exists, but cannot be read as a file.
    std::fs::create_dir_all(broken.source()).expect("create dir source");
    write_source(&ok, b"ok");

    let reports = install_all(&[broken, ok], false)
        .await
        .expect("copy failures are not fatal");

    match &reports[0].outcome {
        InstallOutcome::CopyFailed { reason } => {
            assert!(reason.starts_with("failed to copy"), "reason: {reason}");
            assert!(reason.contains("pakchunk5-WindowsNoEditor.pak"));
            assert!(reason.contains("Foo.pak"));
        }
        other => panic!("expected CopyFailed, got {other:?}"),
    }
    assert_eq!(reports[1].outcome, InstallOutcome::Copied { bytes: 2 });
}

#[tokio::test]
async fn test_directory_creation_failure_is_fatal() {
    let temp = temp_dir();
    let foo = entry(temp.path(), 5, "Foo");
    write_source(&foo, b"foo");
    // The shimloader pak root is a file, so `<root>/Foo/` cannot be created.
    std::fs::write(temp.path().join("shim"), b"not a directory").expect("seed file");

    let err = install_all(&[foo], false)
        .await
        .expect_err("directory creation failure propagates");

    assert!(matches!(
        err,
        LauncherError::Install(ref inner) if matches!(**inner, InstallError::CreateDir { .. })
    ));
}

#[tokio::test]
async fn test_dry_run_plans_without_copying() {
    let temp = temp_dir();
    let foo = entry(temp.path(), 5, "Foo");
    let missing = entry(temp.path(), 9, "Bar");
    write_source(&foo, b"foo");

    let reports = install_all(&[foo.clone(), missing], true)
        .await
        .expect("dry run should not fail");

    insta::assert_debug_snapshot!(
        reports.iter().map(|r| r.outcome.to_string()).collect::<Vec<_>>(),
        @r#"
    [
        "planned",
        "source missing",
    ]
    "#
    );
    assert!(!foo.destination().exists());
}
