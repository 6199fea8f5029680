// votv-launcher: Voices of the Void mod installer and launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures_util::future::{self, BoxFuture};
use tempfile::TempDir;

use super::list::format_list;
use super::run::{Phase, run_attached, run_workflow};
use crate::config::Config;
use crate::error::Result;
use crate::game::{GameCommand, KillOutcome, LaunchedProcess, ProcessControl};
use crate::install::InstallOutcome;

/// Records every call; the game is listed for `running_polls` queries.
struct Recorder {
    calls: Mutex<Vec<String>>,
    running_polls: Mutex<u32>,
    exit_code: i32,
    exit_after: Duration,
}

impl Recorder {
    fn new(running_polls: u32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            running_polls: Mutex::new(running_polls),
            exit_code: 0,
            exit_after: Duration::ZERO,
        }
    }

    /// The launched game exits with `code` once `after` has passed.
    fn exiting_with(mut self, code: i32, after: Duration) -> Self {
        self.exit_code = code;
        self.exit_after = after;
        self
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }
}

impl ProcessControl for Recorder {
    fn kill<'a>(&'a self, image: &'a str) -> BoxFuture<'a, Result<KillOutcome>> {
        self.record(format!("kill {image}"));
        Box::pin(future::ready(Ok(KillOutcome::Killed)))
    }

    fn is_running<'a>(&'a self, image: &'a str) -> BoxFuture<'a, Result<bool>> {
        self.record(format!("query {image}"));
        let mut left = self.running_polls.lock().expect("polls lock");
        let running = *left > 0;
        *left = left.saturating_sub(1);
        Box::pin(future::ready(Ok(running)))
    }

    fn launch<'a>(&'a self, command: &'a GameCommand) -> BoxFuture<'a, Result<LaunchedProcess>> {
        self.record(format!("launch {command}"));
        let (code, after) = (self.exit_code, self.exit_after);
        let launched = LaunchedProcess {
            pid: Some(7),
            exit: Box::pin(async move {
                tokio::time::sleep(after).await;
                Ok::<_, anyhow::Error>(Some(code))
            }),
        };
        Box::pin(future::ready(Ok(launched)))
    }
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

fn slash(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

fn workspace(dry: bool) -> (TempDir, Config) {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let root = slash(temp.path());
    std::fs::create_dir_all(temp.path().join("packaged")).expect("create packaged dir");
    std::fs::write(
        temp.path().join("packaged/pakchunk5-WindowsNoEditor.pak"),
        b"foo",
    )
    .expect("write pak");

    let json = format!(
        r#"{{
            "shimloaderDir": "{root}/shim",
            "gameDir": "{root}/game",
            "packagedPaksDir": "{root}/packaged",
            "shimloaderPaksDir": "{root}/shim/pak",
            "mods": [[5, "Foo"], [9, "Bar"]],
            "launcher": {{ "poll_interval_ms": 5 }},
            "global": {{ "dry": {dry} }}
        }}"#
    );
    let config = Config::parse_json(&json).expect("config should parse");
    (temp, config)
}

#[tokio::test]
async fn test_workflow_runs_phases_in_order() {
    let (temp, config) = workspace(false);
    let control = Recorder::new(2);

    let report = run_workflow(&control, &config)
        .await
        .expect("workflow should succeed");

    assert_eq!(report.kill, Some(KillOutcome::Killed));
    assert_eq!(report.polls, 3);
    assert_eq!(report.installs[0].outcome, InstallOutcome::Copied { bytes: 3 });
    assert_eq!(report.installs[1].outcome, InstallOutcome::SourceMissing);
    assert_eq!(
        std::fs::read(temp.path().join("shim/pak/Foo/Foo.pak")).expect("installed pak"),
        b"foo"
    );

    let session = report.session.expect("game should be launched");
    assert_eq!(session.wait().await, Some(0));

    let root = slash(temp.path());
    let calls = control.calls();
    assert_eq!(calls.len(), 5);
    assert_eq!(calls[0], "kill VotV-Win64-Shipping.exe");
    assert!(calls[1..4].iter().all(|c| c == "query VotV-Win64-Shipping.exe"));
    assert_eq!(
        calls[4],
        format!(
            r#"launch "{root}/game/VotV.exe" --mod-dir "{root}/shim/mod" --pak-dir "{root}/shim/pak" --cfg-dir "{root}/shim/cfg""#
        )
    );
}

#[tokio::test]
async fn test_attached_run_logs_game_exit_code() {
    let (_temp, config) = workspace(false);
    assert!(config.launcher.stay_attached, "attached by default");
    let control = Recorder::new(0).exiting_with(7, Duration::from_millis(50));

    let logs = Captured::default();
    let sink = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || sink.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let code = run_attached(&control, &config)
        .await
        .expect("workflow should succeed");

    assert_eq!(code, Some(7));
    let text = logs.text();
    let exited = text
        .lines()
        .find(|line| line.contains("game exited"))
        .unwrap_or_else(|| panic!("no exit line in logs: {text}"));
    assert!(exited.contains("exit_code=7"), "line: {exited}");
}

#[tokio::test]
async fn test_detached_run_returns_after_launch() {
    let (_temp, mut config) = workspace(false);
    config.launcher.stay_attached = false;
    let control = Recorder::new(0).exiting_with(7, Duration::from_secs(3600));

    let code = tokio::time::timeout(Duration::from_secs(10), run_attached(&control, &config))
        .await
        .expect("detached run must not wait for the game")
        .expect("workflow should succeed");

    assert_eq!(code, None);
    assert!(control.calls().last().is_some_and(|c| c.starts_with("launch ")));
}

#[tokio::test]
async fn test_workflow_dry_run_touches_nothing() {
    let (temp, config) = workspace(true);
    let control = Recorder::new(2);

    let report = run_workflow(&control, &config)
        .await
        .expect("dry run should succeed");

    assert!(control.calls().is_empty());
    assert_eq!(report.kill, None);
    assert_eq!(report.polls, 0);
    assert!(report.session.is_none());
    assert_eq!(report.installs[0].outcome, InstallOutcome::Planned);
    assert_eq!(report.installs[1].outcome, InstallOutcome::SourceMissing);
    assert!(!temp.path().join("shim").exists());
}

#[test]
fn test_format_list() {
    let config = Config::parse_json(
        r#"{
            "gameDir": "G",
            "packagedPaksDir": "P",
            "shimloaderPaksDir": "S",
            "mods": [[5, "Foo"], [12, "Radio"]]
        }"#,
    )
    .expect("config should parse");

    insta::assert_snapshot!(format_list(&config).join("\n"), @r#"
    Foo    P/pakchunk5-WindowsNoEditor.pak -> S/Foo/Foo.pak
    Radio  P/pakchunk12-WindowsNoEditor.pak -> S/Radio/Radio.pak
    game: "G/VotV.exe"
    "#);
}

#[test]
fn test_format_list_without_mods() {
    let config = Config::parse_json(
        r#"{ "gameDir": "G", "packagedPaksDir": "P", "shimloaderPaksDir": "S" }"#,
    )
    .expect("config should parse");

    assert_eq!(
        format_list(&config),
        vec!["No mods configured".to_string(), r#"game: "G/VotV.exe""#.to_string()]
    );
}

#[test]
fn test_phase_display() {
    let phases = [
        Phase::Killing,
        Phase::Waiting,
        Phase::Installing,
        Phase::Launching,
    ];
    insta::assert_snapshot!(
        phases.map(|p| p.to_string()).join(" -> "),
        @"killing -> waiting -> installing -> launching"
    );
}
