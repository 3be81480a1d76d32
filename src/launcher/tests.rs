use std::sync::Arc;

use super::fake::{FixedTable, RecordingSpawner};
use super::*;
use crate::resolver::CommandKind;

fn xcode() -> (IdeDescriptor, ResolvedCommand) {
    (
        IdeDescriptor::builtin("Xcode"),
        ResolvedCommand {
            executable_path: "/Applications/Xcode.app".into(),
            is_absolute_path: true,
            kind: CommandKind::Bundle,
        },
    )
}

fn file_target() -> LaunchTarget {
    LaunchTarget::project("/p")
        .with_file("/p/Sources/App.swift")
        .at(Some(12), Some(5))
}

#[tokio::test(start_paused = true)]
async fn test_xcode_cold_start_waits_grace_period() {
    let (ide, resolved) = xcode();
    let plan = LaunchPlan::new(&ide, &resolved, &file_target(), Platform::MacOs, Readiness::default());
    let spawner = RecordingSpawner::default();
    let table = FixedTable::new(false);
    let probes = Arc::clone(&table.probes);
    let launcher = Launcher::new(Box::new(spawner.clone()), Box::new(table));

    let report = launcher.launch(&plan).await.unwrap();

    assert_eq!(report.delay, DEFAULT_GRACE);
    assert_eq!(
        report.states,
        [
            LaunchState::Idle,
            LaunchState::Launching,
            LaunchState::WaitingForReady,
            LaunchState::OpeningFile,
            LaunchState::Done,
        ]
    );
    assert_eq!(*probes.lock().unwrap(), ["Xcode"]);

    let spawned = spawner.spawned.lock().unwrap();
    assert_eq!(spawned.len(), 2);
    assert_eq!(spawned[0].0.program, "open");
    assert_eq!(spawned[1].0.program, "xed");
    assert!(spawned[1].1 - spawned[0].1 >= DEFAULT_GRACE);
}

#[tokio::test(start_paused = true)]
async fn test_xcode_already_running_skips_wait() {
    let (ide, resolved) = xcode();
    let plan = LaunchPlan::new(&ide, &resolved, &file_target(), Platform::MacOs, Readiness::default());
    let spawner = RecordingSpawner::default();
    let launcher = Launcher::new(Box::new(spawner.clone()), Box::new(FixedTable::new(true)));

    let report = launcher.launch(&plan).await.unwrap();

    assert_eq!(report.delay, Duration::ZERO);
    assert!(!report.states.contains(&LaunchState::WaitingForReady));
    let spawned = spawner.spawned.lock().unwrap();
    assert_eq!(spawned[1].1, spawned[0].1);
}

#[tokio::test(start_paused = true)]
async fn test_xcode_fixed_delay_ignores_process_table() {
    let (ide, resolved) = xcode();
    let delay = Duration::from_millis(1500);
    let plan = LaunchPlan::new(
        &ide,
        &resolved,
        &file_target(),
        Platform::MacOs,
        Readiness::FixedDelay(delay),
    );
    let table = FixedTable::new(true);
    let probes = Arc::clone(&table.probes);
    let launcher = Launcher::new(Box::new(RecordingSpawner::default()), Box::new(table));

    let report = launcher.launch(&plan).await.unwrap();
    assert_eq!(report.delay, delay);
    assert!(probes.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_xcode_project_failure_aborts_file_open() {
    let (ide, resolved) = xcode();
    let plan = LaunchPlan::new(&ide, &resolved, &file_target(), Platform::MacOs, Readiness::default());
    let spawner = RecordingSpawner::failing("open");
    let launcher = Launcher::new(Box::new(spawner.clone()), Box::new(FixedTable::new(false)));

    let failure = launcher.launch(&plan).await.unwrap_err();
    assert!(matches!(failure.error, LaunchError::ProcessSpawnFailure { .. }));
    assert!(failure.error.to_string().contains("No such file or directory"));
    assert_eq!(
        failure.states,
        [LaunchState::Idle, LaunchState::Launching, LaunchState::Failed]
    );
    assert_eq!(spawner.programs(), ["open"]);
}

#[tokio::test(start_paused = true)]
async fn test_xcode_without_file_is_single_step() {
    let (ide, resolved) = xcode();
    let target = LaunchTarget::project("/p");
    let plan = LaunchPlan::new(&ide, &resolved, &target, Platform::MacOs, Readiness::default());
    let spawner = RecordingSpawner::default();
    let table = FixedTable::new(false);
    let probes = Arc::clone(&table.probes);
    let launcher = Launcher::new(Box::new(spawner.clone()), Box::new(table));

    let report = launcher.launch(&plan).await.unwrap();
    assert_eq!(
        report.states,
        [LaunchState::Idle, LaunchState::Launching, LaunchState::Done]
    );
    assert_eq!(spawner.programs(), ["open"]);
    assert!(probes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_single_step_launch() {
    let ide = IdeDescriptor::builtin("GoLand");
    let resolved = ResolvedCommand {
        executable_path: "goland".into(),
        is_absolute_path: false,
        kind: CommandKind::Command,
    };
    let plan = LaunchPlan::new(&ide, &resolved, &file_target(), Platform::Linux, Readiness::default());
    assert_eq!(plan.invocations().len(), 1);

    let spawner = RecordingSpawner::default();
    let launcher = Launcher::new(Box::new(spawner.clone()), Box::new(FixedTable::new(false)));
    let report = launcher.launch(&plan).await.unwrap();

    assert_eq!(
        report.states,
        [LaunchState::Idle, LaunchState::Launching, LaunchState::Done]
    );
    assert_eq!(spawner.programs(), ["goland"]);
}

#[tokio::test]
async fn test_single_step_failure_is_reported() {
    let ide = IdeDescriptor::builtin("IDEA");
    let resolved = ResolvedCommand {
        executable_path: "/missing/idea".into(),
        is_absolute_path: true,
        kind: CommandKind::Script,
    };
    let plan = LaunchPlan::new(&ide, &resolved, &file_target(), Platform::Linux, Readiness::default());
    let launcher = Launcher::new(
        Box::new(RecordingSpawner::failing("/missing/idea")),
        Box::new(FixedTable::new(false)),
    );
    let failure = launcher.launch(&plan).await.unwrap_err();
    assert!(matches!(
        failure.error,
        LaunchError::ProcessSpawnFailure { ref program, .. } if program == "/missing/idea"
    ));
    assert_eq!(failure.states.last(), Some(&LaunchState::Failed));
}

#[tokio::test(start_paused = true)]
async fn test_xcode_file_failure_is_recorded_after_wait() {
    let (ide, resolved) = xcode();
    let plan = LaunchPlan::new(&ide, &resolved, &file_target(), Platform::MacOs, Readiness::default());
    let spawner = RecordingSpawner::failing("xed");
    let launcher = Launcher::new(Box::new(spawner.clone()), Box::new(FixedTable::new(false)));

    let failure = launcher.launch(&plan).await.unwrap_err();
    assert_eq!(
        failure.states,
        [
            LaunchState::Idle,
            LaunchState::Launching,
            LaunchState::WaitingForReady,
            LaunchState::OpeningFile,
            LaunchState::Failed,
        ]
    );
    assert_eq!(spawner.programs(), ["open", "xed"]);
}

#[tokio::test]
async fn test_windows_shell_launch_refuses_expandable_path() {
    let ide = IdeDescriptor::builtin("IDEA");
    let resolved = ResolvedCommand {
        executable_path: "idea".into(),
        is_absolute_path: false,
        kind: CommandKind::Command,
    };
    let target = LaunchTarget::project(r"C:\work\100%PATH%done").with_file(r"C:\work\a&b.rs");
    let plan = LaunchPlan::new(&ide, &resolved, &target, Platform::Windows, Readiness::default());
    let spawner = RecordingSpawner::default();
    let launcher = Launcher::new(Box::new(spawner.clone()), Box::new(FixedTable::new(false)));

    let failure = launcher.launch(&plan).await.unwrap_err();
    assert!(
        matches!(failure.error, LaunchError::UnsafeShellArgument { ref arg } if arg == r"C:\work\100%PATH%done"),
        "{:?}",
        failure.error
    );
    assert_eq!(failure.states, [LaunchState::Idle, LaunchState::Failed]);
    assert!(spawner.programs().is_empty());
}

#[test]
fn test_xcode_plan_only_on_macos() {
    let (ide, resolved) = xcode();
    let plan = LaunchPlan::new(&ide, &resolved, &file_target(), Platform::Linux, Readiness::default());
    assert!(matches!(plan, LaunchPlan::Single(_)));

    let plan = LaunchPlan::new(&ide, &resolved, &file_target(), Platform::MacOs, Readiness::default());
    let LaunchPlan::Xcode(seq) = plan else {
        panic!("expected an Xcode sequence");
    };
    assert_eq!(seq.app_name(), "Xcode");
    assert_eq!(seq.invocations().len(), 2);
}

#[cfg(unix)]
#[tokio::test]
async fn test_system_spawner_reports_missing_program() {
    let inv = invocation::build(
        &ResolvedCommand {
            executable_path: "/nonexistent/editor-jumper-test-binary".into(),
            is_absolute_path: true,
            kind: CommandKind::Script,
        },
        &LaunchTarget::project("/tmp"),
        Platform::Linux,
    );
    let err = SystemSpawner.spawn(&inv).await.unwrap_err();
    assert!(matches!(err, LaunchError::ProcessSpawnFailure { .. }), "{err:?}");
}

#[cfg(unix)]
#[tokio::test]
async fn test_system_spawner_captures_stderr_of_prompt_exit() {
    let inv = Invocation {
        program: "sh".into(),
        args: vec![
            invocation::Arg::Plain("-c".into()),
            invocation::Arg::Plain("echo noise; echo broken >&2; exit 3".into()),
        ],
        shell: false,
        exits_promptly: true,
    };
    let err = SystemSpawner.spawn(&inv).await.unwrap_err();
    let LaunchError::ProcessFailed { status, stderr, .. } = err else {
        panic!("expected ProcessFailed, got {err:?}");
    };
    assert_eq!(status.code(), Some(3));
    assert_eq!(stderr, "broken");
}
