use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct RecordingOps {
    calls: Mutex<Vec<&'static str>>,
    fail_setup: bool,
}

impl TerminalOps for RecordingOps {
    fn setup(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        if self.fail_setup {
            return Err(std::io::Error::other("setup failed"));
        }
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn guard_sets_up_on_creation_and_restores_on_drop() {
    let ops = Arc::new(RecordingOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        assert_eq!(&*ops.calls.lock().unwrap(), &["setup"]);
    }

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn restorer_runs_restore_exactly_once() {
    let ops = Arc::new(RecordingOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let restorer = guard.restorer();

    restorer.restore().unwrap();
    restorer.restore().unwrap();
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn suspend_and_resume_leave_final_restore_intact() {
    let ops = Arc::new(RecordingOps::default());
    {
        let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
        guard.suspend().unwrap();
        guard.resume().unwrap();
    }

    assert_eq!(
        &*ops.calls.lock().unwrap(),
        &["setup", "restore", "setup", "restore"]
    );
}

#[test]
fn failed_setup_surfaces_and_skips_restore() {
    let ops = Arc::new(RecordingOps {
        calls: Mutex::new(Vec::new()),
        fail_setup: true,
    });

    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(&*ops.calls.lock().unwrap(), &["setup"]);
}
