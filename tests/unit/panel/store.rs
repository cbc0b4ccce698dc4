use super::*;
use crate::config::Settings;
use crate::fs::FileKind;
use crate::tree::{Origin, TreeNode};
use std::path::PathBuf;

fn test_settings() -> Settings {
    Settings {
        www_path: Some("/srv".to_string()),
        www_project_path: Some("/proj".to_string()),
        ..Default::default()
    }
}

fn configured_store() -> Store {
    let config = ProjectionConfig::from_settings(&test_settings());
    Store::new(PanelState::new(config))
}

fn dir_node(path: &str, depth: u16) -> TreeNode {
    TreeNode {
        location: PathBuf::from(path),
        kind: FileKind::Directory,
        depth,
        label: None,
        origin: Origin::Project,
    }
}

fn file_node(path: &str, depth: u16) -> TreeNode {
    TreeNode {
        location: PathBuf::from(path),
        kind: FileKind::File,
        depth,
        label: None,
        origin: Origin::Project,
    }
}

fn picker_entry(name: &str, is_dir: bool) -> crate::runtime::PickerEntry {
    crate::runtime::PickerEntry {
        name: name.to_string(),
        is_dir,
    }
}

/// Store with projected rows and the row at `selected` under the cursor.
fn store_with_rows(rows: Vec<TreeNode>, selected: usize) -> Store {
    let mut store = configured_store();
    let _ = store.dispatch(Action::TreeProjected { rows });
    store.state.explorer.selected = Some(selected);
    store
}

#[test]
fn unconfigured_commands_nudge_at_settings() {
    let mut store = Store::new(PanelState::new(None));

    let result = store.dispatch(Action::RunCommand(Command::Refresh));
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert_eq!(
        store.state.ui.status.as_deref(),
        Some("Set wwwPath and wwwProjectPath in settings.json")
    );

    // The hint is already showing; repeating it is not a change.
    let result = store.dispatch(Action::RunCommand(Command::CreateFile));
    assert!(!result.state_changed);

    // Quit must still work without configured roots.
    let result = store.dispatch(Action::RunCommand(Command::Quit));
    assert!(result.state_changed);
    assert!(store.state.ui.should_quit);
}

#[test]
fn quit_sets_the_flag() {
    let mut store = configured_store();
    let result = store.dispatch(Action::RunCommand(Command::Quit));
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert!(store.state.ui.should_quit);
}

#[test]
fn refresh_rereads_settings_then_projects() {
    let mut store = configured_store();
    let result = store.dispatch(Action::RunCommand(Command::Refresh));
    assert_eq!(
        result.effects,
        vec![Effect::ReloadSettings, Effect::ProjectTree]
    );
    assert!(!result.state_changed);
}

#[test]
fn selection_commands_ignore_an_empty_tree() {
    let mut store = configured_store();
    for command in [
        Command::OpenFile,
        Command::CreateFile,
        Command::CreateFolder,
        Command::Rename,
        Command::Remove,
        Command::ImportFile,
    ] {
        let result = store.dispatch(Action::RunCommand(command));
        assert!(result.effects.is_empty(), "{:?} produced effects", command);
        assert!(!result.state_changed, "{:?} changed state", command);
    }
}

#[test]
fn click_and_scroll_actions_route_to_the_explorer() {
    let rows = vec![
        dir_node("/proj/njwap/src/html/cat1", 0),
        dir_node("/proj/njwap/src/html/cat1/sub", 1),
        file_node("/proj/njwap/src/html/cat1/page.html", 2),
    ];
    let mut store = store_with_rows(rows, 0);

    let result = store.dispatch(Action::ExplorerClickRow { row: 2 });
    assert!(result.state_changed);
    assert!(result.effects.is_empty());
    assert_eq!(store.state.explorer.selected, Some(2));

    // A click past the listing is dropped.
    let result = store.dispatch(Action::ExplorerClickRow { row: 99 });
    assert!(!result.state_changed);
    assert_eq!(store.state.explorer.selected, Some(2));

    // Three rows all fit in the default window, so the wheel has nothing
    // to scroll.
    let result = store.dispatch(Action::ExplorerScroll { delta: 3 });
    assert!(!result.state_changed);
    assert_eq!(store.state.explorer.scroll_offset, 0);
}

#[test]
fn open_file_is_gated_to_plain_files() {
    let rows = vec![
        dir_node("/proj/njwap/src/html/cat1", 0),
        file_node("/proj/njwap/src/html/cat1/page.html", 2),
    ];
    let mut store = store_with_rows(rows.clone(), 0);
    let result = store.dispatch(Action::RunCommand(Command::OpenFile));
    assert!(result.effects.is_empty());

    let mut store = store_with_rows(rows, 1);
    let result = store.dispatch(Action::RunCommand(Command::OpenFile));
    assert_eq!(
        result.effects,
        vec![Effect::OpenFile(PathBuf::from(
            "/proj/njwap/src/html/cat1/page.html"
        ))]
    );
    assert!(!result.state_changed);
}

#[test]
fn create_file_opens_dialog_and_expands_target() {
    let shadow = dir_node("/proj/njwap/src/cdn_js/cat1", 1);
    let key = shadow.key();
    let mut store = store_with_rows(vec![shadow], 0);

    let result = store.dispatch(Action::RunCommand(Command::CreateFile));
    assert_eq!(result.effects, vec![Effect::ProjectTree]);
    assert!(result.state_changed);
    assert!(store.state.explorer.expanded.contains(&key));

    let dialog = &store.state.ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.title, "New File in cdn_js/cat1");
    assert_eq!(
        dialog.kind,
        Some(InputDialogKind::NewFile {
            parent_dir: PathBuf::from("/proj/njwap/src/cdn_js/cat1"),
        })
    );
}

#[test]
fn create_folder_from_file_targets_containing_dir() {
    let rows = vec![file_node("/proj/njwap/src/cdn_js/cat1/app.js", 2)];
    let mut store = store_with_rows(rows, 0);

    let result = store.dispatch(Action::RunCommand(Command::CreateFolder));
    // A file row is not expandable, so no eager reprojection.
    assert!(result.effects.is_empty());

    let dialog = &store.state.ui.input_dialog;
    assert_eq!(dialog.title, "New Folder in cdn_js/cat1");
    assert_eq!(
        dialog.kind,
        Some(InputDialogKind::NewFolder {
            parent_dir: PathBuf::from("/proj/njwap/src/cdn_js/cat1"),
        })
    );
}

#[test]
fn rename_preselects_the_stem() {
    let rows = vec![file_node("/proj/njwap/src/html/cat1/page.html", 2)];
    let mut store = store_with_rows(rows, 0);

    let result = store.dispatch(Action::RunCommand(Command::Rename));
    assert!(result.effects.is_empty());
    assert!(result.state_changed);

    let dialog = &store.state.ui.input_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.title, "Rename html/cat1/page.html");
    assert_eq!(dialog.value, "page.html");
    assert_eq!(dialog.cursor, "page.html".len());
    assert_eq!(dialog.selection, Some((0, 4)));
}

#[test]
fn rename_selects_whole_name_for_dirs_and_dotfiles() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1/widgets/deep", 3)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::Rename));
    assert_eq!(store.state.ui.input_dialog.selection, Some((0, 4)));
    assert_eq!(store.state.ui.input_dialog.value, "deep");

    let rows = vec![file_node("/proj/njwap/src/cdn_js/cat1/.env", 2)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::Rename));
    assert_eq!(store.state.ui.input_dialog.selection, Some((0, 4)));
}

#[test]
fn rename_blocked_on_fixed_tree_levels() {
    for depth in [0, 1, 2] {
        let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", depth)];
        let mut store = store_with_rows(rows, 0);
        let result = store.dispatch(Action::RunCommand(Command::Rename));
        assert!(result.effects.is_empty());
        assert!(!store.state.ui.input_dialog.visible, "depth {}", depth);
    }
}

#[test]
fn remove_asks_for_confirmation_first() {
    let rows = vec![file_node("/proj/njwap/src/html/cat1/page.html", 2)];
    let mut store = store_with_rows(rows, 0);

    let result = store.dispatch(Action::RunCommand(Command::Remove));
    assert!(result.effects.is_empty());
    assert!(result.state_changed);

    let dialog = &store.state.ui.confirm_dialog;
    assert!(dialog.visible);
    assert_eq!(dialog.message, "Delete 'page.html'?");
    assert_eq!(
        dialog.on_confirm,
        Some(PendingAction::DeletePath {
            path: PathBuf::from("/proj/njwap/src/html/cat1/page.html"),
        })
    );

    let result = store.dispatch(Action::ConfirmDialogAccept);
    assert_eq!(
        result.effects,
        vec![Effect::DeletePath(PathBuf::from(
            "/proj/njwap/src/html/cat1/page.html"
        ))]
    );
    assert!(!store.state.ui.confirm_dialog.visible);
}

#[test]
fn confirm_cancel_drops_the_pending_delete() {
    let rows = vec![file_node("/proj/njwap/src/html/cat1/page.html", 2)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::Remove));

    let result = store.dispatch(Action::ConfirmDialogCancel);
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert!(!store.state.ui.confirm_dialog.visible);
    assert_eq!(store.state.ui.confirm_dialog.on_confirm, None);

    // Accepting a dialog that is no longer there is inert.
    let result = store.dispatch(Action::ConfirmDialogAccept);
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);
}

#[test]
fn remove_blocked_on_fixed_tree_levels() {
    for depth in [0, 1, 2] {
        let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", depth)];
        let mut store = store_with_rows(rows, 0);
        let result = store.dispatch(Action::RunCommand(Command::Remove));
        assert!(result.effects.is_empty());
        assert!(!store.state.ui.confirm_dialog.visible, "depth {}", depth);
    }
}

#[test]
fn input_dialog_accept_builds_the_create_effect() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::CreateFile));

    for ch in "app.js".chars() {
        let _ = store.dispatch(Action::InputDialogAppend(ch));
    }
    let result = store.dispatch(Action::InputDialogAccept);
    assert_eq!(
        result.effects,
        vec![Effect::CreateFile(PathBuf::from(
            "/proj/njwap/src/cdn_js/cat1/app.js"
        ))]
    );
    assert!(!store.state.ui.input_dialog.visible);
}

#[test]
fn input_dialog_empty_submit_cancels() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::CreateFile));

    let _ = store.dispatch(Action::InputDialogAppend(' '));
    let result = store.dispatch(Action::InputDialogAccept);
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert!(!store.state.ui.input_dialog.visible);
}

#[test]
fn input_dialog_rejects_path_separators() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::CreateFile));

    for ch in "a/b".chars() {
        let _ = store.dispatch(Action::InputDialogAppend(ch));
    }
    let result = store.dispatch(Action::InputDialogAccept);
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert!(store.state.ui.input_dialog.visible);
    assert_eq!(store.state.ui.input_dialog.error.as_deref(), Some("Invalid name"));

    // The same rejection twice does not count as a change.
    let result = store.dispatch(Action::InputDialogAccept);
    assert!(!result.state_changed);

    // Editing clears the error.
    let _ = store.dispatch(Action::InputDialogBackspace);
    assert_eq!(store.state.ui.input_dialog.error, None);
}

#[test]
fn input_dialog_rejects_dot_names() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::CreateFolder));

    let _ = store.dispatch(Action::InputDialogAppend('.'));
    let _ = store.dispatch(Action::InputDialogAppend('.'));
    let result = store.dispatch(Action::InputDialogAccept);
    assert!(result.effects.is_empty());
    assert_eq!(store.state.ui.input_dialog.error.as_deref(), Some("Invalid name"));
}

#[test]
fn typing_replaces_the_rename_selection() {
    let rows = vec![file_node("/proj/njwap/src/cdn_js/cat1/a.js", 2)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::Rename));
    assert_eq!(store.state.ui.input_dialog.selection, Some((0, 1)));

    let _ = store.dispatch(Action::InputDialogAppend('b'));
    assert_eq!(store.state.ui.input_dialog.value, "b.js");
    assert_eq!(store.state.ui.input_dialog.cursor, 1);

    let result = store.dispatch(Action::InputDialogAccept);
    assert_eq!(
        result.effects,
        vec![Effect::RenamePath {
            from: PathBuf::from("/proj/njwap/src/cdn_js/cat1/a.js"),
            to: PathBuf::from("/proj/njwap/src/cdn_js/cat1/b.js"),
        }]
    );
}

#[test]
fn rename_accept_with_unchanged_name_is_silent() {
    let rows = vec![file_node("/proj/njwap/src/cdn_js/cat1/a.js", 2)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::Rename));

    let result = store.dispatch(Action::InputDialogAccept);
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert!(!store.state.ui.input_dialog.visible);
}

#[test]
fn cursor_keys_collapse_the_selection() {
    let rows = vec![file_node("/proj/njwap/src/cdn_js/cat1/a.js", 2)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::Rename));

    let result = store.dispatch(Action::InputDialogCursorLeft);
    assert!(result.state_changed);
    assert_eq!(store.state.ui.input_dialog.selection, None);
    assert_eq!(store.state.ui.input_dialog.cursor, 0);

    let result = store.dispatch(Action::InputDialogCursorLeft);
    assert!(!result.state_changed);
}

#[test]
fn context_menu_entries_for_a_file() {
    let rows = vec![file_node("/proj/njwap/src/html/cat1/page.html", 2)];
    let mut store = store_with_rows(rows, 0);

    let result = store.dispatch(Action::ContextMenuOpen { anchor: (3, 4) });
    assert!(result.state_changed);

    let menu = &store.state.ui.context_menu;
    assert!(menu.visible);
    assert_eq!(menu.anchor, (3, 4));
    assert_eq!(menu.selected, 0);
    let labels: Vec<&str> = menu.items.iter().map(|item| item.label()).collect();
    assert_eq!(
        labels,
        vec![
            "Open File",
            "",
            "New File",
            "New Folder",
            "Import File",
            "",
            "Rename",
            "Delete",
            "",
            "Refresh",
        ]
    );
}

#[test]
fn context_menu_entries_for_a_shadow_root() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::ContextMenuOpen { anchor: (0, 0) });

    let labels: Vec<&str> = store
        .state
        .ui
        .context_menu
        .items
        .iter()
        .map(|item| item.label())
        .collect();
    assert_eq!(
        labels,
        vec!["New File", "New Folder", "Import File", "", "Refresh"]
    );
}

#[test]
fn context_menu_selection_skips_separators_and_wraps() {
    let rows = vec![file_node("/proj/njwap/src/html/cat1/page.html", 2)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::ContextMenuOpen { anchor: (0, 0) });

    assert!(store
        .dispatch(Action::ContextMenuMoveSelection { delta: 1 })
        .state_changed);
    assert_eq!(store.state.ui.context_menu.selected, 2);

    assert!(store
        .dispatch(Action::ContextMenuMoveSelection { delta: -1 })
        .state_changed);
    assert_eq!(store.state.ui.context_menu.selected, 0);

    // Up from the first entry wraps to the last.
    let _ = store.dispatch(Action::ContextMenuMoveSelection { delta: -1 });
    assert_eq!(store.state.ui.context_menu.selected, 9);

    let _ = store.dispatch(Action::ContextMenuMoveSelection { delta: 1 });
    assert_eq!(store.state.ui.context_menu.selected, 0);
}

#[test]
fn context_menu_confirm_dispatches_the_command() {
    let rows = vec![file_node("/proj/njwap/src/html/cat1/page.html", 2)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::ContextMenuOpen { anchor: (0, 0) });
    let _ = store.dispatch(Action::ContextMenuMoveSelection { delta: 1 });

    let result = store.dispatch(Action::ContextMenuConfirm);
    assert!(result.state_changed);
    assert!(!store.state.ui.context_menu.visible);
    assert!(store.state.ui.input_dialog.visible);
    assert_eq!(store.state.ui.input_dialog.title, "New File in html/cat1");
}

#[test]
fn context_menu_needs_a_selection_and_no_dialog() {
    let mut store = configured_store();
    let result = store.dispatch(Action::ContextMenuOpen { anchor: (0, 0) });
    assert!(!result.state_changed);
    assert!(!store.state.ui.context_menu.visible);

    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::CreateFile));
    let result = store.dispatch(Action::ContextMenuOpen { anchor: (0, 0) });
    assert!(!result.state_changed);
    assert!(!store.state.ui.context_menu.visible);
}

#[test]
fn import_opens_the_picker_at_home() {
    let shadow = dir_node("/proj/njwap/src/cdn_js/cat1", 1);
    let key = shadow.key();
    let mut store = store_with_rows(vec![shadow], 0);

    let result = store.dispatch(Action::RunCommand(Command::ImportFile));
    assert_eq!(
        result.effects,
        vec![
            Effect::ProjectTree,
            Effect::LoadPickerDir(crate::config::home_dir()),
        ]
    );
    assert!(store.state.explorer.expanded.contains(&key));

    let picker = &store.state.ui.picker;
    assert!(picker.visible);
    assert_eq!(picker.dest_dir, PathBuf::from("/proj/njwap/src/cdn_js/cat1"));
    assert_eq!(picker.dest_label, "cdn_js/cat1");
}

#[test]
fn picker_enter_descends_into_directories() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::ImportFile));
    let _ = store.dispatch(Action::PickerDirLoaded {
        dir: PathBuf::from("/data"),
        entries: vec![picker_entry("sub", true), picker_entry("a.txt", false)],
    });

    // The synthesized ".." row climbs to the parent.
    let result = store.dispatch(Action::PickerEnter);
    assert_eq!(result.effects, vec![Effect::LoadPickerDir(PathBuf::from("/"))]);
    assert!(!result.state_changed);

    store.state.ui.picker.selected = 1;
    let result = store.dispatch(Action::PickerEnter);
    assert_eq!(
        result.effects,
        vec![Effect::LoadPickerDir(PathBuf::from("/data/sub"))]
    );
    assert!(store.state.ui.picker.visible);
}

#[test]
fn picker_enter_on_a_file_imports_marks_and_cursor() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::ImportFile));
    let _ = store.dispatch(Action::PickerDirLoaded {
        dir: PathBuf::from("/data"),
        entries: vec![picker_entry("a.txt", false), picker_entry("b.txt", false)],
    });

    store.state.ui.picker.selected = 1;
    let _ = store.dispatch(Action::PickerToggleMark);
    store.state.ui.picker.selected = 2;

    let result = store.dispatch(Action::PickerEnter);
    assert_eq!(
        result.effects,
        vec![Effect::ImportFiles {
            sources: vec![PathBuf::from("/data/a.txt"), PathBuf::from("/data/b.txt")],
            dest_dir: PathBuf::from("/proj/njwap/src/cdn_js/cat1"),
        }]
    );
    assert!(result.state_changed);
    assert!(!store.state.ui.picker.visible);
}

#[test]
fn picker_cancel_resets_everything() {
    let rows = vec![dir_node("/proj/njwap/src/cdn_js/cat1", 1)];
    let mut store = store_with_rows(rows, 0);
    let _ = store.dispatch(Action::RunCommand(Command::ImportFile));
    let _ = store.dispatch(Action::PickerDirLoaded {
        dir: PathBuf::from("/data"),
        entries: vec![picker_entry("a.txt", false)],
    });
    store.state.ui.picker.selected = 1;
    let _ = store.dispatch(Action::PickerToggleMark);

    let result = store.dispatch(Action::PickerCancel);
    assert!(result.state_changed);
    assert!(!store.state.ui.picker.visible);
    assert!(store.state.ui.picker.marked.is_empty());

    let result = store.dispatch(Action::PickerCancel);
    assert!(!result.state_changed);
}

#[test]
fn fs_failure_lands_in_the_status_line() {
    let mut store = configured_store();
    let result = store.dispatch(Action::FsOpFailed {
        op: "rename",
        path: PathBuf::from("/proj/njwap/src/cdn_js/cat1/a.js"),
        error: "target already exists".to_string(),
    });
    assert!(result.state_changed);
    assert_eq!(
        store.state.ui.status.as_deref(),
        Some("rename failed: target already exists")
    );

    // The identical failure again is not a visible change.
    let result = store.dispatch(Action::FsOpFailed {
        op: "rename",
        path: PathBuf::from("/proj/njwap/src/cdn_js/cat1/a.js"),
        error: "target already exists".to_string(),
    });
    assert!(!result.state_changed);
}

#[test]
fn tree_changed_clears_stale_status() {
    let mut store = configured_store();
    let _ = store.dispatch(Action::FsOpFailed {
        op: "remove",
        path: PathBuf::from("/proj/njwap/src/cdn_js/cat1/a.js"),
        error: "permission denied".to_string(),
    });

    let result = store.dispatch(Action::TreeChanged);
    assert_eq!(result.effects, vec![Effect::ProjectTree]);
    assert!(result.state_changed);
    assert_eq!(store.state.ui.status, None);

    let result = store.dispatch(Action::TreeChanged);
    assert_eq!(result.effects, vec![Effect::ProjectTree]);
    assert!(!result.state_changed);
}

#[test]
fn settings_reload_reprojects_only_on_change() {
    let mut store = configured_store();
    let result = store.dispatch(Action::SettingsReloaded {
        settings: test_settings(),
    });
    assert!(result.effects.is_empty());
    assert!(!result.state_changed);

    let result = store.dispatch(Action::SettingsReloaded {
        settings: Settings {
            www_path: Some("/srv2".to_string()),
            ..test_settings()
        },
    });
    assert_eq!(result.effects, vec![Effect::ProjectTree]);
    assert!(result.state_changed);
}

#[test]
fn settings_reload_clears_the_nudge_once_roots_appear() {
    let mut store = Store::new(PanelState::new(None));
    store.dispatch(Action::RunCommand(Command::Refresh));
    assert!(store.state.ui.status.is_some());

    let result = store.dispatch(Action::SettingsReloaded {
        settings: test_settings(),
    });
    assert_eq!(result.effects, vec![Effect::ProjectTree]);
    assert!(result.state_changed);
    assert!(store.state.config.is_some());
    assert_eq!(store.state.ui.status, None);
}

#[test]
fn settings_reload_to_unconfigured_clears_the_tree() {
    let rows = vec![dir_node("/proj/njwap/src/html/cat1", 0)];
    let mut store = store_with_rows(rows, 0);

    let result = store.dispatch(Action::SettingsReloaded {
        settings: Settings::default(),
    });
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert!(store.state.config.is_none());
    assert!(store.state.explorer.rows.is_empty());
    assert_eq!(store.state.explorer.selected, None);
}

#[test]
fn tree_projected_replaces_rows() {
    let mut store = configured_store();
    let rows = vec![dir_node("/proj/njwap/src/html/cat1", 0)];

    let result = store.dispatch(Action::TreeProjected { rows: rows.clone() });
    assert!(result.effects.is_empty());
    assert!(result.state_changed);
    assert_eq!(store.state.explorer.rows.len(), 1);

    let result = store.dispatch(Action::TreeProjected { rows });
    assert!(!result.state_changed);
}
