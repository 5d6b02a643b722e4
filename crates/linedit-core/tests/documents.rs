use std::fs;

use linedit_core::{
    Command, CommandContext, ContentKind, DocumentSet, EditCommand, EditorConfig, FileError,
    MemoryClipboard, MemoryFileSystem, Notices, StdFileSystem, UNTITLED,
};
use pretty_assertions::assert_eq;

fn type_into(set: &mut DocumentSet, text: &str) {
    let config = EditorConfig::default();
    let mut clipboard = MemoryClipboard::new();
    let mut notices = Notices::new();
    let mut ctx = CommandContext::new(&config, &mut clipboard, &mut notices);
    set.active_mut()
        .execute(Command::Edit(EditCommand::TypeText(text.to_string())), &mut ctx);
}

#[test]
fn test_new_set_has_one_untitled_document() {
    let set = DocumentSet::new(&EditorConfig::default());
    assert_eq!(set.len(), 1);
    assert_eq!(set.active().filename(), UNTITLED);
    assert!(set.active().is_pristine());
}

#[test]
fn test_load_replaces_pristine_untitled() {
    let fs = MemoryFileSystem::new();
    fs.insert("/src/hello.txt", "hello");
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());

    let index = set.load_file("/src/hello.txt", &fs, &mut notices).unwrap();
    assert_eq!(index, 0);
    assert_eq!(set.len(), 1);
    assert_eq!(set.active().lines(), &["hello"]);
    assert_eq!(set.active().filename(), "hello.txt");
}

#[test]
fn test_load_empty_file_yields_one_empty_line() {
    let fs = MemoryFileSystem::new();
    fs.insert("empty.txt", "");
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    set.load_file("empty.txt", &fs, &mut notices).unwrap();
    assert_eq!(set.active().lines(), &[""]);
}

#[test]
fn test_load_appends_when_active_is_modified() {
    let fs = MemoryFileSystem::new();
    fs.insert("a.rs", "fn a() {}");
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    type_into(&mut set, "scratch");

    set.load_file("a.rs", &fs, &mut notices).unwrap();
    assert_eq!(set.len(), 2);
    assert_eq!(set.active_index(), 1);
    assert_eq!(set.titles(), vec!["Untitled*", "a.rs"]);
}

#[test]
fn test_load_same_path_activates_existing_tab() {
    let fs = MemoryFileSystem::new();
    fs.insert("a.rs", "a");
    fs.insert("b.rs", "b");
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    set.load_file("a.rs", &fs, &mut notices).unwrap();
    set.load_file("b.rs", &fs, &mut notices).unwrap();
    type_into(&mut set, "changed ");

    fs.insert("a.rs", "a was rewritten on disk");
    assert_eq!(set.load_file("a.rs", &fs, &mut notices).unwrap(), 0);
    assert_eq!(set.len(), 2);
    assert_eq!(set.active().lines(), &["a"]);
}

#[test]
fn test_load_failure_leaves_set_unchanged() {
    let fs = MemoryFileSystem::new();
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    type_into(&mut set, "keep me");

    let err = set.load_file("missing.txt", &fs, &mut notices).unwrap_err();
    assert!(matches!(err, FileError::Read { .. }));
    assert_eq!(set.len(), 1);
    assert_eq!(set.active().text(), "keep me");
    assert_eq!(notices.messages(), vec!["Could not open missing.txt"]);
}

#[test]
fn test_close_active_clamps_and_never_empties() {
    let config = EditorConfig::default();
    let mut set = DocumentSet::new(&config);
    set.create_new_file();
    set.create_new_file();
    assert_eq!(set.active_index(), 2);

    set.close_active();
    assert_eq!(set.len(), 2);
    assert_eq!(set.active_index(), 1);

    set.close_active();
    set.close_active();
    assert_eq!(set.len(), 1);
    assert!(set.active().is_pristine());
}

#[test]
fn test_close_by_index_keeps_active_in_range() {
    let mut set = DocumentSet::new(&EditorConfig::default());
    set.create_new_file();
    set.activate(0);
    set.close(1);
    assert_eq!(set.len(), 1);
    assert_eq!(set.active_index(), 0);
    set.close(42);
    assert_eq!(set.len(), 1);
}

#[test]
fn test_save_writes_lf_and_clears_dirty() {
    let fs = MemoryFileSystem::new();
    fs.insert("/w/notes.txt", "a\r\nb\r\n");
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    set.load_file("/w/notes.txt", &fs, &mut notices).unwrap();
    type_into(&mut set, "x");
    assert!(set.active().is_dirty());

    set.save_active(&fs, &mut notices).unwrap();
    assert_eq!(fs.contents("/w/notes.txt").as_deref(), Some("xa\nb"));
    assert!(!set.active().is_dirty());
    assert_eq!(set.active().title(), "notes.txt");
    assert_eq!(notices.messages(), vec!["Saved: notes.txt"]);
}

#[test]
fn test_save_failure_keeps_dirty_and_notifies() {
    let fs = MemoryFileSystem::new();
    fs.insert("locked.txt", "old");
    fs.set_read_only("locked.txt");
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    set.load_file("locked.txt", &fs, &mut notices).unwrap();
    type_into(&mut set, "new ");

    let err = set.save_active(&fs, &mut notices).unwrap_err();
    assert!(matches!(err, FileError::Write { .. }));
    assert!(set.active().is_dirty());
    assert_eq!(fs.contents("locked.txt").as_deref(), Some("old"));
    assert_eq!(notices.messages(), vec!["Save Failed!"]);
}

#[test]
fn test_save_untitled_requires_path() {
    let fs = MemoryFileSystem::new();
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    type_into(&mut set, "draft");

    assert!(matches!(
        set.save_active(&fs, &mut notices),
        Err(FileError::NoPath)
    ));
    set.save_active_as(r"C:\docs\draft.md", &fs, &mut notices)
        .unwrap();
    assert_eq!(set.active().filename(), "draft.md");
    assert_eq!(fs.contents(r"C:\docs\draft.md").as_deref(), Some("draft"));
    assert_eq!(notices.messages(), vec!["Saved: draft.md"]);
}

#[test]
fn test_open_path_audio_preview_then_text_clears_it() {
    let config = EditorConfig::default();
    let fs = MemoryFileSystem::new();
    fs.insert("readme.md", "# hi");
    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&config);

    assert_eq!(
        set.open_path("beep.WAV", &fs, &config, &mut notices).unwrap(),
        ContentKind::Audio
    );
    assert!(set.preview().is_some());
    assert_eq!(
        set.open_path("readme.md", &fs, &config, &mut notices).unwrap(),
        ContentKind::Text
    );
    assert!(set.preview().is_none());
    assert_eq!(set.active().lines(), &["# hi"]);
}

#[test]
fn test_std_filesystem_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.txt");
    fs::write(&path, "hello").unwrap();

    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    set.load_file(&path, &StdFileSystem, &mut notices).unwrap();
    assert_eq!(set.active().lines(), &["hello"]);

    type_into(&mut set, ">> ");
    set.save_active(&StdFileSystem, &mut notices).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), ">> hello");
}

#[test]
fn test_non_utf8_file_is_rejected_and_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    let original = b"caf\xe9\nx".to_vec();
    fs::write(&path, &original).unwrap();

    let mut notices = Notices::new();
    let mut set = DocumentSet::new(&EditorConfig::default());
    let err = set.load_file(&path, &StdFileSystem, &mut notices).unwrap_err();

    match err {
        FileError::Read { source, .. } => {
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData)
        }
        other => panic!("expected a read error, got {other:?}"),
    }
    assert_eq!(set.len(), 1);
    assert!(set.active().is_pristine());
    let expected = format!("Could not open {}", path.display());
    assert_eq!(notices.messages(), vec![expected.as_str()]);
    assert_eq!(fs::read(&path).unwrap(), original);
}
