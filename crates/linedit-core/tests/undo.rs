use linedit_core::{
    Command, CommandContext, CommandResult, CursorCommand, Document, EditCommand, EditorConfig,
    MemoryClipboard, Notices, Position, DEFAULT_UNDO_LIMIT,
};
use pretty_assertions::assert_eq;

fn exec(doc: &mut Document, command: Command) -> CommandResult {
    let config = EditorConfig::default();
    let mut clipboard = MemoryClipboard::new();
    let mut notices = Notices::new();
    let mut ctx = CommandContext::new(&config, &mut clipboard, &mut notices);
    doc.execute(command, &mut ctx)
}

fn state(doc: &Document) -> (Vec<String>, Position) {
    (doc.lines().to_vec(), doc.cursor())
}

#[test]
fn test_undo_on_empty_history_reports_empty() {
    let mut doc = Document::from_text("abc", 50);
    assert_eq!(
        exec(&mut doc, Command::Edit(EditCommand::Undo)),
        CommandResult::UndoEmpty
    );
    assert_eq!(doc.text(), "abc");
    assert!(!doc.is_dirty());
}

#[test]
fn test_undo_restores_lines_and_cursor_exactly() {
    let mut doc = Document::from_text("fn main() {}", 50);
    exec(
        &mut doc,
        Command::Cursor(CursorCommand::MoveTo {
            position: Position::new(0, 11),
            extend: false,
        }),
    );
    let before = state(&doc);

    exec(&mut doc, Command::Edit(EditCommand::NewLine));
    assert_eq!(doc.lines().len(), 3);
    exec(&mut doc, Command::Edit(EditCommand::Undo));
    assert_eq!(state(&doc), before);
}

#[test]
fn test_undo_marks_dirty() {
    let mut doc = Document::new(50);
    exec(&mut doc, Command::Edit(EditCommand::InsertChar('x')));
    doc.mark_saved();
    exec(&mut doc, Command::Edit(EditCommand::Undo));
    assert!(doc.is_dirty());
}

#[test]
fn test_each_keystroke_is_its_own_step() {
    let mut doc = Document::new(50);
    for ch in ['a', 'b', 'c'] {
        exec(&mut doc, Command::Edit(EditCommand::InsertChar(ch)));
    }
    exec(&mut doc, Command::Edit(EditCommand::Undo));
    assert_eq!(doc.text(), "ab");
    exec(&mut doc, Command::Edit(EditCommand::Undo));
    assert_eq!(doc.text(), "a");
}

#[test]
fn test_insert_over_selection_is_single_step() {
    let mut doc = Document::from_text("abc\ndef", 50);
    exec(&mut doc, Command::Cursor(CursorCommand::SelectAll));
    exec(&mut doc, Command::Edit(EditCommand::InsertChar('x')));
    assert_eq!(doc.lines(), &["x"]);
    assert_eq!(doc.undo_depth(), 1);

    exec(&mut doc, Command::Edit(EditCommand::Undo));
    assert_eq!(doc.lines(), &["abc", "def"]);
    assert_eq!(doc.cursor(), Position::new(1, 3));
    assert!(!doc.has_selection());
}

#[test]
fn test_held_backspace_repeats_share_one_snapshot() {
    let mut doc = Document::from_text("abcdef", 50);
    exec(
        &mut doc,
        Command::Cursor(CursorCommand::MoveTo {
            position: Position::new(0, 6),
            extend: false,
        }),
    );
    exec(&mut doc, Command::Edit(EditCommand::Backspace));
    exec(&mut doc, Command::Edit(EditCommand::BackspaceContinue));
    exec(&mut doc, Command::Edit(EditCommand::BackspaceContinue));
    assert_eq!(doc.text(), "abc");
    assert_eq!(doc.undo_depth(), 1);

    exec(&mut doc, Command::Edit(EditCommand::Undo));
    assert_eq!(doc.text(), "abcdef");
}

#[test]
fn test_history_is_capped_with_oldest_evicted() {
    let mut doc = Document::new(DEFAULT_UNDO_LIMIT);
    for _ in 0..(DEFAULT_UNDO_LIMIT + 1) {
        exec(&mut doc, Command::Edit(EditCommand::InsertChar('x')));
    }
    assert_eq!(doc.undo_depth(), DEFAULT_UNDO_LIMIT);

    while exec(&mut doc, Command::Edit(EditCommand::Undo)) == CommandResult::Applied {}
    // The snapshot of the empty document was evicted; the oldest survivor holds one 'x'.
    assert_eq!(doc.text(), "x");
    assert_eq!(doc.undo_depth(), 0);
}

#[test]
fn test_small_undo_limit() {
    let mut doc = Document::new(2);
    for ch in ['a', 'b', 'c'] {
        exec(&mut doc, Command::Edit(EditCommand::InsertChar(ch)));
    }
    assert_eq!(doc.undo_depth(), 2);
    exec(&mut doc, Command::Edit(EditCommand::Undo));
    exec(&mut doc, Command::Edit(EditCommand::Undo));
    assert_eq!(doc.text(), "a");
    assert_eq!(
        exec(&mut doc, Command::Edit(EditCommand::Undo)),
        CommandResult::UndoEmpty
    );
}
